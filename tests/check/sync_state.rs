// (c) Meta Platforms, Inc. and affiliates.
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use anyhow::Result;

use devcheck::check::{CheckKind, OutputFormat, Severity};
use devcheck::device::{DeviceSnapshot, FreqSyncInfo, PhaseSyncInfo, Subsystem};

use super::fixture::*;

#[tokio::test]
async fn test_sync_nominal() -> Result<()> {
    let snapshot = sync_snapshot(
        Subsystem::Configured(nominal_freq_sync()),
        Subsystem::Configured(nominal_phase_sync()),
    );
    let (report, written) =
        check_output(CheckKind::SyncState, &snapshot, OutputFormat::Text).await?;

    let expected = "SYNC OK - Fsync Mode: locked, Fsync Qa: PRC, PTP Mode: phaseAligned, \
                    PTP GM Class: prtcLock(6), GrandMaster: ac:de:48:ff:fe:00:11:22\n\
                    Configured frequency sync sources:\n \
                    TenGigE0/0/0/1: PRC\n\
                    Configured phase sync sources:\n \
                    TenGigE0/0/0/1: slave\n\
                    Hops to GM: 1";

    assert_eq!(report.severity(), Severity::Ok);
    assert_eq!(written, vec![expected]);
    assert!(report.perf_data().is_none());
    Ok(())
}

#[tokio::test]
async fn test_holdover_is_critical() -> Result<()> {
    let phase = PhaseSyncInfo {
        parent_gm_class: Some("holdover(7)".to_owned()),
        ..nominal_phase_sync()
    };
    let snapshot = sync_snapshot(
        Subsystem::Configured(nominal_freq_sync()),
        Subsystem::Configured(phase),
    );
    let (report, _) = check_output(CheckKind::SyncState, &snapshot, OutputFormat::Text).await?;

    assert_eq!(report.severity(), Severity::Critical);
    assert_eq!(report.exit_code(), 2);
    assert!(report.summary().contains("PTP GM Class: holdover(7)"));
    Ok(())
}

#[tokio::test]
async fn test_unconfigured_frequency_sync() -> Result<()> {
    let snapshot = sync_snapshot(
        Subsystem::NotConfigured,
        Subsystem::Configured(nominal_phase_sync()),
    );
    let (report, _) = check_output(CheckKind::SyncState, &snapshot, OutputFormat::Text).await?;

    assert_eq!(report.severity(), Severity::Ok);
    assert!(report
        .summary()
        .starts_with("SYNC OK - Fsync: not configured, PTP Mode: phaseAligned"));
    Ok(())
}

#[tokio::test]
async fn test_nothing_configured() -> Result<()> {
    let snapshot = sync_snapshot(Subsystem::NotConfigured, Subsystem::NotConfigured);
    let (report, _) = check_output(CheckKind::SyncState, &snapshot, OutputFormat::Text).await?;

    assert_eq!(
        report.render(),
        "SYNC OK - Fsync: not configured, PTP: not configured"
    );
    Ok(())
}

#[tokio::test]
async fn test_warning_then_holdover() -> Result<()> {
    let freq = FreqSyncInfo {
        clock_quality: Some("SSU-A".to_owned()),
        ..nominal_freq_sync()
    };
    let snapshot = sync_snapshot(
        Subsystem::Configured(freq.clone()),
        Subsystem::Configured(nominal_phase_sync()),
    );
    let (report, _) = check_output(CheckKind::SyncState, &snapshot, OutputFormat::Text).await?;
    assert_eq!(report.severity(), Severity::Warning);

    let phase = PhaseSyncInfo {
        parent_gm_class: Some("holdover(7)".to_owned()),
        ..nominal_phase_sync()
    };
    let snapshot = sync_snapshot(Subsystem::Configured(freq), Subsystem::Configured(phase));
    let (report, _) = check_output(CheckKind::SyncState, &snapshot, OutputFormat::Text).await?;
    assert_eq!(report.severity(), Severity::Critical);
    Ok(())
}

#[tokio::test]
async fn test_unknown_gm_class_after_critical() -> Result<()> {
    let phase = PhaseSyncInfo {
        state: Some("acquiring".to_owned()),
        parent_gm_class: Some("freerun(248)".to_owned()),
        ..nominal_phase_sync()
    };
    let snapshot = sync_snapshot(
        Subsystem::Configured(nominal_freq_sync()),
        Subsystem::Configured(phase),
    );
    let (report, _) = check_output(CheckKind::SyncState, &snapshot, OutputFormat::Text).await?;

    let class = report
        .entries()
        .iter()
        .find(|e| e.text().starts_with("PTP GM Class"))
        .map(|e| e.severity());
    assert_eq!(class, Some(Severity::Critical));
    Ok(())
}

#[tokio::test]
async fn test_missing_phase_sync_domain() -> Result<()> {
    let snapshot = DeviceSnapshot {
        frequency_sync: Some(Subsystem::Configured(nominal_freq_sync())),
        ..Default::default()
    };
    let (report, _) = check_output(CheckKind::SyncState, &snapshot, OutputFormat::Text).await?;

    assert_eq!(
        report.render(),
        "SYNC UNKNOWN - error: phase sync check is not supported on this device type"
    );
    Ok(())
}
