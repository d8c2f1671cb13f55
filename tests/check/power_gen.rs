// (c) Meta Platforms, Inc. and affiliates.
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use anyhow::Result;

use devcheck::check::{CheckKind, OutputFormat, PowerGenType, Severity, Thresholds};
use devcheck::device::{DeviceSnapshot, GeneratorInfo, Reading, Unit};

use super::fixture::*;

#[tokio::test]
async fn test_electrical_nominal() -> Result<()> {
    let snapshot = generator_snapshot(nominal_generator());
    let (report, written) = check_output(
        CheckKind::power_gen(PowerGenType::Electrical),
        &snapshot,
        OutputFormat::Text,
    )
    .await?;

    assert_eq!(report.severity(), Severity::Ok);
    assert_eq!(report.exit_code(), 0);
    assert!(report.summary().starts_with("GEN OK - Gen Current L1: 10A, "));
    assert!(report.summary().contains("Gen Voltage L1: 230V"));
    assert!(report.summary().contains("Gen Frequency: 50.0Hz"));
    assert_eq!(written, vec![report.render()]);
    Ok(())
}

#[tokio::test]
async fn test_electrical_perf_line() -> Result<()> {
    let info = GeneratorInfo {
        gen_voltage_l1: Reading::new(230, Unit::Volt),
        gen_frequency: Reading::new(501, Unit::Hertz).with_divisor(10),
        ..Default::default()
    };
    let check = CheckKind::PowerGen {
        kind: PowerGenType::Electrical,
        thresholds: Thresholds::builder().frequency("480:520", "460:540").build(),
    };
    let (report, _) =
        check_output(check, &generator_snapshot(info), OutputFormat::Text).await?;

    // every other reading is absent
    assert_eq!(report.severity(), Severity::Unknown);
    assert!(report.summary().contains("Gen Frequency: 50.1Hz"));
    assert!(report.summary().contains("Mains Voltage L1: Na"));
    assert_eq!(
        report.perf_data().as_deref(),
        Some("'Gen Frequency'=501;480:520;460:540;0 'Gen Voltage L1'=230;215:245;210:250;0")
    );
    Ok(())
}

#[tokio::test]
async fn test_coolant_over_critical() -> Result<()> {
    let info = GeneratorInfo {
        coolant_temperature: Reading::new(110, Unit::Celsius),
        ..nominal_generator()
    };
    let (report, written) = check_output(
        CheckKind::power_gen(PowerGenType::Engine),
        &generator_snapshot(info),
        OutputFormat::Text,
    )
    .await?;

    assert_eq!(report.severity(), Severity::Critical);
    assert_eq!(report.exit_code(), 2);
    assert!(report.summary().starts_with("GEN CRITICAL - "));
    assert!(report.summary().contains("Coolant Temperature: 110C"));

    let perf = report.perf_data().unwrap_or_default();
    assert!(perf.contains("'Coolant Temperature'=110;98;104;0"));
    assert!(written[0].contains("\n| 'Battery Voltage'=138;130:145;120:155;0 "));
    Ok(())
}

#[tokio::test]
async fn test_engine_missing_starts_follows_report() -> Result<()> {
    let degraded = GeneratorInfo {
        coolant_temperature: Reading::new(110, Unit::Celsius),
        number_of_starts: Reading::absent(Unit::Count),
        ..nominal_generator()
    };
    let (report, _) = check_output(
        CheckKind::power_gen(PowerGenType::Engine),
        &generator_snapshot(degraded),
        OutputFormat::Text,
    )
    .await?;
    let starts = report
        .entries()
        .last()
        .map(|e| (e.severity(), e.text().to_owned()));
    assert_eq!(
        starts,
        Some((Severity::Critical, "Number of Starts: Na".to_owned()))
    );

    let healthy = GeneratorInfo {
        number_of_starts: Reading::absent(Unit::Count),
        ..nominal_generator()
    };
    let (report, _) = check_output(
        CheckKind::power_gen(PowerGenType::Engine),
        &generator_snapshot(healthy),
        OutputFormat::Text,
    )
    .await?;
    assert_eq!(report.severity(), Severity::Unknown);
    assert_eq!(report.exit_code(), 3);
    Ok(())
}

#[tokio::test]
async fn test_common_mode_mismatch() -> Result<()> {
    let info = GeneratorInfo {
        mode: Some("Manual".to_owned()),
        ..nominal_generator()
    };
    let (report, _) = check_output(
        CheckKind::power_gen(PowerGenType::Common),
        &generator_snapshot(info),
        OutputFormat::Text,
    )
    .await?;

    assert_eq!(
        report.render(),
        "GEN CRITICAL - Mode: Manual, Breaker: MainsOper, Engine: Ready"
    );
    Ok(())
}

#[tokio::test]
async fn test_custom_thresholds() -> Result<()> {
    let info = GeneratorInfo {
        fuel_level: Reading::new(15, Unit::Percent),
        ..nominal_generator()
    };
    let snapshot = generator_snapshot(info);

    let (report, _) = check_output(
        CheckKind::power_gen(PowerGenType::Engine),
        &snapshot,
        OutputFormat::Text,
    )
    .await?;
    assert_eq!(report.severity(), Severity::Warning);

    let check = CheckKind::PowerGen {
        kind: PowerGenType::Engine,
        thresholds: Thresholds::builder().fuel("10:100", "5:100").build(),
    };
    let (report, _) = check_output(check, &snapshot, OutputFormat::Text).await?;
    assert_eq!(report.severity(), Severity::Ok);
    assert!(report
        .perf_data()
        .unwrap_or_default()
        .contains("'Fuel level'=15%;10:100;5:100;0;100"));
    Ok(())
}

#[tokio::test]
async fn test_device_without_generator() -> Result<()> {
    let (report, written) = check_output(
        CheckKind::power_gen(PowerGenType::Common),
        &DeviceSnapshot::default(),
        OutputFormat::Text,
    )
    .await?;

    assert_eq!(report.severity(), Severity::Unknown);
    assert_eq!(
        written,
        vec!["GEN UNKNOWN - error: power generator check is not supported on this device type"]
    );
    Ok(())
}
