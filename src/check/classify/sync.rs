// (c) Meta Platforms, Inc. and affiliates.
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use crate::check::classify::{expect_state, not_available};
use crate::check::{CheckReport, ReportEntry, Severity};
use crate::device::{FreqSyncInfo, PhaseSyncInfo, Subsystem};

pub const FSYNC_LOCKED: &str = "locked";
pub const FSYNC_BEST_QUALITY: &str = "PRC";
pub const PTP_PHASE_ALIGNED: &str = "phaseAligned";
pub const GM_CLASS_LOCKED: &str = "prtcLock(6)";
pub const GM_CLASS_HOLDOVER: &str = "holdover(7)";

/// Frequency sync followed by phase sync.
pub fn classify(
    report: &mut CheckReport,
    freq: &Subsystem<FreqSyncInfo>,
    phase: &Subsystem<PhaseSyncInfo>,
) {
    frequency(report, freq);
    self::phase(report, phase);
}

/// Clock mode must be locked (CRITICAL otherwise) and the clock quality level
/// should be PRC (WARNING otherwise).
///
/// An unconfigured subsystem is reported OK, not UNKNOWN.
pub fn frequency(report: &mut CheckReport, freq: &Subsystem<FreqSyncInfo>) {
    let info = match freq {
        Subsystem::NotConfigured => {
            report.add(Severity::Ok, "Fsync: not configured");
            return;
        }
        Subsystem::Configured(info) => info,
    };

    let mut mode = expect_state(
        "Fsync Mode",
        info.clock_mode.as_deref(),
        FSYNC_LOCKED,
        Severity::Unknown,
    );
    if let Some(sources) = sources_block("Configured frequency sync sources:", &info.sources) {
        mode = mode.long_text(&sources);
    }
    report.add_entry(mode.build());

    let quality = match info.clock_quality.as_deref() {
        Some(v) => {
            let severity = if v == FSYNC_BEST_QUALITY {
                Severity::Ok
            } else {
                Severity::Warning
            };
            ReportEntry::builder(severity, &format!("Fsync Qa: {v}"))
        }
        None => not_available(Severity::Unknown, "Fsync Qa"),
    };
    report.add_entry(quality.build());
}

/// PTP state must be phase aligned. The parent grandmaster class has three
/// tiers: locked is OK, holdover is CRITICAL and anything else is WARNING,
/// unless the report is already CRITICAL.
///
/// An unconfigured subsystem is reported OK, not UNKNOWN.
pub fn phase(report: &mut CheckReport, phase: &Subsystem<PhaseSyncInfo>) {
    let info = match phase {
        Subsystem::NotConfigured => {
            report.add(Severity::Ok, "PTP: not configured");
            return;
        }
        Subsystem::Configured(info) => info,
    };

    let mut details = vec![];
    if let Some(sources) = sources_block("Configured phase sync sources:", &info.sources) {
        details.push(sources);
    }
    details.push(match info.hops_to_gm {
        Some(hops) => format!("Hops to GM: {hops}"),
        None => "Hops to GM: Na".to_owned(),
    });

    report.add_entry(
        expect_state(
            "PTP Mode",
            info.state.as_deref(),
            PTP_PHASE_ALIGNED,
            Severity::Unknown,
        )
        .long_text(&details.join("\n"))
        .build(),
    );

    let class = match info.parent_gm_class.as_deref() {
        Some(v) => {
            let severity = match v {
                GM_CLASS_LOCKED => Severity::Ok,
                GM_CLASS_HOLDOVER => Severity::Critical,
                _ if report.severity() == Severity::Critical => Severity::Critical,
                _ => Severity::Warning,
            };
            ReportEntry::builder(severity, &format!("PTP GM Class: {v}"))
        }
        None => not_available(Severity::Unknown, "PTP GM Class"),
    };
    report.add_entry(class.build());

    let ident = info.parent_gm_identity.as_deref().unwrap_or("Na");
    report.add(Severity::Ok, &format!("GrandMaster: {ident}"));
}

fn sources_block(title: &str, sources: &BTreeMap<String, String>) -> Option<String> {
    if sources.is_empty() {
        return None;
    }

    let mut lines = vec![title.to_owned()];
    lines.extend(sources.iter().map(|(k, v)| format!(" {k}: {v}")));
    Some(lines.join("\n"))
}
