// (c) Meta Platforms, Inc. and affiliates.
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::check::classify::expect_state;
use crate::check::{CheckReport, Severity};
use crate::device::GeneratorInfo;

pub const MODE_AUTO: &str = "Auto";
pub const BREAKER_MAINS: &str = "MainsOper";
pub const ENGINE_READY: &str = "Ready";

/// Operating mode, breaker position and engine readiness of a generator.
///
/// Any unexpected state is CRITICAL. A state that could not be read is
/// UNKNOWN, or CRITICAL once an earlier state already was.
pub fn classify(report: &mut CheckReport, info: &GeneratorInfo) {
    let states = [
        ("Mode", info.mode.as_deref(), MODE_AUTO),
        ("Breaker", info.breaker_state.as_deref(), BREAKER_MAINS),
        ("Engine", info.engine_state.as_deref(), ENGINE_READY),
    ];

    for (name, value, expected) in states {
        let missing = match report.severity() {
            Severity::Critical => Severity::Critical,
            _ => Severity::Unknown,
        };
        report.add_entry(expect_state(name, value, expected, missing).build());
    }
}
