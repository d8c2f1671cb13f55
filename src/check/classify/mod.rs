// (c) Meta Platforms, Inc. and affiliates.
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-domain rules turning readings into report entries.

pub mod common;
pub mod electrical;
pub mod engine;
pub mod sync;

use crate::check::{ReportEntry, ReportEntryBuilder, Severity};

const NOT_AVAILABLE: &str = "Na";

/// Compares a symbolic state against the one expected value.
///
/// A mismatch is CRITICAL. A missing state is graded with `missing`, which
/// lets each domain decide how absence interacts with what was already recorded.
pub(crate) fn expect_state(
    name: &str,
    value: Option<&str>,
    expected: &str,
    missing: Severity,
) -> ReportEntryBuilder {
    match value {
        Some(v) => {
            let severity = if v == expected {
                Severity::Ok
            } else {
                Severity::Critical
            };
            ReportEntry::builder(severity, &format!("{name}: {v}"))
        }
        None => not_available(missing, name),
    }
}

pub(crate) fn not_available(severity: Severity, name: &str) -> ReportEntryBuilder {
    ReportEntry::builder(severity, &format!("{name}: {NOT_AVAILABLE}"))
}
