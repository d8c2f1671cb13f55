// (c) Meta Platforms, Inc. and affiliates.
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use maplit::btreemap;

/// Description of an available check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInfo {
    pub id: &'static str,
    pub lines: &'static [&'static str],
}

impl CheckInfo {
    /// The `--info` text.
    pub fn describe(&self) -> String {
        format!("{}: {}", self.id, self.lines.join("\n"))
    }
}

/// All checks, keyed by identifier. Built once and never mutated.
pub static CHECKS: LazyLock<BTreeMap<&'static str, CheckInfo>> = LazyLock::new(|| {
    btreemap! {
        "power_gen" => CheckInfo {
            id: "power_gen",
            lines: &[
                "Power generator state checks.",
                "\tAlarm levels come from the threshold arguments or their defaults.",
            ],
        },
        "sync_state" => CheckInfo {
            id: "sync_state",
            lines: &[
                "Synchronization state check (frequency and phase sync).",
                "\tCRITICAL - fsync signal not locked or psync not phase aligned.",
                "\tWARNING - sync source quality is degraded.",
                "\tProvides long output and no performance data.",
            ],
        },
    }
});

pub fn lookup(id: &str) -> Option<&'static CheckInfo> {
    CHECKS.get(id)
}

/// The `--info` text for any identifier, known or not.
pub fn describe(id: &str) -> String {
    match lookup(id) {
        Some(info) => info.describe(),
        None => format!("{id}: no additional information"),
    }
}

/// One block listing every check, in identifier order.
pub fn usage() -> String {
    let mut lines = vec!["Available checks:".to_owned()];
    lines.extend(
        CHECKS
            .values()
            .map(|info| format!("\t{} - {}", info.id, info.lines.join("\n\t\t"))),
    );
    lines.join("\n")
}
