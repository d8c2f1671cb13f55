// (c) Meta Platforms, Inc. and affiliates.
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of a check or of a single metric inside a check.
///
/// The discriminants are the plugin exit codes consumed by the scheduler, so
/// they must not change.
///
/// # Examples
///
/// ```
/// use devcheck::check::Severity;
///
/// assert_eq!(Severity::Critical.exit_code(), 2);
/// assert_eq!(Severity::Unknown.to_string(), "UNKNOWN");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Severity {
    #[default]
    #[serde(rename = "OK")]
    Ok = 0,
    #[serde(rename = "WARNING")]
    Warning = 1,
    #[serde(rename = "CRITICAL")]
    Critical = 2,
    #[serde(rename = "UNKNOWN")]
    Unknown = 3,
}

impl Severity {
    pub fn exit_code(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
            Severity::Unknown => "UNKNOWN",
        }
    }

    // aggregation priority, which is not the exit code order
    fn priority(self) -> u8 {
        match self {
            Severity::Ok => 0,
            Severity::Unknown => 1,
            Severity::Warning => 2,
            Severity::Critical => 3,
        }
    }

    /// Combines a running severity with a newly recorded one.
    ///
    /// CRITICAL is sticky, WARNING outranks UNKNOWN regardless of arrival order
    /// and UNKNOWN outranks OK.
    ///
    /// # Examples
    ///
    /// ```
    /// use devcheck::check::Severity;
    ///
    /// assert_eq!(Severity::Unknown.worst(Severity::Warning), Severity::Warning);
    /// assert_eq!(Severity::Warning.worst(Severity::Unknown), Severity::Warning);
    /// assert_eq!(Severity::Critical.worst(Severity::Unknown), Severity::Critical);
    /// assert_eq!(Severity::Ok.worst(Severity::Unknown), Severity::Unknown);
    /// ```
    pub fn worst(self, incoming: Severity) -> Severity {
        if incoming.priority() > self.priority() {
            incoming
        } else {
            self
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
