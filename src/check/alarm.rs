// (c) Meta Platforms, Inc. and affiliates.
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::check::range::{ParseError, ThresholdRange};
use crate::check::thresholds::ThresholdPair;
use crate::check::Severity;

/// Grades a value against a warning and a critical range.
///
/// Critical is tested first and wins, even when the warning range is the stricter one.
/// Both ranges are parsed before anything is tested, so a malformed warning range is
/// reported even if the value is critical.
///
/// # Examples
///
/// ```
/// use devcheck::check::{alarm, Severity};
///
/// assert_eq!(alarm::evaluate(230.0, "215:245", "210:250").unwrap(), Severity::Ok);
/// assert_eq!(alarm::evaluate(212.0, "215:245", "210:250").unwrap(), Severity::Warning);
/// assert_eq!(alarm::evaluate(110.0, "98", "104").unwrap(), Severity::Critical);
/// ```
pub fn evaluate(value: f64, warn: &str, crit: &str) -> Result<Severity, ParseError> {
    let warn = ThresholdRange::parse(warn)?;
    let crit = ThresholdRange::parse(crit)?;

    Ok(grade(value, &warn, &crit))
}

pub fn evaluate_pair(value: f64, pair: &ThresholdPair) -> Result<Severity, ParseError> {
    evaluate(value, pair.warn(), pair.crit())
}

pub fn grade(value: f64, warn: &ThresholdRange, crit: &ThresholdRange) -> Severity {
    if crit.alerts(value) {
        Severity::Critical
    } else if warn.alerts(value) {
        Severity::Warning
    } else {
        Severity::Ok
    }
}
