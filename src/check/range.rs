// (c) Meta Platforms, Inc. and affiliates.
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::fmt;
use std::str::FromStr;

/// Error returned when an operator supplied range cannot be parsed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid number '{token}' in range '{range}'")]
    InvalidNumber { range: String, token: String },

    #[error("range start {start} is greater than end {end} in '{range}'")]
    StartAfterEnd { range: String, start: f64, end: f64 },
}

/// A warning or critical threshold in the usual plugin range notation.
///
/// The grammar is `[@]start:end`:
/// - a bare `N` means `0:N`;
/// - an empty (or `~`) start is negative infinity, an empty end is positive infinity;
/// - a leading `@` inverts the test, so the range alerts when the value is inside it.
///
/// Bounds are inclusive. The empty string is the unbounded range and never alerts;
/// inverting it is rejected.
///
/// # Examples
///
/// ```
/// use devcheck::check::ThresholdRange;
///
/// let range = ThresholdRange::parse("215:245").unwrap();
/// assert!(!range.alerts(230.0));
/// assert!(range.alerts(250.0));
///
/// let range = ThresholdRange::parse("@10:20").unwrap();
/// assert!(range.alerts(15.0));
///
/// assert!(ThresholdRange::parse("20:10").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdRange {
    start: f64,
    end: f64,
    inverted: bool,
}

impl ThresholdRange {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let trimmed = input.trim();
        let (inverted, body) = match trimmed.strip_prefix('@') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (start, end) = match body.split_once(':') {
            Some((start, end)) => (
                parse_bound(input, start, f64::NEG_INFINITY)?,
                parse_bound(input, end, f64::INFINITY)?,
            ),
            None if body.trim().is_empty() => (f64::NEG_INFINITY, f64::INFINITY),
            // a bare value is the upper bound of a range starting at zero
            None => (0.0, parse_bound(input, body, f64::INFINITY)?),
        };

        // an inverted unbounded range would alert on every value
        if inverted && start == f64::NEG_INFINITY && end == f64::INFINITY {
            return Err(ParseError::InvalidNumber {
                range: input.to_owned(),
                token: body.trim().to_owned(),
            });
        }

        if start > end {
            return Err(ParseError::StartAfterEnd {
                range: input.to_owned(),
                start,
                end,
            });
        }

        Ok(ThresholdRange {
            start,
            end,
            inverted,
        })
    }

    /// The range that never alerts.
    pub fn unbounded() -> Self {
        ThresholdRange {
            start: f64::NEG_INFINITY,
            end: f64::INFINITY,
            inverted: false,
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Whether `start <= value <= end`, ignoring inversion.
    pub fn contains(&self, value: f64) -> bool {
        self.start <= value && value <= self.end
    }

    /// Whether the value should raise an alert against this range.
    pub fn alerts(&self, value: f64) -> bool {
        self.contains(value) == self.inverted
    }
}

impl Default for ThresholdRange {
    fn default() -> Self {
        ThresholdRange::unbounded()
    }
}

impl FromStr for ThresholdRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThresholdRange::parse(s)
    }
}

impl fmt::Display for ThresholdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inverted {
            f.write_str("@")?;
        }
        if self.start == 0.0 && self.end.is_finite() {
            return write!(f, "{}", self.end);
        }
        if self.start.is_finite() {
            write!(f, "{}", self.start)?;
        } else if self.end.is_finite() {
            f.write_str("~")?;
        }
        f.write_str(":")?;
        if self.end.is_finite() {
            write!(f, "{}", self.end)?;
        }
        Ok(())
    }
}

fn parse_bound(range: &str, token: &str, open: f64) -> Result<f64, ParseError> {
    let token = token.trim();
    if token.is_empty() || (token == "~" && open.is_sign_negative()) {
        return Ok(open);
    }

    // f64::from_str also accepts "inf" and "nan", neither is a valid bound
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::InvalidNumber {
            range: range.to_owned(),
            token: token.to_owned(),
        }),
    }
}
