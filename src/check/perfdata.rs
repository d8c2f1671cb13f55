// (c) Meta Platforms, Inc. and affiliates.
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::fmt;

use crate::check::thresholds::ThresholdPair;
use crate::format;

/// A single performance data point, rendered as
/// `label=value[unit];warn;crit;min;max`.
///
/// The value is always the raw reading, never the display-scaled one.
///
/// # Examples
///
/// ## Create a PerfSample object with the `new` method
///
/// ```
/// use devcheck::check::PerfSample;
///
/// let sample = PerfSample::new("Gen Power", 9);
/// assert_eq!(sample.to_string(), "'Gen Power'=9");
/// ```
///
/// ## Create a PerfSample object with the `builder` method
///
/// ```
/// use devcheck::check::PerfSample;
///
/// let sample = PerfSample::builder("Coolant Temperature", 110)
///     .warn("98")
///     .crit("104")
///     .min("0")
///     .build();
/// assert_eq!(sample.to_string(), "'Coolant Temperature'=110;98;104;0");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PerfSample {
    label: String,
    value: i64,
    unit: Option<String>,
    warn: Option<String>,
    crit: Option<String>,
    min: Option<String>,
    max: Option<String>,
}

impl PerfSample {
    pub fn new(label: &str, value: i64) -> Self {
        PerfSampleBuilder::new(label, value).build()
    }

    pub fn builder(label: &str, value: i64) -> PerfSampleBuilder {
        PerfSampleBuilder::new(label, value)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn warn(&self) -> Option<&str> {
        self.warn.as_deref()
    }

    pub fn crit(&self) -> Option<&str> {
        self.crit.as_deref()
    }

    pub fn min(&self) -> Option<&str> {
        self.min.as_deref()
    }

    pub fn max(&self) -> Option<&str> {
        self.max.as_deref()
    }

    pub fn to_artifact(&self) -> format::PerfData {
        format::PerfData {
            label: self.label.clone(),
            value: self.value,
            unit: self.unit.clone(),
            warn: self.warn.clone(),
            crit: self.crit.clone(),
            min: self.min.clone(),
            max: self.max.clone(),
        }
    }
}

impl fmt::Display for PerfSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_label(f, &self.label)?;
        write!(f, "={}", self.value)?;
        if let Some(unit) = &self.unit {
            f.write_str(unit)?;
        }

        let fields = [&self.warn, &self.crit, &self.min, &self.max];
        // trailing empty fields are dropped, inner ones stay as empty slots
        let used = fields
            .iter()
            .rposition(|v| v.as_deref().is_some_and(|s| !s.is_empty()))
            .map_or(0, |i| i + 1);
        for field in &fields[..used] {
            write!(f, ";{}", field.as_deref().unwrap_or_default())?;
        }
        Ok(())
    }
}

fn write_label(f: &mut fmt::Formatter<'_>, label: &str) -> fmt::Result {
    if label.contains(|c: char| c.is_whitespace() || c == '=' || c == '\'') {
        write!(f, "'{}'", label.replace('\'', "''"))
    } else {
        f.write_str(label)
    }
}

/// This structure builds a [`PerfSample`] object.
#[derive(Debug, Default)]
pub struct PerfSampleBuilder {
    label: String,
    value: i64,
    unit: Option<String>,
    warn: Option<String>,
    crit: Option<String>,
    min: Option<String>,
    max: Option<String>,
}

impl PerfSampleBuilder {
    fn new(label: &str, value: i64) -> Self {
        PerfSampleBuilder {
            label: label.to_owned(),
            value,
            ..Default::default()
        }
    }

    pub fn unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_owned());
        self
    }

    pub fn warn(mut self, warn: &str) -> Self {
        self.warn = Some(warn.to_owned());
        self
    }

    pub fn crit(mut self, crit: &str) -> Self {
        self.crit = Some(crit.to_owned());
        self
    }

    /// Sets both the warning and the critical fields from a pair.
    pub fn thresholds(self, pair: &ThresholdPair) -> Self {
        self.warn(pair.warn()).crit(pair.crit())
    }

    pub fn min(mut self, min: &str) -> Self {
        self.min = Some(min.to_owned());
        self
    }

    pub fn max(mut self, max: &str) -> Self {
        self.max = Some(max.to_owned());
        self
    }

    pub fn build(self) -> PerfSample {
        PerfSample {
            label: self.label,
            value: self.value,
            unit: self.unit.filter(|u| !u.is_empty()),
            warn: self.warn,
            crit: self.crit,
            min: self.min,
            max: self.max,
        }
    }
}
