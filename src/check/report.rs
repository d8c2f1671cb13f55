// (c) Meta Platforms, Inc. and affiliates.
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::fmt;

use crate::check::{PerfSample, Severity};
use crate::format;

const TEXT_DELIMITER: &str = ", ";

/// One graded metric of a check.
///
/// # Examples
///
/// ## Create a ReportEntry object with the `new` method
///
/// ```
/// use devcheck::check::{ReportEntry, Severity};
///
/// let entry = ReportEntry::new(Severity::Ok, "Mode: Auto");
/// ```
///
/// ## Create a ReportEntry object with the `builder` method
///
/// ```
/// use devcheck::check::{PerfSample, ReportEntry, Severity};
///
/// let entry = ReportEntry::builder(Severity::Critical, "Coolant Temperature: 110C")
///     .perf(PerfSample::builder("Coolant Temperature", 110).warn("98").crit("104").build())
///     .long_text("coolant loop over temperature")
///     .build();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    severity: Severity,
    text: String,
    long_text: Option<String>,
    perf: Option<PerfSample>,
}

impl ReportEntry {
    pub fn new(severity: Severity, text: &str) -> Self {
        ReportEntryBuilder::new(severity, text).build()
    }

    pub fn builder(severity: Severity, text: &str) -> ReportEntryBuilder {
        ReportEntryBuilder::new(severity, text)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn long_text(&self) -> Option<&str> {
        self.long_text.as_deref()
    }

    pub fn perf(&self) -> Option<&PerfSample> {
        self.perf.as_ref()
    }

    pub fn to_artifact(&self) -> format::Entry {
        format::Entry {
            severity: self.severity,
            text: self.text.clone(),
            long_text: self.long_text.clone(),
            perf_data: self.perf.as_ref().map(PerfSample::to_artifact),
        }
    }
}

/// This structure builds a [`ReportEntry`] object.
#[derive(Debug)]
pub struct ReportEntryBuilder {
    severity: Severity,
    text: String,
    long_text: Option<String>,
    perf: Option<PerfSample>,
}

impl ReportEntryBuilder {
    fn new(severity: Severity, text: &str) -> Self {
        ReportEntryBuilder {
            severity,
            text: text.to_owned(),
            long_text: None,
            perf: None,
        }
    }

    pub fn long_text(mut self, value: &str) -> Self {
        self.long_text = Some(value.to_owned());
        self
    }

    pub fn perf(mut self, sample: PerfSample) -> Self {
        self.perf = Some(sample);
        self
    }

    pub fn build(self) -> ReportEntry {
        ReportEntry {
            severity: self.severity,
            text: self.text,
            long_text: self.long_text.filter(|s| !s.is_empty()),
            perf: self.perf,
        }
    }
}

/// The report of a single evaluation pass, under construction.
///
/// Entries keep their insertion order. The overall severity is folded with
/// [`Severity::worst`] as entries are added, so it can only move up the
/// OK < UNKNOWN < WARNING < CRITICAL priority ladder.
///
/// # Examples
///
/// ```
/// use devcheck::check::{CheckReport, Severity};
///
/// let mut report = CheckReport::new("GEN");
/// report.add(Severity::Ok, "Mode: Auto");
/// report.add(Severity::Unknown, "Breaker: Na");
/// assert_eq!(report.severity(), Severity::Unknown);
///
/// let report = report.finalize();
/// assert_eq!(report.render(), "GEN UNKNOWN - Mode: Auto, Breaker: Na");
/// ```
#[derive(Debug)]
pub struct CheckReport {
    name: String,
    entries: Vec<ReportEntry>,
    severity: Severity,
}

impl CheckReport {
    pub fn new(name: &str) -> Self {
        CheckReport {
            name: name.to_owned(),
            entries: vec![],
            severity: Severity::Ok,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_entry(&mut self, entry: ReportEntry) -> &mut Self {
        self.severity = self.severity.worst(entry.severity);
        tracing::debug!(
            check = %self.name,
            entry = %entry.text,
            entry_severity = %entry.severity,
            overall = %self.severity,
            "recorded entry"
        );
        self.entries.push(entry);
        self
    }

    pub fn add(&mut self, severity: Severity, text: &str) -> &mut Self {
        self.add_entry(ReportEntry::new(severity, text))
    }

    /// The running overall severity.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Severity for a reading that could not be fetched: the current worst
    /// outcome, or UNKNOWN while everything so far is OK.
    pub fn missing_severity(&self) -> Severity {
        match self.severity {
            Severity::Ok => Severity::Unknown,
            s => s,
        }
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn finalize(self) -> FinalReport {
        FinalReport {
            name: self.name,
            severity: self.severity,
            entries: self.entries,
        }
    }
}

/// The immutable result of an evaluation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalReport {
    name: String,
    severity: Severity,
    entries: Vec<ReportEntry>,
}

impl FinalReport {
    /// A report for an evaluation that could not be completed.
    ///
    /// The scheduler always expects a report line, so failures still render
    /// as a regular UNKNOWN report carrying the reason.
    pub fn failed(name: &str, reason: &dyn fmt::Display) -> Self {
        FinalReport {
            name: name.to_owned(),
            severity: Severity::Unknown,
            entries: vec![ReportEntry::new(
                Severity::Unknown,
                &format!("error: {reason}"),
            )],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn exit_code(&self) -> i32 {
        self.severity.exit_code()
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// The first output line: check name, severity label and all entry texts.
    pub fn summary(&self) -> String {
        let texts = if self.entries.is_empty() {
            "no data".to_owned()
        } else {
            self.entries
                .iter()
                .map(ReportEntry::text)
                .collect::<Vec<_>>()
                .join(TEXT_DELIMITER)
        };
        format!("{} {} - {}", self.name, self.severity, texts)
    }

    pub fn long_text(&self) -> Option<String> {
        let blocks = self
            .entries
            .iter()
            .filter_map(ReportEntry::long_text)
            .collect::<Vec<_>>();
        (!blocks.is_empty()).then(|| blocks.join("\n"))
    }

    pub fn perf_data(&self) -> Option<String> {
        let samples = self
            .entries
            .iter()
            .filter_map(ReportEntry::perf)
            .map(PerfSample::to_string)
            .collect::<Vec<_>>();
        (!samples.is_empty()).then(|| samples.join(" "))
    }

    /// Renders the plugin output: the summary line, the long text lines and a
    /// trailing performance data line.
    pub fn render(&self) -> String {
        let mut out = self.summary();
        if let Some(long_text) = self.long_text() {
            out.push('\n');
            out.push_str(&long_text);
        }
        if let Some(perf_data) = self.perf_data() {
            out.push_str("\n| ");
            out.push_str(&perf_data);
        }
        out
    }

    pub fn to_artifact(&self) -> format::Report {
        format::Report {
            check: self.name.clone(),
            severity: self.severity,
            exit_code: self.exit_code(),
            summary: self.summary(),
            entries: self.entries.iter().map(ReportEntry::to_artifact).collect(),
            perf_data: self.perf_data(),
        }
    }
}

impl fmt::Display for FinalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
