// (c) Meta Platforms, Inc. and affiliates.
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Evaluation entry points.
//!
//! [`evaluate`] is the pure part: one snapshot in, one report out. [`CheckRun`]
//! wraps it with the configured emitter.

use std::fmt;
use std::str::FromStr;

use crate::check::classify::{common, electrical, engine, sync};
use crate::check::emitter::ReportEmitter;
use crate::check::writer::WriterError;
use crate::check::{CheckError, CheckReport, Config, FinalReport, Thresholds};
use crate::device::{Capability, DeviceSnapshot};

/// Which group of generator readings a `power_gen` check looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerGenType {
    Common,
    Electrical,
    Engine,
}

impl FromStr for PowerGenType {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "common" => Ok(PowerGenType::Common),
            "electrical" => Ok(PowerGenType::Electrical),
            "engine" => Ok(PowerGenType::Engine),
            other => Err(CheckError::UnknownCheck(other.to_owned())),
        }
    }
}

impl fmt::Display for PowerGenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PowerGenType::Common => "common",
            PowerGenType::Electrical => "electrical",
            PowerGenType::Engine => "engine",
        };
        f.write_str(s)
    }
}

/// A fully parameterized check.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckKind {
    PowerGen {
        kind: PowerGenType,
        thresholds: Thresholds,
    },
    SyncState,
}

impl CheckKind {
    pub fn power_gen(kind: PowerGenType) -> Self {
        CheckKind::PowerGen {
            kind,
            thresholds: Thresholds::default(),
        }
    }

    /// Identifier in the check registry.
    pub fn id(&self) -> &'static str {
        match self {
            CheckKind::PowerGen { .. } => "power_gen",
            CheckKind::SyncState => "sync_state",
        }
    }

    /// Name printed at the start of the report.
    pub fn report_name(&self) -> &'static str {
        match self {
            CheckKind::PowerGen { .. } => "GEN",
            CheckKind::SyncState => "SYNC",
        }
    }
}

/// Evaluates a check against a snapshot.
///
/// Never fails: an evaluation error becomes an UNKNOWN report that carries
/// the reason, so the caller always has something to print.
///
/// # Examples
///
/// ```
/// use devcheck::check::{evaluate, CheckKind, PowerGenType, Severity};
/// use devcheck::device::DeviceSnapshot;
///
/// let snapshot = DeviceSnapshot::from_json(r#"{
///     "generator": {"mode": "Auto", "breaker_state": "MainsOper", "engine_state": "Ready"}
/// }"#).unwrap();
///
/// let report = evaluate(&CheckKind::power_gen(PowerGenType::Common), &snapshot);
/// assert_eq!(report.severity(), Severity::Ok);
/// assert_eq!(report.render(), "GEN OK - Mode: Auto, Breaker: MainsOper, Engine: Ready");
/// ```
pub fn evaluate(check: &CheckKind, snapshot: &DeviceSnapshot) -> FinalReport {
    match try_evaluate(check, snapshot) {
        Ok(report) => report,
        Err(e) => {
            tracing::warn!(check = check.id(), error = %e, "evaluation failed");
            FinalReport::failed(check.report_name(), &e)
        }
    }
}

/// Evaluates a check, surfacing errors instead of folding them into the report.
pub fn try_evaluate(check: &CheckKind, snapshot: &DeviceSnapshot) -> Result<FinalReport, CheckError> {
    let mut report = CheckReport::new(check.report_name());

    match check {
        CheckKind::PowerGen { kind, thresholds } => {
            let info = snapshot
                .generator
                .as_ref()
                .ok_or(CheckError::Unsupported(Capability::Generator))?;
            tracing::debug!(check = check.id(), %kind, "evaluating generator readings");

            match kind {
                PowerGenType::Common => common::classify(&mut report, info),
                PowerGenType::Electrical => electrical::classify(&mut report, info, thresholds)?,
                PowerGenType::Engine => engine::classify(&mut report, info, thresholds)?,
            }
        }
        CheckKind::SyncState => {
            let freq = snapshot
                .frequency_sync
                .as_ref()
                .ok_or(CheckError::Unsupported(Capability::FrequencySync))?;
            let phase = snapshot
                .phase_sync
                .as_ref()
                .ok_or(CheckError::Unsupported(Capability::PhaseSync))?;
            tracing::debug!(check = check.id(), "evaluating sync state");

            sync::classify(&mut report, freq, phase);
        }
    }

    Ok(report.finalize())
}

/// One check invocation: evaluation plus report emission.
pub struct CheckRun {
    check: CheckKind,
    emitter: ReportEmitter,
}

impl CheckRun {
    /// Creates a new [`CheckRunBuilder`] object.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use devcheck::check::*;
    ///
    /// let builder = CheckRun::builder(CheckKind::SyncState);
    /// ```
    pub fn builder(check: CheckKind) -> CheckRunBuilder {
        CheckRunBuilder::new(check)
    }

    /// Creates a new [`CheckRun`] object writing plugin text to stdout.
    pub fn new(check: CheckKind) -> CheckRun {
        CheckRunBuilder::new(check).build()
    }

    pub fn check(&self) -> &CheckKind {
        &self.check
    }

    /// Evaluates the snapshot and emits the report.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # tokio_test::block_on(async {
    /// # use devcheck::check::*;
    /// # use devcheck::device::DeviceSnapshot;
    ///
    /// let run = CheckRun::new(CheckKind::SyncState);
    /// let report = run.run(&DeviceSnapshot::default()).await?;
    /// assert_eq!(report.severity(), Severity::Unknown);
    ///
    /// # Ok::<(), WriterError>(())
    /// # });
    /// ```
    pub async fn run(self, snapshot: &DeviceSnapshot) -> Result<FinalReport, WriterError> {
        let report = evaluate(&self.check, snapshot);
        self.emitter.emit(&report).await?;
        Ok(report)
    }

    /// Emits an UNKNOWN report when no snapshot could be obtained.
    pub async fn fail(self, reason: &dyn fmt::Display) -> Result<FinalReport, WriterError> {
        tracing::warn!(check = self.check.id(), error = %reason, "check aborted");
        let report = FinalReport::failed(self.check.report_name(), reason);
        self.emitter.emit(&report).await?;
        Ok(report)
    }
}

/// Builder for the [`CheckRun`] object.
pub struct CheckRunBuilder {
    check: CheckKind,
    config: Option<Config>,
}

impl CheckRunBuilder {
    fn new(check: CheckKind) -> Self {
        CheckRunBuilder {
            check,
            config: None,
        }
    }

    pub fn config(mut self, value: Config) -> Self {
        self.config = Some(value);
        self
    }

    pub fn build(self) -> CheckRun {
        let config = self.config.unwrap_or_default();
        CheckRun {
            check: self.check,
            emitter: ReportEmitter::new(config),
        }
    }
}
