// (c) Meta Platforms, Inc. and affiliates.
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed snapshot of the readings fetched from one device.
//!
//! Polling the device happens before evaluation and outside this crate. The
//! snapshot says explicitly which reading domains the device supports (an
//! absent domain is `None`) and, for the sync domains, whether the subsystem is
//! configured at all.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Physical unit of a [`Reading`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "V")]
    Volt,
    #[serde(rename = "A")]
    Amp,
    #[serde(rename = "kW")]
    Kilowatt,
    #[serde(rename = "Hz")]
    Hertz,
    #[serde(rename = "C")]
    Celsius,
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "count")]
    Count,
    #[serde(rename = "h")]
    Hour,
    #[serde(rename = "l/h")]
    LitersPerHour,
    #[default]
    #[serde(rename = "raw", alias = "")]
    Raw,
}

impl Unit {
    /// Suffix used when displaying a value of this unit.
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Volt => "V",
            Unit::Amp => "A",
            Unit::Kilowatt => "kW",
            Unit::Hertz => "Hz",
            Unit::Celsius => "C",
            Unit::Percent => "%",
            Unit::Hour => "h",
            Unit::LitersPerHour => "l/h",
            Unit::Count | Unit::Raw => "",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Count => f.write_str("count"),
            Unit::Raw => f.write_str("raw"),
            u => f.write_str(u.symbol()),
        }
    }
}

fn default_divisor() -> u32 {
    1
}

/// One sampled telemetry value.
///
/// Values are raw integers as reported by the device; `divisor` is only
/// used for display.
///
/// # Examples
///
/// ```
/// use devcheck::device::{Reading, Unit};
///
/// let freq = Reading::new(501, Unit::Hertz).with_divisor(10);
/// assert_eq!(freq.value(), Some(501));
/// assert_eq!(freq.scaled(), Some(50.1));
///
/// let missing = Reading::absent(Unit::Volt);
/// assert!(!missing.is_present());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    #[serde(default)]
    value: Option<i64>,
    #[serde(default)]
    unit: Unit,
    #[serde(default = "default_divisor")]
    divisor: u32,
}

impl Reading {
    pub fn new(value: i64, unit: Unit) -> Self {
        Reading {
            value: Some(value),
            unit,
            divisor: 1,
        }
    }

    pub fn absent(unit: Unit) -> Self {
        Reading {
            value: None,
            unit,
            divisor: 1,
        }
    }

    pub fn with_divisor(mut self, divisor: u32) -> Self {
        self.divisor = divisor;
        self
    }

    pub fn value(&self) -> Option<i64> {
        self.value
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// The display divisor; zero is treated as no scaling.
    pub fn divisor(&self) -> u32 {
        self.divisor.max(1)
    }

    /// The value divided by the display divisor.
    pub fn scaled(&self) -> Option<f64> {
        self.value.map(|v| v as f64 / f64::from(self.divisor()))
    }
}

impl Default for Reading {
    fn default() -> Self {
        Reading::absent(Unit::Raw)
    }
}

/// A subsystem the device supports but which may not be configured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Subsystem<T> {
    NotConfigured,
    Configured(T),
}

/// Generator controller readings.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorInfo {
    pub mode: Option<String>,
    pub breaker_state: Option<String>,
    pub engine_state: Option<String>,

    pub mains_voltage_l1: Reading,
    pub mains_voltage_l2: Reading,
    pub mains_voltage_l3: Reading,
    pub gen_voltage_l1: Reading,
    pub gen_voltage_l2: Reading,
    pub gen_voltage_l3: Reading,
    pub gen_current_l1: Reading,
    pub gen_current_l2: Reading,
    pub gen_current_l3: Reading,
    pub gen_power: Reading,
    pub gen_frequency: Reading,

    pub running_hours: Reading,
    pub fuel_level: Reading,
    pub fuel_consumption: Reading,
    pub battery_voltage: Reading,
    pub coolant_temperature: Reading,
    pub number_of_starts: Reading,
}

/// Frequency synchronization state.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreqSyncInfo {
    pub clock_mode: Option<String>,
    pub clock_quality: Option<String>,
    /// Quality level per configured source.
    pub sources: BTreeMap<String, String>,
}

/// Phase (PTP) synchronization state.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseSyncInfo {
    pub state: Option<String>,
    pub parent_gm_class: Option<String>,
    pub parent_gm_identity: Option<String>,
    pub hops_to_gm: Option<i64>,
    /// State per configured source.
    pub sources: BTreeMap<String, String>,
}

/// A reading domain a device may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    Generator,
    FrequencySync,
    PhaseSync,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::Generator => "power generator",
            Capability::FrequencySync => "frequency sync",
            Capability::PhaseSync => "phase sync",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SnapshotError {
    #[error("failed to read snapshot: {0}")]
    Io(#[from] io::Error),

    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything fetched from a device for one evaluation pass.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceSnapshot {
    pub generator: Option<GeneratorInfo>,
    pub frequency_sync: Option<Subsystem<FreqSyncInfo>>,
    pub phase_sync: Option<Subsystem<PhaseSyncInfo>>,
}

impl DeviceSnapshot {
    pub fn from_json(s: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Reads a JSON snapshot from disk.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # tokio_test::block_on(async {
    /// use devcheck::device::DeviceSnapshot;
    ///
    /// let snapshot = DeviceSnapshot::load("/var/lib/devcheck/genset01.json").await?;
    ///
    /// # Ok::<(), devcheck::device::SnapshotError>(())
    /// # });
    /// ```
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_json(&content)
    }

    pub fn capabilities(&self) -> BTreeSet<Capability> {
        let mut caps = BTreeSet::new();
        if self.generator.is_some() {
            caps.insert(Capability::Generator);
        }
        if self.frequency_sync.is_some() {
            caps.insert(Capability::FrequencySync);
        }
        if self.phase_sync.is_some() {
            caps.insert(Capability::PhaseSync);
        }
        caps
    }
}
