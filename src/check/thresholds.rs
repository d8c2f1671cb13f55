// (c) Meta Platforms, Inc. and affiliates.
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Warning and critical range text for one physical quantity.
///
/// The text is kept as the operator wrote it: it is parsed at evaluation time
/// and echoed verbatim into the performance data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdPair {
    warn: String,
    crit: String,
}

impl ThresholdPair {
    pub fn new(warn: &str, crit: &str) -> Self {
        ThresholdPair {
            warn: warn.to_owned(),
            crit: crit.to_owned(),
        }
    }

    pub fn warn(&self) -> &str {
        &self.warn
    }

    pub fn crit(&self) -> &str {
        &self.crit
    }
}

/// The per-quantity thresholds used by the generator classifiers.
///
/// # Examples
///
/// ```rust
/// # use devcheck::check::*;
///
/// let thresholds = Thresholds::builder()
///     .voltage("220:240", "215:245")
///     .coolant("90", "100")
///     .build();
/// assert_eq!(thresholds.voltage().warn(), "220:240");
/// assert_eq!(thresholds.current().crit(), "27");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thresholds {
    voltage: ThresholdPair,
    current: ThresholdPair,
    power: ThresholdPair,
    frequency: ThresholdPair,
    battery: ThresholdPair,
    fuel: ThresholdPair,
    coolant: ThresholdPair,
}

impl Thresholds {
    pub fn builder() -> ThresholdsBuilder {
        ThresholdsBuilder::new()
    }

    /// Mains and generator phase voltage (V).
    pub fn voltage(&self) -> &ThresholdPair {
        &self.voltage
    }

    /// Generator phase current (A).
    pub fn current(&self) -> &ThresholdPair {
        &self.current
    }

    /// Generator active power (kW).
    pub fn power(&self) -> &ThresholdPair {
        &self.power
    }

    /// Generator frequency, compared against the raw reading.
    pub fn frequency(&self) -> &ThresholdPair {
        &self.frequency
    }

    /// Starter battery voltage, compared against the raw reading (V*10).
    pub fn battery(&self) -> &ThresholdPair {
        &self.battery
    }

    /// Fuel level (%).
    pub fn fuel(&self) -> &ThresholdPair {
        &self.fuel
    }

    /// Coolant temperature (C).
    pub fn coolant(&self) -> &ThresholdPair {
        &self.coolant
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        ThresholdsBuilder::new().build()
    }
}

/// The builder for the [`Thresholds`] object.
pub struct ThresholdsBuilder {
    thresholds: Thresholds,
}

impl ThresholdsBuilder {
    fn new() -> Self {
        ThresholdsBuilder {
            thresholds: Thresholds {
                voltage: ThresholdPair::new("215:245", "210:250"),
                current: ThresholdPair::new("24", "27"),
                power: ThresholdPair::new("13", "15"),
                frequency: ThresholdPair::new("48:52", "46:54"),
                battery: ThresholdPair::new("130:145", "120:155"),
                fuel: ThresholdPair::new("20:100", "10:100"),
                coolant: ThresholdPair::new("98", "104"),
            },
        }
    }

    pub fn voltage(mut self, warn: &str, crit: &str) -> Self {
        self.thresholds.voltage = ThresholdPair::new(warn, crit);
        self
    }

    pub fn current(mut self, warn: &str, crit: &str) -> Self {
        self.thresholds.current = ThresholdPair::new(warn, crit);
        self
    }

    pub fn power(mut self, warn: &str, crit: &str) -> Self {
        self.thresholds.power = ThresholdPair::new(warn, crit);
        self
    }

    pub fn frequency(mut self, warn: &str, crit: &str) -> Self {
        self.thresholds.frequency = ThresholdPair::new(warn, crit);
        self
    }

    pub fn battery(mut self, warn: &str, crit: &str) -> Self {
        self.thresholds.battery = ThresholdPair::new(warn, crit);
        self
    }

    pub fn fuel(mut self, warn: &str, crit: &str) -> Self {
        self.thresholds.fuel = ThresholdPair::new(warn, crit);
        self
    }

    pub fn coolant(mut self, warn: &str, crit: &str) -> Self {
        self.thresholds.coolant = ThresholdPair::new(warn, crit);
        self
    }

    pub fn build(self) -> Thresholds {
        self.thresholds
    }
}
