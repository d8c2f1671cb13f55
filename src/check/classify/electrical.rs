// (c) Meta Platforms, Inc. and affiliates.
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use crate::check::classify::not_available;
use crate::check::thresholds::ThresholdPair;
use crate::check::{alarm, CheckError, CheckReport, PerfSample, ReportEntry, Severity, Thresholds};
use crate::device::{GeneratorInfo, Reading, Unit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Mains,
    Generator,
}

fn readings(info: &GeneratorInfo) -> BTreeMap<&'static str, (Side, &Reading)> {
    BTreeMap::from([
        ("Mains Voltage L1", (Side::Mains, &info.mains_voltage_l1)),
        ("Mains Voltage L2", (Side::Mains, &info.mains_voltage_l2)),
        ("Mains Voltage L3", (Side::Mains, &info.mains_voltage_l3)),
        ("Gen Voltage L1", (Side::Generator, &info.gen_voltage_l1)),
        ("Gen Voltage L2", (Side::Generator, &info.gen_voltage_l2)),
        ("Gen Voltage L3", (Side::Generator, &info.gen_voltage_l3)),
        ("Gen Current L1", (Side::Generator, &info.gen_current_l1)),
        ("Gen Current L2", (Side::Generator, &info.gen_current_l2)),
        ("Gen Current L3", (Side::Generator, &info.gen_current_l3)),
        ("Gen Power", (Side::Generator, &info.gen_power)),
        ("Gen Frequency", (Side::Generator, &info.gen_frequency)),
    ])
}

/// Mains and generator voltages, generator currents, power and frequency.
///
/// Entries are produced in label order. The reading unit picks the threshold
/// pair; a unit outside V, A, kW and Hz aborts the check. A generator side
/// voltage or frequency of exactly zero means the generator is not running and
/// is reported OK without evaluation.
pub fn classify(
    report: &mut CheckReport,
    info: &GeneratorInfo,
    thresholds: &Thresholds,
) -> Result<(), CheckError> {
    for (label, (side, reading)) in readings(info) {
        let (Some(value), Some(scaled)) = (reading.value(), reading.scaled()) else {
            report.add_entry(not_available(Severity::Unknown, label).build());
            continue;
        };

        let (metric, pair): (&'static str, &ThresholdPair) = match reading.unit() {
            Unit::Volt => ("voltage", thresholds.voltage()),
            Unit::Amp => ("current", thresholds.current()),
            Unit::Kilowatt => ("power", thresholds.power()),
            Unit::Hertz => ("frequency", thresholds.frequency()),
            unit => return Err(CheckError::UnexpectedUnit { label, unit }),
        };

        let idle = side == Side::Generator
            && value == 0
            && matches!(reading.unit(), Unit::Volt | Unit::Hertz);

        let severity = if idle {
            Severity::Ok
        } else {
            alarm::evaluate_pair(value as f64, pair).map_err(CheckError::threshold(metric))?
        };

        let text = match reading.unit() {
            Unit::Hertz => format!("{label}: {scaled:.1}Hz"),
            unit => format!("{label}: {value}{}", unit.symbol()),
        };

        report.add_entry(
            ReportEntry::builder(severity, &text)
                .perf(
                    PerfSample::builder(label, value)
                        .thresholds(pair)
                        .min("0")
                        .build(),
                )
                .build(),
        );
    }

    Ok(())
}
