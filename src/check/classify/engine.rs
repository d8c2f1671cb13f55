// (c) Meta Platforms, Inc. and affiliates.
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::BTreeMap;

use crate::check::classify::not_available;
use crate::check::{alarm, CheckError, CheckReport, PerfSample, ReportEntry, Severity, Thresholds};
use crate::device::{GeneratorInfo, Reading};

const NUMBER_OF_STARTS: &str = "Number of Starts";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Battery,
    Coolant,
    FuelLevel,
    // informational only, never graded
    Counter,
}

fn readings(info: &GeneratorInfo) -> BTreeMap<&'static str, (Kind, &Reading)> {
    BTreeMap::from([
        ("Battery Voltage", (Kind::Battery, &info.battery_voltage)),
        ("Coolant Temperature", (Kind::Coolant, &info.coolant_temperature)),
        ("Fuel level", (Kind::FuelLevel, &info.fuel_level)),
        ("Fuel Consumption", (Kind::Counter, &info.fuel_consumption)),
        ("Running Hours", (Kind::Counter, &info.running_hours)),
    ])
}

/// Battery, coolant and fuel level against their thresholds, plus the
/// informational engine counters.
///
/// The start counter comes last. When it is missing it takes the worst
/// severity seen so far (UNKNOWN if that is OK), every other missing reading
/// is UNKNOWN.
pub fn classify(
    report: &mut CheckReport,
    info: &GeneratorInfo,
    thresholds: &Thresholds,
) -> Result<(), CheckError> {
    for (label, (kind, reading)) in readings(info) {
        let (Some(value), Some(scaled)) = (reading.value(), reading.scaled()) else {
            report.add_entry(not_available(Severity::Unknown, label).build());
            continue;
        };
        let symbol = reading.unit().symbol();

        let entry = match kind {
            Kind::Battery => {
                let pair = thresholds.battery();
                let severity = alarm::evaluate_pair(value as f64, pair)
                    .map_err(CheckError::threshold("battery voltage"))?;
                ReportEntry::builder(severity, &format!("{label}: {scaled:.1}V")).perf(
                    PerfSample::builder(label, value)
                        .thresholds(pair)
                        .min("0")
                        .build(),
                )
            }
            Kind::Coolant => {
                let pair = thresholds.coolant();
                let severity = alarm::evaluate_pair(value as f64, pair)
                    .map_err(CheckError::threshold("coolant"))?;
                ReportEntry::builder(severity, &format!("{label}: {value}{symbol}")).perf(
                    PerfSample::builder(label, value)
                        .thresholds(pair)
                        .min("0")
                        .build(),
                )
            }
            Kind::FuelLevel => {
                let pair = thresholds.fuel();
                let severity = alarm::evaluate_pair(value as f64, pair)
                    .map_err(CheckError::threshold("fuel"))?;
                ReportEntry::builder(severity, &format!("{label}: {value}{symbol}")).perf(
                    PerfSample::builder(label, value)
                        .unit(symbol)
                        .thresholds(pair)
                        .min("0")
                        .max("100")
                        .build(),
                )
            }
            Kind::Counter => {
                ReportEntry::builder(Severity::Ok, &format!("{label}: {scaled:.1}{symbol}"))
                    .perf(informational(label, value))
            }
        };
        report.add_entry(entry.build());
    }

    match info.number_of_starts.value() {
        Some(value) => report.add_entry(
            ReportEntry::builder(Severity::Ok, &format!("{NUMBER_OF_STARTS}: {value}"))
                .perf(informational(NUMBER_OF_STARTS, value))
                .build(),
        ),
        None => {
            let severity = report.missing_severity();
            report.add_entry(not_available(severity, NUMBER_OF_STARTS).build())
        }
    };

    Ok(())
}

fn informational(label: &str, value: i64) -> PerfSample {
    PerfSample::builder(label, value)
        .warn("")
        .crit("")
        .min("0")
        .build()
}
