// (c) Meta Platforms, Inc. and affiliates.
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use anyhow::Result;
use maplit::btreemap;
use tokio::sync::Mutex;

use devcheck::check::{CheckKind, CheckRun, Config, FinalReport, OutputFormat, TimestampProvider};
use devcheck::device::{
    DeviceSnapshot, FreqSyncInfo, GeneratorInfo, PhaseSyncInfo, Reading, Subsystem, Unit,
};

pub const DATETIME: chrono::DateTime<chrono::offset::Utc> =
    chrono::DateTime::from_timestamp_nanos(0);
pub const DATETIME_FORMATTED: &str = "1970-01-01T00:00:00.000Z";
pub struct FixedTsProvider {}

impl TimestampProvider for FixedTsProvider {
    fn now(&self) -> chrono::DateTime<chrono_tz::Tz> {
        // all cases will use time 0 but this is configurable
        DATETIME.with_timezone(&chrono_tz::UTC)
    }
}

/// A generator in auto mode, on mains, with every reading inside the default thresholds.
pub fn nominal_generator() -> GeneratorInfo {
    GeneratorInfo {
        mode: Some("Auto".to_owned()),
        breaker_state: Some("MainsOper".to_owned()),
        engine_state: Some("Ready".to_owned()),

        mains_voltage_l1: Reading::new(230, Unit::Volt),
        mains_voltage_l2: Reading::new(231, Unit::Volt),
        mains_voltage_l3: Reading::new(229, Unit::Volt),
        gen_voltage_l1: Reading::new(230, Unit::Volt),
        gen_voltage_l2: Reading::new(230, Unit::Volt),
        gen_voltage_l3: Reading::new(230, Unit::Volt),
        gen_current_l1: Reading::new(10, Unit::Amp),
        gen_current_l2: Reading::new(10, Unit::Amp),
        gen_current_l3: Reading::new(10, Unit::Amp),
        gen_power: Reading::new(7, Unit::Kilowatt),
        gen_frequency: Reading::new(50, Unit::Hertz),

        running_hours: Reading::new(4321, Unit::Hour),
        fuel_level: Reading::new(80, Unit::Percent),
        fuel_consumption: Reading::new(0, Unit::LitersPerHour),
        battery_voltage: Reading::new(138, Unit::Volt).with_divisor(10),
        coolant_temperature: Reading::new(40, Unit::Celsius),
        number_of_starts: Reading::new(12, Unit::Count),
    }
}

pub fn nominal_freq_sync() -> FreqSyncInfo {
    FreqSyncInfo {
        clock_mode: Some("locked".to_owned()),
        clock_quality: Some("PRC".to_owned()),
        sources: btreemap! {
            "TenGigE0/0/0/1".to_owned() => "PRC".to_owned(),
        },
    }
}

pub fn nominal_phase_sync() -> PhaseSyncInfo {
    PhaseSyncInfo {
        state: Some("phaseAligned".to_owned()),
        parent_gm_class: Some("prtcLock(6)".to_owned()),
        parent_gm_identity: Some("ac:de:48:ff:fe:00:11:22".to_owned()),
        hops_to_gm: Some(1),
        sources: btreemap! {
            "TenGigE0/0/0/1".to_owned() => "slave".to_owned(),
        },
    }
}

pub fn generator_snapshot(info: GeneratorInfo) -> DeviceSnapshot {
    DeviceSnapshot {
        generator: Some(info),
        ..Default::default()
    }
}

pub fn sync_snapshot(
    freq: Subsystem<FreqSyncInfo>,
    phase: Subsystem<PhaseSyncInfo>,
) -> DeviceSnapshot {
    DeviceSnapshot {
        frequency_sync: Some(freq),
        phase_sync: Some(phase),
        ..Default::default()
    }
}

/// Runs a check through a buffer writer and returns the report and everything written.
pub async fn check_output(
    check: CheckKind,
    snapshot: &DeviceSnapshot,
    format: OutputFormat,
) -> Result<(FinalReport, Vec<String>)> {
    let buffer: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(vec![]));

    let run = CheckRun::builder(check)
        .config(
            Config::builder()
                .with_buffer_output(Arc::clone(&buffer))
                .with_timestamp_provider(Box::new(FixedTsProvider {}))
                .format(format)
                .build(),
        )
        .build();

    let report = run.run(snapshot).await?;
    let written = buffer.lock().await.clone();

    Ok((report, written))
}
