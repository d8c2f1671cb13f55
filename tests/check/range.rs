// (c) Meta Platforms, Inc. and affiliates.
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use anyhow::Result;
use rand::seq::SliceRandom;
use rand::Rng;

use devcheck::check::{alarm, CheckReport, Severity, ThresholdRange};

const ROUNDS: usize = 500;

#[test]
fn test_bounded_range_alerts_outside() -> Result<()> {
    let mut rng = rand::thread_rng();

    for _ in 0..ROUNDS {
        let a: i64 = rng.gen_range(-1000..1000);
        let b: i64 = rng.gen_range(a..=1000);
        let x: i64 = rng.gen_range(-1500..1500);

        let range = ThresholdRange::parse(&format!("{a}:{b}"))?;
        let inverted = ThresholdRange::parse(&format!("@{a}:{b}"))?;
        let outside = x < a || x > b;

        assert_eq!(range.alerts(x as f64), outside, "{a}:{b} with {x}");
        assert_eq!(inverted.alerts(x as f64), !outside, "@{a}:{b} with {x}");
    }
    Ok(())
}

#[test]
fn test_half_open_ranges() -> Result<()> {
    let mut rng = rand::thread_rng();

    for _ in 0..ROUNDS {
        let n: i64 = rng.gen_range(0..1000);
        let x: i64 = rng.gen_range(-1500..1500);

        let upper = ThresholdRange::parse(&n.to_string())?;
        assert_eq!(upper.alerts(x as f64), x < 0 || x > n);

        let lower = ThresholdRange::parse(&format!("{n}:"))?;
        assert_eq!(lower.alerts(x as f64), x < n);

        let below = ThresholdRange::parse(&format!("~:{n}"))?;
        assert_eq!(below.alerts(x as f64), x > n);
    }
    Ok(())
}

#[test]
fn test_canonical_form_reparses() -> Result<()> {
    for s in ["10", "10:", "~:10", "@10:20", "-5:5", "", ":", "0.5:1.5"] {
        let range = ThresholdRange::parse(s)?;
        let again: ThresholdRange = range.to_string().parse()?;
        assert_eq!(range, again, "{s}");
    }
    Ok(())
}

#[test]
fn test_critical_wins_over_warning() -> Result<()> {
    let mut rng = rand::thread_rng();

    for _ in 0..ROUNDS {
        let x: f64 = rng.gen_range(-100.0..200.0);
        let severity = alarm::evaluate(x, "0:50", "0:100")?;

        let expected = if !(0.0..=100.0).contains(&x) {
            Severity::Critical
        } else if x > 50.0 {
            Severity::Warning
        } else {
            Severity::Ok
        };
        assert_eq!(severity, expected, "{x}");
    }
    Ok(())
}

#[test]
fn test_aggregate_is_worst_in_any_order() {
    let mut rng = rand::thread_rng();
    let all = [
        Severity::Ok,
        Severity::Warning,
        Severity::Critical,
        Severity::Unknown,
    ];

    for _ in 0..ROUNDS {
        let len = rng.gen_range(1..12);
        let mut severities: Vec<Severity> =
            (0..len).map(|_| *all.choose(&mut rng).unwrap_or(&Severity::Ok)).collect();

        let expected = [
            Severity::Critical,
            Severity::Warning,
            Severity::Unknown,
            Severity::Ok,
        ]
        .into_iter()
        .find(|s| severities.contains(s))
        .unwrap_or(Severity::Ok);

        for _ in 0..3 {
            severities.shuffle(&mut rng);

            let mut report = CheckReport::new("TEST");
            for s in &severities {
                report.add(*s, "entry");
            }
            assert_eq!(report.severity(), expected, "{severities:?}");
        }
    }
}
