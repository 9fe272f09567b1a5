//! Property-based tests for the scaling metrics.

use std::collections::BTreeMap;

use proptest::prelude::*;

use parscale_core::metrics::{
    efficiency, overhead_factor, overhead_percentage, speedup, time_difference,
};
use parscale_core::series::{RunSeries, Sample};

fn run_from(map: &BTreeMap<u32, f64>) -> RunSeries {
    RunSeries::new(map.iter().map(|(&w, &s)| Sample::new(w, s)).collect()).unwrap()
}

fn valid_series() -> impl Strategy<Value = RunSeries> {
    prop::collection::btree_map(1u32..128, 0.001f64..10.0, 1..24).prop_map(|m| run_from(&m))
}

fn aligned_pair() -> impl Strategy<Value = (RunSeries, RunSeries)> {
    prop::collection::btree_map(1u32..128, (0.001f64..10.0, 0.001f64..10.0), 1..24).prop_map(
        |m| {
            let a: BTreeMap<u32, f64> = m.iter().map(|(&w, &(ta, _))| (w, ta)).collect();
            let b: BTreeMap<u32, f64> = m.iter().map(|(&w, &(_, tb))| (w, tb)).collect();
            (run_from(&a), run_from(&b))
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The baseline speedup is exactly one.
    #[test]
    fn speedup_baseline_is_one(series in valid_series()) {
        let s = speedup(&series).unwrap();
        prop_assert_eq!(s[0], 1.0);
    }

    /// Every speedup is strictly positive.
    #[test]
    fn speedup_positive(series in valid_series()) {
        let s = speedup(&series).unwrap();
        prop_assert!(s.values().iter().all(|&v| v > 0.0));
        prop_assert_eq!(s.len(), series.len());
    }

    /// Efficiency has no hidden state.
    #[test]
    fn efficiency_idempotent(series in valid_series()) {
        prop_assert_eq!(efficiency(&series).unwrap(), efficiency(&series).unwrap());
    }

    /// Efficiency is speedup per worker, in percent.
    #[test]
    fn efficiency_matches_speedup(series in valid_series()) {
        let s = speedup(&series).unwrap();
        let e = efficiency(&series).unwrap();
        for (i, p) in series.workers().enumerate() {
            let expected = s[i] / f64::from(p) * 100.0;
            prop_assert!((e[i] - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        }
    }

    /// A series compared with itself has no overhead.
    #[test]
    fn overhead_factor_reflexive(series in valid_series()) {
        let o = overhead_factor(&series, &series).unwrap();
        prop_assert!(o.values().iter().all(|&v| v == 1.0));
    }

    /// Swapping the operands inverts the overhead factor.
    #[test]
    fn overhead_factor_reciprocal((a, b) in aligned_pair()) {
        let ab = overhead_factor(&a, &b).unwrap();
        let ba = overhead_factor(&b, &a).unwrap();
        for (x, y) in ab.values().iter().zip(ba.values()) {
            prop_assert!((x * y - 1.0).abs() < 1e-12);
        }
    }

    /// The overhead percentage is the time difference relative to the reference.
    #[test]
    fn overhead_percentage_consistent((a, b) in aligned_pair()) {
        let diff = time_difference(&a, &b).unwrap();
        let pct = overhead_percentage(&a, &b).unwrap();
        for (i, tb) in b.times().enumerate() {
            let expected = diff[i] / tb * 100.0;
            prop_assert!((pct[i] - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        }
    }
}
