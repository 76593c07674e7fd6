//! Property tests for ladder invariants.
//!
//! Uses proptest to verify:
//! 1. Level count — `total_span / step + 1` levels, endpoints inclusive
//! 2. Exact endpoint — last price is `start ± total_span` to the last digit
//! 3. Constant step — prices move monotonically by exactly `step`
//! 4. Cumulative lot — non-decreasing and equal to the running sum of lots
//! 5. Zero guard — derived metrics are zero while nothing is held
//! 6. Idempotence — identical inputs give identical tables and fingerprints

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use ladder_core::{
    build_ladder, compute_metrics, Direction, LadderConfig, LadderRequest, RiskProfile, SizingMode,
};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_price() -> impl Strategy<Value = Decimal> {
    // 1.00 ..= 100000.00 in cents
    (100i64..=10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Rising), Just(Direction::Falling)]
}

fn arb_mode() -> impl Strategy<Value = SizingMode> {
    prop_oneof![
        Just(SizingMode::Baseline),
        proptest::sample::select(RiskProfile::ALL.to_vec()).prop_map(SizingMode::Profile),
    ]
}

/// Step in quarter points, span a whole number of steps.
fn arb_config() -> impl Strategy<Value = LadderConfig> {
    (1i64..=80, 1u32..=24).prop_map(|(quarters, steps)| {
        let step = Decimal::new(quarters * 25, 2);
        LadderConfig {
            step,
            total_span: step * Decimal::from(steps),
            ..Default::default()
        }
    })
}

// ── Ladder shape ─────────────────────────────────────────────────────

proptest! {
    /// Level count is `total_span / step + 1` and the last price is exact.
    #[test]
    fn count_and_endpoint(
        start in arb_price(),
        direction in arb_direction(),
        mode in arb_mode(),
        config in arb_config(),
    ) {
        let request = LadderRequest::new(start, direction, mode).unwrap();
        let table = build_ladder(&request, &config).unwrap();

        let expected_len = (config.total_span / config.step) + Decimal::ONE;
        prop_assert_eq!(Decimal::from(table.len()), expected_len);

        let expected_end = match direction {
            Direction::Falling => start - config.total_span,
            Direction::Rising => start + config.total_span,
        };
        prop_assert_eq!(table.final_price(), Some(expected_end));
    }

    /// Prices are strictly monotonic with a constant step.
    #[test]
    fn constant_step(
        start in arb_price(),
        direction in arb_direction(),
        config in arb_config(),
    ) {
        let request = LadderRequest::new(start, direction, SizingMode::Baseline).unwrap();
        let table = build_ladder(&request, &config).unwrap();

        prop_assert_eq!(table.rows()[0].price, start);
        for pair in table.rows().windows(2) {
            let delta = pair[1].price - pair[0].price;
            match direction {
                Direction::Falling => prop_assert_eq!(delta, -config.step),
                Direction::Rising => prop_assert_eq!(delta, config.step),
            }
        }
    }
}

// ── Cumulative metrics ───────────────────────────────────────────────

proptest! {
    /// Cumulative lot never decreases and equals the running sum of lots.
    #[test]
    fn cumulative_lot_is_running_sum(
        start in arb_price(),
        direction in arb_direction(),
        mode in arb_mode(),
        config in arb_config(),
    ) {
        let request = LadderRequest::new(start, direction, mode).unwrap();
        let table = build_ladder(&request, &config).unwrap();

        let mut running = Decimal::ZERO;
        let mut previous = Decimal::ZERO;
        for row in table.rows() {
            prop_assert!(row.lot >= Decimal::ZERO);
            running += row.lot;
            prop_assert_eq!(row.cumulative_lot, running);
            prop_assert!(row.cumulative_lot >= previous);
            previous = row.cumulative_lot;
        }
    }

    /// Break-even always lies between the lowest and highest price seen so far.
    #[test]
    fn break_even_within_filled_range(
        start in arb_price(),
        direction in arb_direction(),
        mode in arb_mode(),
    ) {
        let request = LadderRequest::new(start, direction, mode).unwrap();
        let table = build_ladder(&request, &LadderConfig::default()).unwrap();
        let tolerance = dec!(0.000001);

        for row in table.rows().iter().filter(|r| !r.cumulative_lot.is_zero()) {
            let (lo, hi) = match direction {
                Direction::Falling => (row.price, start),
                Direction::Rising => (start, row.price),
            };
            prop_assert!(row.break_even >= lo - tolerance, "index {}", row.index);
            prop_assert!(row.break_even <= hi + tolerance, "index {}", row.index);
        }
    }

    /// Derived metrics are zero wherever nothing has been bought yet.
    #[test]
    fn zero_position_zeroes_metrics(
        leading_zeros in 1usize..5,
        tail in proptest::collection::vec(0u32..500, 0..5),
        start in arb_price(),
        direction in arb_direction(),
    ) {
        let config = LadderConfig::default();
        let n = leading_zeros + tail.len();
        let levels: Vec<Decimal> = (0..n)
            .map(|i| direction.offset(start, config.step * Decimal::from(i)).unwrap())
            .collect();
        let lots: Vec<Decimal> = std::iter::repeat(Decimal::ZERO)
            .take(leading_zeros)
            .chain(tail.iter().map(|&l| Decimal::new(i64::from(l), 2)))
            .collect();

        let rows = compute_metrics(&levels, &lots, start, direction, &config).unwrap();
        for row in rows.iter().filter(|r| r.cumulative_lot.is_zero()) {
            prop_assert_eq!(row.break_even, Decimal::ZERO);
            prop_assert_eq!(row.floating_pnl, Decimal::ZERO);
            prop_assert_eq!(row.exit_distance, Decimal::ZERO);
            prop_assert_eq!(row.gain_to_target, Decimal::ZERO);
            prop_assert_eq!(row.reversal_gain, Decimal::ZERO);
        }
    }

    /// Mismatched inputs are always rejected, never truncated.
    #[test]
    fn length_mismatch_rejected(n_levels in 0usize..12, n_lots in 0usize..12) {
        prop_assume!(n_levels != n_lots);
        let levels = vec![dec!(100); n_levels];
        let lots = vec![dec!(1); n_lots];
        let result = compute_metrics(&levels, &lots, dec!(100), Direction::Falling, &LadderConfig::default());
        prop_assert!(result.is_err());
    }
}

// ── Idempotence ──────────────────────────────────────────────────────

proptest! {
    /// Same inputs → byte-identical output.
    #[test]
    fn idempotent(
        start in arb_price(),
        direction in arb_direction(),
        mode in arb_mode(),
        config in arb_config(),
    ) {
        let request = LadderRequest::new(start, direction, mode).unwrap();
        let a = build_ladder(&request, &config).unwrap();
        let b = build_ladder(&request, &config).unwrap();

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.fingerprint(), b.fingerprint());
        prop_assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
