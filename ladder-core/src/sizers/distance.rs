//! Distance Sizer
//!
//! Baseline rule: the lot depends only on how far the level sits from the
//! starting price. Buckets are closed intervals checked in order; anything
//! that matches none of them gets the fallback lot. Distances between
//! buckets (16–19, 21–24, 26–29, 31–34, 56–59, 61–64 and fractional gaps)
//! land on the fallback.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::LadderConfig;
use crate::sizers::LotSizingStrategy;

struct DistanceRule {
    min: Decimal,
    max: Decimal,
    lot: Decimal,
}

const fn rule(min: Decimal, max: Decimal, lot: Decimal) -> DistanceRule {
    DistanceRule { min, max, lot }
}

// 55 is a skip level; it must precede the 35..=55 bucket.
const DISTANCE_TABLE: [DistanceRule; 10] = [
    rule(dec!(0), dec!(15), dec!(0.5)),
    rule(dec!(20), dec!(20), dec!(0)),
    rule(dec!(25), dec!(25), dec!(2.0)),
    rule(dec!(30), dec!(30), dec!(2.0)),
    rule(dec!(55), dec!(55), dec!(0)),
    rule(dec!(35), dec!(55), dec!(0.625)),
    rule(dec!(60), dec!(60), dec!(6.0)),
    rule(dec!(65), dec!(90), dec!(2.0)),
    rule(dec!(91), dec!(94), dec!(1.5)),
    rule(dec!(95), dec!(120), dec!(3.375)),
];

const FALLBACK_LOT: Decimal = dec!(0.5);

/// Base lot for a level `distance` away from the starting price.
pub fn distance_lot(distance: Decimal) -> Decimal {
    DISTANCE_TABLE
        .iter()
        .find(|r| distance >= r.min && distance <= r.max)
        .map_or(FALLBACK_LOT, |r| r.lot)
}

/// Baseline sizer: distance table scaled by `lot_divisor`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceSizing;

impl LotSizingStrategy for DistanceSizing {
    fn base_lot(&self, _index: usize, distance: Decimal) -> Decimal {
        distance_lot(distance)
    }

    fn scale(&self, lot: Decimal, config: &LadderConfig) -> Option<Decimal> {
        lot.checked_div(config.lot_divisor)
    }

    fn name(&self) -> &str {
        "baseline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_buckets() {
        let cases = [
            (dec!(0), dec!(0.5)),
            (dec!(7.5), dec!(0.5)),
            (dec!(15), dec!(0.5)),
            (dec!(20), dec!(0)),
            (dec!(25), dec!(2.0)),
            (dec!(30), dec!(2.0)),
            (dec!(35), dec!(0.625)),
            (dec!(45), dec!(0.625)),
            (dec!(54), dec!(0.625)),
            (dec!(55), dec!(0)),
            (dec!(60), dec!(6.0)),
            (dec!(65), dec!(2.0)),
            (dec!(75), dec!(2.0)),
            (dec!(90), dec!(2.0)),
            (dec!(91), dec!(1.5)),
            (dec!(94), dec!(1.5)),
            (dec!(95), dec!(3.375)),
            (dec!(105), dec!(3.375)),
            (dec!(120), dec!(3.375)),
        ];
        for (distance, lot) in cases {
            assert_eq!(distance_lot(distance), lot, "distance {distance}");
        }
    }

    #[test]
    fn gaps_fall_back() {
        for distance in [
            dec!(16),
            dec!(19),
            dec!(21),
            dec!(24),
            dec!(27),
            dec!(33),
            dec!(57),
            dec!(62),
            dec!(90.5),
            dec!(94.5),
            dec!(121),
            dec!(500),
        ] {
            assert_eq!(distance_lot(distance), FALLBACK_LOT, "distance {distance}");
        }
    }

    #[test]
    fn fraction_below_skip_level_is_sized() {
        assert_eq!(distance_lot(dec!(54.5)), dec!(0.625));
    }

    #[test]
    fn scales_by_config_divisor() {
        let config = LadderConfig::default();
        assert_eq!(DistanceSizing.scale(dec!(0.5), &config), Some(dec!(0.5) / dec!(1.5932)));
        let custom = LadderConfig { lot_divisor: dec!(2), ..Default::default() };
        assert_eq!(DistanceSizing.scale(dec!(3), &custom), Some(dec!(1.5)));
    }

    #[test]
    fn index_is_ignored() {
        assert_eq!(DistanceSizing.base_lot(0, dec!(60)), DistanceSizing.base_lot(8, dec!(60)));
    }
}
