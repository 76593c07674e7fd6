//! Profile Sizer
//!
//! The first nine levels carry hand-tuned base lots; positions 5 and 7 come
//! from the risk profile. Levels past index 8 fall back to the distance table.
//!
//! | index | base lot |
//! |---|---|
//! | 0 | 1.0 |
//! | 1 | 1.4 |
//! | 2 | 2.4 |
//! | 3 | 2.0 |
//! | 4 | 2.4 × 1.3 |
//! | 5 | profile |
//! | 6 | 3 × 1.5 |
//! | 7 | profile |
//! | 8 | 4 × 1.5 |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::config::LadderConfig;
use crate::domain::RiskProfile;
use crate::sizers::{distance_lot, LotSizingStrategy};

const INDEX_TABLE_LEN: usize = 9;

/// Shared base lots by index; `None` marks a profile-specific slot.
const INDEX_TABLE: [Option<Decimal>; INDEX_TABLE_LEN] = [
    Some(dec!(1.0)),
    Some(dec!(1.4)),
    Some(dec!(2.4)),
    Some(dec!(2.0)),
    Some(dec!(3.12)), // 2.4 × 1.3
    None,
    Some(dec!(4.5)), // 3 × 1.5
    None,
    Some(dec!(6.0)), // 4 × 1.5
];

/// Index-position sizer for a given risk profile.
#[derive(Debug, Clone)]
pub struct ProfileSizing {
    profile: RiskProfile,
    name: String,
}

impl ProfileSizing {
    pub fn new(profile: RiskProfile) -> Self {
        Self { profile, name: format!("profile:{profile}") }
    }

    pub fn profile(&self) -> RiskProfile {
        self.profile
    }
}

impl LotSizingStrategy for ProfileSizing {
    fn base_lot(&self, index: usize, distance: Decimal) -> Decimal {
        match INDEX_TABLE.get(index) {
            Some(Some(lot)) => *lot,
            Some(None) => self.profile.index_override(index).unwrap_or(Decimal::ZERO),
            None => distance_lot(distance),
        }
    }

    fn scale(&self, lot: Decimal, config: &LadderConfig) -> Option<Decimal> {
        self.profile.scaling().apply(lot, config.lot_divisor)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
