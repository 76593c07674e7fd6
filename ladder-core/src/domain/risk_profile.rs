//! Risk profiles — how aggressively lots scale across the ladder.
//!
//! Each profile carries two table entries:
//! - **Index overrides**: base lots at ladder positions 5 and 7 (the only
//!   positions where profiles disagree on the pre-scaling lot).
//! - **Scaling**: how every assigned lot is scaled before it is used.
//!
//! | profile | index 5 | index 7 | scaling |
//! |---|---|---|---|
//! | Conservative | 2.4×1.3 | 3 | lot / 2.11 |
//! | SemiConservative | 2.0 | 0 | lot / base divisor |
//! | Neutral | 0 | 0 | lot / base divisor |
//! | SemiAggressive | 2.4×1.3 | 3 | lot × 1.25 / 2.25 |
//! | Aggressive | 2.4×1.3 | 3 | lot / base divisor |
//! | VeryAggressive | 2.4×1.3 | 3 | lot × 1.25 / 1.6 |
//! | SuperAggressive | 2.4×1.3 | 3 | lot × 1.25 × 1.2 / 1.6 |

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LadderError;

/// Named lot-scaling profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskProfile {
    Conservative,
    SemiConservative,
    Neutral,
    SemiAggressive,
    Aggressive,
    VeryAggressive,
    SuperAggressive,
}

/// Post-assignment scaling rule for a lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LotScaling {
    /// Divide by the configured `lot_divisor`.
    BaseDivisor,
    /// `lot × multiplier / divisor`.
    Custom { multiplier: Decimal, divisor: Decimal },
}

impl LotScaling {
    pub fn apply(self, lot: Decimal, base_divisor: Decimal) -> Option<Decimal> {
        match self {
            Self::BaseDivisor => lot.checked_div(base_divisor),
            Self::Custom { multiplier, divisor } => lot.checked_mul(multiplier)?.checked_div(divisor),
        }
    }
}

impl fmt::Display for LotScaling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BaseDivisor => write!(f, "lot / lot_divisor"),
            Self::Custom { multiplier, divisor } if *multiplier == Decimal::ONE => {
                write!(f, "lot / {divisor}")
            }
            Self::Custom { multiplier, divisor } => write!(f, "lot x {multiplier} / {divisor}"),
        }
    }
}

/// Base lot shared by every profile that does not zero out index 5.
const SHARED_INDEX_5: Decimal = dec!(3.12); // 2.4 × 1.3
const SHARED_INDEX_7: Decimal = dec!(3);

impl RiskProfile {
    pub const ALL: [RiskProfile; 7] = [
        Self::Conservative,
        Self::SemiConservative,
        Self::Neutral,
        Self::SemiAggressive,
        Self::Aggressive,
        Self::VeryAggressive,
        Self::SuperAggressive,
    ];

    /// Profile-specific base lot at ladder `index`, or `None` where the
    /// profile follows the shared index table.
    pub fn index_override(self, index: usize) -> Option<Decimal> {
        match index {
            5 => Some(match self {
                Self::Neutral => Decimal::ZERO,
                Self::SemiConservative => dec!(2.0),
                _ => SHARED_INDEX_5,
            }),
            7 => Some(match self {
                Self::Neutral | Self::SemiConservative => Decimal::ZERO,
                _ => SHARED_INDEX_7,
            }),
            _ => None,
        }
    }

    pub fn scaling(self) -> LotScaling {
        match self {
            Self::Conservative => LotScaling::Custom {
                multiplier: Decimal::ONE,
                divisor: dec!(2.11),
            },
            Self::VeryAggressive => LotScaling::Custom {
                multiplier: dec!(1.25),
                divisor: dec!(1.6),
            },
            Self::SemiAggressive => LotScaling::Custom {
                multiplier: dec!(1.25),
                divisor: dec!(2.25),
            },
            Self::SuperAggressive => LotScaling::Custom {
                multiplier: dec!(1.5), // 1.25 × 1.2
                divisor: dec!(1.6),
            },
            Self::Neutral | Self::Aggressive | Self::SemiConservative => LotScaling::BaseDivisor,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::SemiConservative => "semi_conservative",
            Self::Neutral => "neutral",
            Self::SemiAggressive => "semi_aggressive",
            Self::Aggressive => "aggressive",
            Self::VeryAggressive => "very_aggressive",
            Self::SuperAggressive => "super_aggressive",
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RiskProfile {
    type Err = LadderError;

    /// Accepts snake, kebab, camel and spaced forms, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|p| p.name().replace('_', "") == key)
            .ok_or_else(|| LadderError::InvalidEnum {
                kind: "risk profile",
                value: s.to_string(),
            })
    }
}
