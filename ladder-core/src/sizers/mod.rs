//! Lot Sizers — decide how many lots each ladder level carries
//!
//! Two strategies implement the same rule family:
//! - [`DistanceSizing`]: baseline, lot depends only on distance from the start.
//! - [`ProfileSizing`]: hand-tuned lots for the first nine levels, varying by
//!   risk profile, then the distance table for the rest.
//!
//! Both are selectable through [`SizingMode`].

pub mod distance;
pub mod profile;

pub use distance::{distance_lot, DistanceSizing};
pub use profile::ProfileSizing;

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::LadderConfig;
use crate::domain::RiskProfile;
use crate::error::LadderError;

/// Lot assignment logic
///
/// # Responsibilities
/// - Map (ladder index, distance from start) → base lot
/// - Scale base lots into the final lot
///
/// # Non-Responsibilities
/// - Sizers do NOT generate prices (that's the ladder generator's job)
/// - Sizers do NOT accumulate positions (that's the metrics pass's job)
pub trait LotSizingStrategy: Send + Sync {
    /// Lot before scaling for the level at `index`, `distance` away from the start.
    fn base_lot(&self, index: usize, distance: Decimal) -> Decimal;

    /// Scale a base lot into the lot actually assigned. `None` on overflow.
    fn scale(&self, lot: Decimal, config: &LadderConfig) -> Option<Decimal>;

    /// Sizer name for logging and export
    fn name(&self) -> &str;

    /// Assign a scaled lot to every level.
    fn assign(
        &self,
        levels: &[Decimal],
        starting_price: Decimal,
        config: &LadderConfig,
    ) -> Result<Vec<Decimal>, LadderError> {
        levels
            .iter()
            .enumerate()
            .map(|(index, &price)| {
                price
                    .checked_sub(starting_price)
                    .and_then(|delta| self.scale(self.base_lot(index, delta.abs()), config))
                    .ok_or(LadderError::Overflow("lot sizing"))
            })
            .collect()
    }
}

/// Which sizing strategy a ladder uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SizingMode {
    /// Distance table only, scaled by the configured lot divisor.
    #[default]
    Baseline,
    /// Index table with per-profile overrides and scaling.
    Profile(RiskProfile),
}

impl SizingMode {
    pub fn strategy(self) -> Box<dyn LotSizingStrategy> {
        match self {
            Self::Baseline => Box::new(DistanceSizing),
            Self::Profile(profile) => Box::new(ProfileSizing::new(profile)),
        }
    }
}

impl From<Option<RiskProfile>> for SizingMode {
    fn from(profile: Option<RiskProfile>) -> Self {
        profile.map_or(Self::Baseline, Self::Profile)
    }
}

impl fmt::Display for SizingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Baseline => f.write_str("baseline"),
            Self::Profile(profile) => write!(f, "profile:{profile}"),
        }
    }
}
