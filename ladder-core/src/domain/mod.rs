//! Domain types for the price ladder

pub mod direction;
pub mod level;
pub mod risk_profile;

pub use direction::Direction;
pub use level::{DisplayRow, PriceLevel};
pub use risk_profile::{LotScaling, RiskProfile};
