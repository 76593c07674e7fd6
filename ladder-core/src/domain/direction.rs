use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LadderError;

/// Which way the ladder walks away from the starting price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Rising,
    #[default]
    Falling,
}

impl Direction {
    /// Apply `offset` away from `price` in this direction. `None` on overflow.
    pub fn offset(self, price: Decimal, offset: Decimal) -> Option<Decimal> {
        match self {
            Self::Rising => price.checked_add(offset),
            Self::Falling => price.checked_sub(offset),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rising => "rising",
            Self::Falling => "falling",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = LadderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rising" | "up" => Ok(Self::Rising),
            "falling" | "down" => Ok(Self::Falling),
            _ => Err(LadderError::InvalidDirection(s.to_string())),
        }
    }
}
