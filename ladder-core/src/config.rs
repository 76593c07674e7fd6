//! Ladder configuration — the immutable constants every computation runs against.
//!
//! A `LadderConfig` is passed by reference into the generator, the sizing
//! strategies and the metrics pass. Two configs (e.g. for different
//! instruments) can be used side by side without interfering.

use std::path::Path;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or validating a [`LadderConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config TOML: {0}")]
    Parse(String),

    #[error("{field} must be > 0, got {value}")]
    NonPositive { field: &'static str, value: Decimal },

    #[error("total_span {total_span} is not a multiple of step {step}")]
    SpanNotMultipleOfStep { total_span: Decimal, step: Decimal },
}

/// Ladder constants.
///
/// Defaults are the desk constants: 15-point steps over a
/// 120-point span, 100 units per lot, lots divided by 1.5932, and a
/// 5000 profit target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LadderConfig {
    /// Price distance between consecutive levels.
    pub step: Decimal,
    /// Distance from the starting price to the last level.
    pub total_span: Decimal,
    /// Underlying units per lot.
    pub unit_multiplier: Decimal,
    /// Divisor applied by the baseline strategy and the default-scaled profiles.
    pub lot_divisor: Decimal,
    /// Profit target used for the gain-to-target column.
    pub target_profit: Decimal,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            step: dec!(15),
            total_span: dec!(120),
            unit_multiplier: dec!(100),
            lot_divisor: dec!(1.5932),
            target_profit: dec!(5000),
        }
    }
}

impl LadderConfig {
    /// Parse a (possibly partial) TOML document. Missing keys keep defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Full validation: positive values and a span that the step divides.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check_positive()?;
        self.check_span_alignment()
    }

    /// Reject values that would make the arithmetic meaningless.
    pub fn check_positive(&self) -> Result<(), ConfigError> {
        let positive = [
            ("step", self.step),
            ("total_span", self.total_span),
            ("unit_multiplier", self.unit_multiplier),
            ("lot_divisor", self.lot_divisor),
            ("target_profit", self.target_profit),
        ];
        for (field, value) in positive {
            if value <= Decimal::ZERO {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        Ok(())
    }

    pub fn check_span_alignment(&self) -> Result<(), ConfigError> {
        match self.total_span.checked_rem(self.step) {
            Some(rem) if rem.is_zero() => Ok(()),
            _ => Err(ConfigError::SpanNotMultipleOfStep {
                total_span: self.total_span,
                step: self.step,
            }),
        }
    }

    /// Number of levels in the ladder, both endpoints included.
    /// `None` when the count does not fit in a `usize`.
    pub fn level_count(&self) -> Option<usize> {
        level_count(self.total_span, self.step)
    }
}

/// `floor(total_span / step) + 1`. Callers must ensure `step > 0`.
pub(crate) fn level_count(total_span: Decimal, step: Decimal) -> Option<usize> {
    total_span.checked_div(step)?.floor().to_usize()?.checked_add(1)
}
