//! Error taxonomy for ladder computation.
//!
//! Every variant is a local validation failure raised before any metrics are
//! computed. Computation is deterministic, so none of these are retryable.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors from the ladder pipeline.
#[derive(Debug, Error)]
pub enum LadderError {
    #[error("invalid direction '{0}' (expected 'rising' or 'falling')")]
    InvalidDirection(String),

    #[error("invalid {kind} '{value}'")]
    InvalidEnum { kind: &'static str, value: String },

    #[error("length mismatch: {levels} price levels but {lots} lots")]
    LengthMismatch { levels: usize, lots: usize },

    #[error("endpoint mismatch: last price is {actual}, expected {expected}")]
    EndpointMismatch { expected: Decimal, actual: Decimal },

    #[error("starting price must be > 0, got {0}")]
    InvalidStartingPrice(Decimal),

    #[error("invalid ladder parameters: {0}")]
    InvalidConfig(String),

    #[error("arithmetic overflow in {0}")]
    Overflow(&'static str),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
