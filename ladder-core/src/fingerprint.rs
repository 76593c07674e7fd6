//! Ladder fingerprinting — deterministic identity of a computed table.
//!
//! Two computations with the same starting price, direction, sizing mode and
//! config produce the same `LadderHash`. Any change to an input or to a single
//! digit of any row changes it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// BLAKE3 hex digest of a canonical serialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LadderHash(pub String);

impl LadderHash {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(blake3::hash(bytes).to_hex().to_string())
    }

    /// First 12 hex characters, for log lines and table footers.
    pub fn short(&self) -> &str {
        &self.0[..self.0.len().min(12)]
    }
}

impl fmt::Display for LadderHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
