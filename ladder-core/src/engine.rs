//! Ladder pipeline — wires together the generator, a sizing strategy and the
//! metrics pass.
//!
//! Two entry points:
//! - `build_ladder()`: starting price + direction + sizing mode → full table. Used by the CLI.
//! - `assign_and_compute()`: pre-generated levels + explicit strategy → rows.
//!
//! All validation (config values, endpoint, lengths) happens before the
//! metrics pass; on failure no partial table is produced.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::LadderConfig;
use crate::domain::{Direction, DisplayRow, PriceLevel};
use crate::error::LadderError;
use crate::fingerprint::LadderHash;
use crate::ladder::{expected_endpoint, generate_levels};
use crate::metrics::compute_metrics;
use crate::sizers::{LotSizingStrategy, SizingMode};

/// Inputs for one ladder computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderRequest {
    pub starting_price: Decimal,
    pub direction: Direction,
    pub mode: SizingMode,
}

impl LadderRequest {
    pub fn new(
        starting_price: Decimal,
        direction: Direction,
        mode: SizingMode,
    ) -> Result<Self, LadderError> {
        let request = Self { starting_price, direction, mode };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), LadderError> {
        if self.starting_price <= Decimal::ZERO {
            return Err(LadderError::InvalidStartingPrice(self.starting_price));
        }
        Ok(())
    }
}

/// A computed ladder. Built once per request and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderTable {
    request: LadderRequest,
    config: LadderConfig,
    rows: Vec<PriceLevel>,
}

impl LadderTable {
    pub fn request(&self) -> &LadderRequest {
        &self.request
    }

    pub fn config(&self) -> &LadderConfig {
        &self.config
    }

    pub fn rows(&self) -> &[PriceLevel] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn final_price(&self) -> Option<Decimal> {
        self.rows.last().map(|r| r.price)
    }

    /// Total position size once every level is filled.
    pub fn total_lot(&self) -> Decimal {
        self.rows.last().map_or(Decimal::ZERO, |r| r.cumulative_lot)
    }

    /// Rows rounded for display.
    pub fn rounded(&self) -> Vec<DisplayRow> {
        self.rows.iter().map(PriceLevel::rounded).collect()
    }

    /// Canonical JSON (fixed field order, full precision) → BLAKE3.
    ///
    /// # Panics
    ///
    /// Never in practice: every field is a plain struct, enum or `Decimal`
    /// string with no maps or custom serializers, so `serde_json` cannot fail.
    pub fn fingerprint(&self) -> LadderHash {
        let json = serde_json::to_string(self).expect("LadderTable must serialize");
        LadderHash::from_bytes(json.as_bytes())
    }
}

/// Size every level with `strategy`, then run the metrics pass.
pub fn assign_and_compute(
    levels: &[Decimal],
    starting_price: Decimal,
    direction: Direction,
    strategy: &dyn LotSizingStrategy,
    config: &LadderConfig,
) -> Result<Vec<PriceLevel>, LadderError> {
    let lots = strategy.assign(levels, starting_price, config)?;
    debug!(sizer = strategy.name(), levels = levels.len(), "assigned lots");
    compute_metrics(levels, &lots, starting_price, direction, config)
}

/// Compute the full ladder for `request` under `config`.
pub fn build_ladder(request: &LadderRequest, config: &LadderConfig) -> Result<LadderTable, LadderError> {
    request.validate()?;
    config.check_positive()?;

    let levels = generate_levels(
        request.starting_price,
        config.total_span,
        config.step,
        request.direction,
    )?;

    let expected = expected_endpoint(request.starting_price, config.total_span, request.direction)?;
    let actual = levels.last().copied().unwrap_or(request.starting_price);
    if actual != expected {
        warn!(%expected, %actual, "ladder endpoint mismatch");
        return Err(LadderError::EndpointMismatch { expected, actual });
    }

    let strategy = request.mode.strategy();
    let rows = assign_and_compute(
        &levels,
        request.starting_price,
        request.direction,
        strategy.as_ref(),
        config,
    )?;

    let table = LadderTable { request: *request, config: config.clone(), rows };
    debug!(
        starting_price = %request.starting_price,
        direction = %request.direction,
        mode = %request.mode,
        rows = table.len(),
        total_lot = %table.total_lot(),
        "built ladder"
    );
    Ok(table)
}
