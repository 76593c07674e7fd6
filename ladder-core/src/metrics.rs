//! Cumulative position metrics — one forward pass over the sized ladder.
//!
//! Per level `i`, with `u` = units per lot:
//! - `cumulative_lot = Σ lot[0..=i]`
//! - `break_even = Σ(price·lot·u) / (cumulative_lot·u)`
//! - `floating_pnl = (price − break_even) · cumulative_lot · u`
//! - `exit_distance`: rising `break_even − price`, falling `|price − break_even|`
//! - `gain_to_target = break_even + target / (cumulative_lot·u) − price`
//! - `reversal_gain`: rising `−(price − start)·cumulative_lot·u`,
//!   falling `(start − price)·cumulative_lot·u`
//!
//! While `cumulative_lot` is zero every derived column is zero.

use rust_decimal::Decimal;
use tracing::warn;

use crate::config::LadderConfig;
use crate::domain::{Direction, PriceLevel};
use crate::error::LadderError;

/// Running totals carried between levels.
#[derive(Debug, Default)]
struct Accumulator {
    lots: Decimal,
    notional: Decimal,
}

impl Accumulator {
    /// Add one fill. Leaves the totals untouched and returns `None` on overflow.
    fn fill(&mut self, price: Decimal, lot: Decimal, unit: Decimal) -> Option<()> {
        let lots = self.lots.checked_add(lot)?;
        let notional = self.notional.checked_add(price.checked_mul(lot)?.checked_mul(unit)?)?;
        self.lots = lots;
        self.notional = notional;
        Some(())
    }
}

/// Compute every [`PriceLevel`] from prices and their assigned lots.
///
/// Returns [`LadderError::Overflow`] if any running total or derived column
/// leaves the `Decimal` range; no partial rows are returned.
pub fn compute_metrics(
    levels: &[Decimal],
    lots: &[Decimal],
    starting_price: Decimal,
    direction: Direction,
    config: &LadderConfig,
) -> Result<Vec<PriceLevel>, LadderError> {
    if levels.len() != lots.len() {
        warn!(levels = levels.len(), lots = lots.len(), "price/lot length mismatch");
        return Err(LadderError::LengthMismatch { levels: levels.len(), lots: lots.len() });
    }

    let mut acc = Accumulator::default();
    let mut rows = Vec::with_capacity(levels.len());

    for (index, (&price, &lot)) in levels.iter().zip(lots).enumerate() {
        let row = acc
            .fill(price, lot, config.unit_multiplier)
            .and_then(|()| level_metrics(index, price, lot, &acc, starting_price, direction, config))
            .ok_or_else(|| {
                warn!(index, %price, "position metrics overflowed");
                LadderError::Overflow("position metrics")
            })?;
        rows.push(row);
    }

    Ok(rows)
}

fn level_metrics(
    index: usize,
    price: Decimal,
    lot: Decimal,
    acc: &Accumulator,
    starting_price: Decimal,
    direction: Direction,
    config: &LadderConfig,
) -> Option<PriceLevel> {
    let cumulative_lot = acc.lots;

    if cumulative_lot.is_zero() {
        return Some(PriceLevel {
            index,
            price,
            lot,
            cumulative_lot,
            break_even: Decimal::ZERO,
            floating_pnl: Decimal::ZERO,
            exit_distance: Decimal::ZERO,
            gain_to_target: Decimal::ZERO,
            reversal_gain: Decimal::ZERO,
        });
    }

    let units = cumulative_lot.checked_mul(config.unit_multiplier)?;
    let break_even = acc.notional.checked_div(units)?;
    let exit_distance = match direction {
        Direction::Rising => break_even.checked_sub(price)?,
        Direction::Falling => price.checked_sub(break_even)?.abs(),
    };
    let floating_pnl = price.checked_sub(break_even)?.checked_mul(units)?;
    let gain_to_target = break_even
        .checked_add(config.target_profit.checked_div(units)?)?
        .checked_sub(price)?;
    // −(price − start) and (start − price) are the same value for both directions.
    let reversal_gain = starting_price.checked_sub(price)?.checked_mul(units)?;

    Some(PriceLevel {
        index,
        price,
        lot,
        cumulative_lot,
        break_even,
        floating_pnl,
        exit_distance,
        gain_to_target,
        reversal_gain,
    })
}
