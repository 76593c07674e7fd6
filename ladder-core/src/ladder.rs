//! Ladder generator — evenly spaced price levels away from a starting price.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::level_count;
use crate::domain::Direction;
use crate::error::LadderError;

/// Generate `floor(total_span / step) + 1` levels starting at `starting_price`.
///
/// `level[i] = starting_price ± i·step`. When `total_span` is not a multiple
/// of `step` the last level falls short of the span; the pipeline's endpoint
/// check reports that, not this function.
pub fn generate_levels(
    starting_price: Decimal,
    total_span: Decimal,
    step: Decimal,
    direction: Direction,
) -> Result<Vec<Decimal>, LadderError> {
    if step <= Decimal::ZERO {
        return Err(LadderError::InvalidConfig(format!("step must be > 0, got {step}")));
    }
    if total_span <= Decimal::ZERO {
        return Err(LadderError::InvalidConfig(format!(
            "total_span must be > 0, got {total_span}"
        )));
    }

    let count = level_count(total_span, step).ok_or(LadderError::Overflow("level count"))?;
    let levels = (0..count)
        .map(|i| {
            step.checked_mul(Decimal::from(i))
                .and_then(|distance| direction.offset(starting_price, distance))
                .ok_or(LadderError::Overflow("price level"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(%starting_price, %direction, count, "generated ladder levels");
    Ok(levels)
}

/// The price the last level must land on.
pub fn expected_endpoint(
    starting_price: Decimal,
    total_span: Decimal,
    direction: Direction,
) -> Result<Decimal, LadderError> {
    direction
        .offset(starting_price, total_span)
        .ok_or(LadderError::Overflow("ladder endpoint"))
}
