use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One computed row of the ladder, at full precision.
///
/// All derived metrics are zero when `cumulative_lot` is zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLevel {
    /// Position in the ladder, starting at 0 for the starting price.
    pub index: usize,
    pub price: Decimal,
    /// Lot assigned to this level, after scaling.
    pub lot: Decimal,
    /// Running sum of `lot` up to and including this level.
    pub cumulative_lot: Decimal,
    /// Volume-weighted average price of all levels so far.
    pub break_even: Decimal,
    /// Unrealized P&L at this price against `break_even`.
    pub floating_pnl: Decimal,
    /// Rising: `break_even - price` (signed). Falling: `|price - break_even|`.
    pub exit_distance: Decimal,
    /// Price movement still needed from here to make the target profit.
    pub gain_to_target: Decimal,
    /// P&L if price returned to the starting price with the current position.
    pub reversal_gain: Decimal,
}

/// Presentation view of a [`PriceLevel`], rounded for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRow {
    pub index: usize,
    pub price: Decimal,
    pub lot: Decimal,
    pub cumulative_lot: Decimal,
    pub break_even: Decimal,
    pub floating_pnl: Decimal,
    pub exit_distance: Decimal,
    pub gain_to_target: Decimal,
    pub reversal_gain: Decimal,
}

/// Decimal places for money and price columns.
pub const PRICE_DP: u32 = 2;
/// Decimal places for lot columns.
pub const LOT_DP: u32 = 4;

impl PriceLevel {
    /// Round for display. Uses half-to-even, so 0.125 → 0.12.
    pub fn rounded(&self) -> DisplayRow {
        DisplayRow {
            index: self.index,
            price: self.price.round_dp(PRICE_DP),
            lot: self.lot.round_dp(LOT_DP),
            cumulative_lot: self.cumulative_lot.round_dp(LOT_DP),
            break_even: self.break_even.round_dp(PRICE_DP),
            floating_pnl: self.floating_pnl.round_dp(PRICE_DP),
            exit_distance: self.exit_distance.round_dp(PRICE_DP),
            gain_to_target: self.gain_to_target.round_dp(PRICE_DP),
            reversal_gain: self.reversal_gain.round_dp(PRICE_DP),
        }
    }
}
