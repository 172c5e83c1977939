//! Flat market data shared by the engines.

use crr_core::{Rate, Real, Volatility};

/// Spot, flat continuously-compounded rates, and a flat volatility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatMarket {
    /// Spot price of the underlying.
    pub spot: Real,
    /// Risk-free rate.
    pub risk_free_rate: Rate,
    /// Dividend yield.
    pub dividend_yield: Rate,
    /// Black volatility.
    pub volatility: Volatility,
}

impl FlatMarket {
    /// Create flat market data.
    pub fn new(
        spot: Real,
        risk_free_rate: Rate,
        dividend_yield: Rate,
        volatility: Volatility,
    ) -> Self {
        Self {
            spot,
            risk_free_rate,
            dividend_yield,
            volatility,
        }
    }
}
