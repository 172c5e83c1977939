//! Analytic European option engine (Black-Scholes-Merton).
//!
//! The closed form is the limit the CRR lattice converges to for European
//! exercise, so it doubles as the reference in convergence checks.

use crate::market::FlatMarket;
use crr_core::{ensure, errors::Result, Rate, Real, Time, Volatility};
use crr_instruments::{ExerciseType, OptionType, PricingEngine, PricingResults, VanillaOption};
use crr_math::normal_cdf;

use std::sync::Arc;

/// Analytic pricing engine for European vanilla options.
///
/// $$C = S e^{-qT} N(d_1) - K e^{-rT} N(d_2)$$
/// $$P = K e^{-rT} N(-d_2) - S e^{-qT} N(-d_1)$$
///
/// where $d_{1,2} = \frac{\ln(S/K) + (r - q \pm \sigma^2/2)T}{\sigma\sqrt{T}}$
#[derive(Debug)]
pub struct AnalyticEuropeanEngine {
    market: Arc<FlatMarket>,
}

impl AnalyticEuropeanEngine {
    /// Create a new engine over the given market data.
    pub fn new(market: Arc<FlatMarket>) -> Self {
        Self { market }
    }
}

/// Black-Scholes-Merton price of a European option.
pub fn black_scholes_merton(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    risk_free_rate: Rate,
    dividend_yield: Rate,
    volatility: Volatility,
    time_to_expiry: Time,
) -> Real {
    let phi = option_type.sign();
    let t = time_to_expiry;

    if t <= 0.0 {
        return (phi * (spot - strike)).max(0.0);
    }

    let r = risk_free_rate;
    let q = dividend_yield;
    let std_dev = volatility * t.sqrt();
    let df_r = (-r * t).exp();
    let df_q = (-q * t).exp();

    if std_dev <= 1e-15 {
        return (phi * (spot * df_q - strike * df_r)).max(0.0);
    }

    let d1 = ((spot / strike).ln() + (r - q + 0.5 * volatility * volatility) * t) / std_dev;
    let d2 = d1 - std_dev;

    phi * (spot * df_q * normal_cdf(phi * d1) - strike * df_r * normal_cdf(phi * d2))
}

impl PricingEngine<VanillaOption> for AnalyticEuropeanEngine {
    fn calculate(&self, option: &VanillaOption) -> Result<PricingResults> {
        ensure!(
            option.exercise() == ExerciseType::European,
            "analytic engine prices European exercise only, got {}",
            option.exercise()
        );
        let m = &*self.market;
        let npv = black_scholes_merton(
            option.option_type(),
            m.spot,
            option.strike(),
            m.risk_free_rate,
            m.dividend_yield,
            m.volatility,
            option.maturity(),
        );
        Ok(PricingResults::from_npv(npv))
    }
}
