//! Per-step lattice parameters of the Cox-Ross-Rubinstein model.
//!
//! ```text
//! dt = T / steps
//! u  = exp( σ √dt)
//! d  = exp(−σ √dt)
//! p  = (exp((r − q) dt) − d) / (u − d)
//! ```

use super::inputs::CrrInputs;
use crr_core::{errors::Error, DiscountFactor, Probability, Real, Result, Time};

/// Scalars derived once per pricing run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrrParameters {
    /// Time increment per step.
    pub dt: Time,
    /// Multiplicative up factor per step.
    pub up: Real,
    /// Multiplicative down factor per step.
    pub down: Real,
    /// Risk-neutral probability of an up-move.
    pub probability: Probability,
    /// One-step discount factor `exp(−r dt)`.
    pub discount: DiscountFactor,
}

impl CrrParameters {
    /// Derive the lattice scalars from validated inputs.
    ///
    /// Returns [`Error::DegenerateLattice`] when `u == d`, which happens for
    /// zero volatility or when `σ √dt` underflows.
    pub fn derive(inputs: &CrrInputs) -> Result<Self> {
        let dt = inputs.maturity / inputs.steps as Real;
        let jump = dt.sqrt() * inputs.volatility;
        let up = jump.exp();
        let down = (-jump).exp();
        if up == down {
            return Err(Error::DegenerateLattice { up, down });
        }
        let growth = ((inputs.risk_free_rate - inputs.dividend_yield) * dt).exp();
        let probability = (growth - down) / (up - down);
        let discount = (-inputs.risk_free_rate * dt).exp();
        Ok(Self {
            dt,
            up,
            down,
            probability,
            discount,
        })
    }

    /// Whether `p` is a genuine probability, i.e. `d ≤ exp((r−q)dt) ≤ u`.
    pub fn is_arbitrage_free(&self) -> bool {
        (0.0..=1.0).contains(&self.probability)
    }
}
