//! Vanilla option instrument.

use crate::exercise::ExerciseType;
use crate::instrument::{PricingEngine, PricingResults};
use crate::payoff::{OptionType, Payoff, PlainVanillaPayoff};
use crr_core::{errors::Result, Real, Time};

/// A plain vanilla option on a single underlying asset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VanillaOption {
    payoff: PlainVanillaPayoff,
    exercise: ExerciseType,
    maturity: Time,
}

impl VanillaOption {
    /// Create a new vanilla option expiring in `maturity` years.
    pub fn new(payoff: PlainVanillaPayoff, exercise: ExerciseType, maturity: Time) -> Self {
        Self {
            payoff,
            exercise,
            maturity,
        }
    }

    /// Convenience: create a European call/put.
    pub fn european(option_type: OptionType, strike: Real, maturity: Time) -> Self {
        Self::new(
            PlainVanillaPayoff::new(option_type, strike),
            ExerciseType::European,
            maturity,
        )
    }

    /// Convenience: create an American call/put.
    pub fn american(option_type: OptionType, strike: Real, maturity: Time) -> Self {
        Self::new(
            PlainVanillaPayoff::new(option_type, strike),
            ExerciseType::American,
            maturity,
        )
    }

    /// The strike price.
    pub fn strike(&self) -> Real {
        self.payoff.strike()
    }

    /// The option type (call/put).
    pub fn option_type(&self) -> OptionType {
        self.payoff.option_type()
    }

    /// The payoff.
    pub fn payoff(&self) -> &PlainVanillaPayoff {
        &self.payoff
    }

    /// The exercise style.
    pub fn exercise(&self) -> ExerciseType {
        self.exercise
    }

    /// Time to expiry in years.
    pub fn maturity(&self) -> Time {
        self.maturity
    }

    /// Price this option using the given engine.
    pub fn price(&self, engine: &dyn PricingEngine<VanillaOption>) -> Result<PricingResults> {
        engine.calculate(self)
    }
}
