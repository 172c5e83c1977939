//! Market and contract inputs for one lattice pricing run.

use crr_core::{errors::Error, Rate, Real, Result, Size, Time, Volatility};
use crr_instruments::{ExerciseType, OptionType};

/// What to do when the risk-neutral up probability falls outside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ArbitragePolicy {
    /// Log a warning, record it on the result, and price anyway.
    #[default]
    Warn,
    /// Fail with [`Error::ArbitrageViolation`].
    Reject,
    /// Price without comment.
    Ignore,
}

/// Inputs of a Cox-Ross-Rubinstein pricing run.
///
/// [`CrrInputs::new`] fills in the conventional defaults: no dividend
/// yield, a call, American exercise, and [`ArbitragePolicy::Warn`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrrInputs {
    /// Spot price of the underlying.
    pub spot: Real,
    /// Strike price.
    pub strike: Real,
    /// Annualised volatility.
    pub volatility: Volatility,
    /// Continuously-compounded risk-free rate.
    pub risk_free_rate: Rate,
    /// Continuously-compounded dividend yield.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dividend_yield: Rate,
    /// Time to expiry in years.
    pub maturity: Time,
    /// Number of time steps in the lattice.
    pub steps: Size,
    /// Call or put.
    #[cfg_attr(feature = "serde", serde(default))]
    pub option_type: OptionType,
    /// European or American exercise.
    #[cfg_attr(feature = "serde", serde(default))]
    pub exercise: ExerciseType,
    /// Handling of arbitrage-implying inputs.
    #[cfg_attr(feature = "serde", serde(default))]
    pub arbitrage_policy: ArbitragePolicy,
}

impl CrrInputs {
    /// Create inputs for an American call with zero dividend yield.
    pub fn new(
        spot: Real,
        strike: Real,
        volatility: Volatility,
        risk_free_rate: Rate,
        maturity: Time,
        steps: Size,
    ) -> Self {
        Self {
            spot,
            strike,
            volatility,
            risk_free_rate,
            dividend_yield: 0.0,
            maturity,
            steps,
            option_type: OptionType::Call,
            exercise: ExerciseType::American,
            arbitrage_policy: ArbitragePolicy::Warn,
        }
    }

    /// Set the continuously-compounded dividend yield.
    pub fn with_dividend_yield(mut self, dividend_yield: Rate) -> Self {
        self.dividend_yield = dividend_yield;
        self
    }

    /// Set the option type.
    pub fn with_option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
        self
    }

    /// Set the exercise style.
    pub fn with_exercise(mut self, exercise: ExerciseType) -> Self {
        self.exercise = exercise;
        self
    }

    /// Set the arbitrage policy.
    pub fn with_arbitrage_policy(mut self, policy: ArbitragePolicy) -> Self {
        self.arbitrage_policy = policy;
        self
    }

    /// Check every input against its admissible range.
    ///
    /// Comparisons are written so that `NaN` fails them.
    pub fn validate(&self) -> Result<()> {
        if self.steps < 1 {
            return Err(invalid("steps", self.steps as Real, "must be >= 1"));
        }
        if !(self.spot > 0.0 && self.spot.is_finite()) {
            return Err(invalid("spot", self.spot, POSITIVE_FINITE));
        }
        if !(self.strike > 0.0 && self.strike.is_finite()) {
            return Err(invalid("strike", self.strike, POSITIVE_FINITE));
        }
        if !(self.volatility >= 0.0 && self.volatility.is_finite()) {
            return Err(invalid(
                "volatility",
                self.volatility,
                "must be non-negative and finite",
            ));
        }
        if !(self.maturity > 0.0 && self.maturity.is_finite()) {
            return Err(invalid("maturity", self.maturity, POSITIVE_FINITE));
        }
        if !self.risk_free_rate.is_finite() {
            return Err(invalid("risk_free_rate", self.risk_free_rate, FINITE));
        }
        if !self.dividend_yield.is_finite() {
            return Err(invalid("dividend_yield", self.dividend_yield, FINITE));
        }
        Ok(())
    }
}

const POSITIVE_FINITE: &str = "must be positive and finite";
const FINITE: &str = "must be finite";

fn invalid(name: &'static str, value: Real, reason: &'static str) -> Error {
    Error::InvalidParameter {
        name,
        value,
        reason,
    }
}
