//! Option payoffs.
//!
//! A payoff maps the underlying price at exercise (or expiry) to the cash
//! amount received. The lattice uses the same payoff both for the terminal
//! boundary and for the early-exercise test at interior nodes.

use crr_core::Real;
use std::fmt;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// A call option (right to buy).
    #[default]
    Call,
    /// A put option (right to sell).
    Put,
}

impl OptionType {
    /// +1 for Call, −1 for Put.
    pub fn sign(self) -> Real {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// Intrinsic value of an option as a function of the underlying price.
pub trait Payoff: fmt::Debug + Send + Sync {
    /// Compute the payoff given the underlying price at exercise/expiry.
    fn value(&self, price: Real) -> Real;

    /// The strike price.
    fn strike(&self) -> Real;

    /// The option type (call / put).
    fn option_type(&self) -> OptionType;
}

/// Standard "plain vanilla" option payoff.
///
/// `payoff = max(φ(S − K), 0)` where `φ = +1` for Call, `−1` for Put.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlainVanillaPayoff {
    /// Option type.
    pub option_type: OptionType,
    /// Strike price.
    pub strike: Real,
}

impl PlainVanillaPayoff {
    /// Create a new plain vanilla payoff.
    pub fn new(option_type: OptionType, strike: Real) -> Self {
        Self {
            option_type,
            strike,
        }
    }
}

impl Payoff for PlainVanillaPayoff {
    #[inline]
    fn value(&self, price: Real) -> Real {
        match self.option_type {
            OptionType::Call => (price - self.strike).max(0.0),
            OptionType::Put => (self.strike - price).max(0.0),
        }
    }

    fn strike(&self) -> Real {
        self.strike
    }

    fn option_type(&self) -> OptionType {
        self.option_type
    }
}

impl fmt::Display for PlainVanillaPayoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vanilla {} @ {}", self.option_type, self.strike)
    }
}
