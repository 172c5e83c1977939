//! # crr-instruments
//!
//! Single-asset vanilla options: payoffs, exercise styles, and the
//! pricing-engine interface they are valued through.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod exercise;
pub mod instrument;
pub mod option;
pub mod payoff;

pub use exercise::ExerciseType;
pub use instrument::{PricingEngine, PricingResults};
pub use option::VanillaOption;
pub use payoff::{OptionType, Payoff, PlainVanillaPayoff};
