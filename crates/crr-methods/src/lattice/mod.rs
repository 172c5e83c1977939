//! Cox-Ross-Rubinstein lattice pricing.
//!
//! # Overview
//!
//! [`price_option`] runs the four stages of the algorithm in order:
//!
//! 1. [`CrrParameters::derive`] — `dt`, `u`, `d`, `p` from the inputs
//! 2. [`build_price_lattice`] — forward construction of underlying prices
//! 3. [`induction::terminal_values`] — intrinsic payoff at expiry
//! 4. [`induction::roll_back`] — discounted expectation, column by column,
//!    with an early-exercise floor for American options
//!
//! Both lattices are allocated per call and handed back to the caller, so
//! repeated calls never share state.
//!
//! # Example
//!
//! ```
//! use crr_methods::lattice::{price_option, CrrInputs};
//!
//! let result = price_option(&CrrInputs::new(50.0, 30.0, 0.3, 0.05, 1.0, 200)).unwrap();
//! assert!(result.price > 20.0);
//! assert_eq!(result.price, result.value_lattice[(0, 0)]);
//! ```

pub mod binomial_tree;
pub mod induction;
pub mod inputs;
pub mod parameters;

pub use binomial_tree::build_price_lattice;
pub use inputs::{ArbitragePolicy, CrrInputs};
pub use parameters::CrrParameters;

use crr_core::{errors::Error, Price, Probability, Result};
use crr_instruments::PlainVanillaPayoff;
use crr_math::Grid;
use std::fmt;
use tracing::{debug, warn};

// ─── Result types ─────────────────────────────────────────────────────────────

/// Advisory conditions noticed while pricing that did not stop the run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LatticeWarning {
    /// The risk-neutral up probability lies outside `[0, 1]`; node values
    /// are weighted averages but not expectations.
    ArbitrageViolation {
        /// The computed up probability.
        probability: Probability,
    },
}

impl fmt::Display for LatticeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatticeWarning::ArbitrageViolation { probability } => write!(
                f,
                "risk-neutral probability {probability} outside [0, 1]: inputs imply arbitrage"
            ),
        }
    }
}

/// Output of one lattice pricing run.
#[derive(Debug, Clone)]
pub struct LatticeResult {
    /// Present fair value, equal to `value_lattice[(0, 0)]`.
    pub price: Price,
    /// Underlying prices, indexed `(down_moves, step)`.
    pub price_lattice: Grid,
    /// Option values, indexed `(down_moves, step)`.
    pub value_lattice: Grid,
    /// The derived per-step scalars.
    pub parameters: CrrParameters,
    /// Advisories raised during the run.
    pub warnings: Vec<LatticeWarning>,
}

impl LatticeResult {
    /// Split into `(price, price_lattice, value_lattice)`.
    pub fn into_parts(self) -> (Price, Grid, Grid) {
        (self.price, self.price_lattice, self.value_lattice)
    }
}

// ─── Pricing ──────────────────────────────────────────────────────────────────

/// Price a European or American vanilla option on a CRR binomial lattice.
///
/// # Errors
///
/// * [`Error::InvalidParameter`] if any input is out of range
/// * [`Error::DegenerateLattice`] if `u == d`
/// * [`Error::ArbitrageViolation`] if `p ∉ [0, 1]` and the policy is
///   [`ArbitragePolicy::Reject`]
pub fn price_option(inputs: &CrrInputs) -> Result<LatticeResult> {
    inputs.validate()?;
    let parameters = CrrParameters::derive(inputs)?;
    debug!(
        steps = inputs.steps,
        dt = parameters.dt,
        up = parameters.up,
        down = parameters.down,
        probability = parameters.probability,
        "derived CRR parameters"
    );

    let mut warnings = Vec::new();
    if !parameters.is_arbitrage_free() {
        let probability = parameters.probability;
        match inputs.arbitrage_policy {
            ArbitragePolicy::Reject => return Err(Error::ArbitrageViolation { probability }),
            ArbitragePolicy::Warn => {
                warn!(probability, "risk-neutral probability outside [0, 1]");
                warnings.push(LatticeWarning::ArbitrageViolation { probability });
            }
            ArbitragePolicy::Ignore => {}
        }
    }

    let payoff = PlainVanillaPayoff::new(inputs.option_type, inputs.strike);
    let price_lattice = build_price_lattice(inputs.spot, &parameters, inputs.steps);
    let mut value_lattice = induction::terminal_values(&price_lattice, &payoff);
    induction::roll_back(
        &price_lattice,
        &mut value_lattice,
        &parameters,
        &payoff,
        inputs.exercise,
    );

    let price = value_lattice[(0, 0)];
    debug!(
        price,
        nodes = value_lattice.node_count(),
        option_type = %inputs.option_type,
        exercise = %inputs.exercise,
        "lattice valuation complete"
    );

    Ok(LatticeResult {
        price,
        price_lattice,
        value_lattice,
        parameters,
        warnings,
    })
}

// ─── Tests ────────────────────────────────────────────────────────────────────
