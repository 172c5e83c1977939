//! # crr-methods
//!
//! Numerical methods for crr-rs: the Cox-Ross-Rubinstein binomial lattice.
//!
//! # Modules
//!
//! * [`lattice`] — parameter derivation, forward construction of the
//!   underlying-price lattice, terminal payoff, and backward induction

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Lattice methods: CRR parameters, price lattice, backward induction.
pub mod lattice;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use lattice::{
    build_price_lattice, price_option, ArbitragePolicy, CrrInputs, CrrParameters, LatticeResult,
    LatticeWarning,
};
