//! # crr-math
//!
//! Mathematical utilities for crr-rs: the square [`Grid`] that stores a
//! binomial lattice (a newtype over nalgebra) and the standard normal
//! distribution (via statrs).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Probability distributions.
pub mod distributions;

/// Square lattice storage.
pub mod grid;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use distributions::normal_cdf;
pub use grid::Grid;
