//! Error types for crr-rs.
//!
//! A single `thiserror`-derived enum covers every failure the lattice pricer
//! can report. Argument checks go through the [`ensure!`](crate::ensure)
//! convenience macro defined here.

use thiserror::Error;

/// The top-level error type used throughout crr-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A market or contract parameter is outside its admissible range.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// What the parameter must satisfy.
        reason: &'static str,
    },

    /// The up and down factors coincide, so the risk-neutral probability is
    /// undefined.
    #[error("degenerate lattice: up factor {up} equals down factor {down}")]
    DegenerateLattice {
        /// Per-step up factor.
        up: f64,
        /// Per-step down factor.
        down: f64,
    },

    /// The risk-neutral up probability lies outside `[0, 1]`.
    #[error("risk-neutral probability {probability} outside [0, 1]: inputs imply arbitrage")]
    ArbitrageViolation {
        /// The computed up probability.
        probability: f64,
    },
}

/// Shorthand `Result` type used throughout crr-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use crr_core::{ensure, errors::Error};
/// fn positive(x: f64) -> crr_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
