//! # crr
//!
//! Cox-Ross-Rubinstein binomial lattice pricing for European and American
//! vanilla options on a single underlying.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `crr-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! crr = "0.1"
//! ```
//!
//! ```rust
//! use crr::methods::{price_option, CrrInputs};
//!
//! // American call, no dividends: S=50, K=30, σ=30%, r=5%, T=1y, 200 steps.
//! let result = price_option(&CrrInputs::new(50.0, 30.0, 0.3, 0.05, 1.0, 200)).unwrap();
//! assert!((result.price - 21.596).abs() < 1e-3);
//!
//! let (price, prices, values) = result.into_parts();
//! assert_eq!(prices.dim(), 201);
//! assert_eq!(price, values[(0, 0)]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use crr_core as core;

/// Lattice grid storage and distributions.
pub use crr_math as math;

/// Vanilla options, payoffs, and exercise styles.
pub use crr_instruments as instruments;

/// The binomial lattice pricer.
pub use crr_methods as methods;

/// Pricing engines.
pub use crr_pricingengines as pricingengines;

pub use crr_core::{Error, Result};
pub use crr_methods::{price_option, ArbitragePolicy, CrrInputs, LatticeResult};
