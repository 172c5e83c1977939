//! # crr-pricingengines
//!
//! Pricing engines for vanilla options under flat market data.
//!
//! ## Engines
//!
//! - [`BinomialVanillaEngine`] — Cox-Ross-Rubinstein lattice, European or American
//! - [`AnalyticEuropeanEngine`] — Black-Scholes-Merton closed form for European options

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analytic_european_engine;
pub mod binomial_engine;
pub mod market;

pub use analytic_european_engine::{black_scholes_merton, AnalyticEuropeanEngine};
pub use binomial_engine::BinomialVanillaEngine;
pub use market::FlatMarket;
