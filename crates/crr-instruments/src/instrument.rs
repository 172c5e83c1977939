//! Pricing results and the pricing-engine trait.
//!
//! Instruments carry only contract terms; a [`PricingEngine`] holds the
//! market data and numerical settings and turns an instrument into
//! [`PricingResults`].

use crr_core::{errors::Result, Real};
use std::collections::HashMap;

/// Results of pricing an instrument.
///
/// Contains the NPV and optionally additional named results
/// (e.g. the lattice scalars `"u"`, `"d"`, `"p"`).
#[derive(Debug, Clone, Default)]
pub struct PricingResults {
    /// Net present value.
    pub npv: Real,
    /// Additional named results.
    pub additional_results: HashMap<String, Real>,
}

impl PricingResults {
    /// Create pricing results with just an NPV.
    pub fn from_npv(npv: Real) -> Self {
        Self {
            npv,
            additional_results: HashMap::new(),
        }
    }

    /// Add a named result.
    pub fn with_result(mut self, key: impl Into<String>, value: Real) -> Self {
        self.additional_results.insert(key.into(), value);
        self
    }

    /// Look up a named result.
    pub fn result(&self, key: &str) -> Option<Real> {
        self.additional_results.get(key).copied()
    }
}

/// Base trait for all pricing engines.
///
/// A pricing engine computes `PricingResults` for a specific instrument type.
pub trait PricingEngine<I>: std::fmt::Debug + Send + Sync {
    /// Price the instrument `instrument`.
    fn calculate(&self, instrument: &I) -> Result<PricingResults>;
}
