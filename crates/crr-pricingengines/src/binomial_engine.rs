//! Binomial (Cox-Ross-Rubinstein) engine for vanilla options.
//!
//! Wraps [`crr_methods::price_option`] behind the [`PricingEngine`] trait so a
//! [`VanillaOption`] can be valued on a lattice with the same call as any
//! other engine.

use crate::market::FlatMarket;
use crr_core::{errors::Result, Size};
use crr_instruments::{PricingEngine, PricingResults, VanillaOption};
use crr_methods::{price_option, ArbitragePolicy, CrrInputs, LatticeWarning};
use tracing::debug;

use std::sync::Arc;

/// Lattice pricing engine for European and American vanilla options.
///
/// Besides the NPV, the results carry the lattice scalars as additional
/// results: `"dt"`, `"u"`, `"d"`, `"p"`. When the run raised an arbitrage
/// advisory, the offending probability is reported as
/// `"arbitrage_violation"`.
#[derive(Debug)]
pub struct BinomialVanillaEngine {
    market: Arc<FlatMarket>,
    steps: Size,
    arbitrage_policy: ArbitragePolicy,
}

impl BinomialVanillaEngine {
    /// Create an engine building `steps`-step lattices over `market`.
    pub fn new(market: Arc<FlatMarket>, steps: Size) -> Self {
        Self {
            market,
            steps,
            arbitrage_policy: ArbitragePolicy::default(),
        }
    }

    /// Set how arbitrage-implying inputs are handled.
    pub fn with_arbitrage_policy(mut self, policy: ArbitragePolicy) -> Self {
        self.arbitrage_policy = policy;
        self
    }

    /// Number of lattice steps.
    pub fn steps(&self) -> Size {
        self.steps
    }

    fn inputs(&self, option: &VanillaOption) -> CrrInputs {
        let m = &*self.market;
        CrrInputs::new(
            m.spot,
            option.strike(),
            m.volatility,
            m.risk_free_rate,
            option.maturity(),
            self.steps,
        )
        .with_dividend_yield(m.dividend_yield)
        .with_option_type(option.option_type())
        .with_exercise(option.exercise())
        .with_arbitrage_policy(self.arbitrage_policy)
    }
}

impl PricingEngine<VanillaOption> for BinomialVanillaEngine {
    fn calculate(&self, option: &VanillaOption) -> Result<PricingResults> {
        let result = price_option(&self.inputs(option))?;
        debug!(
            npv = result.price,
            steps = self.steps,
            "binomial engine priced option"
        );
        let params = result.parameters;
        let mut results = PricingResults::from_npv(result.price)
            .with_result("dt", params.dt)
            .with_result("u", params.up)
            .with_result("d", params.down)
            .with_result("p", params.probability);
        for warning in &result.warnings {
            match *warning {
                LatticeWarning::ArbitrageViolation { probability } => {
                    results = results.with_result("arbitrage_violation", probability);
                }
            }
        }
        Ok(results)
    }
}
