//! One-dimensional minimization of unimodal objectives.
//!
//! Each strategy brackets the minimizer of a [`ScalarObjective`] on its
//! declared bounds and returns a [`Solution`] within the strategy's
//! precision. All of them assume the objective is unimodal there; none of
//! them verify it.
//!
//! # Strategies
//!
//! - [`Dichotomy`]: twin probes straddling the interval midpoint
//! - [`GoldenSection`]: golden-ratio shrinking, one evaluation per iteration
//! - [`Fibonacci`]: a fixed evaluation schedule from Fibonacci ratios
//! - [`Parabolic`]: successive parabolic interpolation over a bracketing
//!   triple
//! - [`Brent`]: parabolic steps guarded by golden-section fallbacks
//!
//! Every strategy offers a plain and a traced entry point. The traced one
//! clears the given [`ReplayLog`] and records the full convergence path,
//! visiting exactly the same iterates as the plain one.

mod brent;
mod dichotomy;
mod evaluate;
mod fibonacci;
mod golden;
mod parabola;
mod parabolic;
mod solution;


pub use brent::Brent;
pub use dichotomy::Dichotomy;
pub use fibonacci::Fibonacci;
pub use golden::GoldenSection;
pub use parabolic::Parabolic;
pub use solution::Solution;

use quadmin_core::{ReplayLog, ScalarObjective};

/// A one-dimensional minimization strategy for unimodal objectives.
///
/// The trait is object-safe so strategies can be boxed, stored, and swapped
/// at runtime. Implementations are stateless between calls; two calls with
/// the same objective return bit-identical solutions.
pub trait LineSearch {
    /// Returns the strategy's display name.
    fn name(&self) -> &'static str;

    /// Minimizes the objective over its declared bounds.
    fn find_min(&self, objective: &dyn ScalarObjective) -> Solution;

    /// Minimizes the objective, recording the convergence path into `replay`.
    ///
    /// The log is cleared on entry and afterwards holds the complete
    /// narrative of this call, with snapshots tagged by iteration version.
    fn find_min_traced(
        &self,
        objective: &dyn ScalarObjective,
        replay: &mut ReplayLog,
    ) -> Solution;
}
