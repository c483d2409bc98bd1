use quadmin_core::{Bounds, ReplayLog, ScalarObjective};

use super::{LineSearch, Solution, evaluate::Evaluator};
use crate::trace::Trace;

/// The golden section coefficient, `(√5 - 1) / 2`.
const TAU: f64 = 0.618_033_988_749_894_85;

/// Golden-section search with target precision `ε`.
///
/// # Algorithm
///
/// The interior probes sit at `to - τ·length` and `from + τ·length` with
/// `τ = (√5 - 1) / 2`. After each shrink one old probe lands exactly on a
/// new probe position, so every iteration beyond the first costs a single
/// evaluation. The bracket shrinks by `τ` per iteration until its length
/// reaches `ε`; on a tie between probes the left segment survives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoldenSection {
    eps: f64,
}

impl GoldenSection {
    /// Creates the strategy from a target precision.
    #[must_use]
    pub fn new(eps: f64) -> Self {
        Self { eps }
    }

    fn search(&self, objective: &dyn ScalarObjective, trace: &mut Trace) -> Solution {
        let mut f = Evaluator::new(objective);
        let mut bounds = objective.bounds();

        let mut x_left = bounds.to - TAU * bounds.length();
        let mut x_right = bounds.from + TAU * bounds.length();
        let mut f_left = f.eval(x_left);
        let mut f_right = f.eval(x_right);
        let mut version = 0;

        while bounds.length() > self.eps {
            trace.interval(version, bounds.from, bounds.to);
            trace.point(version, x_left, f_left);
            trace.point(version, x_right, f_right);

            let prev_length = bounds.length();
            if f_left > f_right {
                trace.label(version, "kept [x1, b]");
                bounds = Bounds::new(x_left, bounds.to);
                x_left = x_right;
                f_left = f_right;
                x_right = bounds.from + TAU * bounds.length();
                f_right = f.eval(x_right);
            } else {
                trace.label(version, "kept [a, x2]");
                bounds = Bounds::new(bounds.from, x_right);
                x_right = x_left;
                f_right = f_left;
                x_left = bounds.to - TAU * bounds.length();
                f_left = f.eval(x_left);
            }

            version += 1;
            if bounds.length() >= prev_length {
                break;
            }
        }

        let x = bounds.midpoint();
        let value = f.eval(x);
        trace.interval(version, bounds.from, bounds.to);
        trace.point(version, x, value);
        Solution {
            x,
            value,
            evals: f.count(),
        }
    }
}

impl LineSearch for GoldenSection {
    fn name(&self) -> &'static str {
        "Golden section"
    }

    fn find_min(&self, objective: &dyn ScalarObjective) -> Solution {
        self.search(objective, &mut Trace::disabled())
    }

    fn find_min_traced(
        &self,
        objective: &dyn ScalarObjective,
        replay: &mut ReplayLog,
    ) -> Solution {
        self.search(objective, &mut Trace::recording(replay))
    }
}
