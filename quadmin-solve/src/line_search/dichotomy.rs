use quadmin_core::{Bounds, ReplayLog, ScalarObjective};

use super::{LineSearch, Solution, evaluate::Evaluator};
use crate::trace::Trace;

/// Dichotomous search with probe offset `σ` and target precision `ε`.
///
/// Each iteration evaluates twin probes at `midpoint ± σ` and keeps the
/// half whose probe is no worse, the left half on a tie. The caller must
/// keep `0 < σ < (to - from) / 2`; a larger offset puts probes outside the
/// bounds and nothing here guards against that. The interval length floors
/// at `2σ`, so offsets at or above `ε / 2` leave the precision test
/// unreachable and the search stops on its stall guard instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dichotomy {
    sigma: f64,
    eps: f64,
}

impl Dichotomy {
    /// Creates the strategy from a probe offset and a target precision.
    #[must_use]
    pub fn new(sigma: f64, eps: f64) -> Self {
        Self { sigma, eps }
    }

    fn search(&self, objective: &dyn ScalarObjective, trace: &mut Trace) -> Solution {
        let mut f = Evaluator::new(objective);
        let mut bounds = objective.bounds();
        let mut version = 0;

        while bounds.length() > self.eps {
            let mid = bounds.midpoint();
            let left = mid - self.sigma;
            let right = mid + self.sigma;
            let f_left = f.eval(left);
            let f_right = f.eval(right);

            trace.interval(version, bounds.from, bounds.to);
            trace.point(version, left, f_left);
            trace.point(version, right, f_right);

            let next = if f_left <= f_right {
                trace.label(version, "went left");
                Bounds::new(bounds.from, right)
            } else {
                trace.label(version, "went right");
                Bounds::new(left, bounds.to)
            };

            let stalled = next.length() >= bounds.length();
            bounds = next;
            version += 1;
            if stalled {
                break;
            }
        }

        let x = bounds.midpoint();
        let value = f.eval(x);
        trace.point(version, x, value);
        Solution {
            x,
            value,
            evals: f.count(),
        }
    }
}

impl LineSearch for Dichotomy {
    fn name(&self) -> &'static str {
        "Dichotomy"
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
