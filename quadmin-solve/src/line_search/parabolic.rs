use quadmin_core::{ReplayLog, ScalarObjective};

use super::{LineSearch, Solution, evaluate::Evaluator, parabola::Parabola};
use crate::trace::Trace;

const MAX_ITERS: usize = 100;

/// Successive parabolic interpolation with candidate tolerance `ε`.
///
/// # Algorithm
///
/// A bracketing triple `x1 < x2 < x3` starts at the interval endpoints with
/// the center seeded `ε` inside the better endpoint. Each iteration fits a
/// parabola through the triple, takes its vertex as the next candidate, and
/// rebuilds the triple around the candidate by dropping the point on the
/// side it does not improve. The search stops once two successive
/// candidates agree to within `ε`, or after 100 fits, whichever comes
/// first; the last candidate is the answer either way.
///
/// Convergence needs a smooth objective with nonzero curvature near the
/// minimizer. A triple that turns collinear makes the vertex non-finite,
/// and the iteration cap is what stops the search from that point on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parabolic {
    eps: f64,
}

impl Parabolic {
    /// Creates the strategy from a candidate tolerance.
    #[must_use]
    pub fn new(eps: f64) -> Self {
        Self { eps }
    }

    fn search(&self, objective: &dyn ScalarObjective, trace: &mut Trace) -> Solution {
        let mut f = Evaluator::new(objective);
        let bounds = objective.bounds();

        let mut x1 = bounds.from;
        let mut x3 = bounds.to;
        let mut f1 = f.eval(x1);
        let mut f3 = f.eval(x3);
        let mut x2 = if f1 < f3 { x1 + self.eps } else { x3 - self.eps };
        let mut f2 = f.eval(x2);

        let mut prev = f64::NAN;
        let mut first = true;
        let mut version = MAX_ITERS;

        for iter in 0..MAX_ITERS {
            trace.label(iter, "current triple");
            trace.point(iter, x1, f1);
            trace.point(iter, x2, f2);
            trace.point(iter, x3, f3);

            let parabola = Parabola::through((x1, f1), (x2, f2), (x3, f3));
            let candidate = parabola.vertex;
            let f_candidate = f.eval(candidate);

            trace.label(iter, "fitted parabola and candidate");
            trace.parabola(iter, parabola.a, parabola.b, parabola.c);
            trace.point(iter, candidate, f_candidate);

            let converged = !first && (candidate - prev).abs() <= self.eps;
            prev = candidate;
            first = false;
            if converged {
                version = iter + 1;
                break;
            }

            if candidate < x2 {
                if f_candidate >= f2 {
                    x1 = candidate;
                    f1 = f_candidate;
                } else {
                    x3 = x2;
                    f3 = f2;
                    x2 = candidate;
                    f2 = f_candidate;
                }
            } else if f2 >= f_candidate {
                x1 = x2;
                f1 = f2;
                x2 = candidate;
                f2 = f_candidate;
            } else {
                x3 = candidate;
                f3 = f_candidate;
            }
        }

        let value = f.eval(prev);
        trace.label(version, "answer");
        trace.point(version, prev, value);
        Solution {
            x: prev,
            value,
            evals: f.count(),
        }
    }
}

impl LineSearch for Parabolic {
    fn name(&self) -> &'static str {
        "Parabolic interpolation"
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
