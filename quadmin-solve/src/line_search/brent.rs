use quadmin_core::{Bounds, ReplayLog, ScalarObjective};

use super::{LineSearch, Solution, evaluate::Evaluator, parabola::Parabola};
use crate::trace::Trace;

/// The complement of the golden section coefficient, `(3 - √5) / 2`.
const TAU: f64 = 0.381_966_011_250_105_15;

const MAX_ITERS: usize = 100;

/// Brent's method with target precision `ε`.
///
/// # Algorithm
///
/// The search tracks the best point `x`, the runner-up `w`, and the
/// previous runner-up `v` inside a shrinking bracket. When the three
/// points and their values are pairwise distinct beyond `ε`, a parabola
/// through them proposes the next trial; the proposal is accepted only if
/// it falls safely inside the bracket and moves `x` by less than half the
/// step taken two iterations ago. Otherwise the trial is a golden-section
/// step into the longer side. Trials near the bracket edge are nudged a
/// tolerance away from the midpoint so the bracket keeps shrinking.
///
/// Termination combines a relative tolerance in `x` with the bracket
/// length, so the search stops once `x` is pinned near the bracket's
/// midpoint, or after 100 iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brent {
    eps: f64,
}

impl Brent {
    /// Creates the strategy from a target precision.
    #[must_use]
    pub fn new(eps: f64) -> Self {
        Self { eps }
    }

    fn search(&self, objective: &dyn ScalarObjective, trace: &mut Trace) -> Solution {
        let mut f = Evaluator::new(objective);
        let mut bounds = objective.bounds();
        let eps = self.eps;

        let mut x = bounds.from + TAU * bounds.length();
        let mut w = x;
        let mut v = x;
        let mut f_x = f.eval(x);
        let mut f_w = f_x;
        let mut f_v = f_x;

        let mut step = bounds.length();
        let mut prev_step = step;
        let mut version = MAX_ITERS;

        for iter in 0..MAX_ITERS {
            let prev_prev_step = prev_step;
            prev_step = step;

            let mid = bounds.midpoint();
            let tolerance = eps * x.abs() + eps / 10.0;
            if (x - mid).abs() + bounds.length() / 2.0 - 2.0 * tolerance <= eps {
                version = iter;
                break;
            }

            trace.label(iter, "bracket and points x, w, v");
            trace.interval(iter, bounds.from, bounds.to);
            trace.point(iter, x, f_x);
            trace.point(iter, w, f_w);
            trace.point(iter, v, f_v);

            let mut proposal = None;
            if pairwise_distinct(x, w, v, eps) && pairwise_distinct(f_x, f_w, f_v, eps) {
                let parabola = Parabola::through((x, f_x), (w, f_w), (v, f_v));
                let candidate = parabola.vertex;

                trace.label(iter, "fitted parabola and vertex");
                trace.parabola(iter, parabola.a, parabola.b, parabola.c);
                trace.point(iter, candidate, parabola.value_at(candidate));

                let inside = bounds.from + eps <= candidate && candidate <= bounds.to - eps;
                if inside && (candidate - x).abs() < prev_prev_step / 2.0 {
                    trace.label(iter, "accepted parabola step");
                    let near_edge = candidate - bounds.from < 2.0 * tolerance
                        || bounds.to - candidate < 2.0 * tolerance;
                    proposal = if near_edge {
                        // Nudge away from the midpoint.
                        Some(if x >= mid { x + tolerance } else { x - tolerance })
                    } else {
                        Some(candidate)
                    };
                } else {
                    trace.label(iter, "rejected parabola step");
                }
            }

            let u = match proposal {
                Some(u) => u,
                None => {
                    trace.label(iter, "golden step");
                    if x < mid {
                        prev_step = bounds.to - x;
                        x + TAU * prev_step
                    } else {
                        prev_step = x - bounds.from;
                        x - TAU * prev_step
                    }
                }
            };

            step = (u - x).abs();
            let f_u = f.eval(u);
            trace.label(iter, "trial point");
            trace.point(iter, u, f_u);

            if f_u <= f_x {
                if u >= x {
                    trace.label(iter, "kept [x, b]");
                    bounds = Bounds::new(x, bounds.to);
                } else {
                    trace.label(iter, "kept [a, x]");
                    bounds = Bounds::new(bounds.from, x);
                }
                v = w;
                f_v = f_w;
                w = x;
                f_w = f_x;
                x = u;
                f_x = f_u;
            } else {
                if u >= x {
                    trace.label(iter, "kept [a, u]");
                    bounds = Bounds::new(bounds.from, u);
                } else {
                    trace.label(iter, "kept [u, b]");
                    bounds = Bounds::new(u, bounds.to);
                }
                if f_u <= f_w || w == x {
                    v = w;
                    f_v = f_w;
                    w = u;
                    f_w = f_u;
                } else if f_u <= f_v || v == x || v == w {
                    v = u;
                    f_v = f_u;
                }
            }
        }

        let value = f.eval(x);
        trace.label(version, "answer");
        trace.point(version, x, value);
        Solution {
            x,
            value,
            evals: f.count(),
        }
    }
}

/// Whether `a`, `b`, and `c` are pairwise farther apart than `eps`.
fn pairwise_distinct(a: f64, b: f64, c: f64, eps: f64) -> bool {
    (a - b).abs() > eps && (a - c).abs() > eps && (b - c).abs() > eps
}

impl LineSearch for Brent {
    fn name(&self) -> &'static str {
        "Brent"
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
