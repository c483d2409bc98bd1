use quadmin_core::{Bounds, ReplayLog, ScalarObjective};

use super::{LineSearch, Solution, evaluate::Evaluator};
use crate::trace::Trace;

/// Fibonacci search with target precision `ε`.
///
/// # Algorithm
///
/// The Fibonacci sequence is grown until it reaches `length / ε`, which
/// fixes the whole evaluation schedule before the first probe: probe `k`
/// divides the current interval by the ratio of two Fibonacci numbers, and
/// the schedule ends after `n - 2` steps regardless of what the objective
/// returns along the way. Ties between probes keep the left segment.
///
/// When the interval is already within `ε` the schedule is empty and the
/// midpoint is returned directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fibonacci {
    eps: f64,
}

impl Fibonacci {
    /// Creates the strategy from a target precision.
    #[must_use]
    pub fn new(eps: f64) -> Self {
        Self { eps }
    }

    fn search(&self, objective: &dyn ScalarObjective, trace: &mut Trace) -> Solution {
        let mut f = Evaluator::new(objective);
        let bounds = objective.bounds();

        let limit = bounds.length() / self.eps;
        let mut fib = vec![1.0, 1.0];
        while fib[fib.len() - 1] < limit {
            fib.push(fib[fib.len() - 1] + fib[fib.len() - 2]);
        }
        let n = fib.len() - 1;

        trace.label(
            0,
            format!("limit {limit}, largest Fibonacci number {}", fib[n]),
        );

        if n < 2 {
            let x = bounds.midpoint();
            let value = f.eval(x);
            trace.interval(0, bounds.from, bounds.to);
            trace.point(0, x, value);
            return Solution {
                x,
                value,
                evals: f.count(),
            };
        }

        let mut current = bounds;
        let mut x_left = current.from + fib[n - 2] / fib[n] * current.length();
        let mut x_right = current.from + fib[n - 1] / fib[n] * current.length();
        let mut f_left = f.eval(x_left);
        let mut f_right = f.eval(x_right);

        for k in 1..n - 2 {
            trace.interval(k, current.from, current.to);
            trace.point(k, x_left, f_left);
            trace.point(k, x_right, f_right);

            if f_left > f_right {
                trace.label(k, "kept [x1, b]");
                current = Bounds::new(x_left, current.to);
                x_left = x_right;
                f_left = f_right;
                x_right = current.from + fib[n - k - 1] / fib[n - k] * current.length();
                f_right = f.eval(x_right);
            } else {
                trace.label(k, "kept [a, x2]");
                current = Bounds::new(current.from, x_right);
                x_right = x_left;
                f_right = f_left;
                x_left = current.from + fib[n - k - 2] / fib[n - k] * current.length();
                f_left = f.eval(x_left);
            }
        }

        let x = current.midpoint();
        let value = f.eval(x);
        trace.interval(n - 2, current.from, current.to);
        trace.point(n - 2, x, value);
        Solution {
            x,
            value,
            evals: f.count(),
        }
    }
}

impl LineSearch for Fibonacci {
    fn name(&self) -> &'static str {
        "Fibonacci"
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

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use quadmin_core::ScalarFunction;

    use super::*;

    #[test]
    fn minimizes_a_shifted_quadratic() {
        let objective = ScalarFunction::new(|x| (x - 2.0) * (x - 2.0), Bounds::new(0.0, 5.0));
        let search = Fibonacci::new(1e-6);

        let solution = search.find_min(&objective);

        assert_abs_diff_eq!(solution.x, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn wide_precision_returns_the_midpoint() {
        let objective = ScalarFunction::new(|x| x * x, Bounds::new(-1.0, 3.0));
        let search = Fibonacci::new(10.0);

        let solution = search.find_min(&objective);

        assert_eq!(solution.x, 1.0);
        assert_eq!(solution.evals, 1);
    }

    #[test]
    fn schedule_length_is_fixed_by_the_precision() {
        let bounds = Bounds::new(0.0, 5.0);
        let flat = ScalarFunction::new(|_| 0.0, bounds);
        let steep = ScalarFunction::new(|x| (x - 4.0).abs(), bounds);
        let search = Fibonacci::new(1e-4);

        // The objective never changes how many probes the schedule spends.
        assert_eq!(search.find_min(&flat).evals, search.find_min(&steep).evals);
    }

    #[test]
    fn traced_run_starts_with_the_schedule_label() {
        let objective = ScalarFunction::new(|x| (x - 1.0) * (x - 1.0), Bounds::new(0.0, 3.0));
        let search = Fibonacci::new(1e-3);

        let mut replay = ReplayLog::new();
        search.find_min_traced(&objective, &mut replay);

        let first = replay.events().first();
        assert!(matches!(
            first.map(|event| &event.data),
            Some(quadmin_core::TraceData::Label { .. })
        ));
    }
}
