use ndarray::Array1;
use quadmin_core::{Bounds, QuadraticForm, ReplayLog, ScalarObjective};

use super::{DescentConfig, ITER_CAP, Solution, gradient, value};
use crate::line_search::LineSearch;
use crate::trace::Trace;

/// Steepest descent with exact steps from a one-dimensional search.
///
/// Each iteration restricts the form to the ray `x - t·∇f`, hands the
/// restriction to the line search passed in, and steps by the `t` it
/// returns with no backtracking of its own. The search interval is
/// `[0, max_step]`, capped at `2 / λ` when the form carries a known
/// maximum eigenvalue `λ`, which keeps every full step a contraction.
///
/// The line search is borrowed per call, so the caller can swap strategies
/// between runs without rebuilding the method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteepestDescent {
    config: DescentConfig,
}

impl SteepestDescent {
    #[must_use]
    pub fn new(config: DescentConfig) -> Self {
        Self { config }
    }

    /// Minimizes the form from the origin, taking steps from `line`.
    pub fn find_min(&self, form: &QuadraticForm, line: &dyn LineSearch) -> Solution {
        self.search(form, line, &mut Trace::disabled())
    }

    /// Minimizes the form, recording the convergence path into `replay`.
    pub fn find_min_traced(
        &self,
        form: &QuadraticForm,
        line: &dyn LineSearch,
        replay: &mut ReplayLog,
    ) -> Solution {
        self.search(form, line, &mut Trace::recording(replay))
    }

    fn search(&self, form: &QuadraticForm, line: &dyn LineSearch, trace: &mut Trace) -> Solution {
        let DescentConfig { eps, max_step } = self.config;
        let eps2 = eps * eps;
        let top = match form.max_eigenvalue() {
            Some(lambda) if lambda > 0.0 => max_step.min(2.0 / lambda),
            _ => max_step,
        };

        let mut current = Array1::zeros(form.dims());
        let mut grad = gradient(form, &current);

        let mut version = 0;
        while grad.dot(&grad) >= eps2 && version < ITER_CAP {
            trace.label(version, "point and gradient");
            trace.vector(version, current.to_vec());
            trace.vector(version, grad.to_vec());

            let restriction = LineRestriction {
                form,
                origin: &current,
                direction: &grad,
                bounds: Bounds::new(0.0, top),
            };
            let inner = line.find_min(&restriction);

            trace.label(version, "step length and inner evaluations");
            trace.point(version, inner.x, inner.value);
            trace.scalar(version, inner.evals as f64);

            current = &current - &(&grad * inner.x);
            grad = gradient(form, &current);
            version += 1;
        }

        let final_value = value(form, &current);
        Solution {
            point: current,
            value: final_value,
        }
    }
}

/// The form restricted to the ray `origin - t·direction`.
struct LineRestriction<'a> {
    form: &'a QuadraticForm,
    origin: &'a Array1<f64>,
    direction: &'a Array1<f64>,
    bounds: Bounds,
}

impl ScalarObjective for LineRestriction<'_> {
    fn eval(&self, t: f64) -> f64 {
        let point = self.origin - &(self.direction * t);
        value(self.form, &point)
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    use super::*;
    use crate::line_search::{Brent, GoldenSection};

    #[test]
    fn minimizes_a_diagonal_form() {
        let form = QuadraticForm::diagonal(array![2.0, 4.0], array![-2.0, -8.0], 0.0).unwrap();
        let descent = SteepestDescent::new(DescentConfig::default());
        let golden = GoldenSection::new(1e-6);

        let solution = descent.find_min(&form, &golden);

        assert_abs_diff_eq!(solution.point[0], 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(solution.point[1], 2.0, epsilon = 1e-5);
        assert_abs_diff_eq!(solution.value, -9.0, epsilon = 1e-9);
    }

    #[test]
    fn strategies_can_be_swapped_between_calls() {
        let form = QuadraticForm::diagonal(array![1.0, 3.0], array![4.0, -6.0], 1.0).unwrap();
        let descent = SteepestDescent::new(DescentConfig::default());

        let with_golden = descent.find_min(&form, &GoldenSection::new(1e-6));
        let with_brent = descent.find_min(&form, &Brent::new(1e-6));

        assert_abs_diff_eq!(with_golden.point[0], with_brent.point[0], epsilon = 1e-5);
        assert_abs_diff_eq!(with_golden.point[1], with_brent.point[1], epsilon = 1e-5);
    }

    #[test]
    fn eigenvalue_cap_bounds_the_inner_interval() {
        let form = QuadraticForm::diagonal(array![8.0, 2.0], array![4.0, -2.0], 0.0)
            .unwrap()
            .with_max_eigenvalue(8.0);
        let descent = SteepestDescent::new(DescentConfig::default());

        let mut replay = ReplayLog::new();
        descent.find_min_traced(&form, &GoldenSection::new(1e-6), &mut replay);

        // Every accepted step length stays within [0, 2/λ].
        for event in &replay {
            if let quadmin_core::TraceData::Point { x, .. } = event.data {
                assert!((0.0..=0.25 + 1e-9).contains(&x), "step {x} escaped the cap");
            }
        }
    }

    #[test]
    fn zero_gradient_at_the_origin_returns_immediately() {
        let form = QuadraticForm::diagonal(array![3.0, 5.0], array![0.0, 0.0], -1.5).unwrap();
        let descent = SteepestDescent::new(DescentConfig::default());

        let solution = descent.find_min(&form, &GoldenSection::new(1e-6));

        assert_eq!(solution.point, array![0.0, 0.0]);
        assert_eq!(solution.value, -1.5);
    }
}
