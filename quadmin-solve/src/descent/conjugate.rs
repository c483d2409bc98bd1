use ndarray::Array1;
use quadmin_core::{QuadraticForm, ReplayLog};

use super::{ITER_CAP, Solution, gradient, value};
use crate::trace::Trace;

/// Linear conjugate gradient for quadratic forms.
///
/// The step length along each direction is exact because the objective is
/// quadratic, so in exact arithmetic the search finishes in at most
/// `dims()` iterations. Directions restart from plain steepest descent
/// every `dims()` completed iterations to shed accumulated rounding error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConjugateGradient {
    eps: f64,
}

impl ConjugateGradient {
    /// Creates the method from a gradient tolerance.
    #[must_use]
    pub fn new(eps: f64) -> Self {
        Self { eps }
    }

    /// Minimizes the form from the origin.
    pub fn find_min(&self, form: &QuadraticForm) -> Solution {
        self.search(form, &mut Trace::disabled())
    }

    /// Minimizes the form, recording the convergence path into `replay`.
    pub fn find_min_traced(&self, form: &QuadraticForm, replay: &mut ReplayLog) -> Solution {
        self.search(form, &mut Trace::recording(replay))
    }

    fn search(&self, form: &QuadraticForm, trace: &mut Trace) -> Solution {
        let eps2 = self.eps * self.eps;
        let dims = form.dims();

        let mut current = Array1::zeros(dims);
        let mut grad = gradient(form, &current);
        let mut grad_norm2 = grad.dot(&grad);
        let mut direction = -&grad;

        let mut iter = 0;
        while grad_norm2 >= eps2 && iter < ITER_CAP {
            trace.label(iter, "point, gradient, direction");
            trace.vector(iter, current.to_vec());
            trace.vector(iter, grad.to_vec());
            trace.vector(iter, direction.to_vec());

            let a_direction = form.a().dot(&direction);
            let alpha = grad_norm2 / direction.dot(&a_direction);

            trace.label(iter, "step");
            trace.vector(iter, (&direction * alpha).to_vec());

            current = &current + &(&direction * alpha);
            grad = &grad + &(&a_direction * alpha);

            let next_norm2 = grad.dot(&grad);
            // Conjugacy restarts every dims iterations.
            let beta = if (iter + 1) % dims == 0 {
                0.0
            } else {
                next_norm2 / grad_norm2
            };
            direction = &(&direction * beta) - &grad;
            grad_norm2 = next_norm2;
            iter += 1;
        }

        Solution {
            value: value(form, &current),
            point: current,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    use super::*;

    #[test]
    fn minimizes_a_coupled_form() {
        // A = [[4, 1], [1, 3]], b = [-1, -2]; minimum solves Ax = -b.
        let a = array![[4.0, 1.0], [1.0, 3.0]];
        let form = QuadraticForm::new(a, array![-1.0, -2.0], 0.0).unwrap();
        let method = ConjugateGradient::new(1e-6);

        let solution = method.find_min(&form);

        assert_abs_diff_eq!(solution.point[0], 1.0 / 11.0, epsilon = 1e-6);
        assert_abs_diff_eq!(solution.point[1], 7.0 / 11.0, epsilon = 1e-6);
    }

    #[test]
    fn finishes_a_quadratic_in_at_most_dims_iterations() {
        let a = array![[5.0, 1.0, 0.0], [1.0, 4.0, 1.0], [0.0, 1.0, 3.0]];
        let form = QuadraticForm::new(a, array![1.0, -2.0, 3.0], 0.0).unwrap();
        let method = ConjugateGradient::new(1e-6);

        let mut replay = ReplayLog::new();
        method.find_min_traced(&form, &mut replay);

        // Iteration tags run from zero, so the watermark stays below dims.
        assert!(replay.max_version() < 3);
    }

    #[test]
    fn zero_gradient_at_the_origin_returns_immediately() {
        let form = QuadraticForm::diagonal(array![2.0, 2.0], array![0.0, 0.0], 3.0).unwrap();
        let method = ConjugateGradient::new(1e-6);

        let solution = method.find_min(&form);

        assert_eq!(solution.point, array![0.0, 0.0]);
        assert_eq!(solution.value, 3.0);
    }
}
