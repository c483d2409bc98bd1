use ndarray::Array1;
use quadmin_core::{QuadraticForm, ReplayLog};

use super::{DescentConfig, ITER_CAP, Solution, gradient, value};
use crate::trace::Trace;

/// Gradient descent with a halving backtracking search.
///
/// Each iteration walks against the gradient with the largest step not
/// exceeding `max_step` that decreases the objective, halving the step
/// until the value drops or the step reaches `ε`. A step that small is
/// taken even without a decrease, so a stalled iteration cannot spin
/// forever on one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientDescent {
    config: DescentConfig,
}

impl GradientDescent {
    #[must_use]
    pub fn new(config: DescentConfig) -> Self {
        Self { config }
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
        let DescentConfig { eps, max_step } = self.config;
        let eps2 = eps * eps;

        let mut current = Array1::zeros(form.dims());
        let mut f_current = value(form, &current);
        let mut grad = gradient(form, &current);

        trace.label(0, "dimension");
        trace.scalar(0, form.dims() as f64);

        let mut version = 0;
        while grad.dot(&grad) >= eps2 && version < ITER_CAP {
            trace.label(version, "point and value");
            trace.vector(version, current.to_vec());
            trace.scalar(version, f_current);
            trace.label(version, "gradient");
            trace.vector(version, grad.to_vec());

            let mut alpha = max_step;
            let mut next = &current - &(&grad * alpha);
            let mut f_next = value(form, &next);
            while f_next >= f_current && alpha > eps {
                alpha /= 2.0;
                next = &current - &(&grad * alpha);
                f_next = value(form, &next);
            }

            trace.label(version, "step");
            trace.vector(version, (&grad * -alpha).to_vec());

            current = next;
            f_current = f_next;
            grad = gradient(form, &current);
            version += 1;
        }

        Solution {
            point: current,
            value: f_current,
        }
    }
}
