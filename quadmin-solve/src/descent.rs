//! Gradient-based minimization of quadratic forms.
//!
//! # Methods
//!
//! - [`GradientDescent`]: fixed-to-halved backtracking steps
//! - [`SteepestDescent`]: exact steps from an injected [`LineSearch`]
//! - [`ConjugateGradient`]: linear conjugate directions with periodic
//!   restart
//!
//! All methods start at the origin, follow the exact gradient `Ax + b`,
//! and stop once the squared gradient norm drops below `ε²`. They are
//! meant for positive definite forms; on an indefinite form the safety cap
//! on iterations is the only thing that stops them. [`Method`] wraps the
//! three for registry storage.
//!
//! [`LineSearch`]: crate::line_search::LineSearch

mod config;
mod conjugate;
mod gradient;
mod method;
mod solution;
mod steepest;


pub use config::DescentConfig;
pub use conjugate::ConjugateGradient;
pub use gradient::GradientDescent;
pub use method::Method;
pub use solution::Solution;
pub use steepest::SteepestDescent;

use ndarray::Array1;
use quadmin_core::QuadraticForm;

/// Safety bound on descent iterations. Convergence is decided by the
/// gradient test alone; well-posed problems never get near this.
const ITER_CAP: usize = 10_000;

/// Evaluates `form` at an iterate of matching dimension.
fn value(form: &QuadraticForm, x: &Array1<f64>) -> f64 {
    0.5 * form.a().dot(x).dot(x) + form.b().dot(x) + form.c()
}

/// The gradient `Ax + b` at an iterate of matching dimension.
fn gradient(form: &QuadraticForm, x: &Array1<f64>) -> Array1<f64> {
    form.a().dot(x) + form.b()
}
