use std::fmt;

use crate::Bounds;

/// A scalar objective restricted to a known search interval.
///
/// Evaluation is pure: calling [`eval`](Self::eval) must not change any
/// observable state. Searches that report how many evaluations they made
/// keep that counter on their own side of this trait.
pub trait ScalarObjective {
    /// Evaluates the objective at `x`.
    fn eval(&self, x: f64) -> f64;

    /// Returns the interval the objective is minimized on.
    fn bounds(&self) -> Bounds;
}

/// A scalar objective built from a closure and explicit bounds.
///
/// This is the concrete objective handed to the line searches directly.
/// An optional label carries a human-readable formula for display.
pub struct ScalarFunction {
    f: Box<dyn Fn(f64) -> f64 + Send + Sync>,
    bounds: Bounds,
    label: Option<String>,
}

impl ScalarFunction {
    /// Creates an unlabeled objective from a closure and bounds.
    pub fn new(f: impl Fn(f64) -> f64 + Send + Sync + 'static, bounds: Bounds) -> Self {
        Self {
            f: Box::new(f),
            bounds,
            label: None,
        }
    }

    /// Creates a labeled objective, where the label is a display-only
    /// description such as the formula the closure computes.
    pub fn labeled(
        label: impl Into<String>,
        f: impl Fn(f64) -> f64 + Send + Sync + 'static,
        bounds: Bounds,
    ) -> Self {
        Self {
            f: Box::new(f),
            bounds,
            label: Some(label.into()),
        }
    }

    /// Returns the display label, if one was given.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl ScalarObjective for ScalarFunction {
    fn eval(&self, x: f64) -> f64 {
        (self.f)(x)
    }

    fn bounds(&self) -> Bounds {
        self.bounds
    }
}

impl fmt::Debug for ScalarFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarFunction")
            .field("bounds", &self.bounds)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ScalarFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{label} on {}", self.bounds),
            None => write!(f, "f(x) on {}", self.bounds),
        }
    }
}
