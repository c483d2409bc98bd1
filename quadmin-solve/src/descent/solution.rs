use ndarray::Array1;

/// The result of a multivariate search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Best estimate of the minimizer.
    pub point: Array1<f64>,

    /// Objective value at the reported point.
    pub value: f64,
}
