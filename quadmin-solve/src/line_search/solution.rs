/// The result of a line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Best estimate of the minimizer.
    pub x: f64,

    /// Objective value at the reported `x`.
    pub value: f64,

    /// Number of objective evaluations the search performed.
    pub evals: usize,
}
