/// Parameters shared by the descent methods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescentConfig {
    /// Gradient tolerance; a search stops once `‖∇f‖² < ε²`.
    pub eps: f64,

    /// Largest step length explored along a descent direction.
    pub max_step: f64,
}

impl Default for DescentConfig {
    fn default() -> Self {
        Self {
            eps: 1e-6,
            max_step: 1000.0,
        }
    }
}
