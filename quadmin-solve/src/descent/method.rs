use super::{ConjugateGradient, GradientDescent, SteepestDescent};

/// A multivariate method wrapped for registry storage.
///
/// The set is closed on purpose: dispatch sites match exhaustively and
/// hand each strategy exactly the arguments it needs, which is how
/// steepest descent alone receives the selected line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Method {
    /// Backtracking gradient descent.
    Gradient(GradientDescent),

    /// Line-search steepest descent.
    Steepest(SteepestDescent),

    /// Linear conjugate gradient.
    Conjugate(ConjugateGradient),
}

impl Method {
    /// Returns the method's display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Method::Gradient(_) => "Gradient descent",
            Method::Steepest(_) => "Steepest descent",
            Method::Conjugate(_) => "Conjugate gradient",
        }
    }
}

impl From<GradientDescent> for Method {
    fn from(method: GradientDescent) -> Self {
        Method::Gradient(method)
    }
}

impl From<SteepestDescent> for Method {
    fn from(method: SteepestDescent) -> Self {
        Method::Steepest(method)
    }
}

impl From<ConjugateGradient> for Method {
    fn from(method: ConjugateGradient) -> Self {
        Method::Conjugate(method)
    }
}
