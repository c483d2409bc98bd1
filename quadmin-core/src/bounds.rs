use std::fmt;

/// A closed search interval.
///
/// The constructor normalizes its endpoints, so `from <= to` holds for every
/// value of this type. Length and midpoint are computed on demand; solvers
/// that shrink a bracket build a fresh `Bounds` each iteration rather than
/// mutating a shared one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Lower endpoint.
    pub from: f64,

    /// Upper endpoint.
    pub to: f64,
}

impl Bounds {
    /// Creates bounds from two endpoints, swapping them if reversed.
    #[must_use]
    pub fn new(from: f64, to: f64) -> Self {
        if from <= to {
            Self { from, to }
        } else {
            Self { from: to, to: from }
        }
    }

    /// Returns the interval length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.to - self.from
    }

    /// Returns the interval midpoint.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.from + self.to) / 2.0
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.from, self.to)
    }
}
