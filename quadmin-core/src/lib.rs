mod bounds;
mod quadratic;
mod scalar;

pub mod replay;

pub use bounds::Bounds;
pub use quadratic::{DimensionError, QuadraticForm};
pub use replay::{ReplayLog, TraceData, TraceEvent};
pub use scalar::{ScalarFunction, ScalarObjective};
