//! Minimization strategies for unimodal objectives and quadratic forms.
//!
//! # Solvers
//!
//! - [`line_search`]: five one-dimensional strategies behind the
//!   object-safe [`LineSearch`](line_search::LineSearch) trait
//! - [`descent`]: three gradient-based methods for
//!   [`QuadraticForm`](quadmin_core::QuadraticForm)s
//! - [`registry`]: owns registered objectives and strategies and runs the
//!   current selection
//!
//! Every strategy is deterministic and offers a traced entry point that
//! records its convergence path into a
//! [`ReplayLog`](quadmin_core::ReplayLog) for replay or visualization.

pub mod descent;
pub mod line_search;
pub mod registry;

mod trace;
