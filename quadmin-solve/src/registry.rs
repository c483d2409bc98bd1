//! Ownership and dispatch of objectives and strategies.
//!
//! A [`Registry`] owns every registered objective and strategy for its
//! whole lifetime and tracks one selection per collection. Runs always
//! resolve the current selections fresh, and the strategies themselves are
//! stateless between calls, so re-selecting never leaves stale state
//! behind.

use std::fmt;

use quadmin_core::{QuadraticForm, ReplayLog};
use thiserror::Error;

use crate::descent::{
    ConjugateGradient, DescentConfig, GradientDescent, Method, Solution, SteepestDescent,
};
use crate::line_search::{Brent, Dichotomy, Fibonacci, GoldenSection, LineSearch, Parabolic};

/// Error cases for registry selection and dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A selection index was past the end of its collection.
    #[error("index out of range: {kind} {index} of {len}")]
    IndexOutOfRange {
        /// Which collection was addressed.
        kind: &'static str,
        /// The rejected index.
        index: usize,
        /// Size of the collection at the time.
        len: usize,
    },

    /// A run was requested with no objective registered.
    #[error("no function registered")]
    NoFunction,

    /// A run was requested with no multivariate method registered.
    #[error("no method registered")]
    NoMethod,

    /// The selected method needs a line search and none is registered.
    #[error("no line search registered")]
    NoLineSearch,
}

/// A search result together with the replay of how it was reached.
#[derive(Debug, Clone, PartialEq)]
pub struct TracedSolution {
    /// The search result.
    pub solution: Solution,

    /// The convergence narrative recorded during the run.
    pub replay: ReplayLog,
}

/// Owns objectives and strategies and dispatches the current selection.
#[derive(Default)]
pub struct Registry {
    functions: Vec<QuadraticForm>,
    line_searches: Vec<Box<dyn LineSearch>>,
    methods: Vec<Method>,
    selected_function: usize,
    selected_line_search: usize,
    selected_method: usize,
}

impl Registry {
    /// Creates an empty registry. All selections start at index zero and
    /// become usable as soon as the collections are populated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the five line searches and the three
    /// multivariate methods registered at `ε = 1e-6`.
    #[must_use]
    pub fn standard() -> Self {
        const EPS: f64 = 1e-6;
        let config = DescentConfig {
            eps: EPS,
            max_step: 1000.0,
        };

        let mut registry = Self::new();
        registry.add_line_search(Box::new(Dichotomy::new(EPS / 4.0, EPS)));
        registry.add_line_search(Box::new(GoldenSection::new(EPS)));
        registry.add_line_search(Box::new(Fibonacci::new(EPS)));
        registry.add_line_search(Box::new(Parabolic::new(EPS)));
        registry.add_line_search(Box::new(Brent::new(EPS)));
        registry.add_method(GradientDescent::new(config).into());
        registry.add_method(SteepestDescent::new(config).into());
        registry.add_method(ConjugateGradient::new(EPS).into());
        registry
    }

    /// Registers an objective. Forms are validated at construction, so
    /// registration itself cannot fail.
    pub fn add_function(&mut self, function: QuadraticForm) {
        self.functions.push(function);
    }

    /// Registers a line-search strategy for steepest descent to draw on.
    pub fn add_line_search(&mut self, strategy: Box<dyn LineSearch>) {
        self.line_searches.push(strategy);
    }

    /// Registers a multivariate method.
    pub fn add_method(&mut self, method: Method) {
        self.methods.push(method);
    }

    /// Selects the objective at `index` for subsequent runs.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::IndexOutOfRange`] when `index` does not
    /// address a registered objective; the previous selection is kept.
    pub fn select_function(&mut self, index: usize) -> Result<(), RegistryError> {
        check_index("function", index, self.functions.len())?;
        self.selected_function = index;
        Ok(())
    }

    /// Selects the line search steepest descent will use.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::IndexOutOfRange`] when `index` does not
    /// address a registered strategy; the previous selection is kept.
    pub fn select_line_search(&mut self, index: usize) -> Result<(), RegistryError> {
        check_index("line search", index, self.line_searches.len())?;
        self.selected_line_search = index;
        Ok(())
    }

    /// Selects the multivariate method for subsequent runs.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::IndexOutOfRange`] when `index` does not
    /// address a registered method; the previous selection is kept.
    pub fn select_method(&mut self, index: usize) -> Result<(), RegistryError> {
        check_index("method", index, self.methods.len())?;
        self.selected_method = index;
        Ok(())
    }

    /// Registered objectives, in registration order.
    #[must_use]
    pub fn functions(&self) -> &[QuadraticForm] {
        &self.functions
    }

    /// Registered methods, in registration order.
    #[must_use]
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    /// Display names of the registered line searches, in registration
    /// order.
    #[must_use]
    pub fn line_search_names(&self) -> Vec<&'static str> {
        self.line_searches.iter().map(|s| s.name()).collect()
    }

    /// Runs the selected method on the selected objective.
    ///
    /// # Errors
    ///
    /// Returns a `No*` variant when a collection the run needs is empty.
    /// The line search is consulted only by steepest descent.
    pub fn search_min(&self) -> Result<Solution, RegistryError> {
        let function = self.current_function()?;
        let solution = match self.current_method()? {
            Method::Gradient(method) => method.find_min(function),
            Method::Steepest(method) => method.find_min(function, self.current_line_search()?),
            Method::Conjugate(method) => method.find_min(function),
        };
        Ok(solution)
    }

    /// Runs the selected method, capturing the convergence narrative.
    ///
    /// # Errors
    ///
    /// Fails exactly when [`search_min`](Self::search_min) fails.
    pub fn search_min_traced(&self) -> Result<TracedSolution, RegistryError> {
        let function = self.current_function()?;
        let mut replay = ReplayLog::new();
        let solution = match self.current_method()? {
            Method::Gradient(method) => method.find_min_traced(function, &mut replay),
            Method::Steepest(method) => {
                method.find_min_traced(function, self.current_line_search()?, &mut replay)
            }
            Method::Conjugate(method) => method.find_min_traced(function, &mut replay),
        };
        Ok(TracedSolution { solution, replay })
    }

    fn current_function(&self) -> Result<&QuadraticForm, RegistryError> {
        self.functions
            .get(self.selected_function)
            .ok_or(RegistryError::NoFunction)
    }

    fn current_method(&self) -> Result<Method, RegistryError> {
        self.methods
            .get(self.selected_method)
            .copied()
            .ok_or(RegistryError::NoMethod)
    }

    fn current_line_search(&self) -> Result<&dyn LineSearch, RegistryError> {
        self.line_searches
            .get(self.selected_line_search)
            .map(|strategy| strategy.as_ref())
            .ok_or(RegistryError::NoLineSearch)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("functions", &self.functions.len())
            .field("line_searches", &self.line_search_names())
            .field("methods", &self.methods)
            .field("selected_function", &self.selected_function)
            .field("selected_line_search", &self.selected_line_search)
            .field("selected_method", &self.selected_method)
            .finish()
    }
}

fn check_index(kind: &'static str, index: usize, len: usize) -> Result<(), RegistryError> {
    if index < len {
        Ok(())
    } else {
        Err(RegistryError::IndexOutOfRange { kind, index, len })
    }
}
