use quadmin_core::ScalarObjective;

/// Wraps an objective with a per-search evaluation counter.
///
/// Objectives stay pure; the running search owns the counter and reports
/// the total in its solution.
pub(super) struct Evaluator<'a> {
    objective: &'a dyn ScalarObjective,
    count: usize,
}

impl<'a> Evaluator<'a> {
    pub(super) fn new(objective: &'a dyn ScalarObjective) -> Self {
        Self {
            objective,
            count: 0,
        }
    }

    /// Evaluates the objective at `x` and counts the call.
    pub(super) fn eval(&mut self, x: f64) -> f64 {
        self.count += 1;
        self.objective.eval(x)
    }

    /// Evaluations performed so far.
    pub(super) fn count(&self) -> usize {
        self.count
    }
}
