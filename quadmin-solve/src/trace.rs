use quadmin_core::ReplayLog;

/// Recording target shared by the plain and traced entry points.
///
/// Every strategy runs one search loop against a `Trace`; the plain entry
/// point hands it a disabled sink, so the two entry points cannot drift
/// apart in their iterate sequences.
pub(crate) struct Trace<'a> {
    log: Option<&'a mut ReplayLog>,
}

impl<'a> Trace<'a> {
    /// A sink that records nothing.
    pub(crate) fn disabled() -> Self {
        Self { log: None }
    }

    /// Clears `log` and records every snapshot into it.
    pub(crate) fn recording(log: &'a mut ReplayLog) -> Self {
        log.clear();
        Self { log: Some(log) }
    }

    pub(crate) fn point(&mut self, version: usize, x: f64, y: f64) {
        if let Some(log) = &mut self.log {
            log.point(version, x, y);
        }
    }

    pub(crate) fn interval(&mut self, version: usize, left: f64, right: f64) {
        if let Some(log) = &mut self.log {
            log.interval(version, left, right);
        }
    }

    pub(crate) fn parabola(&mut self, version: usize, a: f64, b: f64, c: f64) {
        if let Some(log) = &mut self.log {
            log.parabola(version, a, b, c);
        }
    }

    pub(crate) fn vector(&mut self, version: usize, values: impl Into<Vec<f64>>) {
        if let Some(log) = &mut self.log {
            log.vector(version, values);
        }
    }

    pub(crate) fn scalar(&mut self, version: usize, value: f64) {
        if let Some(log) = &mut self.log {
            log.scalar(version, value);
        }
    }

    pub(crate) fn label(&mut self, version: usize, text: impl Into<String>) {
        if let Some(log) = &mut self.log {
            log.label(version, text);
        }
    }
}
