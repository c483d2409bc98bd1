//! Versioned event log for replaying a search step by step.
//!
//! Traced solver entry points clear the log on entry and append one
//! [`TraceEvent`] per recorded snapshot, stamped with the iteration it
//! belongs to. Consumers iterate in append order and match on [`TraceData`];
//! the enum is non-exhaustive, so every match carries a default arm and
//! stays compatible with kinds added later.

/// A single snapshot recorded during a traced search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceEvent {
    /// Iteration the snapshot belongs to; non-decreasing within a log.
    pub version: usize,

    /// The recorded payload.
    pub data: TraceData,
}

/// Payload of a [`TraceEvent`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum TraceData {
    /// An evaluated point (x, f(x)).
    Point { x: f64, y: f64 },

    /// The current search interval.
    Interval { left: f64, right: f64 },

    /// Coefficients of a fitted parabola a·x² + b·x + c.
    Parabola { a: f64, b: f64, c: f64 },

    /// A multidimensional quantity, such as an iterate or a gradient.
    Vector { values: Vec<f64> },

    /// A scalar quantity, such as an objective value or a count.
    Scalar { value: f64 },

    /// A narrative marker describing the step being taken.
    Label { text: String },
}

/// Append-only log of [`TraceEvent`]s, tracking the highest version seen.
///
/// A log is cleared at the start of every traced search and never mid-run,
/// so after the call it holds that run's complete narrative.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReplayLog {
    events: Vec<TraceEvent>,
    max_version: usize,
}

impl ReplayLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a snapshot stamped with `version`.
    pub fn record(&mut self, version: usize, data: TraceData) {
        self.max_version = self.max_version.max(version);
        self.events.push(TraceEvent { version, data });
    }

    /// Records an evaluated point.
    pub fn point(&mut self, version: usize, x: f64, y: f64) {
        self.record(version, TraceData::Point { x, y });
    }

    /// Records the current search interval.
    pub fn interval(&mut self, version: usize, left: f64, right: f64) {
        self.record(version, TraceData::Interval { left, right });
    }

    /// Records fitted parabola coefficients.
    pub fn parabola(&mut self, version: usize, a: f64, b: f64, c: f64) {
        self.record(version, TraceData::Parabola { a, b, c });
    }

    /// Records a multidimensional quantity.
    pub fn vector(&mut self, version: usize, values: impl Into<Vec<f64>>) {
        self.record(
            version,
            TraceData::Vector {
                values: values.into(),
            },
        );
    }

    /// Records a scalar quantity.
    pub fn scalar(&mut self, version: usize, value: f64) {
        self.record(version, TraceData::Scalar { value });
    }

    /// Records a narrative marker.
    pub fn label(&mut self, version: usize, text: impl Into<String>) {
        self.record(version, TraceData::Label { text: text.into() });
    }

    /// Removes every event and resets the version watermark.
    pub fn clear(&mut self) {
        self.events.clear();
        self.max_version = 0;
    }

    /// Returns the recorded events in append order.
    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Returns the highest version recorded since the last clear.
    #[must_use]
    pub fn max_version(&self) -> usize {
        self.max_version
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing has been recorded since the last clear.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates over the events in append order.
    pub fn iter(&self) -> std::slice::Iter<'_, TraceEvent> {
        self.events.iter()
    }
}

impl<'a> IntoIterator for &'a ReplayLog {
    type Item = &'a TraceEvent;
    type IntoIter = std::slice::Iter<'a, TraceEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
