use serde::{Deserialize, Serialize};

/// One `(time, temperature)` observation.
///
/// On the wire a data point is a two-element array like `[3, 44.0]`, which
/// is what the graphing side of the learning platform consumes directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "(u32, f64)", from = "(u32, f64)")]
pub struct DataPoint {
    pub time: u32,
    pub temp: f64,
}

impl From<DataPoint> for (u32, f64) {
    fn from(point: DataPoint) -> Self {
        (point.time, point.temp)
    }
}

impl From<(u32, f64)> for DataPoint {
    fn from((time, temp): (u32, f64)) -> Self {
        Self { time, temp }
    }
}

/// Immutable snapshot of a trial, in the shape the external sink accepts:
/// `{"cupSeries": [[0, 60.0], ...], "counterSeries": [[0, 20.0], ...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedTrial {
    pub cup_series: Vec<DataPoint>,
    pub counter_series: Vec<DataPoint>,
}

/// Append-only record of the observations made during the current run.
///
/// The cup and counter sequences always have equal length; the orchestrator
/// appends one observation to each per simulated second. `reset` empties the
/// record in place, so references to the accumulator stay valid across runs.
#[derive(Debug, Default)]
pub struct TrialAccumulator {
    cup: Vec<DataPoint>,
    counter: Vec<DataPoint>,
}

impl TrialAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one observation pair for the given time.
    pub fn append(&mut self, cup: DataPoint, counter: DataPoint) {
        self.cup.push(cup);
        self.counter.push(counter);
    }

    /// Clear both sequences. Idempotent.
    pub fn reset(&mut self) {
        self.cup.clear();
        self.counter.clear();
    }

    /// Number of observations per series.
    pub fn len(&self) -> usize {
        self.cup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cup.is_empty()
    }

    /// The time of the most recent observation, if any.
    pub fn last_time(&self) -> Option<u32> {
        self.cup.last().map(|point| point.time)
    }

    /// Independent snapshot of both sequences in insertion order.
    pub fn to_payload(&self) -> SerializedTrial {
        SerializedTrial {
            cup_series: self.cup.clone(),
            counter_series: self.counter.clone(),
        }
    }
}
