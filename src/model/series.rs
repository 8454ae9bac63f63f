use crate::error::{Error, Result};

use super::trial::DataPoint;

/// The last simulated second of a run. Ticks run 0..=15.
pub const FINAL_TICK: u32 = 15;

/// Number of samples in one full run, one per tick.
pub const SAMPLES_PER_RUN: usize = FINAL_TICK as usize + 1;

/// An immutable time-indexed table of temperature samples for one physical
/// object (the cup or the counter).
///
/// The table is dense and zero-based: sample `i` is the temperature at
/// simulated second `i`, so a lookup is an index access rather than a
/// search. The data comes from configuration, not from this type, so an
/// alternate material or scenario swaps in without a code change.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureSeries {
    temperatures: Vec<f64>,
}

impl TemperatureSeries {
    /// Build a series from `(time, temperature)` pairs.
    ///
    /// The pairs must cover times 0..=15 in order with no gaps; anything
    /// else is rejected as an invalid series.
    pub fn new(points: Vec<(u32, f64)>) -> Result<Self> {
        if points.len() != SAMPLES_PER_RUN {
            return Err(Error::InvalidSeries {
                reason: format!(
                    "expected {} samples, got {}",
                    SAMPLES_PER_RUN,
                    points.len()
                ),
            });
        }
        for (i, (time, _)) in points.iter().enumerate() {
            if *time != i as u32 {
                return Err(Error::InvalidSeries {
                    reason: format!("sample {} has time {} (series must be dense)", i, time),
                });
            }
        }
        Ok(Self {
            temperatures: points.into_iter().map(|(_, temp)| temp).collect(),
        })
    }

    /// Temperature at a specific time, in Celsius.
    pub fn lookup(&self, time: u32) -> Result<f64> {
        self.temperatures
            .get(time as usize)
            .copied()
            .ok_or(Error::TimeOutOfRange {
                time,
                max: FINAL_TICK,
            })
    }

    /// The `(time, temperature)` data point at a specific time, in the
    /// shape the trial record stores.
    pub fn data_point(&self, time: u32) -> Result<DataPoint> {
        Ok(DataPoint {
            time,
            temp: self.lookup(time)?,
        })
    }
}
