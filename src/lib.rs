//! Interactive heat-transfer model: a hot cup cooling on a cold counter.
//!
//! The crate is the headless core of a classroom simulation. It tracks the
//! play/pause/resume/restart lifecycle, advances a simulated clock in whole
//! seconds, looks each second up in precomputed temperature tables for the
//! cup and the counter, and streams the accumulating trial record to an
//! external sink for assessment. Rendering, button iconography, and the
//! sink's storage are external collaborators behind the [`model`] traits.

pub mod config;
pub mod error;
pub mod model;
pub mod sink;

pub use config::ScenarioConfig;
pub use error::{Error, Result};
pub use model::{SimState, Simulation};
pub use sink::{JsonLinesSink, NullSink, TrialSink};
