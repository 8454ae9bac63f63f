mod clock;
mod driver;
mod series;
mod simulation;
mod trial;

pub use clock::SimulationClock;
pub use driver::{AnimationDriver, ModelObserver, NullDriver, NullObserver};
pub use series::{TemperatureSeries, FINAL_TICK, SAMPLES_PER_RUN};
pub use simulation::{SimState, Simulation};
pub use trial::{DataPoint, SerializedTrial, TrialAccumulator};
