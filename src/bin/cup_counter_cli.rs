//! Headless runner: plays one full trial and writes each transmitted
//! snapshot to stdout as JSON lines, with the readouts on stderr via logs.

use std::io;

use tracing::info;

use cup_counter::model::{AnimationDriver, NullObserver};
use cup_counter::{JsonLinesSink, ScenarioConfig, Simulation};

/// Driver that logs what the animation layer would render.
#[derive(Debug, Default)]
struct LoggingDriver;

impl AnimationDriver for LoggingDriver {
    fn start_cup_lowering(&mut self) {
        info!("lowering cup onto counter");
    }
    fn start_heat_transfer(&mut self) {
        info!("heat transfer running");
    }
    fn pause_all(&mut self) {
        info!("animations paused");
    }
    fn resume_all(&mut self) {
        info!("animations resumed");
    }
    fn reset_all(&mut self) {
        info!("animations reset");
    }
    fn set_cup_readout(&mut self, temp: i32) {
        info!("cup readout: {temp}\u{2103}");
    }
    fn set_counter_readout(&mut self, temp: i32) {
        info!("counter readout: {temp}\u{2103}");
    }
}

fn main() -> cup_counter::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = ScenarioConfig::default();
    let mut sim = Simulation::new(
        &config,
        Box::new(LoggingDriver),
        Box::new(NullObserver),
        Box::new(JsonLinesSink::new(io::stdout())),
    )?;

    sim.play();
    sim.on_cup_seated()?;
    for _ in 0..15 {
        sim.on_tick()?;
    }
    sim.on_all_animations_finished()?;

    info!(state = %sim.state(), "run finished");
    Ok(())
}
