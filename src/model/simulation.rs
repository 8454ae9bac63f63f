use std::fmt;

use tracing::debug;

use crate::config::ScenarioConfig;
use crate::error::Result;
use crate::sink::TrialSink;

use super::clock::SimulationClock;
use super::driver::{AnimationDriver, ModelObserver};
use super::series::{TemperatureSeries, FINAL_TICK};
use super::trial::{DataPoint, SerializedTrial, TrialAccumulator};

/// Lifecycle state of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    Initialized,
    Playing,
    Paused,
    Completed,
}

impl fmt::Display for SimState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SimState::Initialized => "initialized",
            SimState::Playing => "playing",
            SimState::Paused => "paused",
            SimState::Completed => "completed",
        };
        write!(f, "{name}")
    }
}

/// The orchestrator: owns the clock, the trial record, and the lifecycle
/// state, and coordinates the collaborators around each simulated second.
///
/// Lifecycle requests (`play`, `pause`, `resume`, `restart`) come from user
/// input; the `on_*` events come from the animation layer and the host
/// environment. A request that is not legal in the current state is ignored
/// and reported back as `false` — the UI rate-limits its own affordances,
/// so an out-of-state request is noise, not an error.
///
/// One full run: `play` → `on_cup_seated` → 15 `on_tick` calls (times
/// 0..=14) → `on_all_animations_finished`. The per-second tick and the
/// whole-run timer are driven by independent animation timers, so the
/// time-15 observation is recorded by whichever of the 16th tick or the
/// finish signal arrives first, never by both.
pub struct Simulation {
    state: SimState,
    clock: SimulationClock,
    trial: TrialAccumulator,
    cup_series: TemperatureSeries,
    counter_series: TemperatureSeries,
    driver: Box<dyn AnimationDriver>,
    observer: Box<dyn ModelObserver>,
    sink: Box<dyn TrialSink>,
    // One-shot flag: set when a host blur paused the model, so the next
    // focus resumes it. A manual pause never sets it.
    resume_on_focus: bool,
}

impl Simulation {
    pub fn new(
        config: &ScenarioConfig,
        driver: Box<dyn AnimationDriver>,
        observer: Box<dyn ModelObserver>,
        sink: Box<dyn TrialSink>,
    ) -> Result<Self> {
        let (cup_series, counter_series) = config.build_series()?;
        Ok(Self {
            state: SimState::Initialized,
            clock: SimulationClock::new(),
            trial: TrialAccumulator::new(),
            cup_series,
            counter_series,
            driver,
            observer,
            sink,
            resume_on_focus: false,
        })
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    /// The clock's current tick, between 0 and 15 inclusive.
    pub fn current_time(&self) -> u32 {
        self.clock.current()
    }

    /// Snapshot of the trial record accumulated so far.
    pub fn snapshot(&self) -> SerializedTrial {
        self.trial.to_payload()
    }

    /// Start playing the model from the beginning. Only legal the first
    /// time the model runs; subsequent runs go through `restart`.
    pub fn play(&mut self) -> bool {
        if self.state != SimState::Initialized {
            return self.ignore("play");
        }
        self.clock.reset();
        self.trial.reset();
        self.driver.start_cup_lowering();
        self.set_state(SimState::Playing);
        self.observer.on_model_playing();
        true
    }

    /// Pause the model, freezing the animations in place.
    pub fn pause(&mut self) -> bool {
        if self.state != SimState::Playing {
            return self.ignore("pause");
        }
        self.driver.pause_all();
        self.set_state(SimState::Paused);
        self.observer.on_model_paused();
        true
    }

    /// Resume playing after a pause. The clock and the trial record carry
    /// over untouched, so the next tick picks up exactly where it left off.
    pub fn resume(&mut self) -> bool {
        if self.state != SimState::Paused {
            return self.ignore("resume");
        }
        self.driver.resume_all();
        self.set_state(SimState::Playing);
        self.observer.on_model_playing();
        true
    }

    /// Restart a completed model and begin playing from the beginning.
    pub fn restart(&mut self) -> bool {
        if self.state != SimState::Completed {
            return self.ignore("restart");
        }
        self.trial.reset();
        self.clock.reset();
        self.driver.reset_all();
        if let (Ok(cup), Ok(counter)) = (self.cup_series.lookup(0), self.counter_series.lookup(0))
        {
            self.push_readouts(cup, counter);
        }
        self.driver.start_cup_lowering();
        self.set_state(SimState::Playing);
        self.observer.on_model_playing();
        true
    }

    /// The cup has finished lowering onto the counter.
    ///
    /// Sends the synthetic time-0 report so the graph and readouts show
    /// data before the first real tick, then empties the trial record again
    /// so that tick 0 does not append a duplicate observation. Every
    /// transmitted payload carries exactly one time-0 entry either way.
    pub fn on_cup_seated(&mut self) -> Result<()> {
        if self.state != SimState::Playing {
            self.ignore("cup-seated");
            return Ok(());
        }
        self.clock.reset();

        self.trial.reset();
        let (cup, counter) = self.record_observation(0)?;
        self.trial.reset();

        self.push_readouts(cup.temp, counter.temp);
        self.driver.start_heat_transfer();
        Ok(())
    }

    /// One simulated second has elapsed.
    ///
    /// Records the observation for the current tick, reports it, updates
    /// the readouts, and advances the clock. At the final tick the clock
    /// holds still; the transition to `Completed` belongs to
    /// `on_all_animations_finished` alone.
    pub fn on_tick(&mut self) -> Result<()> {
        if self.state != SimState::Playing {
            self.ignore("tick");
            return Ok(());
        }
        let time = self.clock.current();
        let (cup, counter) = self.record_observation(time)?;
        self.push_readouts(cup.temp, counter.temp);
        if time < FINAL_TICK {
            self.clock.advance()?;
        }
        debug!(time, cup = cup.temp, counter = counter.temp, "tick");
        Ok(())
    }

    /// The whole-run timer has finished; everything should stop.
    ///
    /// If the 16th tick lost the race against this signal, the time-15
    /// observation is recorded here so a full run always ends with all 16
    /// samples per series.
    pub fn on_all_animations_finished(&mut self) -> Result<()> {
        if self.state != SimState::Playing {
            self.ignore("all-animations-finished");
            return Ok(());
        }
        if self.clock.current() == FINAL_TICK && self.trial.last_time() != Some(FINAL_TICK) {
            let (cup, counter) = self.record_observation(FINAL_TICK)?;
            self.push_readouts(cup.temp, counter.temp);
        }
        self.set_state(SimState::Completed);
        self.observer.on_model_completed();
        Ok(())
    }

    /// The host window lost focus. Auto-pause a playing model so the user
    /// does not miss part of the run while looking elsewhere.
    pub fn on_host_blurred(&mut self) {
        if self.state == SimState::Playing {
            self.pause();
            self.resume_on_focus = true;
        }
    }

    /// The host window regained focus. Resume only if the matching blur
    /// was what paused the model; a model the user paused by hand stays
    /// paused.
    pub fn on_host_focused(&mut self) {
        if self.resume_on_focus {
            self.resume_on_focus = false;
            self.resume();
        }
    }

    /// Append the observation for `time` to the trial and send the updated
    /// snapshot to the sink.
    fn record_observation(&mut self, time: u32) -> Result<(DataPoint, DataPoint)> {
        let cup = self.cup_series.data_point(time)?;
        let counter = self.counter_series.data_point(time)?;
        self.trial.append(cup, counter);
        self.sink.save(&self.trial.to_payload());
        Ok((cup, counter))
    }

    /// Push whole-degree readouts to the cup and counter displays.
    fn push_readouts(&mut self, cup_temp: f64, counter_temp: f64) {
        self.driver.set_cup_readout(cup_temp.floor() as i32);
        self.driver.set_counter_readout(counter_temp.floor() as i32);
    }

    fn set_state(&mut self, next: SimState) {
        debug!(from = %self.state, to = %next, "state transition");
        self.state = next;
    }

    fn ignore(&self, request: &str) -> bool {
        debug!(state = %self.state, request, "ignoring out-of-state request");
        false
    }
}
