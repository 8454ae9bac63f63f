/// Commands the model sends to the animation/rendering layer.
///
/// The model never inspects a return value: these are presentation
/// commands, and how (or whether) the layer renders them is its own
/// business. Readout temperatures arrive already floored to whole degrees.
pub trait AnimationDriver {
    /// Begin the animation that lowers the cup onto the counter.
    fn start_cup_lowering(&mut self);
    /// Begin the heat-transfer animations on the cup and counter.
    fn start_heat_transfer(&mut self);
    /// Freeze all running animations in place.
    fn pause_all(&mut self);
    /// Resume previously frozen animations.
    fn resume_all(&mut self);
    /// Put every element back in its starting position and state.
    fn reset_all(&mut self);
    /// Update the temperature displayed on the cup.
    fn set_cup_readout(&mut self, temp: i32);
    /// Update the temperature displayed on the counter.
    fn set_counter_readout(&mut self, temp: i32);
}

/// Notifications the model sends to the play/pause/restart control.
///
/// The control is a pure observer; it reacts by swapping its icon and
/// affordance, nothing more.
pub trait ModelObserver {
    fn on_model_playing(&mut self);
    fn on_model_paused(&mut self);
    fn on_model_completed(&mut self);
}

/// Driver that renders nothing. Used headless and in tests.
#[derive(Debug, Default)]
pub struct NullDriver;

impl AnimationDriver for NullDriver {
    fn start_cup_lowering(&mut self) {}
    fn start_heat_transfer(&mut self) {}
    fn pause_all(&mut self) {}
    fn resume_all(&mut self) {}
    fn reset_all(&mut self) {}
    fn set_cup_readout(&mut self, _temp: i32) {}
    fn set_counter_readout(&mut self, _temp: i32) {}
}

/// Observer that ignores every notification.
#[derive(Debug, Default)]
pub struct NullObserver;

impl ModelObserver for NullObserver {
    fn on_model_playing(&mut self) {}
    fn on_model_paused(&mut self) {}
    fn on_model_completed(&mut self) {}
}
