//! Model errors

use thiserror::Error;

/// Model result type
pub type Result<T> = std::result::Result<T, Error>;

/// Invariant violations raised by the model's internal components.
///
/// These are programming errors, not user-facing conditions: the
/// orchestrator gates tick delivery so that none of them occur in a
/// normal run. They are propagated rather than recovered from.
#[derive(Debug, Error)]
pub enum Error {
    #[error("clock already at final tick; advance() requires an intervening reset")]
    ClockOverflow,

    #[error("time {time} is outside the sampled range 0..={max}")]
    TimeOutOfRange { time: u32, max: u32 },

    #[error("invalid temperature series: {reason}")]
    InvalidSeries { reason: String },
}
