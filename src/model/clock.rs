use crate::error::{Error, Result};

use super::series::FINAL_TICK;

/// Integer tick counter for the running model, in whole simulated seconds.
///
/// The counter stays in 0..=15. The orchestrator stops asking for advances
/// once the final tick is reached, but the clock enforces the bound itself
/// rather than trusting its caller.
#[derive(Debug, Default)]
pub struct SimulationClock {
    tick: u32,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current tick, between 0 and 15 inclusive.
    pub fn current(&self) -> u32 {
        self.tick
    }

    /// Advance the clock by one simulated second.
    pub fn advance(&mut self) -> Result<()> {
        if self.tick >= FINAL_TICK {
            return Err(Error::ClockOverflow);
        }
        self.tick += 1;
        Ok(())
    }

    /// Set the clock back to 0 seconds.
    pub fn reset(&mut self) {
        self.tick = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero_and_advances_by_one() {
        let mut clock = SimulationClock::new();
        assert_eq!(clock.current(), 0);
        clock.advance().unwrap();
        clock.advance().unwrap();
        assert_eq!(clock.current(), 2);
    }

    #[test]
    fn test_overflows_past_final_tick() {
        let mut clock = SimulationClock::new();
        for _ in 0..FINAL_TICK {
            clock.advance().unwrap();
        }
        assert_eq!(clock.current(), FINAL_TICK);
        assert!(matches!(clock.advance(), Err(Error::ClockOverflow)));
        // The failed advance must not move the clock.
        assert_eq!(clock.current(), FINAL_TICK);
    }

    #[test]
    fn test_reset_returns_to_zero() {
        let mut clock = SimulationClock::new();
        clock.advance().unwrap();
        clock.reset();
        assert_eq!(clock.current(), 0);
        clock.reset();
        assert_eq!(clock.current(), 0);
    }
}
