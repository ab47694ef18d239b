use super::settings::clamp_speed;

/// Upper bound on steps fired by a single `advance`, so a stalled frame
/// does not release a burst of generations.
pub const MAX_STEPS_PER_TICK: u32 = 4;

/// Repeating timer driven by frame time.
/// Fires once every `1 / steps_per_second` seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct StepTimer {
    period: f32,
    elapsed: f32,
}

impl StepTimer {
    /// Create a timer; the rate is clamped to the supported speed range
    pub fn new(steps_per_second: f32) -> Self {
        Self {
            period: 1.0 / clamp_speed(steps_per_second),
            elapsed: 0.0,
        }
    }

    /// Period in milliseconds
    pub fn period_ms(&self) -> f32 {
        self.period * 1000.0
    }

    /// Feed elapsed frame time; returns how many periods completed.
    /// The remainder carries over to the next call.
    pub fn advance(&mut self, delta_time: f32) -> u32 {
        self.elapsed += delta_time.max(0.0);

        let mut fired = 0;
        while self.elapsed >= self.period && fired < MAX_STEPS_PER_TICK {
            self.elapsed -= self.period;
            fired += 1;
        }
        if fired == MAX_STEPS_PER_TICK {
            self.elapsed = self.elapsed.min(self.period);
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period() {
        assert!((StepTimer::new(10.0).period_ms() - 100.0).abs() < 1e-3);
        assert_eq!(StepTimer::new(4.0).period_ms(), 250.0);
    }

    #[test]
    fn test_fires_once_per_period() {
        let mut timer = StepTimer::new(4.0);
        assert_eq!(timer.advance(0.125), 0);
        assert_eq!(timer.advance(0.125), 1);
        assert_eq!(timer.advance(0.125), 0);
        assert_eq!(timer.advance(0.25), 1);
        assert_eq!(timer.advance(0.125), 1);
    }

    #[test]
    fn test_catch_up_is_capped() {
        let mut timer = StepTimer::new(10.0);
        assert_eq!(timer.advance(10.0), MAX_STEPS_PER_TICK);
        // The backlog is dropped, at most one period remains
        assert!(timer.advance(0.0) <= 1);
        assert_eq!(timer.advance(0.0), 0);
    }

    #[test]
    fn test_rate_is_clamped() {
        assert_eq!(StepTimer::new(-1.0), StepTimer::new(3.0));
        assert_eq!(StepTimer::new(f32::NAN), StepTimer::new(3.0));

        let mut stalled = StepTimer::new(0.0);
        assert_eq!(stalled.advance(0.0), 0);
        assert_eq!(stalled.advance(0.5), 1);
    }

    #[test]
    fn test_negative_delta_is_ignored() {
        let mut timer = StepTimer::new(4.0);
        assert_eq!(timer.advance(-1.0), 0);
        assert_eq!(timer.advance(0.25), 1);
    }
}
