use std::time::Instant;

/// Frame clock: hands out the delta since the previous tick. The scene keeps
/// its own elapsed time; this only measures wall-clock frame gaps.
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Delta in seconds since the last tick; advances the clock.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn tick_measures_elapsed_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        assert!(delta >= 0.009, "delta {delta} too small");
        assert!(delta <= 0.1, "delta {delta} too large");
    }

    #[test]
    fn consecutive_ticks_are_non_negative() {
        let mut clock = Clock::new();
        clock.tick();
        assert!(clock.tick() >= 0.0);
    }
}
