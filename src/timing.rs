use std::time::{Duration, Instant};

/// Caps the loop at a fixed frame rate by sleeping out the rest of each frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    budget: Duration,
}

impl FrameClock {
    /// Budget is `1000 / fps` whole milliseconds; `fps` of zero is treated as 1.
    pub fn new(fps: u32) -> Self {
        let millis = 1000 / u64::from(fps.max(1));
        Self {
            budget: Duration::from_millis(millis),
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Time left in the frame after `elapsed`, never negative.
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.budget.saturating_sub(elapsed)
    }

    /// Blocks until the frame that began at `start` has used its budget.
    pub fn pace(&self, start: Instant) {
        let sleep = self.remaining(start.elapsed());
        if !sleep.is_zero() {
            std::thread::sleep(sleep);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_fps_is_fifty_millis() {
        assert_eq!(FrameClock::new(20).budget(), Duration::from_millis(50));
        assert_eq!(FrameClock::new(60).budget(), Duration::from_millis(16));
    }

    #[test]
    fn remaining_saturates() {
        let clock = FrameClock::new(20);
        assert_eq!(clock.remaining(Duration::from_millis(10)), Duration::from_millis(40));
        assert_eq!(clock.remaining(Duration::from_millis(50)), Duration::ZERO);
        assert_eq!(clock.remaining(Duration::from_millis(500)), Duration::ZERO);
    }

    #[test]
    fn zero_fps_does_not_divide_by_zero() {
        assert_eq!(FrameClock::new(0).budget(), Duration::from_secs(1));
    }

    #[test]
    fn pace_waits_out_the_budget() {
        let clock = FrameClock::new(50);
        let start = Instant::now();
        clock.pace(start);
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
