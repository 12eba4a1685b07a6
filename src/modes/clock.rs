use std::time::Duration;

/// Fixed-timestep accumulator deciding when the next game frame is due
///
/// Wall-clock time is fed in small slices; once more than one frame interval
/// has built up a frame fires and the remainder carries over, so the average
/// rate matches the target even when the poll loop jitters.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    elapsed: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interval(fps: u32) -> Duration {
        Duration::from_secs(1) / fps.max(1)
    }

    /// Add `delta` of wall-clock time; true when a frame should run
    pub fn advance(&mut self, delta: Duration, fps: u32) -> bool {
        self.elapsed += delta;
        let interval = Self::interval(fps);

        if self.elapsed > interval {
            let carry = self.elapsed.as_nanos() % interval.as_nanos();
            self.elapsed = Duration::from_nanos(carry as u64);
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval() {
        assert_eq!(FrameClock::interval(20), Duration::from_millis(50));
        assert_eq!(FrameClock::interval(0), Duration::from_secs(1));
    }

    #[test]
    fn test_fires_after_interval() {
        let mut clock = FrameClock::new();
        assert!(!clock.advance(Duration::from_millis(30), 20));
        assert!(!clock.advance(Duration::from_millis(20), 20));
        assert!(clock.advance(Duration::from_millis(1), 20));
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut clock = FrameClock::new();
        // 70ms at 20fps: one frame, 20ms carried
        assert!(clock.advance(Duration::from_millis(70), 20));
        assert!(!clock.advance(Duration::from_millis(30), 20));
        assert!(clock.advance(Duration::from_millis(1), 20));
    }

    #[test]
    fn test_rate_change_applies_immediately() {
        let mut clock = FrameClock::new();
        assert!(!clock.advance(Duration::from_millis(60), 5));
        // Tron speed-up shortens the interval
        assert!(clock.advance(Duration::from_millis(60), 10));
    }
}
