use std::time::Duration;

/// What a deferred action does when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimerPurpose {
    /// Show the controls hint
    Hint,
    /// Accept input again after a collision
    InputPause,
    /// Replace the finished game with a fresh one
    Restart,
}

/// Fire-once timers keyed by purpose
///
/// At most one timer per purpose is pending; arming an already pending
/// purpose replaces its deadline. Time only moves when the driver calls
/// [`Timers::advance`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timers {
    pending: Vec<(TimerPurpose, Duration)>,
}

impl Timers {
    pub fn arm(&mut self, purpose: TimerPurpose, duration: Duration) {
        self.cancel(purpose);
        self.pending.push((purpose, duration));
    }

    pub fn cancel(&mut self, purpose: TimerPurpose) {
        self.pending.retain(|(pending, _)| *pending != purpose);
    }

    pub fn is_armed(&self, purpose: TimerPurpose) -> bool {
        self.pending.iter().any(|(pending, _)| *pending == purpose)
    }

    /// Move the clock forward, returning the purposes that fired
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TimerPurpose> {
        let mut fired = Vec::new();

        self.pending.retain_mut(|(purpose, left)| match left.checked_sub(elapsed) {
            Some(rest) if !rest.is_zero() => {
                *left = rest;
                true
            }
            _ => {
                fired.push(*purpose);
                false
            }
        });

        fired.sort();
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_fires_once() {
        let mut timers = Timers::default();
        timers.arm(TimerPurpose::Hint, Duration::from_millis(100));

        assert!(timers.advance(Duration::from_millis(60)).is_empty());
        assert!(timers.is_armed(TimerPurpose::Hint));
        assert_eq!(
            timers.advance(Duration::from_millis(40)),
            vec![TimerPurpose::Hint]
        );
        assert!(timers.advance(Duration::from_millis(1000)).is_empty());
        assert!(!timers.is_armed(TimerPurpose::Hint));
    }

    #[test]
    fn test_rearm_replaces_deadline() {
        let mut timers = Timers::default();
        timers.arm(TimerPurpose::Hint, Duration::from_millis(100));
        timers.advance(Duration::from_millis(90));
        timers.arm(TimerPurpose::Hint, Duration::from_millis(100));

        assert!(timers.advance(Duration::from_millis(50)).is_empty());
        assert_eq!(
            timers.advance(Duration::from_millis(50)),
            vec![TimerPurpose::Hint]
        );
    }

    #[test]
    fn test_cancel() {
        let mut timers = Timers::default();
        timers.arm(TimerPurpose::Restart, Duration::from_millis(10));
        timers.cancel(TimerPurpose::Restart);
        assert!(timers.advance(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_multiple_purposes_fire_in_order() {
        let mut timers = Timers::default();
        timers.arm(TimerPurpose::Restart, Duration::from_millis(5));
        timers.arm(TimerPurpose::InputPause, Duration::from_millis(5));
        timers.arm(TimerPurpose::Hint, Duration::from_millis(500));

        assert_eq!(
            timers.advance(Duration::from_millis(10)),
            vec![TimerPurpose::InputPause, TimerPurpose::Restart]
        );
        assert!(timers.is_armed(TimerPurpose::Hint));
    }
}
