use std::thread;
use std::time::{Duration, Instant};

/// Caps the frame loop at a target rate by sleeping out the rest of
/// each frame's budget. Frames that overrun are not made up.
#[derive(Debug)]
pub struct FramePacer {
    frame_target: Duration,
    last_present: Instant,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame_target: target_frame_duration(target_fps),
            last_present: Instant::now(),
        }
    }

    /// Sleep until the current frame's budget is used up
    pub fn wait(&mut self) {
        let elapsed = Instant::now().saturating_duration_since(self.last_present);
        let remaining = remaining_budget(elapsed, self.frame_target);
        if remaining > Duration::ZERO {
            thread::sleep(remaining);
        }
        self.last_present = Instant::now();
    }
}

pub fn target_frame_duration(target_fps: u32) -> Duration {
    Duration::from_secs(1) / target_fps.max(1)
}

pub fn remaining_budget(elapsed: Duration, target: Duration) -> Duration {
    target.saturating_sub(elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_frame_duration() {
        assert_eq!(target_frame_duration(60), Duration::from_nanos(16_666_666));
        assert_eq!(target_frame_duration(0), Duration::from_secs(1));
    }

    #[test]
    fn test_remaining_budget_zero_when_over_budget() {
        let target = target_frame_duration(60);
        assert_eq!(remaining_budget(Duration::from_millis(20), target), Duration::ZERO);
    }

    #[test]
    fn test_remaining_budget_positive_when_under_budget() {
        let target = target_frame_duration(60);
        let remaining = remaining_budget(Duration::from_millis(5), target);
        assert!(remaining > Duration::from_millis(11));
        assert!(remaining < Duration::from_millis(12));
    }

    #[test]
    fn test_wait_holds_frame_rate() {
        let mut pacer = FramePacer::new(100);
        let start = Instant::now();
        pacer.wait();
        pacer.wait();
        assert!(start.elapsed() >= Duration::from_millis(19));
    }
}
