//! Eased animation for the completion gauge

use std::time::{Duration, Instant};

/// Animates the displayed completion from its previous value to the target
#[derive(Debug, Clone)]
pub struct GaugeAnimation {
    from: f64,
    to: f64,
    start: Instant,
}

impl GaugeAnimation {
    const DURATION: Duration = Duration::from_millis(250);

    pub fn new() -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            start: Instant::now(),
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// Start animating toward a new percentage from wherever the gauge is now
    pub fn retarget(&mut self, to: f64) {
        if (to - self.to).abs() < f64::EPSILON {
            return;
        }
        let now = Instant::now();
        self.from = self.value_at(now);
        self.to = to;
        self.start = now;
    }

    /// Percentage to draw right now
    pub fn value(&self) -> f64 {
        self.value_at(Instant::now())
    }

    pub fn is_running(&self) -> bool {
        self.start.elapsed() < Self::DURATION && (self.to - self.from).abs() >= f64::EPSILON
    }

    fn value_at(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.start);
        if elapsed >= Self::DURATION {
            return self.to;
        }
        let progress = elapsed.as_secs_f32() / Self::DURATION.as_secs_f32();
        // Cubic ease-out for a quick start and soft landing
        let eased = simple_easing::cubic_out(progress) as f64;
        self.from + (self.to - self.from) * eased
    }
}

impl Default for GaugeAnimation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let gauge = GaugeAnimation::new();
        assert_eq!(gauge.value(), 0.0);
        assert!(!gauge.is_running());
    }

    #[test]
    fn test_reaches_target_after_duration() {
        let mut gauge = GaugeAnimation::new();
        gauge.retarget(50.0);
        let done = gauge.start + GaugeAnimation::DURATION;
        assert_eq!(gauge.value_at(done), 50.0);
    }

    #[test]
    fn test_midway_value_between_bounds() {
        let mut gauge = GaugeAnimation::new();
        gauge.retarget(100.0);
        let mid = gauge.value_at(gauge.start + Duration::from_millis(100));
        assert!(mid > 0.0 && mid < 100.0, "got {mid}");
    }

    #[test]
    fn test_retarget_same_value_is_noop() {
        let mut gauge = GaugeAnimation::new();
        gauge.retarget(0.0);
        assert!(!gauge.is_running());
        assert_eq!(gauge.target(), 0.0);
    }
}
