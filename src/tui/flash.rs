use std::time::{Duration, Instant};

/// Short highlight on a row that just moved. Keyed by item id since the
/// row's index changed with the move.
#[derive(Debug, Clone)]
pub struct Flash {
    pub id: String,
    started: Instant,
    duration: Duration,
}

impl Flash {
    pub fn new(id: impl Into<String>, duration: Duration) -> Self {
        Self::started_at(id, duration, Instant::now())
    }

    pub fn started_at(id: impl Into<String>, duration: Duration, started: Instant) -> Self {
        Flash {
            id: id.into(),
            started,
            duration,
        }
    }

    pub fn is_active_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) < self.duration
    }

    /// Fraction of the flash still to run, from 1.0 down to 0.0.
    pub fn remaining_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        (1.0 - elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_expires() {
        let start = Instant::now();
        let flash = Flash::started_at("a", Duration::from_millis(700), start);
        assert!(flash.is_active_at(start));
        assert!(flash.is_active_at(start + Duration::from_millis(699)));
        assert!(!flash.is_active_at(start + Duration::from_millis(700)));
    }

    #[test]
    fn test_remaining_fraction() {
        let start = Instant::now();
        let flash = Flash::started_at("a", Duration::from_millis(1000), start);
        assert_eq!(flash.remaining_at(start), 1.0);
        let half = flash.remaining_at(start + Duration::from_millis(500));
        assert!((half - 0.5).abs() < 0.01);
        assert_eq!(flash.remaining_at(start + Duration::from_secs(5)), 0.0);
    }

    #[test]
    fn test_zero_duration_is_never_active() {
        let start = Instant::now();
        let flash = Flash::started_at("a", Duration::ZERO, start);
        assert!(!flash.is_active_at(start));
        assert_eq!(flash.remaining_at(start), 0.0);
    }
}
