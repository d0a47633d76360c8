//! Duration helpers over the core configuration

use std::time::Duration;

pub use odometer_core::config::{OdometerConfig, UiConfig};

/// Roll timings as `Duration`s
pub trait OdometerConfigExt {
    /// Duration budget for a whole roll
    fn animation_duration(&self) -> Duration;

    /// Extra settle time per successive track
    fn duration_offset(&self) -> Duration;

    fn min_track_duration(&self) -> Duration;
}

impl OdometerConfigExt for OdometerConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn duration_offset(&self) -> Duration {
        Duration::from_millis(self.duration_offset_ms)
    }

    #[inline]
    fn min_track_duration(&self) -> Duration {
        Duration::from_millis(self.min_track_duration_ms)
    }
}

/// Frame pacing for the host loop
pub trait UiConfigExt {
    fn tick_duration(&self) -> Duration;

    /// Poll interval while a roll is in flight
    fn animation_tick_duration(&self) -> Duration;
}

impl UiConfigExt for UiConfig {
    #[inline]
    fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_durations() {
        let config = OdometerConfig::default();
        assert_eq!(config.animation_duration(), Duration::from_millis(1500));
        assert_eq!(config.duration_offset(), Duration::from_millis(200));
        assert_eq!(config.min_track_duration(), Duration::from_millis(200));
    }

    #[test]
    fn test_animation_tick() {
        let mut ui = UiConfig::default();
        assert_eq!(ui.animation_tick_duration(), Duration::from_millis(16));
        assert_eq!(ui.tick_duration(), Duration::from_millis(100));

        ui.animation_fps = 30;
        assert_eq!(ui.animation_tick_duration(), Duration::from_millis(33));

        ui.animation_fps = 0;
        assert_eq!(ui.animation_tick_duration(), Duration::from_millis(16));
    }
}
