//! `ScrollConfig` utilities; the type itself lives in snapdeck-core.

use std::time::Duration;

pub use snapdeck_core::{EasingType, ScrollConfig};

/// Extension trait for `ScrollConfig` with derived durations
pub trait ScrollConfigExt {
    /// Transition duration (and the navigator's settle window)
    fn animation_duration(&self) -> Duration;

    /// Tick interval for the animation frame rate
    fn animation_tick_duration(&self) -> Duration;

    /// Whether smooth scrolling is effectively enabled
    fn is_smooth(&self) -> bool;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }
}
