//! Pure easing and interpolation math for scroll animations.

use std::time::{Duration, Instant};

// Re-export the config-level enum; calculations live here so the core
// crate stays presentation-free
pub use snapdeck_core::EasingType;

/// Extension trait adding the actual curves to `EasingType`
pub trait EasingTypeExt {
    /// Map progress `t` in [0, 1] to an eased value in [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => ease_out_pow(t, 3),
            EasingType::Quintic => ease_out_pow(t, 5),
            EasingType::EaseOut => exponential_ease_out(t),
        }
    }
}

/// Polynomial ease-out: f(t) = 1 - (1-t)^n
#[inline]
fn ease_out_pow(t: f64, n: u32) -> f64 {
    1.0 - (1.0 - t).powi(n as i32)
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

/// Animation progress in [0, 1] given its start time and duration
#[inline]
pub fn progress(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

#[inline]
pub fn is_complete(start: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation over row positions
#[inline]
pub fn lerp_u16(from: u16, to: u16, t: f64) -> u16 {
    (from as f64 + (to as f64 - from as f64) * t).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 5] = [
        EasingType::None,
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quintic,
        EasingType::EaseOut,
    ];

    #[test]
    fn test_easing_boundaries() {
        for easing in ALL {
            if easing != EasingType::None {
                assert!(easing.apply(0.0).abs() < 0.001, "{:?} at t=0", easing);
            }
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=10 {
                let t = i as f64 / 10.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_lerp_u16() {
        assert_eq!(lerp_u16(0, 100, 0.0), 0);
        assert_eq!(lerp_u16(0, 100, 0.5), 50);
        assert_eq!(lerp_u16(0, 100, 1.0), 100);
        // Downward animations interpolate too
        assert_eq!(lerp_u16(100, 0, 0.5), 50);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress(start, Duration::ZERO, start) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_clamped() {
        let start = Instant::now();
        let d = Duration::from_millis(100);
        assert_eq!(progress(start, d, start), 0.0);
        assert_eq!(progress(start, d, start + Duration::from_millis(500)), 1.0);
        assert!(is_complete(start, d, start + d));
        assert!(!is_complete(start, d, start + Duration::from_millis(99)));
    }
}
