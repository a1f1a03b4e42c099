//! Scroll animation controller.
//!
//! Moves the viewport row toward targets picked by the navigator. Call
//! `scroll_to()` when a transition starts, then `update()` every frame for
//! the interpolated position. Timestamps are injected so the controller
//! tests without sleeping.

use std::time::{Duration, Instant};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{is_complete, lerp_u16, progress, EasingType, EasingTypeExt};

/// An in-flight transition
#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

/// Viewport scroll state with optional animated transitions
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    /// Interpolated position, refreshed by `update()`
    current_scroll: u16,
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current_scroll: 0,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Final position once any active animation completes
    pub fn target_scroll(&self) -> u16 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current_scroll)
    }

    #[inline]
    pub fn current_scroll(&self) -> u16 {
        self.current_scroll
    }

    /// Jump to a position with no animation (scrollbar drags, resizes)
    pub fn set_scroll(&mut self, scroll: u16) {
        self.animation = None;
        self.current_scroll = scroll;
    }

    /// Begin a transition to `target`. Replaces any active animation,
    /// starting from the currently visible position. Jumps instantly when
    /// smooth scrolling is disabled.
    pub fn scroll_to(&mut self, target: u16, max_scroll: u16, now: Instant) {
        let target = target.min(max_scroll);

        if !self.config.is_smooth() {
            self.current_scroll = target;
            self.animation = None;
            return;
        }

        if self.current_scroll == target {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.current_scroll,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Advance the animation and return the interpolated position
    pub fn update(&mut self, max_scroll: u16, now: Instant) -> u16 {
        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, anim.duration, now) {
                self.current_scroll = anim.to.min(max_scroll);
                self.animation = None;
            } else {
                let t = progress(anim.start, anim.duration, now);
                let eased = anim.easing.apply(t);
                self.current_scroll = lerp_u16(anim.from, anim.to, eased).min(max_scroll);
            }
        } else {
            self.current_scroll = self.current_scroll.min(max_scroll);
        }

        self.current_scroll
    }

    /// Drop any active animation and stay at the current position
    pub fn cancel(&mut self) {
        self.animation = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_instant_jump_when_smooth_disabled() {
        let config = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut animator = ScrollAnimator::new(config);
        animator.scroll_to(100, 200, Instant::now());
        assert_eq!(animator.current_scroll(), 100);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_animation_runs_to_target() {
        let config = ScrollConfig {
            animation_duration_ms: 100,
            easing: EasingType::Linear,
            ..Default::default()
        };
        let mut animator = ScrollAnimator::new(config);
        let t0 = Instant::now();

        animator.scroll_to(100, 200, t0);
        assert!(animator.is_animating());
        assert_eq!(animator.target_scroll(), 100);

        assert_eq!(animator.update(200, t0 + ms(50)), 50);
        assert_eq!(animator.update(200, t0 + ms(100)), 100);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_new_target_replaces_animation_from_visible_position() {
        let config = ScrollConfig {
            animation_duration_ms: 100,
            easing: EasingType::Linear,
            ..Default::default()
        };
        let mut animator = ScrollAnimator::new(config);
        let t0 = Instant::now();

        animator.scroll_to(100, 200, t0);
        animator.update(200, t0 + ms(50));
        animator.scroll_to(0, 200, t0 + ms(50));
        // Restarted mid-flight from row 50, heading back to 0
        assert_eq!(animator.target_scroll(), 0);
        assert_eq!(animator.update(200, t0 + ms(100)), 25);
        assert_eq!(animator.update(200, t0 + ms(150)), 0);
    }

    #[test]
    fn test_target_clamped_to_max() {
        let mut animator = ScrollAnimator::new(ScrollConfig::default());
        let t0 = Instant::now();
        animator.set_scroll(50);
        animator.scroll_to(300, 100, t0);
        assert!(animator.target_scroll() <= 100);
    }

    #[test]
    fn test_scroll_to_current_position_is_noop() {
        let mut animator = ScrollAnimator::new(ScrollConfig::default());
        animator.set_scroll(40);
        animator.scroll_to(40, 100, Instant::now());
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_update_clamps_when_max_shrinks() {
        let mut animator = ScrollAnimator::new(ScrollConfig::default());
        animator.set_scroll(80);
        // Viewport grew, canvas shrank: position follows the new max
        assert_eq!(animator.update(60, Instant::now()), 60);
    }
}
