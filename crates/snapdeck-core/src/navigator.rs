//! Section navigation state machine.
//!
//! Owns the current section index, the animation lock (a settle deadline),
//! and the wheel throttle baseline. All methods are pure state transitions
//! over injected timestamps; issuing the actual scroll command and redrawing
//! the UI are the caller's job, so everything here unit-tests without a
//! terminal.

use std::time::{Duration, Instant};

use tracing::warn;

use crate::config::ScrollConfig;
use crate::deck::Deck;

/// Outcome of feeding one wheel event to the navigator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Event consumed with no transition (animating, or inside the
    /// throttle window)
    Swallowed,
    /// Delta below the sensitivity threshold; not consumed, no action
    PassedThrough,
    /// Transition accepted; carries the new current index
    Scrolled(usize),
}

/// Direction the scroll-hint indicator points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintDirection {
    Up,
    Down,
}

impl HintDirection {
    /// Hint text shown next to the indicator
    pub fn hint(&self) -> &'static str {
        match self {
            HintDirection::Up => "UP",
            HintDirection::Down => "DOWN",
        }
    }

    /// Accessible label for the indicator itself
    pub fn label(&self) -> &'static str {
        match self {
            HintDirection::Up => "Scroll up",
            HintDirection::Down => "Scroll down",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            HintDirection::Up => "▲",
            HintDirection::Down => "▼",
        }
    }
}

/// Derived UI state: a total function of the current index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiProjection {
    /// Index into the deck's nav links of the one active link, if any
    /// link targets the current section
    pub active_link: Option<usize>,
    /// "up" only at the last section; top and middle both point down
    pub direction: HintDirection,
}

/// Section navigation state machine
#[derive(Debug, Clone)]
pub struct Navigator {
    current: usize,
    count: usize,
    settle: Duration,
    throttle: Duration,
    threshold: i32,
    /// While `now` is before this deadline a transition is in flight.
    /// Every accepted scroll command replaces it, so an earlier command's
    /// expiry can never clear a later command's lock.
    settle_until: Option<Instant>,
    /// Baseline of the wheel throttle window; only accepted wheel
    /// transitions move it
    last_wheel: Option<Instant>,
}

impl Navigator {
    pub fn new(count: usize, config: &ScrollConfig) -> Self {
        Self {
            current: 0,
            count,
            settle: Duration::from_millis(config.animation_duration_ms),
            throttle: Duration::from_millis(config.wheel_throttle_ms),
            threshold: config.wheel_threshold,
            settle_until: None,
            last_wheel: None,
        }
    }

    /// Current section index, always in `[0, count-1]`
    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn last_index(&self) -> usize {
        self.count.saturating_sub(1)
    }

    /// Whether a transition is inside its settle window
    #[inline]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.settle_until.is_some_and(|deadline| now < deadline)
    }

    /// Clear an expired settle deadline (Animating -> Idle)
    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.settle_until {
            if now >= deadline {
                self.settle_until = None;
            }
        }
    }

    /// Move to `target`, silently clamped into range. Arms the settle
    /// window; the caller issues the matching scroll command and refreshes
    /// derived UI. Returns the clamped index.
    pub fn scroll_to(&mut self, target: isize, now: Instant) -> usize {
        let clamped = target.clamp(0, self.last_index() as isize) as usize;
        self.current = clamped;
        self.settle_until = Some(now + self.settle);
        clamped
    }

    /// Wheel input gate: swallow while animating or throttled, pass
    /// sub-threshold deltas through as noise, otherwise step one section
    /// in the delta's direction.
    pub fn handle_wheel(&mut self, delta: i32, now: Instant) -> WheelOutcome {
        if self.is_animating(now) {
            return WheelOutcome::Swallowed;
        }
        if let Some(last) = self.last_wheel {
            if now.duration_since(last) < self.throttle {
                return WheelOutcome::Swallowed;
            }
        }
        if delta.abs() < self.threshold {
            return WheelOutcome::PassedThrough;
        }
        self.last_wheel = Some(now);
        let step = if delta > 0 { 1 } else { -1 };
        WheelOutcome::Scrolled(self.scroll_to(self.current as isize + step, now))
    }

    /// Passive reconciliation to a scroll position this navigator did not
    /// command (scrollbar drag). No-op while animating; no transition is
    /// triggered. Returns the adopted index when it changed.
    pub fn sync_scroll_position(
        &mut self,
        offsets: &[u16],
        position: u16,
        now: Instant,
    ) -> Option<usize> {
        if self.is_animating(now) {
            return None;
        }
        let idx = closest_index(offsets, position);
        if idx != self.current {
            self.current = idx;
            Some(idx)
        } else {
            None
        }
    }

    /// Indicator click: wrap to the top from the last section, otherwise
    /// advance one
    pub fn indicator_click(&mut self, now: Instant) -> usize {
        if self.current >= self.last_index() {
            self.scroll_to(0, now)
        } else {
            self.scroll_to(self.current as isize + 1, now)
        }
    }

    /// Derived UI state for the current index
    pub fn projection(&self, deck: &Deck) -> UiProjection {
        let active_link = deck
            .sections
            .get(self.current)
            .and_then(|section| deck.nav_links.iter().position(|l| l.target == section.id));
        let direction = if self.current >= self.last_index() {
            HintDirection::Up
        } else {
            HintDirection::Down
        };
        UiProjection {
            active_link,
            direction,
        }
    }
}

/// Index whose offset is closest to `position`; the first encountered
/// minimum wins on exact ties
pub fn closest_index(offsets: &[u16], position: u16) -> usize {
    let mut best = 0;
    let mut best_dist = u16::MAX;
    for (i, &offset) in offsets.iter().enumerate() {
        let dist = offset.abs_diff(position);
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

/// Resolve the start fragment against the deck: `(index, animate)`.
/// A matching fragment starts there and animates in; anything else starts
/// at the top without animating.
pub fn initial_index(deck: &Deck, fragment: Option<&str>) -> (usize, bool) {
    match fragment {
        Some(id) => match deck.section_index(id) {
            Some(idx) => (idx, true),
            None => {
                warn!("start section '{}' not found, starting at the top", id);
                (0, false)
            }
        },
        None => (0, false),
    }
}
