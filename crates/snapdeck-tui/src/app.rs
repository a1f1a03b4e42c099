use std::time::Instant;

use ratatui::layout::{Position, Rect};
use tracing::warn;

use snapdeck_core::navigator::initial_index;
use snapdeck_core::{AppConfig, Deck, Navigator, UiProjection, WheelOutcome};

use crate::input::Action;
use crate::scroll::ScrollAnimator;
use crate::theme::Theme;

/// Application state
pub struct App {
    pub deck: Deck,
    pub config: AppConfig,
    pub theme: Theme,
    /// Section index state machine (pure; owns the animation lock)
    pub navigator: Navigator,
    /// Viewport row interpolation toward the navigator's targets
    pub animator: ScrollAnimator,
    /// Area the stacked sections render into; refreshed every frame
    pub section_area: Rect,
    /// Click zones for the nav links, recorded by the nav bar render
    pub nav_zones: Vec<Rect>,
    /// Click zone for the scroll-hint indicator
    pub indicator_zone: Rect,
    /// Click/drag zone for the scrollbar track
    pub scrollbar_zone: Rect,
    /// A scrollbar drag is in progress
    pub dragging_scrollbar: bool,
    /// Status message shown instead of the default status line
    pub status_message: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Start-fragment section to animate to once the first layout is known
    pending_start: Option<usize>,
}

impl App {
    pub fn new(deck: Deck, config: AppConfig, theme: Theme, fragment: Option<&str>) -> Self {
        let (start, animate) = initial_index(&deck, fragment);
        let navigator = Navigator::new(deck.len(), &config.scroll);
        let animator = ScrollAnimator::new(config.scroll.clone());
        Self {
            deck,
            navigator,
            animator,
            config,
            theme,
            section_area: Rect::default(),
            nav_zones: Vec::new(),
            indicator_zone: Rect::default(),
            scrollbar_zone: Rect::default(),
            dragging_scrollbar: false,
            status_message: None,
            should_quit: false,
            pending_start: animate.then_some(start),
        }
    }

    /// Row offset of each section: one full viewport height apiece
    pub fn section_offsets(&self) -> Vec<u16> {
        let h = self.section_area.height;
        (0..self.deck.len())
            .map(|i| (i as u16).saturating_mul(h))
            .collect()
    }

    pub fn offset_of(&self, index: usize) -> u16 {
        (index as u16).saturating_mul(self.section_area.height)
    }

    pub fn max_scroll(&self) -> u16 {
        self.offset_of(self.navigator.last_index())
    }

    /// Record the section area for this frame. On a size change the
    /// viewport snaps to the current section's new offset; a pending
    /// start fragment animates in once the first layout is known.
    pub fn on_layout(&mut self, area: Rect, now: Instant) {
        if area == self.section_area {
            return;
        }
        self.section_area = area;
        match self.pending_start.take() {
            Some(idx) => self.go_to(idx as isize, now),
            None => {
                let offset = self.offset_of(self.navigator.current());
                self.animator.set_scroll(offset);
            }
        }
    }

    /// Advance timers: settle-deadline expiry and animation interpolation
    pub fn tick(&mut self, now: Instant) {
        self.navigator.tick(now);
        let max = self.max_scroll();
        self.animator.update(max, now);
    }

    /// Command a transition: navigator picks the clamped index, animator
    /// moves the viewport there
    pub fn go_to(&mut self, target: isize, now: Instant) {
        let idx = self.navigator.scroll_to(target, now);
        let max = self.max_scroll();
        self.animator.scroll_to(self.offset_of(idx), max, now);
    }

    /// Apply one input action
    pub fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::NextSection => {
                self.go_to(self.navigator.current() as isize + 1, now);
            }
            Action::PrevSection => {
                self.go_to(self.navigator.current() as isize - 1, now);
            }
            Action::FirstSection => {
                self.go_to(0, now);
            }
            Action::LastSection => {
                self.go_to(self.navigator.last_index() as isize, now);
            }
            Action::Wheel(delta) => {
                if let WheelOutcome::Scrolled(idx) = self.navigator.handle_wheel(delta, now) {
                    let max = self.max_scroll();
                    self.animator.scroll_to(self.offset_of(idx), max, now);
                }
            }
            Action::ActivateLink(link_idx) => {
                self.activate_link(link_idx, now);
            }
            Action::IndicatorClick => {
                let idx = self.navigator.indicator_click(now);
                let max = self.max_scroll();
                self.animator.scroll_to(self.offset_of(idx), max, now);
            }
            Action::ScrollbarTo(row) => {
                // Passive path: only reconcile while idle
                if !self.navigator.is_animating(now) {
                    self.dragging_scrollbar = true;
                    let position = self.scrollbar_position(row);
                    self.animator.set_scroll(position);
                    let offsets = self.section_offsets();
                    self.navigator.sync_scroll_position(&offsets, position, now);
                }
            }
            Action::EndDrag => {
                self.dragging_scrollbar = false;
            }
            Action::None => {}
        }
    }

    /// Resolve a nav link's target and go there. An unmatched target
    /// resolves to -1 and clamps to the first section.
    fn activate_link(&mut self, link_idx: usize, now: Instant) {
        let Some(link) = self.deck.nav_links.get(link_idx) else {
            return;
        };
        let target = self
            .deck
            .section_index(&link.target)
            .map(|idx| idx as isize)
            .unwrap_or(-1);
        if target < 0 {
            warn!("nav link '{}' targets unknown section '{}'", link.label, link.target);
        }
        self.go_to(target, now);
    }

    /// Derived UI state for this frame
    pub fn projection(&self) -> UiProjection {
        self.navigator.projection(&self.deck)
    }

    /// Whether the redraw loop should run at the animation frame rate
    pub fn is_transition_active(&self, now: Instant) -> bool {
        self.navigator.is_animating(now) || self.animator.is_animating()
    }

    /// Nav link index under the given position, if any
    pub fn nav_zone_at(&self, pos: Position) -> Option<usize> {
        self.nav_zones.iter().position(|zone| zone.contains(pos))
    }

    /// Map a scrollbar track row to a viewport scroll position
    pub fn scrollbar_position(&self, row: u16) -> u16 {
        let track = self.scrollbar_zone;
        if track.height <= 1 {
            return 0;
        }
        let clamped = row.clamp(track.y, track.y + track.height - 1) - track.y;
        let ratio = clamped as f64 / (track.height - 1) as f64;
        (ratio * self.max_scroll() as f64).round() as u16
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(fragment: Option<&str>) -> App {
        App::new(
            Deck::sample(),
            AppConfig::default(),
            Theme::default(),
            fragment,
        )
    }

    fn laid_out(fragment: Option<&str>, now: Instant) -> App {
        let mut app = app_with(fragment);
        app.on_layout(Rect::new(0, 1, 80, 22), now);
        app
    }

    #[test]
    fn test_layout_offsets() {
        let app = laid_out(None, Instant::now());
        assert_eq!(app.section_offsets(), vec![0, 22, 44, 66]);
        assert_eq!(app.max_scroll(), 66);
    }

    #[test]
    fn test_plain_start_does_not_animate() {
        let app = laid_out(None, Instant::now());
        assert_eq!(app.navigator.current(), 0);
        assert!(!app.animator.is_animating());
        assert_eq!(app.animator.current_scroll(), 0);
    }

    #[test]
    fn test_fragment_start_animates_in() {
        let now = Instant::now();
        let app = laid_out(Some("work"), now);
        assert_eq!(app.navigator.current(), 2);
        assert!(app.navigator.is_animating(now));
        assert_eq!(app.animator.target_scroll(), 44);
    }

    #[test]
    fn test_next_prev_actions() {
        let now = Instant::now();
        let mut app = laid_out(None, now);
        app.apply(Action::NextSection, now);
        assert_eq!(app.navigator.current(), 1);
        assert_eq!(app.animator.target_scroll(), 22);
        app.apply(Action::PrevSection, now);
        assert_eq!(app.navigator.current(), 0);
    }

    #[test]
    fn test_end_key_then_indicator_wraps_home() {
        let t0 = Instant::now();
        let mut app = laid_out(None, t0);
        app.apply(Action::LastSection, t0);
        assert_eq!(app.navigator.current(), 3);
        app.apply(Action::IndicatorClick, t0 + std::time::Duration::from_millis(500));
        assert_eq!(app.navigator.current(), 0);
        assert_eq!(app.animator.target_scroll(), 0);
    }

    #[test]
    fn test_wheel_action_scrolls_once() {
        let t0 = Instant::now();
        let mut app = laid_out(None, t0);
        app.apply(Action::Wheel(20), t0);
        assert_eq!(app.navigator.current(), 1);
        // Second notch lands inside the settle window and is swallowed
        app.apply(Action::Wheel(20), t0 + std::time::Duration::from_millis(50));
        assert_eq!(app.navigator.current(), 1);
    }

    #[test]
    fn test_unmatched_link_target_clamps_to_top() {
        let t0 = Instant::now();
        let mut app = laid_out(None, t0);
        app.deck.nav_links[1].target = "missing".to_string();
        app.apply(Action::NextSection, t0);
        let t1 = t0 + std::time::Duration::from_millis(500);
        app.apply(Action::ActivateLink(1), t1);
        assert_eq!(app.navigator.current(), 0);
    }

    #[test]
    fn test_link_click_targets_section() {
        let t0 = Instant::now();
        let mut app = laid_out(None, t0);
        app.apply(Action::ActivateLink(3), t0);
        assert_eq!(app.navigator.current(), 3);
        assert_eq!(app.projection().active_link, Some(3));
    }

    #[test]
    fn test_scrollbar_drag_reconciles_index() {
        let t0 = Instant::now();
        let mut app = laid_out(None, t0);
        app.scrollbar_zone = Rect::new(79, 1, 1, 22);
        // Dragging to the bottom of the track lands on the last section
        app.apply(Action::ScrollbarTo(22), t0);
        assert!(app.dragging_scrollbar);
        assert_eq!(app.navigator.current(), 3);
        assert!(!app.navigator.is_animating(t0));
        app.apply(Action::EndDrag, t0);
        assert!(!app.dragging_scrollbar);
    }

    #[test]
    fn test_scrollbar_ignored_while_animating() {
        let t0 = Instant::now();
        let mut app = laid_out(None, t0);
        app.scrollbar_zone = Rect::new(79, 1, 1, 22);
        app.apply(Action::NextSection, t0);
        app.apply(Action::ScrollbarTo(22), t0 + std::time::Duration::from_millis(50));
        assert_eq!(app.navigator.current(), 1);
    }

    #[test]
    fn test_resize_snaps_to_current_section() {
        let t0 = Instant::now();
        let mut app = laid_out(None, t0);
        app.apply(Action::LastSection, t0);
        let t1 = t0 + std::time::Duration::from_millis(500);
        app.tick(t1);
        app.on_layout(Rect::new(0, 1, 80, 30), t1);
        assert_eq!(app.navigator.current(), 3);
        assert_eq!(app.animator.current_scroll(), 90);
        assert!(!app.animator.is_animating());
    }
}
