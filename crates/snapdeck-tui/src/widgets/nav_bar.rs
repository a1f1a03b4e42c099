use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct NavBarWidget;

impl NavBarWidget {
    /// Render the deck title and nav links; exactly one link is active.
    /// Click zones are recorded on the app for mouse hit-testing.
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let ui = app.projection();
        let theme = app.theme.clone();

        let title = format!(" {} ", app.deck.title);
        let mut spans = vec![Span::styled(
            title.clone(),
            Style::default()
                .fg(theme.accent)
                .bg(theme.bg2)
                .add_modifier(Modifier::BOLD),
        )];

        let mut zones = Vec::with_capacity(app.deck.nav_links.len());
        let mut x = area.x.saturating_add(title.width() as u16);
        let right = area.right();

        for (i, link) in app.deck.nav_links.iter().enumerate() {
            let label = format!("  {}  ", link.label);
            let width = label.width() as u16;

            let style = if ui.active_link == Some(i) {
                Style::default()
                    .fg(theme.bg0)
                    .bg(theme.active)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg1).bg(theme.bg2)
            };

            // Zones clip at the bar's right edge; clipped links are not
            // clickable
            let visible = width.min(right.saturating_sub(x));
            zones.push(Rect::new(x, area.y, visible, area.height));

            spans.push(Span::styled(label, style));
            x = x.saturating_add(width);
        }

        app.nav_zones = zones;

        let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg2));
        frame.render_widget(bar, area);
    }
}
