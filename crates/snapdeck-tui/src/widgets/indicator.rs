use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct IndicatorWidget;

impl IndicatorWidget {
    /// Render the directional scroll hint: "▼ DOWN" everywhere except the
    /// last section, "▲ UP" there. Clicking it advances (or wraps home).
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let ui = app.projection();
        let text = format!("{} {}", ui.direction.glyph(), ui.direction.hint());

        // The click zone covers only the glyph and hint, not the whole row
        let width = (text.width() as u16).min(area.width);
        let x = area.x + area.width.saturating_sub(width) / 2;
        app.indicator_zone = Rect::new(x, area.y, width, area.height);

        let line = Line::from(Span::styled(
            text,
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .centered();

        let hint = Paragraph::new(line).style(Style::default().bg(app.theme.bg1));
        frame.render_widget(hint, area);
    }
}
