use chrono::{Datelike, Local};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let ui = app.projection();
        let position = app.navigator.current() + 1;
        let count = app.navigator.count();

        let status_text = if let Some(msg) = &app.status_message {
            msg.clone()
        } else {
            let year = if app.config.ui.show_year {
                format!(" | {}", Local::now().year())
            } else {
                String::new()
            };
            format!(
                " {} | {}/{} | {}{}",
                app.deck.title,
                position,
                count,
                ui.direction.label(),
                year
            )
        };

        let help_hint = " q:quit ↑/↓:sections Home/End:jump ";
        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.chars().count() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(app.theme.fg0).bg(app.theme.bg2),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(app.theme.bg2),
            ),
            Span::styled(
                help_hint,
                Style::default().fg(app.theme.grey1).bg(app.theme.bg2),
            ),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}
