use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::app::App;

pub struct SectionViewWidget;

impl SectionViewWidget {
    /// Render the visible slice of the stacked sections at the animator's
    /// interpolated scroll row, plus the scrollbar track used for passive
    /// drag scrolling.
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        app.on_layout(area, std::time::Instant::now());

        let scroll = app.animator.current_scroll() as usize;
        let height = area.height as usize;
        if height == 0 {
            return;
        }

        let mut lines = Vec::with_capacity(height);
        for row in 0..height {
            // Sections are exactly one viewport tall, so the canvas row
            // decomposes into (section, row-in-section)
            let canvas_row = scroll + row;
            let idx = canvas_row / height;
            let section_row = canvas_row % height;
            lines.push(Self::section_line(app, idx, section_row, area.width));
        }

        let canvas = Paragraph::new(lines).style(Style::default().bg(app.theme.bg0));
        frame.render_widget(canvas, area);

        let mut scrollbar_state =
            ScrollbarState::new(app.max_scroll() as usize).position(scroll);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .track_style(Style::default().fg(app.theme.grey0))
            .thumb_style(Style::default().fg(app.theme.accent));
        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);

        app.scrollbar_zone = Rect::new(
            area.right().saturating_sub(1),
            area.y,
            1.min(area.width),
            area.height,
        );
    }

    /// One rendered row of a section block
    fn section_line(app: &App, idx: usize, section_row: usize, width: u16) -> Line<'static> {
        let theme = &app.theme;
        let Some(section) = app.deck.sections.get(idx) else {
            return Line::default();
        };

        let height = app.section_area.height as usize;
        let title_row = height / 3;
        let body_start = title_row + 3;

        if section_row == title_row {
            return Line::from(Span::styled(
                section.title.clone(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered();
        }
        if section_row == title_row + 1 {
            return Line::from(Span::styled(
                format!("#{}", section.id),
                Style::default().fg(theme.grey1),
            ))
            .centered();
        }
        if section_row >= body_start {
            if let Some(paragraph) = section.body.get(section_row - body_start) {
                return Line::from(Span::styled(
                    paragraph.clone(),
                    Style::default().fg(theme.fg0),
                ))
                .centered();
            }
        }
        // Section boundary rule on the last row
        if section_row + 1 == height && idx + 1 < app.deck.len() {
            return Line::from(Span::styled(
                "─".repeat(width as usize),
                Style::default().fg(theme.grey0),
            ));
        }

        Line::default()
    }
}
