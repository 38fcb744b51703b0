//! Header bar widget.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, SessionMode};

/// Draw the header bar with title and session mode.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        "pigview - Pipeline Anomaly Triage",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];

    if app.has_session() && app.mode == SessionMode::Local {
        spans.push(Span::styled(
            "  [local mode - sample data]",
            Style::default().fg(Color::Yellow),
        ));
    }

    let title = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(title, area);
}
