//! Load tab UI.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, SessionMode};

/// Draw the Load tab.
pub fn draw_load_tab(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Actions
            Constraint::Min(4),    // Session summary
        ])
        .split(area);

    draw_actions(frame, chunks[0], app);
    draw_session_summary(frame, chunks[1], app);
}

fn draw_actions(frame: &mut Frame, area: Rect, app: &App) {
    let api_url = std::env::var("PIGVIEW_API_URL")
        .unwrap_or_else(|_| "http://localhost:8000".to_string());

    let lines = vec![
        Line::from(""),
        Line::from("  [d]  Load demonstration data (local mode, no backend needed)"),
        Line::from("  [f]  Load a saved results JSON file (local mode)"),
        Line::from(vec![
            Span::raw("  [a]  Upload inspection CSVs and run analysis ("),
            Span::styled(api_url, Style::default().fg(Color::Cyan)),
            Span::raw(")"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  Analysis can take a few minutes on large inspection runs.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let actions = Paragraph::new(lines)
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL).title(" New Analysis "));

    frame.render_widget(actions, area);
}

fn draw_session_summary(frame: &mut Frame, area: Rect, app: &App) {
    let content = match &app.session {
        Some(session) => {
            let records = session.records();
            let unviewed = records.iter().filter(|r| !r.viewed).count();
            let segments = app.segments().len();
            vec![
                Line::from(""),
                Line::from(format!(
                    "  Active session: {} anomalies across {} segments ({} unviewed)",
                    records.len(),
                    segments,
                    unviewed
                )),
                Line::from(format!("  Mode: {}", app.mode.name())),
                Line::from(""),
                Line::from(Span::styled(
                    if app.mode == SessionMode::Local {
                        "  Viewed toggles stay in memory for this session."
                    } else {
                        "  Viewed toggles are written to the triage service."
                    },
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        }
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No analysis loaded yet.",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    };

    let summary = Paragraph::new(content)
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL).title(" Session "));

    frame.render_widget(summary, area);
}
