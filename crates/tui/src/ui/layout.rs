//! Top-level screen layout.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
};

use crate::app::{App, InputMode, Tab};
use crate::ui::tabs::{draw_load_tab, draw_overview_tab, draw_results_tab};
use crate::ui::{footer, header};

/// Draw the whole UI.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Tab bar
            Constraint::Min(10),   // Body
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    header::draw_header(frame, chunks[0], app);
    draw_tab_bar(frame, chunks[1], app);

    match app.current_tab {
        Tab::Load => draw_load_tab(frame, chunks[2], app),
        Tab::Overview => draw_overview_tab(frame, chunks[2], app),
        Tab::Results => draw_results_tab(frame, chunks[2], app),
    }

    footer::draw_footer(frame, chunks[3], app);

    if app.input_mode == InputMode::FileDialog {
        draw_file_dialog(frame, app);
    }
}

fn draw_tab_bar(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<String> = Tab::all()
        .iter()
        .enumerate()
        .map(|(i, tab)| format!("{} {}", i + 1, tab.name()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.current_tab.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(tabs, area);
}

fn draw_file_dialog(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 3, frame.area());
    let input = Paragraph::new(app.file_input.as_str())
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" File path ")
                .border_style(Style::default().fg(Color::Cyan)),
        );
    frame.render_widget(Clear, area);
    frame.render_widget(input, area);
}

/// Fixed-height rect centered in `area`, `percent_x` percent wide.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height.min(area.height))
}
