//! Overview tab UI: the segment heat-map grid.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use triage::{page_segments, Segment, SegmentTier};

use crate::app::App;

const GRID_COLS: usize = 10;
const CELL: &str = " \u{25a0} ";

/// Draw the Overview tab.
pub fn draw_overview_tab(frame: &mut Frame, area: Rect, app: &App) {
    if !app.has_session() {
        let placeholder = Paragraph::new("Load data first (press [d] on the Load tab)")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Pipeline Overview "));
        frame.render_widget(placeholder, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Legend
            Constraint::Min(10),    // Grid
            Constraint::Length(6),  // Selected segment detail
        ])
        .split(area);

    draw_legend(frame, chunks[0], app);
    draw_grid(frame, chunks[1], app);
    draw_detail(frame, chunks[2], app);
}

fn tier_color(tier: Option<SegmentTier>) -> Color {
    match tier {
        Some(SegmentTier::Severe) => Color::Red,
        Some(SegmentTier::New) => Color::Yellow,
        Some(SegmentTier::Existing) => Color::Blue,
        None => Color::DarkGray,
    }
}

fn draw_legend(frame: &mut Frame, area: Rect, app: &App) {
    let segments = app.segments();
    let page = page_segments(&segments, app.overview_page, app.overview.segments_per_page);

    let legend = Line::from(vec![
        Span::styled("\u{25a0} Severe (\u{2265}7)  ", Style::default().fg(Color::Red)),
        Span::styled("\u{25a0} New (persistence 0)  ", Style::default().fg(Color::Yellow)),
        Span::styled("\u{25a0} Existing  ", Style::default().fg(Color::Blue)),
        Span::styled("\u{25a0} No anomalies   ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!(
            "Page {} of {}  ({} segments)",
            page.page + 1,
            page.total_pages.max(1),
            segments.len()
        )),
    ]);

    frame.render_widget(Paragraph::new(legend), area);
}

fn draw_grid(frame: &mut Frame, area: Rect, app: &App) {
    let segments = app.segments();
    let per_page = app.overview.segments_per_page;
    let page = page_segments(&segments, app.overview_page, per_page);
    let page_offset = app.overview_page * per_page;

    let mut lines: Vec<Line> = Vec::new();
    for (row_index, row) in page.segments.chunks(GRID_COLS).enumerate() {
        let mut spans: Vec<Span> = vec![Span::styled(
            format!("{:>5} ", row[0].segment_number),
            Style::default().fg(Color::DarkGray),
        )];
        for (col_index, segment) in row.iter().enumerate() {
            let index = page_offset + row_index * GRID_COLS + col_index;
            let mut style = Style::default().fg(tier_color(segment.dominant_tier()));
            if index == app.selected_segment {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(CELL, style));
        }
        lines.push(Line::from(spans));
    }

    let grid = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Pipeline Overview (10 joints per segment) "),
    );
    frame.render_widget(grid, area);
}

fn draw_detail(frame: &mut Frame, area: Rect, app: &App) {
    let segments = app.segments();
    let detail = match segments.get(app.selected_segment) {
        Some(segment) => segment_detail(segment),
        None => vec![Line::from("")],
    };

    let panel = Paragraph::new(detail)
        .style(Style::default().fg(Color::White))
        .block(Block::default().borders(Borders::ALL).title(" Segment "));
    frame.render_widget(panel, area);
}

fn segment_detail(segment: &Segment) -> Vec<Line<'static>> {
    let (from, to) = segment.range();
    let (severe, new, existing) = segment.tier_fractions();
    vec![
        Line::from(format!("Joints {from}-{to}   total {}", segment.total)),
        Line::from(vec![
            Span::styled("Severe ", Style::default().fg(Color::Red)),
            Span::raw(format!("{} ({:.0}%)   ", segment.severe, severe * 100.0)),
            Span::styled("New ", Style::default().fg(Color::Yellow)),
            Span::raw(format!("{} ({:.0}%)   ", segment.new, new * 100.0)),
            Span::styled("Existing ", Style::default().fg(Color::Blue)),
            Span::raw(format!("{} ({:.0}%)", segment.existing, existing * 100.0)),
        ]),
        Line::from(Span::styled(
            "Enter filters the results table from this segment onward.",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}
