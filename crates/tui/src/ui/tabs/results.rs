//! Results tab UI: the anomaly triage table.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use triage::{
    classify_confidence, classify_severity, AnomalyRecord, ConfidenceTier, SeverityTier,
    SortField, SortOrder, TriageSession,
};

use crate::app::App;

/// Draw the Results tab.
pub fn draw_results_tab(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.session.as_ref() else {
        let placeholder = Paragraph::new("Load data first (press [d] on the Load tab)")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Results "));
        frame.render_widget(placeholder, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status line
            Constraint::Min(6),    // Table
        ])
        .split(area);

    draw_status_line(frame, chunks[0], session);
    draw_table(frame, chunks[1], app, session);
}

fn draw_status_line(frame: &mut Frame, area: Rect, session: &TriageSession) {
    let page = session.current_page();
    let view = session.view();

    let mut spans = vec![Span::raw(match page.row_range(view.page_size) {
        Some((first, last)) => format!(
            "Showing {first}-{last} of {} anomalies   Page {} of {}",
            page.total_matches,
            page.page + 1,
            page.total_pages
        ),
        None => "No matching anomalies".to_string(),
    })];

    if let Some(segment) = view.segment_filter {
        spans.push(Span::styled(
            format!("   (from segment {segment} - [x] clears)"),
            Style::default().fg(Color::Cyan),
        ));
    }
    if view.unviewed_only {
        spans.push(Span::styled(
            "   (unviewed only)",
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn sort_marker(view_field: SortField, field: SortField, order: SortOrder) -> &'static str {
    if view_field != field {
        return "";
    }
    match order {
        SortOrder::Ascending => " \u{25b2}",
        SortOrder::Descending => " \u{25bc}",
    }
}

fn severity_color(tier: SeverityTier) -> Color {
    match tier {
        SeverityTier::Severe => Color::Red,
        SeverityTier::Moderate => Color::Yellow,
        SeverityTier::Low => Color::Green,
    }
}

fn confidence_color(tier: ConfidenceTier) -> Color {
    match tier {
        ConfidenceTier::High => Color::Green,
        ConfidenceTier::Medium => Color::Yellow,
        ConfidenceTier::Low => Color::Red,
    }
}

fn record_row(record: &AnomalyRecord) -> Row<'static> {
    let confidence_style =
        Style::default().fg(confidence_color(classify_confidence(record.confidence)));
    let severity_style = Style::default().fg(severity_color(classify_severity(record.severity)));

    Row::new(vec![
        Cell::from(record.anomaly_number.to_string()),
        Cell::from(record.joint_number.to_string()),
        Cell::from(format!("{:.1}", record.start_distance)),
        Cell::from(record.anomaly_type.clone()),
        Cell::from(format!("{:.1}%", record.confidence)).style(confidence_style),
        Cell::from(format!("{:.1}", record.severity)).style(severity_style),
        Cell::from(format!("{:.0}", record.persistence)),
        Cell::from(format!("{:.2}", record.growth_rate)),
        Cell::from(if record.viewed { "[x]" } else { "[ ]" }),
    ])
}

fn draw_table(frame: &mut Frame, area: Rect, app: &App, session: &TriageSession) {
    let page = session.current_page();
    let view = session.view();

    let header_titles: [(&str, Option<SortField>); 9] = [
        ("Anomaly #", None),
        ("Joint #", Some(SortField::JointNumber)),
        ("Start Dist", None),
        ("Type", Some(SortField::AnomalyType)),
        ("Confidence", Some(SortField::Confidence)),
        ("Severity", Some(SortField::Severity)),
        ("Persistence", Some(SortField::Persistence)),
        ("Growth", Some(SortField::GrowthRate)),
        ("Viewed", None),
    ];

    let header = Row::new(
        header_titles
            .iter()
            .map(|(title, field)| {
                let marker = field
                    .map(|f| sort_marker(view.sort_field, f, view.sort_order))
                    .unwrap_or("");
                Cell::from(format!("{title}{marker}"))
            })
            .collect::<Vec<_>>(),
    )
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = page.rows.iter().map(record_row).collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Length(11),
        Constraint::Length(14),
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(7),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(" Anomalies "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    state.select(if page.rows.is_empty() {
        None
    } else {
        Some(app.selected_row.min(page.rows.len() - 1))
    });

    frame.render_stateful_widget(table, area, &mut state);
}
