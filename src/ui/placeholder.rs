// Placeholder rendering for views without content yet.
// Loading, error, and empty states share one look across views.

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

/// Format a timestamp as relative time (e.g., "2h ago").
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(*dt);

    if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(text, area);
}

/// Render an error message with the reload hint.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let lines = vec![
        Line::styled(format!("❌ {}", error), Style::default().fg(Color::Red)),
        Line::from(""),
        Line::from(vec![
            Span::styled("[ r ]", Style::default().fg(Color::Yellow)),
            Span::styled(" Retry", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}
