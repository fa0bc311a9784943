// Address bar rendering.
// Shows the current path, the navigation trail, and when the data was loaded.

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::state::BreadcrumbNode;

use super::placeholder::format_relative_time;

/// Render the address bar: path on the left, trail below it, load time on the right.
pub fn draw_address_bar(
    frame: &mut Frame,
    path: &str,
    breadcrumbs: &[BreadcrumbNode],
    area: Rect,
    loaded_at: Option<DateTime<Utc>>,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" shopfront ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![Span::styled(
        path.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::raw("   "));

    for (i, node) in breadcrumbs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" > ", Style::default().fg(Color::DarkGray)));
        }

        let style = if i == breadcrumbs.len() - 1 {
            // Current level is highlighted
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        spans.push(Span::styled(node.label.clone(), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);

    if let Some(ts) = loaded_at {
        let loaded = Paragraph::new(Line::styled(
            format!("loaded {}", format_relative_time(&ts)),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Right);
        frame.render_widget(loaded, inner);
    }
}
