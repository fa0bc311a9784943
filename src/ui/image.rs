// Image source labels for cards and the detail view.

use ratatui::prelude::*;

use crate::cache::data_url;

/// Describe an image source as a styled span.
pub fn image_span(source: Option<&str>, max_width: usize) -> Span<'static> {
    match source {
        Some(src) => match data_url::describe(src) {
            Some((mime, size)) => Span::styled(
                truncate(
                    &format!("● cached {} {}", mime, data_url::format_size(size)),
                    max_width,
                ),
                Style::default().fg(Color::Green),
            ),
            None => Span::styled(
                truncate(&format!("○ {}", src), max_width),
                Style::default().fg(Color::Blue),
            ),
        },
        None => Span::styled("no image", Style::default().fg(Color::DarkGray)),
    }
}

/// Truncate text to a display width, marking the cut with an ellipsis.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max_width - 1).collect();
    out.push('…');
    out
}
