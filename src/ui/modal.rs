// Go-to-path prompt.

use ratatui::{prelude::*, widgets::*};

/// Draw the path prompt on top of the current view.
pub fn draw_path_prompt(frame: &mut Frame, input: &str) {
    let area = frame.area();

    let modal_width = 60.min(area.width);
    let modal_height = 4.min(area.height);
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;
    let modal_area = Rect::new(modal_x, modal_y, modal_width, modal_height);

    // Clear the area behind the modal
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Go to path ");

    let lines = vec![
        Line::from(vec![
            Span::styled("Path: ", Style::default().fg(Color::DarkGray)),
            Span::raw(input),
            Span::styled("█", Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::styled(" Enter", Style::default().fg(Color::Yellow)),
            Span::styled(" = Go  ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" = Cancel", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), modal_area);
}
