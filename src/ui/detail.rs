// Detail view rendering.

use ratatui::{prelude::*, widgets::*};

use crate::state::{DetailState, LoadingState};

use super::image::image_span;
use super::placeholder::{render_error, render_loading};

/// Render the detail view for one product.
pub fn render_detail(frame: &mut Frame, state: &DetailState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Product #{} ", state.id));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let detail = match &state.data {
        LoadingState::Idle | LoadingState::Loading => {
            render_loading(frame, inner, "Loading product");
            return;
        }
        LoadingState::Error(e) => {
            render_error(frame, inner, e);
            return;
        }
        LoadingState::Loaded(detail) => detail,
    };
    let product = &detail.product;
    let label = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::styled(
            product.title.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(product.price_label(), Style::default().fg(Color::White)),
        Line::from(""),
    ];

    let fields = [
        ("Category", product.category.clone()),
        ("Brand", product.brand.clone()),
        ("Rating", product.rating.map(|r| format!("{:.2}", r))),
        ("Stock", product.stock.map(|s| s.to_string())),
    ];
    for (name, value) in fields {
        if let Some(value) = value {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<10}", name), label),
                Span::raw(value),
            ]));
        }
    }

    lines.push(Line::from(vec![
        Span::styled(format!("{:<10}", "Image"), label),
        image_span(detail.image.as_deref(), inner.width.saturating_sub(10) as usize),
    ]));

    if let Some(description) = &product.description {
        lines.push(Line::from(""));
        lines.push(Line::raw(description.clone()));
    }

    if product.images.len() > 1 {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("{} images", product.images.len()),
            label,
        ));
        for url in &product.images {
            lines.push(Line::styled(format!("  {}", url), Style::default().fg(Color::Blue)));
        }
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));
    frame.render_widget(paragraph, inner);
}
