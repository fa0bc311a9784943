// Product grid for the listing view.
// Lays cards out in wrapped rows and keeps the selected row on screen.

use ratatui::{prelude::*, widgets::*};

use crate::state::{Card, ListingState, LoadingState};

use super::image::{image_span, truncate};
use super::placeholder::{render_empty, render_error, render_loading};

/// Card size including borders.
pub const CARD_WIDTH: u16 = 28;
pub const CARD_HEIGHT: u16 = 5;

/// Number of card columns that fit in a width.
pub fn columns_for(width: u16) -> usize {
    (width / CARD_WIDTH).max(1) as usize
}

/// Render the listing view.
pub fn render_listing(frame: &mut Frame, state: &mut ListingState, area: Rect) {
    let title = match state.data.data() {
        Some(listing) => format!(" Products ({}) ", listing.products.len()),
        None => " Products ".to_string(),
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &state.data {
        LoadingState::Idle | LoadingState::Loading => {
            render_loading(frame, inner, "Loading products")
        }
        LoadingState::Error(e) => render_error(frame, inner, e),
        LoadingState::Loaded(listing) => {
            if listing.products.is_empty() {
                render_empty(frame, inner, "No products");
                return;
            }
            state.set_columns(columns_for(inner.width));
            render_cards(frame, state, inner);
        }
    }
}

fn render_cards(frame: &mut Frame, state: &ListingState, area: Rect) {
    let columns = state.columns();
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let selected_row = state.selected() / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    for (index, card) in state.cards().iter().enumerate() {
        let row = index / columns;
        if row < first_row || row >= first_row + visible_rows {
            continue;
        }
        let col = (index % columns) as u16;
        let card_area = Rect {
            x: area.x + col * CARD_WIDTH,
            y: area.y + (row - first_row) as u16 * CARD_HEIGHT,
            width: CARD_WIDTH.min(area.width),
            height: CARD_HEIGHT.min(area.height),
        };
        render_card(frame, card, index == state.selected(), card_area);
    }
}

fn render_card(frame: &mut Frame, card: &Card<'_>, selected: bool, area: Rect) {
    let border_style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let text_width = area.width.saturating_sub(2) as usize;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" #{} ", card.id));

    let lines = vec![
        Line::styled(
            truncate(card.title, text_width),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(card.price.clone(), Style::default().fg(Color::White)),
        Line::from(image_span(card.image, text_width)),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
