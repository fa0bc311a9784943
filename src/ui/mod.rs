// UI module for rendering the TUI.
// Contains the address bar, product grid, detail view, and overlays.

mod breadcrumb;
mod detail;
mod grid;
mod image;
mod modal;
mod placeholder;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, View};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Address bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let (path, loaded_at) = match &app.view {
        View::Listing(state) => (
            app.nav.current().path(),
            state.data.data().map(|listing| listing.loaded_at),
        ),
        View::Detail(_) => (app.nav.current().path(), None),
        View::NoRoute { path } => (path.clone(), None),
    };
    breadcrumb::draw_address_bar(frame, &path, &app.nav.breadcrumbs(), chunks[0], loaded_at);

    draw_content(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    if let Some(input) = &app.prompt {
        modal::draw_path_prompt(frame, input);
    }

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the main content area for the current view.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    match &mut app.view {
        View::Listing(state) => grid::render_listing(frame, state, area),
        View::Detail(state) => detail::render_detail(frame, state, area),
        View::NoRoute { path } => {
            let block = Block::default().borders(Borders::ALL).title(" Not found ");
            let text = Paragraph::new(vec![
                Line::styled(
                    format!("No page matches {}", path),
                    Style::default().fg(Color::Red),
                ),
                Line::from(""),
                Line::styled("Press Esc to go back", Style::default().fg(Color::DarkGray)),
            ])
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(text, area);
        }
    }
}

/// Draw the status bar with keybinding hints and image cache counts.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut hints = match &app.view {
        View::Listing(_) => vec![
            Span::raw(" ←↑↓→ "),
            Span::styled("Move", Style::default().fg(Color::DarkGray)),
            Span::raw("  ↵ "),
            Span::styled("Open", Style::default().fg(Color::DarkGray)),
        ],
        View::Detail(_) => vec![
            Span::raw(" ↑↓ "),
            Span::styled("Scroll", Style::default().fg(Color::DarkGray)),
        ],
        View::NoRoute { .. } => Vec::new(),
    };
    // The no-route view always returns to the current route
    if app.nav.can_go_back() || matches!(app.view, View::NoRoute { .. }) {
        hints.extend([
            Span::raw("  Esc "),
            Span::styled("Back", Style::default().fg(Color::DarkGray)),
        ]);
    }
    hints.extend([
        Span::raw("  : "),
        Span::styled("Go to", Style::default().fg(Color::DarkGray)),
        Span::raw("  r "),
        Span::styled("Reload", Style::default().fg(Color::DarkGray)),
        Span::raw("  ? "),
        Span::styled("Help", Style::default().fg(Color::DarkGray)),
        Span::raw("  q "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ]);

    if let View::Listing(state) = &app.view {
        if let Some(listing) = state.data.data() {
            hints.push(Span::styled(
                format!("  Images: {} cached", listing.cached_count()),
                Style::default().fg(Color::Green),
            ));
            if !listing.image_failures.is_empty() {
                hints.push(Span::styled(
                    format!(", {} failed", listing.image_failures.len()),
                    Style::default().fg(Color::Red),
                ));
            }
            let selected_id = state.cards().get(state.selected()).map(|card| card.id);
            if let Some(failure) = listing
                .image_failures
                .iter()
                .find(|f| Some(f.product_id) == selected_id)
            {
                hints.push(Span::styled(
                    format!("  ({})", failure.message),
                    Style::default().fg(Color::Red),
                ));
            }
        }
    }

    frame.render_widget(Paragraph::new(Line::from(hints)), area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    let popup_width = 50.min(area.width);
    let popup_height = 15.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let key = Style::default().fg(Color::Cyan);
    let help_text = vec![
        Line::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ←↑↓→ or hjkl  ", key),
            Span::raw("Move in grid / scroll"),
        ]),
        Line::from(vec![
            Span::styled("  Enter         ", key),
            Span::raw("Open product"),
        ]),
        Line::from(vec![
            Span::styled("  Esc / Bksp    ", key),
            Span::raw("Go back / close help"),
        ]),
        Line::from(vec![
            Span::styled("  :             ", key),
            Span::raw("Go to a path"),
        ]),
        Line::from(vec![
            Span::styled("  r             ", key),
            Span::raw("Reload current view"),
        ]),
        Line::from(vec![
            Span::styled("  ?             ", key),
            Span::raw("Show/hide this help"),
        ]),
        Line::from(vec![Span::styled("  q             ", key), Span::raw("Quit")]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
    );

    frame.render_widget(help_paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::time::Duration;

    use chrono::Utc;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    use super::*;
    use crate::api::{CatalogClient, Product};
    use crate::cache::MemoryImageStore;
    use crate::catalog::{ImageFailure, Listing};
    use crate::error::ShopfrontError;
    use crate::router::Route;
    use crate::state::listing::LOAD_FAILED_MESSAGE;
    use crate::state::{DetailState, ListingState};

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn test_app() -> App {
        let client =
            CatalogClient::new("http://localhost:1", Duration::from_secs(1)).unwrap();
        App::new(client, Arc::new(MemoryImageStore::new()), 2)
    }

    fn product(id: u64, title: &str, price: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            images: vec![format!("https://cdn.example/{}.png", id)],
            description: None,
            category: None,
            brand: None,
            rating: None,
            stock: None,
        }
    }

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_grid_shows_every_card() {
        let mut images = HashMap::new();
        images.insert(2, "data:image/png;base64,YWJj".to_string());

        let mut state = ListingState::mounted();
        state.finish_load(Ok(Listing {
            products: vec![
                product(1, "Kettle", 30.0),
                product(2, "Toaster", 25.5),
                product(3, "Blender", 80.25),
            ],
            images,
            image_failures: vec![ImageFailure {
                product_id: 1,
                message: "HTTP 500".to_string(),
            }],
            loaded_at: Utc::now(),
        }));

        let mut app = test_app();
        app.view = View::Listing(state);
        let screen = render(&mut app);

        for text in ["Kettle", "$30", "Toaster", "$25.5", "Blender", "$80.25"] {
            assert!(screen.contains(text), "missing {:?} in\n{}", text, screen);
        }
        assert!(screen.contains("Products (3)"));
        assert!(screen.contains("● cached image/png"));
        assert!(screen.contains("1 failed"));

        // 88 inner columns fit three cards per row
        match &app.view {
            View::Listing(state) => assert_eq!(state.columns(), 3),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_loading_shows_only_indicator() {
        let mut app = test_app();
        app.view = View::Listing(ListingState::mounted());
        let screen = render(&mut app);

        assert!(screen.contains("Loading products"));
        assert!(!screen.contains("Images:"));
    }

    #[test]
    fn test_error_shows_message_and_retry() {
        let mut state = ListingState::mounted();
        state.finish_load(Err(ShopfrontError::Other("offline".to_string())));

        let mut app = test_app();
        app.view = View::Listing(state);
        let screen = render(&mut app);

        assert!(screen.contains(LOAD_FAILED_MESSAGE));
        assert!(screen.contains("Retry"));
        assert!(!screen.contains("offline"));
    }

    #[test]
    fn test_no_route_view() {
        let mut app = test_app();
        app.view = View::NoRoute {
            path: "/cart".to_string(),
        };
        let screen = render(&mut app);
        assert!(screen.contains("No page matches /cart"));
    }

    #[test]
    fn test_back_hint_follows_history() {
        let mut app = test_app();
        app.view = View::Listing(ListingState::mounted());
        assert!(!render(&mut app).contains("Back"));

        app.nav.push(Route::Product { id: 4 });
        app.view = View::Detail(DetailState::mounted(4));
        assert!(render(&mut app).contains("Esc Back"));
    }
}
