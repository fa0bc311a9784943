// App state and main event loop.
// Mounts views for routes, runs their loads on tokio, and handles keyboard input.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::api::CatalogClient;
use crate::cache::ImageStore;
use crate::catalog::{self, Listing, ProductDetail};
use crate::error::Result;
use crate::router::{self, Route};
use crate::state::{DetailState, ListingState, NavigationStack};
use crate::ui;

/// Timeout for polling terminal events.
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Result of a background load, tagged with the mount that started it.
#[derive(Debug)]
pub enum AppEvent {
    ListingLoaded {
        generation: u64,
        result: Result<Listing>,
    },
    DetailLoaded {
        generation: u64,
        result: Result<ProductDetail>,
    },
}

/// The view currently on screen.
#[derive(Debug)]
pub enum View {
    Listing(ListingState),
    Detail(DetailState),
    /// A path that matched no route.
    NoRoute { path: String },
}

/// Main application state.
pub struct App {
    pub nav: NavigationStack,
    pub view: View,
    pub client: CatalogClient,
    pub store: Arc<dyn ImageStore>,
    pub image_concurrency: usize,
    /// Text of the go-to-path prompt while it is open.
    pub prompt: Option<String>,
    pub show_help: bool,
    pub should_quit: bool,
    generation: u64,
    task: Option<JoinHandle<()>>,
    tx: UnboundedSender<AppEvent>,
    rx: UnboundedReceiver<AppEvent>,
}

impl App {
    /// Create the app at the root route. Call [`App::mount_current`] to start loading.
    pub fn new(client: CatalogClient, store: Arc<dyn ImageStore>, image_concurrency: usize) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            nav: NavigationStack::default(),
            view: View::Listing(ListingState::default()),
            client,
            store,
            image_concurrency,
            prompt: None,
            show_help: false,
            should_quit: false,
            generation: 0,
            task: None,
            tx,
            rx,
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            while let Ok(app_event) = self.rx.try_recv() {
                self.handle_app_event(app_event);
            }
            self.handle_events()?;
        }
        self.unmount();
        Ok(())
    }

    /// Handle keyboard and other terminal events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }
        Ok(())
    }

    /// Mount the view for the current route and start its load.
    pub fn mount_current(&mut self) {
        let route = self.nav.current();
        self.mount(route);
    }

    /// Navigate forward to a route.
    pub fn navigate(&mut self, route: Route) {
        info!(path = %route, "Navigate");
        self.nav.push(route);
        self.mount(route);
    }

    /// Go back one route. Leaving a no-route view returns to the current route.
    pub fn go_back(&mut self) {
        if matches!(self.view, View::NoRoute { .. }) || self.nav.pop() {
            self.mount_current();
        }
    }

    /// Resolve a typed path and navigate to it, or show the no-route view.
    pub fn open_path(&mut self, path: &str) {
        match router::resolve(path) {
            Some(route) => self.navigate(route),
            None => {
                debug!(path, "No route for path");
                self.unmount();
                self.view = View::NoRoute {
                    path: path.trim().to_string(),
                };
            }
        }
    }

    /// Stop any in-flight load; its result will be dropped.
    fn unmount(&mut self) {
        self.generation += 1;
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    fn mount(&mut self, route: Route) {
        self.unmount();
        let generation = self.generation;
        let tx = self.tx.clone();
        let client = self.client.clone();
        let store = Arc::clone(&self.store);

        let task = match route {
            Route::Listing => {
                self.view = View::Listing(ListingState::mounted());
                let concurrency = self.image_concurrency;
                tokio::spawn(async move {
                    let result = catalog::load_listing(&client, store, concurrency).await;
                    let _ = tx.send(AppEvent::ListingLoaded { generation, result });
                })
            }
            Route::Product { id } => {
                self.view = View::Detail(DetailState::mounted(id));
                tokio::spawn(async move {
                    let result = catalog::load_detail(&client, store.as_ref(), id).await;
                    let _ = tx.send(AppEvent::DetailLoaded { generation, result });
                })
            }
        };
        self.task = Some(task);
    }

    /// Apply a finished load if it belongs to the current mount.
    pub fn handle_app_event(&mut self, app_event: AppEvent) {
        match (app_event, &mut self.view) {
            (AppEvent::ListingLoaded { generation, result }, View::Listing(state))
                if generation == self.generation =>
            {
                state.finish_load(result);
                self.task = None;
            }
            (AppEvent::DetailLoaded { generation, result }, View::Detail(state))
                if generation == self.generation =>
            {
                state.finish_load(result);
                self.task = None;
            }
            _ => debug!("Dropping result from a previous mount"),
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, code: KeyCode) {
        if let Some(input) = self.prompt.as_mut() {
            match code {
                KeyCode::Esc => self.prompt = None,
                KeyCode::Enter => {
                    if let Some(path) = self.prompt.take() {
                        self.open_path(&path);
                    }
                }
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Char(c) => input.push(c),
                _ => {}
            }
            return;
        }

        if self.show_help {
            if matches!(code, KeyCode::Esc | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char(':') => self.prompt = Some("/".to_string()),
            KeyCode::Char('r') => self.mount_current(),
            KeyCode::Esc | KeyCode::Backspace => self.go_back(),
            _ => self.handle_view_key(code),
        }
    }

    fn handle_view_key(&mut self, code: KeyCode) {
        match &mut self.view {
            View::Listing(state) => match code {
                KeyCode::Right | KeyCode::Char('l') => state.select_next(),
                KeyCode::Left | KeyCode::Char('h') => state.select_prev(),
                KeyCode::Down | KeyCode::Char('j') => state.select_down(),
                KeyCode::Up | KeyCode::Char('k') => state.select_up(),
                KeyCode::Enter => {
                    if let Some(route) = state.selected_route() {
                        self.navigate(route);
                    }
                }
                _ => {}
            },
            View::Detail(state) => match code {
                KeyCode::Down | KeyCode::Char('j') => state.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => state.scroll_up(),
                _ => {}
            },
            View::NoRoute { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;

    use super::*;
    use crate::cache::MemoryImageStore;
    use crate::state::listing::LOAD_FAILED_MESSAGE;

    fn app_for(server: &MockServer) -> App {
        let client = CatalogClient::new(&server.base_url(), Duration::from_secs(5)).unwrap();
        App::new(client, Arc::new(MemoryImageStore::new()), 4)
    }

    async fn settle(app: &mut App) {
        let app_event = app.rx.recv().await.unwrap();
        app.handle_app_event(app_event);
    }

    async fn mock_catalog(server: &MockServer) {
        server
            .mock_async(|when, then| {
                when.method(GET).path("/products");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(r#"{"products":[{"id":41,"title":"Kettle","price":30.0,"images":[]},{"id":42,"title":"Toaster","price":25.5,"images":[]}]}"#);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/products/42");
                then.status(200)
                    .header("content-type", "application/json")
                    .body(r#"{"id":42,"title":"Toaster","price":25.5,"images":[]}"#);
            })
            .await;
    }

    #[tokio::test]
    async fn test_select_card_navigates_to_detail() {
        let server = MockServer::start_async().await;
        mock_catalog(&server).await;

        let mut app = app_for(&server);
        app.mount_current();
        settle(&mut app).await;

        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.nav.current().path(), "/product/42");
        assert!(matches!(app.view, View::Detail(DetailState { id: 42, .. })));

        settle(&mut app).await;
        match &app.view {
            View::Detail(state) => {
                assert_eq!(state.data.data().unwrap().product.title, "Toaster");
            }
            other => panic!("expected detail view, got {:?}", other),
        }

        app.handle_key(KeyCode::Esc);
        assert_eq!(app.nav.current(), Route::Listing);
        assert!(matches!(app.view, View::Listing(_)));
    }

    #[tokio::test]
    async fn test_collection_failure_then_reload() {
        let server = MockServer::start_async().await;
        let failing = server
            .mock_async(|when, then| {
                when.method(GET).path("/products");
                then.status(500);
            })
            .await;

        let mut app = app_for(&server);
        app.mount_current();
        settle(&mut app).await;
        match &app.view {
            View::Listing(state) => assert_eq!(state.data.error(), Some(LOAD_FAILED_MESSAGE)),
            other => panic!("expected listing view, got {:?}", other),
        }

        failing.delete_async().await;
        mock_catalog(&server).await;

        app.handle_key(KeyCode::Char('r'));
        settle(&mut app).await;
        match &app.view {
            View::Listing(state) => assert_eq!(state.cards().len(), 2),
            other => panic!("expected listing view, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_stale_result_is_dropped() {
        let server = MockServer::start_async().await;
        mock_catalog(&server).await;

        let mut app = app_for(&server);
        app.mount_current();
        let stale = app.generation;
        app.open_path("/product/42");

        app.handle_app_event(AppEvent::ListingLoaded {
            generation: stale,
            result: Err(crate::error::ShopfrontError::Other("late".to_string())),
        });
        assert!(matches!(
            app.view,
            View::Detail(DetailState {
                data: crate::state::LoadingState::Loading,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_prompt_opens_paths() {
        let server = MockServer::start_async().await;
        mock_catalog(&server).await;

        let mut app = app_for(&server);
        app.mount_current();

        app.handle_key(KeyCode::Char(':'));
        for c in "cart".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Enter);
        assert!(app.prompt.is_none());
        match &app.view {
            View::NoRoute { path } => assert_eq!(path, "/cart"),
            other => panic!("expected no-route view, got {:?}", other),
        }
        assert_eq!(app.nav.breadcrumbs().len(), 1);

        app.handle_key(KeyCode::Esc);
        assert!(matches!(app.view, View::Listing(_)));

        app.handle_key(KeyCode::Char(':'));
        app.handle_key(KeyCode::Backspace);
        for c in "/Product/42".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.nav.current(), Route::Product { id: 42 });
    }

    #[tokio::test]
    async fn test_help_swallows_keys() {
        let server = MockServer::start_async().await;
        let mut app = app_for(&server);

        app.handle_key(KeyCode::Char('?'));
        assert!(app.show_help);
        app.handle_key(KeyCode::Char('q'));
        assert!(!app.should_quit);
        app.handle_key(KeyCode::Esc);
        assert!(!app.show_help);
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
