//! shopfront - a terminal catalog browser.
//!
//! Lists the products of a remote catalog API in a grid, mirrors each
//! product's primary image into a local store, and opens a detail view for a
//! selected product.

mod api;
mod app;
mod cache;
mod catalog;
mod config;
mod error;
mod router;
mod state;
mod ui;

use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use api::CatalogClient;
use app::App;
use cache::{FileImageStore, ImageStore};
use config::Config;

/// Initialize tracing to a log file; stdout belongs to the TUI.
/// Use RUST_LOG to control the level (e.g., RUST_LOG=debug).
fn init_tracing(cache_root: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(cache_root)
        .with_context(|| format!("Failed to create {}", cache_root.display()))?;
    let log_path = cache::log_path(cache_root);
    let file_name = log_path
        .file_name()
        .context("Log path has no file name")?;

    let file_appender = tracing_appender::rolling::never(cache_root, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(filter)
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    let cache_root = config.cache_root()?;
    let _guard = init_tracing(&cache_root)?;
    info!(api = %config.api_base_url, cache = %cache_root.display(), "shopfront starting");

    let client = CatalogClient::from_config(&config)?;
    let store = FileImageStore::open(cache::images_dir(&cache_root))
        .await
        .context("Failed to open image store")?;
    info!(entries = store.len().await?, "Image store opened");

    let mut app = App::new(client, Arc::new(store), config.image_concurrency);
    app.mount_current();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    info!("shopfront shutting down");
    Ok(())
}
