//! Fresh Cart Storefront - grocery storefront server.
//!
//! Serves the product catalog and the visitor's cart on port 3000.
//!
//! # Architecture
//!
//! - Axum JSON API consumed by the web front end
//! - Immutable product catalog loaded from a JSON data file at startup
//! - Cart state persisted write-through to a file-backed key-value store,
//!   scoped to the running device (no accounts, no server-side inventory)

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use axum::{Router, routing::get};
use tokio::sync::watch;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use freshcart_storefront::cart::CartSummary;
use freshcart_storefront::catalog::Catalog;
use freshcart_storefront::config::StorefrontConfig;
use freshcart_storefront::routes;
use freshcart_storefront::state::AppState;
use freshcart_storefront::storage::{FileStore, KeyValueStore};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "freshcart_storefront=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load the immutable product catalog
    let catalog = Catalog::load(&config.catalog_path).expect("Failed to load catalog");
    tracing::info!(
        products = catalog.len(),
        path = %config.catalog_path.display(),
        "Catalog loaded"
    );

    // Open durable key-value storage (cart state, active category)
    let storage: Arc<dyn KeyValueStore> =
        Arc::new(FileStore::open(&config.state_dir).expect("Failed to open state directory"));

    // Build application state; the cart rehydrates from storage here
    let addr = config.socket_addr();
    let state = AppState::new(config, catalog, storage);
    tracing::info!(items = state.cart().count(), "Cart rehydrated");

    // Log cart changes in the background (the count badge's server-side twin)
    spawn_cart_change_log(state.cart().subscribe());

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new("crates/storefront/static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Log each cart change at debug level.
fn spawn_cart_change_log(mut changes: watch::Receiver<CartSummary>) {
    tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            let summary = *changes.borrow_and_update();
            tracing::debug!(count = summary.count, total = %summary.total, "cart updated");
        }
    });
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
