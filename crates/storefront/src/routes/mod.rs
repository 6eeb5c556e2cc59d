//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Catalog
//! GET  /products               - Product listing (?category=..., ?q=...)
//! GET  /categories             - Category list (sentinel first)
//!
//! # Cart
//! GET  /cart                   - Cart contents
//! POST /cart/add               - Add to cart
//! POST /cart/update            - Set a line's quantity
//! POST /cart/remove            - Remove a line
//! POST /cart/clear             - Empty the cart
//! POST /cart/increase          - Convenience: add one
//! POST /cart/decrease          - Convenience: subtract one, removing at zero
//! GET  /cart/count             - Cart count badge value
//! ```

pub mod cart;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/increase", post(cart::increase))
        .route("/decrease", post(cart::decrease))
        .route("/count", get(cart::count))
}

/// Create the main application router (everything except /health and static
/// assets, which the binary wires up).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::index))
        .route("/categories", get(products::categories))
        .nest("/cart", cart_routes())
}
