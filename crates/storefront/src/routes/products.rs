//! Product listing route handlers.
//!
//! The listing is the Catalog Query Engine's caller: it resolves the active
//! category (persisting explicit selections across visits), applies search
//! precedence, and annotates each product with its current cart quantity so
//! the client can render add vs. plus/minus controls.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};

use freshcart_core::Product;

use crate::catalog::{ALL_ITEMS, CatalogQuery};
use crate::state::AppState;
use crate::storage::{KeyValueStore, keys};

/// Product listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    /// Category selector; an explicit value is remembered across visits.
    pub category: Option<String>,
    /// Free-text search phrase. Takes precedence over the category.
    pub q: Option<String>,
}

/// Product display data.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub price: String,
    pub category: String,
    pub image: String,
    /// Current quantity of this product in the cart (0 if absent).
    pub quantity: u32,
}

impl ProductView {
    fn new(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            price: product.price.to_string(),
            category: product.category.clone(),
            image: product.image.clone(),
            quantity,
        }
    }
}

/// Product listing response.
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductView>,
    pub active_category: String,
    pub search: Option<String>,
}

/// Category listing response.
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub categories: Vec<String>,
}

/// List products filtered by category and/or search phrase.
///
/// An explicitly selected category is persisted; a request naming neither a
/// category nor a search phrase restores the stored selection.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ProductListQuery>,
) -> Json<ProductListResponse> {
    let search = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(ToString::to_string);

    let active_category = match params.category {
        Some(category) => {
            remember_category(state.storage(), &category);
            category
        }
        None if search.is_none() => stored_category(state.storage()),
        None => ALL_ITEMS.to_string(),
    };

    let query = CatalogQuery {
        category: Some(active_category.clone()),
        search: search.clone(),
    };

    let products = state
        .catalog()
        .filter(&query)
        .into_iter()
        .map(|product| ProductView::new(product, state.cart().quantity(product.id)))
        .collect();

    Json(ProductListResponse {
        products,
        active_category,
        search,
    })
}

/// List the catalog's categories, sentinel first.
pub async fn categories(State(state): State<AppState>) -> Json<CategoryListResponse> {
    let mut categories = vec![ALL_ITEMS.to_string()];
    categories.extend(state.catalog().categories().iter().map(ToString::to_string));
    Json(CategoryListResponse { categories })
}

/// Persist an explicitly selected category. Failures are absorbed; category
/// memory is a convenience, not a requirement.
fn remember_category(storage: &dyn KeyValueStore, category: &str) {
    if let Err(e) = storage.put(keys::ACTIVE_CATEGORY, category) {
        tracing::warn!("failed to persist active category: {e}");
    }
}

/// The stored category selection, or the sentinel if none is stored or the
/// store cannot be read.
fn stored_category(storage: &dyn KeyValueStore) -> String {
    match storage.get(keys::ACTIVE_CATEGORY) {
        Ok(Some(category)) => category,
        Ok(None) => ALL_ITEMS.to_string(),
        Err(e) => {
            tracing::warn!("failed to read active category: {e}");
            ALL_ITEMS.to_string()
        }
    }
}
