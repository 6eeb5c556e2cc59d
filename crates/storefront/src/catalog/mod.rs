//! Product catalog store and query engine.
//!
//! The catalog is an immutable ordered list of products, loaded whole from a
//! JSON data file at startup and never modified at runtime. Filtering over it
//! lives in [`query`] and is pure - no I/O, no state.

pub mod query;

pub use query::{ALL_ITEMS, CatalogQuery, filter};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use freshcart_core::{Product, ProductId};

/// Errors loading the catalog data file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse catalog file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("product {id} ({name}) has a negative price")]
    NegativePrice { id: ProductId, name: String },
}

/// The immutable product catalog.
///
/// Cheaply cloneable via `Arc`; iteration order is the order of the data
/// source.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
}

impl Catalog {
    /// Build a catalog from an already-loaded product list.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(products),
        }
    }

    /// Load the catalog from a JSON file (an array of product records).
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed, or if a
    /// product carries a negative price.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let products: Vec<Product> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(bad) = products.iter().find(|p| p.price.is_negative()) {
            return Err(CatalogError::NegativePrice {
                id: bad.id,
                name: bad.name.clone(),
            });
        }

        Ok(Self::new(products))
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct category names in first-appearance order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for product in self.products.iter() {
            if !seen.contains(&product.category.as_str()) {
                seen.push(product.category.as_str());
            }
        }
        seen
    }

    /// Filter the catalog with the given query. See [`query::filter`].
    #[must_use]
    pub fn filter(&self, query: &CatalogQuery) -> Vec<&Product> {
        query::filter(&self.products, query)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
