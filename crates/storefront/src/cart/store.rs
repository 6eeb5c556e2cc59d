//! Shared cart service: write-through persistence and change notification.
//!
//! [`CartStore`] owns the [`Cart`] behind a read/write lock. The mutation
//! path runs mutate -> persist -> notify under the write lock, so sequential
//! callers observe sequential application and the durable copy is consistent
//! with memory before each call returns (write-through).
//!
//! Persistence failures are absorbed: they are logged and the in-memory cart
//! stays authoritative for the rest of the process lifetime. Malformed or
//! missing stored state rehydrates as an empty cart.

use std::num::NonZeroU32;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::watch;

use freshcart_core::{Price, Product, ProductId};

use crate::storage::{KeyValueStore, keys};

use super::{Cart, CartLine};

/// Snapshot of the cart's derived values, published after every mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartSummary {
    /// Sum of all line quantities.
    pub count: u32,
    /// Sum of `quantity x price` over all lines.
    pub total: Price,
}

impl CartSummary {
    fn of(cart: &Cart) -> Self {
        Self {
            count: cart.count(),
            total: cart.total(),
        }
    }
}

/// The cart aggregate with durable write-through persistence.
pub struct CartStore {
    cart: RwLock<Cart>,
    storage: Arc<dyn KeyValueStore>,
    changes: watch::Sender<CartSummary>,
}

impl CartStore {
    /// Open the store, rehydrating the cart from `storage`.
    ///
    /// Rehydration happens exactly once, here. A missing value yields an
    /// empty cart; a malformed one is logged and also yields an empty cart.
    #[must_use]
    pub fn open(storage: Arc<dyn KeyValueStore>) -> Self {
        let cart = load_cart(storage.as_ref());
        let (changes, _) = watch::channel(CartSummary::of(&cart));
        Self {
            cart: RwLock::new(cart),
            storage,
            changes,
        }
    }

    /// Add `quantity` of `product` (accumulating onto an existing line).
    pub fn add(&self, product: &Product, quantity: NonZeroU32) {
        let mut cart = self.write();
        cart.add(product, quantity);
        self.sync(&cart);
    }

    /// Remove the line for `id`; absent ids are a no-op.
    pub fn remove(&self, id: ProductId) {
        let mut cart = self.write();
        cart.remove(id);
        self.sync(&cart);
    }

    /// Set the line for `id` to exactly `quantity`; below 1 is a no-op.
    pub fn set_quantity(&self, id: ProductId, quantity: u32) {
        let mut cart = self.write();
        cart.set_quantity(id, quantity);
        self.sync(&cart);
    }

    /// Empty the cart.
    pub fn clear(&self) {
        let mut cart = self.write();
        cart.clear();
        self.sync(&cart);
    }

    /// Current quantity for `id`, or 0 if absent.
    #[must_use]
    pub fn quantity(&self, id: ProductId) -> u32 {
        self.read().quantity(id)
    }

    /// Sum of all line quantities, recomputed on every access.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.read().count()
    }

    /// Total cost, recomputed on every access.
    #[must_use]
    pub fn total(&self) -> Price {
        self.read().total()
    }

    /// The lines in first-add order, cloned for display.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        self.read().lines().to_vec()
    }

    /// A consistent clone of the whole cart.
    #[must_use]
    pub fn snapshot(&self) -> Cart {
        self.read().clone()
    }

    /// Current derived values.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        CartSummary::of(&self.read())
    }

    /// Subscribe to cart changes. The receiver observes the summary after
    /// each mutation; this is the only cross-component notification path.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CartSummary> {
        self.changes.subscribe()
    }

    /// Persist the cart and publish its summary. Called with the write lock
    /// held so mutations persist in application order.
    fn sync(&self, cart: &Cart) {
        match serde_json::to_string(cart) {
            Ok(payload) => {
                if let Err(e) = self.storage.put(keys::CART, &payload) {
                    tracing::warn!("failed to persist cart, keeping in-memory state: {e}");
                }
            }
            Err(e) => tracing::warn!("failed to serialize cart: {e}"),
        }
        self.changes.send_replace(CartSummary::of(cart));
    }

    fn read(&self) -> RwLockReadGuard<'_, Cart> {
        self.cart.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Cart> {
        self.cart.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn load_cart(storage: &dyn KeyValueStore) -> Cart {
    match storage.get(keys::CART) {
        Ok(Some(payload)) => match serde_json::from_str::<Cart>(&payload) {
            Ok(cart) => cart.normalized(),
            Err(e) => {
                tracing::warn!("malformed cart state, starting empty: {e}");
                Cart::new()
            }
        },
        Ok(None) => Cart::new(),
        Err(e) => {
            tracing::warn!("failed to read cart state, starting empty: {e}");
            Cart::new()
        }
    }
}
