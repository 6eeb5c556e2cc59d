//! The cart aggregate.
//!
//! A quantity-tracking collection of selected catalog products. [`Cart`] is
//! the pure data structure; shared ownership, write-through persistence, and
//! change notification live in [`store`].
//!
//! Invariants:
//! - at most one line per product id; first-add order is preserved
//! - every line has quantity >= 1 (a line at zero is removed, never stored)
//! - derived values (count, total) are recomputed from the lines on every
//!   access and can never drift from them

pub mod store;

pub use store::{CartStore, CartSummary};

use std::collections::HashSet;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use freshcart_core::{Price, Product, ProductId};

/// One product's entry in the cart.
///
/// `snapshot` is the product as it was at the time of first add, so display
/// data stays stable for the life of the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
    pub snapshot: Product,
}

impl CartLine {
    fn new(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            quantity,
            snapshot: product.clone(),
        }
    }

    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.snapshot.price * self.quantity
    }
}

/// Ordered collection of cart lines, keyed by product id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of `product`.
    ///
    /// Creates a new line (capturing the product snapshot) on first add;
    /// otherwise accumulates onto the existing line's quantity. Any product
    /// descriptor is accepted as given - there is no unknown-product error.
    pub fn add(&mut self, product: &Product, quantity: NonZeroU32) {
        match self.line_mut(product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity.get()),
            None => self.lines.push(CartLine::new(product, quantity.get())),
        }
    }

    /// Delete the line for `id`. Absent ids are a no-op, not an error.
    pub fn remove(&mut self, id: ProductId) {
        self.lines.retain(|line| line.product_id != id);
    }

    /// Set the line for `id` to exactly `quantity` (absolute, not additive).
    ///
    /// A `quantity` below 1 is a silent no-op: deleting a line goes through
    /// [`remove`](Self::remove), never through a zero here. Absent ids are a
    /// no-op as well.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) {
        if quantity < 1 {
            return;
        }
        if let Some(line) = self.line_mut(id) {
            line.quantity = quantity;
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Current quantity for `id`, or 0 if absent.
    #[must_use]
    pub fn quantity(&self, id: ProductId) -> u32 {
        self.line(id).map_or(0, |line| line.quantity)
    }

    /// Total number of items: the sum of all line quantities.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Total cost: the sum of `quantity x price` over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// The lines, in first-add order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Re-establish the invariants on data loaded from storage: drop
    /// zero-quantity lines and collapse duplicate product ids to the first
    /// occurrence.
    #[must_use]
    pub(crate) fn normalized(mut self) -> Self {
        let mut seen = HashSet::new();
        self.lines
            .retain(|line| line.quantity >= 1 && seen.insert(line.product_id));
        self
    }

    fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == id)
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product_id == id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn qty(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    fn product(id: i32, name: &str, price: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: price.parse().unwrap(),
            category: "Fruits".to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn repeated_adds_accumulate_quantity() {
        let apples = product(1, "Apples", "50");
        let mut cart = Cart::new();

        cart.add(&apples, qty(1));
        cart.add(&apples, qty(2));
        cart.add(&apples, qty(4));

        assert_eq!(cart.quantity(apples.id), 7);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn first_add_order_is_preserved() {
        let mut cart = Cart::new();
        cart.add(&product(2, "Bananas", "96"), qty(1));
        cart.add(&product(1, "Apples", "50"), qty(1));
        cart.add(&product(2, "Bananas", "96"), qty(1));

        let ids: Vec<i32> = cart.lines().iter().map(|l| l.product_id.as_i32()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn snapshot_is_captured_at_first_add() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Apples", "50"), qty(1));

        // A later add with a changed descriptor accumulates quantity but
        // keeps the original snapshot.
        cart.add(&product(1, "Apples (new label)", "60"), qty(1));

        let line = &cart.lines()[0];
        assert_eq!(line.quantity, 2);
        assert_eq!(line.snapshot.name, "Apples");
        assert_eq!(line.snapshot.price, "50".parse().unwrap());
    }

    #[test]
    fn remove_then_quantity_is_zero() {
        let apples = product(1, "Apples", "50");
        let mut cart = Cart::new();
        cart.add(&apples, qty(3));

        cart.remove(apples.id);
        assert_eq!(cart.quantity(apples.id), 0);

        // Removing an absent id is a no-op
        cart.remove(apples.id);
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_is_absolute() {
        let apples = product(1, "Apples", "50");
        let mut cart = Cart::new();
        cart.add(&apples, qty(5));

        cart.set_quantity(apples.id, 2);
        assert_eq!(cart.quantity(apples.id), 2);
    }

    #[test]
    fn set_quantity_below_one_is_a_no_op() {
        let apples = product(1, "Apples", "50");
        let mut cart = Cart::new();
        cart.add(&apples, qty(3));

        cart.set_quantity(apples.id, 0);
        assert_eq!(cart.quantity(apples.id), 3);
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn set_quantity_of_absent_id_is_a_no_op() {
        let mut cart = Cart::new();
        cart.set_quantity(ProductId::new(9), 4);
        assert!(cart.is_empty());
    }

    #[test]
    fn count_and_total_fold_over_lines() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Apples", "50"), qty(2));
        cart.add(&product(3, "Strawberries", "45"), qty(1));

        assert_eq!(cart.count(), 3);
        assert_eq!(cart.total(), "145".parse().unwrap());
    }

    #[test]
    fn clear_empties_everything() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Apples", "50"), qty(2));
        cart.add(&product(2, "Bananas", "96"), qty(1));

        cart.clear();
        assert_eq!(cart.count(), 0);
        assert!(cart.lines().is_empty());
    }

    #[test]
    fn serializes_with_self_describing_field_names() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Apples", "50"), qty(2));

        let json = serde_json::to_value(&cart).unwrap();
        let line = &json[0];
        assert_eq!(line["productId"], 1);
        assert_eq!(line["quantity"], 2);
        assert_eq!(line["snapshot"]["name"], "Apples");
    }

    #[test]
    fn round_trips_through_json() {
        let mut cart = Cart::new();
        cart.add(&product(1, "Apples", "50"), qty(2));
        cart.add(&product(2, "Bananas", "96"), qty(1));

        let json = serde_json::to_string(&cart).unwrap();
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn normalized_drops_zero_quantities_and_duplicates() {
        let json = r#"[
            {"productId": 1, "quantity": 2,
             "snapshot": {"id": 1, "name": "Apples", "price": "50",
                          "category": "Fruits", "image": ""}},
            {"productId": 2, "quantity": 0,
             "snapshot": {"id": 2, "name": "Bananas", "price": "96",
                          "category": "Fruits", "image": ""}},
            {"productId": 1, "quantity": 9,
             "snapshot": {"id": 1, "name": "Apples", "price": "50",
                          "category": "Fruits", "image": ""}}
        ]"#;

        let cart: Cart = serde_json::from_str(json).unwrap();
        let cart = cart.normalized();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity(ProductId::new(1)), 2);
        assert_eq!(cart.quantity(ProductId::new(2)), 0);
    }
}
