//! Cart route handlers.
//!
//! Mutations arrive as form posts and respond with the updated cart view.
//! The increase/decrease convenience handlers layer the storefront's
//! asymmetric quantity policy over the core operations: increase adds one,
//! decrease subtracts one and removes the line at zero - a line never
//! visibly shows quantity 0.

use std::num::NonZeroU32;

use axum::{Form, Json, extract::State};
use serde::{Deserialize, Serialize};

use freshcart_core::ProductId;

use crate::cart::{Cart, CartLine};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Cart item display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartItemView {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub image: String,
    pub quantity: u32,
    pub price: String,
    pub line_total: String,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.product_id.as_i32(),
            name: line.snapshot.name.clone(),
            category: line.snapshot.category.clone(),
            image: line.snapshot.image.clone(),
            quantity: line.quantity,
            price: line.snapshot.price.to_string(),
            line_total: line.line_total().to_string(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            subtotal: cart.total().to_string(),
            item_count: cart.count(),
        }
    }
}

/// Cart count badge data.
#[derive(Debug, Serialize)]
pub struct CartCountView {
    pub count: u32,
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i32,
    pub quantity: Option<u32>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: i32,
    pub quantity: u32,
}

/// Form naming a single cart line.
#[derive(Debug, Deserialize)]
pub struct CartLineForm {
    pub product_id: i32,
}

fn current_view(state: &AppState) -> Json<CartView> {
    Json(CartView::from(&state.cart().snapshot()))
}

/// Display the cart.
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    current_view(&state)
}

/// Add an item to the cart.
///
/// # Errors
///
/// Returns 400 for a zero quantity and 404 for an unknown product id.
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Json<CartView>> {
    let quantity = NonZeroU32::new(form.quantity.unwrap_or(1))
        .ok_or_else(|| AppError::BadRequest("quantity must be at least 1".to_string()))?;
    let product = state
        .catalog()
        .get(ProductId::new(form.product_id))
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    state.cart().add(product, quantity);
    Ok(current_view(&state))
}

/// Set a cart line's quantity (absolute).
///
/// A quantity below 1 is the documented no-op; removal goes through
/// `/cart/remove`.
pub async fn update(
    State(state): State<AppState>,
    Form(form): Form<UpdateCartForm>,
) -> Json<CartView> {
    state
        .cart()
        .set_quantity(ProductId::new(form.product_id), form.quantity);
    current_view(&state)
}

/// Remove an item from the cart.
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<CartLineForm>,
) -> Json<CartView> {
    state.cart().remove(ProductId::new(form.product_id));
    current_view(&state)
}

/// Empty the cart.
pub async fn clear(State(state): State<AppState>) -> Json<CartView> {
    state.cart().clear();
    current_view(&state)
}

/// Increase a line's quantity by one (adding the product if absent).
///
/// # Errors
///
/// Returns 404 for an unknown product id.
pub async fn increase(
    State(state): State<AppState>,
    Form(form): Form<CartLineForm>,
) -> Result<Json<CartView>> {
    let product = state
        .catalog()
        .get(ProductId::new(form.product_id))
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    state.cart().add(product, NonZeroU32::MIN);
    Ok(current_view(&state))
}

/// Decrease a line's quantity by one, removing the line at zero.
pub async fn decrease(
    State(state): State<AppState>,
    Form(form): Form<CartLineForm>,
) -> Json<CartView> {
    let id = ProductId::new(form.product_id);
    let quantity = state.cart().quantity(id);
    if quantity > 1 {
        state.cart().set_quantity(id, quantity - 1);
    } else {
        state.cart().remove(id);
    }
    current_view(&state)
}

/// Get the cart count badge value.
pub async fn count(State(state): State<AppState>) -> Json<CartCountView> {
    Json(CartCountView {
        count: state.cart().count(),
    })
}
