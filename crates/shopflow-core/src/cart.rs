//! # Cart
//!
//! Pure cart math: line items, quantities, and derived totals.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Frontend Action          Storefront Command       Cart Change          │
//! │  ───────────────          ──────────────────       ───────────          │
//! │                                                                         │
//! │  Click "Add to Cart" ────► add_to_cart() ────────► qty += 1 or push    │
//! │                                                                         │
//! │  Change Quantity ────────► update_cart_item() ───► qty = n (0 removes) │
//! │                                                                         │
//! │  Click Remove ───────────► remove_from_cart() ───► retain(!= id)       │
//! │                                                                         │
//! │  Click Clear ────────────► clear_cart() ─────────► items.clear()       │
//! │                                                                         │
//! │  NOTE: Persistence lives in shopflow-store; this module is pure.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Line Item
// =============================================================================

/// One catalog product's representation within the cart.
///
/// ## Snapshot Pattern
/// Name, price, and thumbnail are frozen copies taken when the product is
/// first added. If the catalog entry changes afterwards, the cart keeps
/// displaying (and charging) what the shopper saw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Product id (for catalog lookup and line identity).
    pub product_id: i64,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Price in cents at time of adding (frozen).
    pub price_cents: i64,

    /// First image URL at time of adding (frozen).
    pub image: String,

    /// Quantity in cart. Always >= 1; a line that would drop below 1 is
    /// removed instead.
    pub quantity: i64,
}

impl CartLineItem {
    /// Creates a new line item from a product, with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        CartLineItem {
            product_id: product.id,
            name: product.name.clone(),
            price_cents: product.price_cents,
            image: product.images.first().cloned().unwrap_or_default(),
            quantity: 1,
        }
    }

    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product again
///   increments quantity instead of appending)
/// - Quantity is always >= 1 (an update to 0 or below removes the line)
/// - Line order is first-added order and survives every mutation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Line items in insertion order.
    pub items: Vec<CartLineItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Rebuilds a cart from previously persisted line items.
    pub fn from_items(items: Vec<CartLineItem>) -> Self {
        Cart { items }
    }

    /// Adds a product to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases by exactly 1
    /// - Product not in cart: appended as a new line with quantity 1,
    ///   snapshotting name/price/first image
    pub fn add_product(&mut self, product: &Product) {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.product_id == product.id)
        {
            item.quantity += 1;
            return;
        }

        self.items.push(CartLineItem::from_product(product));
    }

    /// Sets a line item's quantity to an exact value.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: removes the line entirely
    /// - Unknown `product_id`: silent no-op
    pub fn update_quantity(&mut self, product_id: i64, quantity: i64) {
        if quantity <= 0 {
            self.remove_product(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Removes a line item by product id. Silent if absent.
    pub fn remove_product(&mut self, product_id: i64) {
        self.items.retain(|i| i.product_id != product_id);
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the sum of `price × quantity` over all lines.
    ///
    /// Exact integer arithmetic; the empty cart totals zero.
    pub fn total(&self) -> Money {
        self.items.iter().map(|i| i.line_total()).sum()
    }

    /// Returns the total quantity across all lines (the cart badge number).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Returns the number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up a line item by product id.
    pub fn line(&self, product_id: i64) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
