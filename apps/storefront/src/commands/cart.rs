//! # Cart Commands
//!
//! Cart manipulation for the cart sidebar and cart page.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ Has Items│────►│ Checkout │────►│  Order   │       │
//! │  │  Cart    │     │          │     │   Flow   │     │ Confirmed│       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart       place_order                         │
//! │                   update_cart_item  (checkout.rs)                       │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! │                                                                         │
//! │  Every arrow that mutates the cart persists it before returning.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use shopflow_core::cart::CartLineItem;
use shopflow_core::error::CoreError;
use shopflow_core::MAX_ITEM_QUANTITY;

use crate::error::ApiError;
use crate::Storefront;

/// Cart summary numbers for the header badge and the totals row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    /// Sum of quantities across all lines (the badge number).
    pub item_count: i64,
    /// Number of distinct lines.
    pub line_count: usize,
    /// Sum of `price × quantity` in cents.
    pub subtotal_cents: i64,
}

/// Cart response including items and summary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineItem>,
    pub summary: CartSummary,
}

impl Storefront {
    /// Gets the current cart contents.
    pub fn get_cart(&self) -> CartResponse {
        debug!("get_cart command");
        self.cart.with_cart(|c| CartResponse {
            items: c.cart().items.clone(),
            summary: CartSummary {
                item_count: c.item_count(),
                line_count: c.cart().line_count(),
                subtotal_cents: c.total().cents(),
            },
        })
    }

    /// Adds a product to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity increases by 1
    /// - Product not in cart: added as a new line with quantity 1
    /// - Price is "frozen" at time of adding (won't change if the catalog
    ///   entry updates)
    /// - Out-of-stock products and lines already at the 99 cap are rejected
    pub async fn add_to_cart(&self, product_id: i64) -> Result<CartResponse, ApiError> {
        debug!(product_id, "add_to_cart command");

        let product = self
            .catalog
            .get_by_id(product_id)
            .await
            .ok_or_else(|| ApiError::not_found("Product", product_id))?;

        if !product.in_stock {
            return Err(CoreError::OutOfStock { id: product_id }.into());
        }

        let current = self
            .cart
            .with_cart(|c| c.cart().line(product_id).map_or(0, |line| line.quantity));
        if current >= MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: current + 1,
                max: MAX_ITEM_QUANTITY,
            }
            .into());
        }

        self.cart.with_cart_mut(|c| c.add_to_cart(&product))?;
        Ok(self.get_cart())
    }

    /// Sets a line item's exact quantity.
    ///
    /// ## Behavior
    /// - Quantity 0 (or below): removes the line
    /// - Quantity above the 99 cap: rejected
    /// - Unknown product id: no-op (the response is simply the current cart)
    pub fn update_cart_item(
        &self,
        product_id: i64,
        quantity: i64,
    ) -> Result<CartResponse, ApiError> {
        debug!(product_id, quantity, "update_cart_item command");

        if quantity > MAX_ITEM_QUANTITY {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            }
            .into());
        }

        self.cart
            .with_cart_mut(|c| c.update_quantity(product_id, quantity))?;
        Ok(self.get_cart())
    }

    /// Removes a line item. Silent if the product is not in the cart.
    pub fn remove_from_cart(&self, product_id: i64) -> Result<CartResponse, ApiError> {
        debug!(product_id, "remove_from_cart command");

        self.cart.with_cart_mut(|c| c.remove_from_cart(product_id))?;
        Ok(self.get_cart())
    }

    /// Empties the cart.
    pub fn clear_cart(&self) -> Result<CartResponse, ApiError> {
        debug!("clear_cart command");

        self.cart.with_cart_mut(|c| c.clear())?;
        Ok(self.get_cart())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
