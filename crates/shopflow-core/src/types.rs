//! # Domain Types
//!
//! Core domain types used throughout ShopFlow.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │ ShippingAddress │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  id (i64)       │   │  name, email    │       │
//! │  │  category       │   │  items          │   │  address, city  │       │
//! │  │  price_cents    │   │  total_cents    │   │  state, zip     │       │
//! │  │  images         │   │  status         │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │   OrderStatus   │   │   PaymentCard   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Electronics    │   │  Pending        │   │  card number    │       │
//! │  │  Clothing       │   │  Confirmed      │   │  expiry, cvv    │       │
//! │  │  Home / Sports  │   │  Shipped / ...  │   │  (never charged)│       │
//! │  │  Books          │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every entity carries an `id: i64` - a unique positive integer assigned
//! sequentially by its accessor (`max(existing) + 1`, starting at 1).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartLineItem;
use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// The closed category vocabulary of the catalog.
///
/// Filtering matches these exactly (case-sensitive wire names); there is no
/// free-form category text anywhere in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Clothing,
    Home,
    Sports,
    Books,
}

impl Category {
    /// All categories, in storefront display order.
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Clothing,
        Category::Home,
        Category::Sports,
        Category::Books,
    ];

    /// The lowercase wire name (matches the serde representation).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Clothing => "clothing",
            Category::Home => "home",
            Category::Sports => "sports",
            Category::Books => "books",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available in the catalog.
///
/// Immutable from the storefront's perspective; owned and mutated only by
/// the catalog accessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique positive integer identifier.
    pub id: i64,

    /// Display name shown in the grid and on the detail page.
    pub name: String,

    /// Longer marketing description.
    pub description: String,

    /// Category from the closed vocabulary.
    pub category: Category,

    /// Price in cents (smallest currency unit). Non-negative.
    pub price_cents: i64,

    /// Pre-discount price in cents. Only meaningful when greater than
    /// `price_cents`; anything else is ignored by the discount helpers.
    pub original_price_cents: Option<i64>,

    /// Image URLs. Never empty; the first entry is the card/cart thumbnail.
    pub images: Vec<String>,

    /// Whether the product can currently be purchased.
    pub in_stock: bool,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Whether this product is on discount.
    ///
    /// True only when an original price exists AND is strictly greater than
    /// the current price.
    pub fn is_discounted(&self) -> bool {
        matches!(self.original_price_cents, Some(orig) if orig > self.price_cents)
    }

    /// Rounded percentage off the original price, if discounted.
    ///
    /// ## Example
    /// ```rust
    /// use shopflow_core::types::{Category, Product};
    ///
    /// let product = Product {
    ///     id: 1,
    ///     name: "Headphones".into(),
    ///     description: "".into(),
    ///     category: Category::Electronics,
    ///     price_cents: 7_500,
    ///     original_price_cents: Some(10_000),
    ///     images: vec!["h.jpg".into()],
    ///     in_stock: true,
    /// };
    /// assert_eq!(product.discount_percent(), Some(25));
    /// ```
    pub fn discount_percent(&self) -> Option<u32> {
        match self.original_price_cents {
            Some(orig) if orig > self.price_cents => {
                let pct = ((orig - self.price_cents) as f64 / orig as f64) * 100.0;
                Some(pct.round() as u32)
            }
            _ => None,
        }
    }
}

/// Caller-supplied product fields; the catalog accessor assigns the id
/// (`max(existing) + 1`, or 1 for an empty catalog).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub price_cents: i64,
    pub original_price_cents: Option<i64>,
    pub images: Vec<String>,
    pub in_stock: bool,
}

impl ProductDraft {
    /// Materializes the draft into a product with the assigned id.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            category: self.category,
            price_cents: self.price_cents,
            original_price_cents: self.original_price_cents,
            images: self.images,
            in_stock: self.in_stock,
        }
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// The lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Created but not yet paid for (accessor default).
    Pending,
    /// Checkout completed; mock payment "accepted".
    Confirmed,
    /// Handed to the (imaginary) carrier.
    Shipped,
    /// Arrived.
    Delivered,
    /// Cancelled before shipping.
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

// =============================================================================
// Shipping & Payment
// =============================================================================

/// Shipping address collected in checkout step one.
///
/// Presence-only validation: see [`crate::checkout::validate_shipping`].
/// Phone is optional, and country is pre-selected; everything else is
/// required to advance past the shipping step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl Default for ShippingAddress {
    fn default() -> Self {
        ShippingAddress {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            // Pre-selected on the form, so never empty in practice.
            country: "United States".to_string(),
        }
    }
}

/// Card details collected in checkout step two.
///
/// Never validated against a real processor and never charged; the fields
/// exist so the form flow matches a real storefront.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCard {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub cardholder_name: String,
}

// =============================================================================
// Order
// =============================================================================

/// A completed order.
///
/// Created once at checkout, stored only in process memory, and mutated
/// only by an explicit accessor update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Sequential positive integer assigned by the order accessor.
    pub id: i64,

    /// Copy of the cart line items at checkout time.
    pub items: Vec<CartLineItem>,

    /// Grand total in cents (subtotal + shipping + tax).
    pub total_cents: i64,

    /// Where the order ships.
    pub shipping: ShippingAddress,

    /// How the order was "paid".
    pub payment: PaymentCard,

    /// Lifecycle status.
    pub status: OrderStatus,

    /// Stamped by the accessor at creation.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Returns the grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

/// Caller-supplied order fields; the accessor assigns id, timestamp, and a
/// default status of [`OrderStatus::Pending`] when none is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub items: Vec<CartLineItem>,
    pub total_cents: i64,
    pub shipping: ShippingAddress,
    pub payment: PaymentCard,
    pub status: Option<OrderStatus>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product_with_prices(price_cents: i64, original: Option<i64>) -> Product {
        Product {
            id: 1,
            name: "Test".to_string(),
            description: String::new(),
            category: Category::Home,
            price_cents,
            original_price_cents: original,
            images: vec!["img.jpg".to_string()],
            in_stock: true,
        }
    }

    #[test]
    fn test_category_wire_names() {
        let json = serde_json::to_string(&Category::Electronics).unwrap();
        assert_eq!(json, "\"electronics\"");
        assert_eq!(Category::Books.to_string(), "books");
    }

    #[test]
    fn test_discount_requires_higher_original_price() {
        assert!(product_with_prices(7500, Some(10_000)).is_discounted());
        // Equal or lower original price signals nothing
        assert!(!product_with_prices(7500, Some(7500)).is_discounted());
        assert!(!product_with_prices(7500, Some(5000)).is_discounted());
        assert!(!product_with_prices(7500, None).is_discounted());
    }

    #[test]
    fn test_discount_percent_rounds() {
        // (10000 - 7500) / 10000 = 25%
        assert_eq!(
            product_with_prices(7500, Some(10_000)).discount_percent(),
            Some(25)
        );
        // (2999 - 1999) / 2999 = 33.34...% → 33
        assert_eq!(
            product_with_prices(1999, Some(2999)).discount_percent(),
            Some(33)
        );
        assert_eq!(product_with_prices(1999, None).discount_percent(), None);
    }

    #[test]
    fn test_order_status_default() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
        let json = serde_json::to_string(&OrderStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
    }

    #[test]
    fn test_shipping_address_defaults_country() {
        let addr = ShippingAddress::default();
        assert_eq!(addr.country, "United States");
        assert!(addr.first_name.is_empty());
    }
}
