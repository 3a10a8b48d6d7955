//! # shopflow-core: Pure Business Logic for ShopFlow
//!
//! This crate is the **heart** of ShopFlow. It contains all storefront
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ShopFlow Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (JS storefront)                     │   │
//! │  │    Browse UI ──► Filter UI ──► Cart UI ──► Checkout UI         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Storefront Commands                          │   │
//! │  │    load_products, add_to_cart, place_order, etc.               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shopflow-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  catalog  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  filter/  │  │   │
//! │  │   │   Order   │  │  TaxRate  │  │ LineItem  │  │   sort    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 shopflow-store (Storage Layer)                  │   │
//! │  │           Local KV store, mock catalog/order services           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, ShippingAddress, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart and line-item math
//! - [`catalog`] - Filter/sort pipeline over the product catalog
//! - [`checkout`] - Checkout step validation and totals
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use shopflow_core::cart::Cart;
//! use shopflow_core::money::Money;
//!
//! let mut cart = Cart::new();
//! assert!(cart.is_empty());
//! assert_eq!(cart.total(), Money::zero());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shopflow_core::Money` instead of
// `use shopflow_core::money::Money`

pub use cart::{Cart, CartLineItem};
pub use catalog::{filter_and_sort, CategoryFilter, FilterCriteria, PriceRange, SortKey};
pub use checkout::{CheckoutStep, CheckoutTotals};
pub use error::{CoreError, ValidationError};
pub use money::{Money, TaxRate};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single line item, enforced at the command layer.
///
/// The cart math itself accepts any positive quantity; the UI caps manual
/// entry at 99 and the commands mirror that cap.
pub const MAX_ITEM_QUANTITY: i64 = 99;

/// Order subtotal (in cents) at which shipping becomes free.
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 5_000;

/// Flat shipping charge (in cents) below the free-shipping threshold.
pub const FLAT_SHIPPING_CENTS: i64 = 999;

/// Checkout tax rate in basis points (800 = 8%).
pub const CHECKOUT_TAX_RATE_BPS: u32 = 800;
