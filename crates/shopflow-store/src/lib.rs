//! # shopflow-store: Storage Layer for ShopFlow
//!
//! This crate provides everything that outlives (or pretends to outlive) a
//! single screen: the durable local key-value store, the persisted cart,
//! and the mock catalog/order data services.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ShopFlow Data Flow                               │
//! │                                                                         │
//! │  Storefront Command (add_to_cart, load_products)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   shopflow-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  LocalStore   │    │  CartStore    │    │ repositories │  │   │
//! │  │   │  (local.rs)   │◄───│(cart_store.rs)│    │ product.rs   │  │   │
//! │  │   │               │    │               │    │ order.rs     │  │   │
//! │  │   │ one JSON file │    │ persisted cart│    │ (in-memory)  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                      │                          │
//! │       ▼                                      ▼                          │
//! │  shopflow.json                    seeded Vec<Product> / Vec<Order>      │
//! │  (app data dir)                   (process memory, lost on exit)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`local`] - Durable key-value store backed by one JSON file
//! - [`cart_store`] - Cart persisted under a fixed key after every mutation
//! - [`repository`] - Mock catalog and order services with artificial latency
//! - [`seed`] - Bundled product dataset
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shopflow_store::{CartStore, LocalStore, ProductCatalog};
//!
//! let local = LocalStore::open("path/to/shopflow.json");
//! let mut cart = CartStore::open(local);
//!
//! let catalog = ProductCatalog::new(shopflow_store::seed::seed_products()?);
//! let product = catalog.get_by_id(1).await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart_store;
pub mod error;
pub mod local;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use cart_store::{CartStore, CART_STORAGE_KEY};
pub use error::StoreError;
pub use local::LocalStore;

// Repository re-exports for convenience
pub use repository::order::OrderStore;
pub use repository::product::ProductCatalog;
pub use repository::LatencyProfile;
