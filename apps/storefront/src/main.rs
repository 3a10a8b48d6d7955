//! # Storefront Application Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ShopFlow Storefront                              │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Starts the runtime, delegates to lib.rs          │  │
//! │  │                                                                  │  │
//! │  │  lib.rs ─────► Wires logging, local store, catalog, cart        │  │
//! │  │                                                                  │  │
//! │  │  commands/ ──► load_products, add_to_cart, place_order          │  │
//! │  │                                                                  │  │
//! │  │  state/ ─────► CartState, CatalogViewState                      │  │
//! │  │                                                                  │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  shopflow.json (local store file, app data directory)            │  │
//! │  │  + in-memory catalog/order mock services                         │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The actual setup is in lib.rs for better testability
    shopflow_storefront::run().await
}
