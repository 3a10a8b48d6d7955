//! # Storefront Library
//!
//! Core library for the headless ShopFlow storefront application.
//! This is the entry point that wires up state, stores, and commands.
//!
//! ## Module Organization
//! ```text
//! shopflow_storefront/
//! ├── lib.rs          ◄─── You are here (wiring & startup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Persisted cart state wrapper
//! │   └── catalog.rs  ◄─── Catalog view state + generation guard
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Browse/filter/search commands
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   └── checkout.rs ◄─── Checkout flow commands
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shopflow_core::catalog::{CategoryFilter, FilterCriteria, SortKey};
use shopflow_core::types::{Category, PaymentCard, ShippingAddress};
use shopflow_store::{seed, CartStore, LocalStore, OrderStore, ProductCatalog};
use state::{CartState, CatalogViewState};

/// The assembled storefront: stores plus client-side state.
///
/// Commands are implemented on this struct across the `commands` modules;
/// the UI holds one `Storefront` for the life of the session.
#[derive(Debug)]
pub struct Storefront {
    pub(crate) catalog: ProductCatalog,
    pub(crate) orders: OrderStore,
    pub(crate) cart: CartState,
    pub(crate) view: CatalogViewState,
}

impl Storefront {
    /// Wires the storefront together from its stores.
    pub fn new(catalog: ProductCatalog, orders: OrderStore, cart_store: CartStore) -> Self {
        Storefront {
            catalog,
            orders,
            cart: CartState::new(cart_store),
            view: CatalogViewState::new(),
        }
    }
}

/// Runs a scripted storefront session.
///
/// ## Startup Sequence
/// ```text
/// 1. Initialize logging (tracing-subscriber, RUST_LOG override)
/// 2. Resolve the local store file in the app data directory
/// 3. Open the persisted cart (corrupt/missing data starts empty)
/// 4. Seed the catalog from the bundled dataset; empty order store
/// 5. Drive a browse → filter → cart → checkout session
/// ```
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    info!("Starting ShopFlow storefront");

    let store_path = local_store_path()?;
    info!(path = %store_path.display(), "Local store resolved");

    let cart_store = CartStore::open(LocalStore::open(store_path));
    let catalog = ProductCatalog::new(seed::seed_products()?);
    let orders = OrderStore::new();
    let storefront = Storefront::new(catalog, orders, cart_store);

    demo_session(&storefront).await?;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shopflow=trace` - Show trace for shopflow crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shopflow=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Determines the local store file path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.shopflow.app/shopflow.json`
/// - **Windows**: `%APPDATA%\shopflow\app\shopflow.json`
/// - **Linux**: `~/.local/share/shopflow-app/shopflow.json`
///
/// ## Development Override
/// Set `SHOPFLOW_STORE_PATH` environment variable to use a custom path.
fn local_store_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Check for override
    if let Ok(path) = std::env::var("SHOPFLOW_STORE_PATH") {
        return Ok(PathBuf::from(path));
    }

    // Use platform-specific app data directory
    let proj_dirs = ProjectDirs::from("com", "shopflow", "app")
        .ok_or("Could not determine app data directory")?;

    Ok(proj_dirs.data_dir().join("shopflow.json"))
}

/// Exercises the storefront end to end, logging each step.
///
/// This is what a UI session does, without the UI: browse, filter, search,
/// fill the cart, and check out.
async fn demo_session(storefront: &Storefront) -> Result<(), Box<dyn std::error::Error>> {
    // Browse the full catalog
    let products = storefront.load_products().await;
    info!(count = products.len(), "Catalog loaded");

    // Narrow to home goods under $60, cheapest first
    storefront.set_filter_criteria(FilterCriteria {
        category: CategoryFilter::Only(Category::Home),
        price: shopflow_core::catalog::PriceRange::new(0, 6_000),
    });
    storefront.set_sort_key(SortKey::PriceLow);
    for product in storefront.visible_products() {
        info!(id = product.id, name = %product.name, price = %product.price(), "Visible");
    }

    // Search across every field
    let hits = storefront.search_products("shirt").await;
    info!(count = hits.len(), "Search results for 'shirt'");

    // Reset the cart from any previous session, then fill it
    storefront.clear_cart()?;
    storefront.add_to_cart(5).await?;
    storefront.add_to_cart(11).await?;
    storefront.add_to_cart(5).await?;
    let cart = storefront.update_cart_item(11, 2)?;
    info!(
        lines = cart.summary.line_count,
        items = cart.summary.item_count,
        subtotal_cents = cart.summary.subtotal_cents,
        "Cart filled"
    );

    let totals = storefront.checkout_totals();
    info!(
        subtotal_cents = totals.subtotal_cents,
        shipping_cents = totals.shipping_cents,
        tax_cents = totals.tax_cents,
        total = %totals.total(),
        "Checkout totals"
    );

    // Check out
    let shipping = ShippingAddress {
        first_name: "Avery".to_string(),
        last_name: "Quinn".to_string(),
        email: "avery@example.com".to_string(),
        phone: "555-0100".to_string(),
        address: "42 Market Street".to_string(),
        city: "Portland".to_string(),
        state: "OR".to_string(),
        zip_code: "97201".to_string(),
        country: "United States".to_string(),
    };
    let payment = PaymentCard {
        card_number: "4242 4242 4242 4242".to_string(),
        expiry_date: "11/28".to_string(),
        cvv: "314".to_string(),
        cardholder_name: "Avery Quinn".to_string(),
    };

    storefront.submit_shipping(&shipping)?;
    let order = storefront.place_order(shipping, payment).await?;
    info!(order_id = order.id, status = ?order.status, "Order placed");

    // The confirmation page round-trip
    let confirmed = storefront.get_order(order.id).await?;
    println!("{}", serde_json::to_string_pretty(&confirmed)?);

    Ok(())
}

// =============================================================================
// Test Fixture
// =============================================================================
