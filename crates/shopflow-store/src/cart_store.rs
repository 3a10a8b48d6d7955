//! # Cart Store
//!
//! The persisted cart: core cart math plus the durable-storage contract.
//!
//! ## Persistence Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Persistence Lifecycle                           │
//! │                                                                         │
//! │  CartStore::open(local)                                                 │
//! │       │                                                                 │
//! │       ├── stored value parses ───► start with the saved line items     │
//! │       │                                                                 │
//! │       ├── key absent ────────────► start empty                         │
//! │       │                                                                 │
//! │       └── value corrupt ─────────► warn, DELETE the entry, start empty │
//! │                                    (fail soft, never crash)            │
//! │                                                                         │
//! │  add / update / remove / clear                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  serialize FULL cart ──► LocalStore::set ──► only then return Ok       │
//! │                                                                         │
//! │  The cart never expires; whatever was saved last session is the        │
//! │  starting cart next session.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use shopflow_core::cart::{Cart, CartLineItem};
use shopflow_core::money::Money;
use shopflow_core::types::Product;
use tracing::{debug, warn};

use crate::error::StoreResult;
use crate::local::LocalStore;

/// Fixed key under which the serialized cart lives in the local store.
pub const CART_STORAGE_KEY: &str = "shopflow-cart";

/// A cart bound to durable local storage.
///
/// Owns the in-memory [`Cart`] and keeps the stored copy in sync: every
/// mutating operation persists before it reports success.
#[derive(Debug)]
pub struct CartStore {
    cart: Cart,
    local: LocalStore,
}

impl CartStore {
    /// Opens the cart store, loading whatever the local store has under
    /// [`CART_STORAGE_KEY`].
    ///
    /// A corrupt saved value is discarded (the entry is removed so the next
    /// session starts clean) and the cart starts empty. This can log but
    /// never fail.
    pub fn open(local: LocalStore) -> Self {
        let cart = match local.get(CART_STORAGE_KEY) {
            None => Cart::new(),
            Some(raw) => match serde_json::from_str::<Vec<CartLineItem>>(&raw) {
                Ok(items) => {
                    debug!(lines = items.len(), "Loaded cart from local store");
                    Cart::from_items(items)
                }
                Err(e) => {
                    warn!(error = %e, "Saved cart is corrupt; resetting to empty");
                    // Best effort: a failed delete just means the same
                    // warning next session.
                    if let Err(e) = local.remove(CART_STORAGE_KEY) {
                        warn!(error = %e, "Could not remove corrupt cart entry");
                    }
                    Cart::new()
                }
            },
        };

        CartStore { cart, local }
    }

    /// Read access to the current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Adds a product (quantity +1, or a new snapshot line) and persists.
    pub fn add_to_cart(&mut self, product: &Product) -> StoreResult<()> {
        debug!(product_id = product.id, "add_to_cart");
        self.cart.add_product(product);
        self.persist()
    }

    /// Sets a line's exact quantity (<= 0 removes it) and persists.
    ///
    /// Unknown product ids are a no-op, but the cart is still re-persisted.
    pub fn update_quantity(&mut self, product_id: i64, quantity: i64) -> StoreResult<()> {
        debug!(product_id, quantity, "update_quantity");
        self.cart.update_quantity(product_id, quantity);
        self.persist()
    }

    /// Removes a line if present and persists.
    pub fn remove_from_cart(&mut self, product_id: i64) -> StoreResult<()> {
        debug!(product_id, "remove_from_cart");
        self.cart.remove_product(product_id);
        self.persist()
    }

    /// Empties the cart and persists.
    pub fn clear(&mut self) -> StoreResult<()> {
        debug!("clear_cart");
        self.cart.clear();
        self.persist()
    }

    /// Sum of `price × quantity` over all lines.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> i64 {
        self.cart.item_count()
    }

    /// Serializes the full cart and overwrites the stored value.
    fn persist(&self) -> StoreResult<()> {
        let raw = serde_json::to_string(&self.cart.items)?;
        self.local.set(CART_STORAGE_KEY, &raw)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shopflow_core::types::Category;

    fn test_product(id: i64, price_cents: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            description: String::new(),
            category: Category::Home,
            price_cents,
            original_price_cents: None,
            images: vec![format!("product-{}.jpg", id)],
            in_stock: true,
        }
    }

    fn local_in(dir: &tempfile::TempDir) -> LocalStore {
        LocalStore::open(dir.path().join("shopflow.json"))
    }

    #[test]
    fn test_starts_empty_without_saved_cart() {
        let dir = tempfile::tempdir().unwrap();
        let store = CartStore::open(local_in(&dir));

        assert!(store.cart().is_empty());
        assert_eq!(store.total(), Money::zero());
    }

    #[test]
    fn test_reload_reconstructs_identical_cart() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = CartStore::open(local_in(&dir));
        store.add_to_cart(&test_product(3, 999)).unwrap();
        store.add_to_cart(&test_product(1, 250)).unwrap();
        store.add_to_cart(&test_product(3, 999)).unwrap();
        store.update_quantity(1, 4).unwrap();
        let saved_items = store.cart().items.clone();

        // A new store over the same file is "the next session"
        let reloaded = CartStore::open(local_in(&dir));

        assert_eq!(reloaded.cart().items, saved_items);
        let ids: Vec<i64> = reloaded.cart().items.iter().map(|i| i.product_id).collect();
        assert_eq!(ids, vec![3, 1]); // order preserved
        assert_eq!(reloaded.cart().line(3).unwrap().quantity, 2);
        assert_eq!(reloaded.total(), Money::from_cents(999 * 2 + 250 * 4));
    }

    #[test]
    fn test_every_mutation_persists() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = CartStore::open(local_in(&dir));
        store.add_to_cart(&test_product(1, 100)).unwrap();
        store.add_to_cart(&test_product(2, 200)).unwrap();
        store.remove_from_cart(1).unwrap();

        let reloaded = CartStore::open(local_in(&dir));
        assert_eq!(reloaded.cart().line_count(), 1);
        assert!(reloaded.cart().line(2).is_some());

        store.clear().unwrap();
        let reloaded = CartStore::open(local_in(&dir));
        assert!(reloaded.cart().is_empty());
    }

    #[test]
    fn test_corrupt_saved_cart_resets_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let local = local_in(&dir);
        local.set(CART_STORAGE_KEY, "not a cart at all").unwrap();

        let store = CartStore::open(local.clone());

        assert!(store.cart().is_empty());
        // The corrupt entry was discarded, not left to warn forever
        assert_eq!(local.get(CART_STORAGE_KEY), None);
    }

    #[test]
    fn test_corrupt_cart_does_not_disturb_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let local = local_in(&dir);
        local.set(CART_STORAGE_KEY, "{broken").unwrap();
        local.set("theme", "dark").unwrap();

        let _store = CartStore::open(local.clone());

        assert_eq!(local.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_update_quantity_unknown_id_still_ok() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CartStore::open(local_in(&dir));

        store.add_to_cart(&test_product(1, 100)).unwrap();
        store.update_quantity(42, 5).unwrap(); // no such line

        assert_eq!(store.cart().line_count(), 1);
        assert_eq!(store.item_count(), 1);
    }
}
