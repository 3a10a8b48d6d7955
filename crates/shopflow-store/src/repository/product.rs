//! # Product Catalog Service
//!
//! The mock catalog accessor: an in-memory product list behind simulated
//! I/O latency.
//!
//! ## Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Catalog Search Works                             │
//! │                                                                         │
//! │  User types: "shirt"                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  lowercase the query, then substring-match against:                    │
//! │       name  OR  description  OR  category                              │
//! │       │                                                                 │
//! │  ┌─────────────────────────────────────────────┐                       │
//! │  │ "Oxford Shirt"     | "Crisp cotton..."     │ ← name match           │
//! │  │ "Weekend Henley"   | "A shirt for..."      │ ← description match    │
//! │  │ "Desk Lamp"        | "Warm LED..."         │                        │
//! │  └─────────────────────────────────────────────┘                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Results: [Oxford Shirt, Weekend Henley]  (catalog order, clones)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::time::sleep;
use tracing::debug;

use shopflow_core::types::{Category, Product, ProductDraft};

use super::LatencyProfile;

/// In-memory catalog accessor.
///
/// Cloning the service clones the handle, not the data: all clones share
/// the same product list, which is how a single mock "database" is shared
/// across view state and commands.
///
/// ## Usage
/// ```rust,ignore
/// let catalog = ProductCatalog::new(seed::seed_products()?);
///
/// let all = catalog.get_all().await;
/// let shirt = catalog.search("shirt").await;
/// ```
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Arc<RwLock<Vec<Product>>>,
    latency: LatencyProfile,
}

impl ProductCatalog {
    /// Creates a catalog over the given products with the service's
    /// standard delays.
    pub fn new(products: Vec<Product>) -> Self {
        Self::with_latency(products, LatencyProfile::PRODUCTS)
    }

    /// Creates a catalog with explicit delays (tests pass
    /// [`LatencyProfile::instant`]).
    pub fn with_latency(products: Vec<Product>, latency: LatencyProfile) -> Self {
        ProductCatalog {
            products: Arc::new(RwLock::new(products)),
            latency,
        }
    }

    /// Returns the full catalog in accessor order.
    pub async fn get_all(&self) -> Vec<Product> {
        sleep(self.latency.read).await;
        let products = self.products.read().await;
        debug!(count = products.len(), "get_all products");
        products.clone()
    }

    /// Looks up one product. Absent ids are `None`, never an error.
    pub async fn get_by_id(&self, id: i64) -> Option<Product> {
        sleep(self.latency.read).await;
        let products = self.products.read().await;
        let found = products.iter().find(|p| p.id == id).cloned();
        debug!(id, found = found.is_some(), "get_by_id product");
        found
    }

    /// Returns all products in one category, in catalog order.
    pub async fn get_by_category(&self, category: Category) -> Vec<Product> {
        sleep(self.latency.read).await;
        let products = self.products.read().await;
        let matches: Vec<Product> = products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect();
        debug!(%category, count = matches.len(), "get_by_category products");
        matches
    }

    /// Case-insensitive substring search over name, description, and
    /// category. A product matches if the query appears in ANY of the three.
    pub async fn search(&self, query: &str) -> Vec<Product> {
        sleep(self.latency.write).await;
        let term = query.to_lowercase();
        let products = self.products.read().await;
        let matches: Vec<Product> = products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&term)
                    || p.description.to_lowercase().contains(&term)
                    || p.category.as_str().contains(&term)
            })
            .cloned()
            .collect();
        debug!(query = %query, count = matches.len(), "search products");
        matches
    }

    /// Adds a product, assigning `max(existing ids) + 1` (1 when empty).
    pub async fn create(&self, draft: ProductDraft) -> Product {
        sleep(self.latency.create).await;
        let mut products = self.products.write().await;
        let id = next_id(products.iter().map(|p| p.id));
        let product = draft.into_product(id);
        products.push(product.clone());
        debug!(id, "created product");
        product
    }

    /// Replaces a product's fields, keeping its id. `None` if absent.
    pub async fn update(&self, id: i64, draft: ProductDraft) -> Option<Product> {
        sleep(self.latency.write).await;
        let mut products = self.products.write().await;
        let slot = products.iter_mut().find(|p| p.id == id)?;
        *slot = draft.into_product(id);
        debug!(id, "updated product");
        Some(slot.clone())
    }

    /// Removes a product, returning the removed record. `None` if absent.
    pub async fn delete(&self, id: i64) -> Option<Product> {
        sleep(self.latency.write).await;
        let mut products = self.products.write().await;
        let index = products.iter().position(|p| p.id == id)?;
        let removed = products.remove(index);
        debug!(id, "deleted product");
        Some(removed)
    }
}

/// Next sequential id: `max + 1`, defined as 1 for an empty collection.
pub(crate) fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().map_or(1, |max| max + 1)
}

// =============================================================================
// Unit Tests
// =============================================================================
