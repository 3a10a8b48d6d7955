//! # Product Commands
//!
//! Catalog browsing for the storefront grid.
//!
//! ## Fetch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User opens grid / picks category / types a search                     │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  begin_fetch() ──► ticket                                              │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  catalog accessor (artificial latency, no cancellation)                │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  complete_fetch(ticket, products) ── stale tickets are dropped         │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  visible_products() = pure filter/sort over the applied list           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use shopflow_core::catalog::{FilterCriteria, SortKey};
use shopflow_core::types::{Category, Product};

use crate::error::ApiError;
use crate::Storefront;

impl Storefront {
    /// Loads the full catalog into the view.
    ///
    /// The returned list is the fetched catalog; whether it was applied to
    /// the view depends on the generation guard (a newer fetch wins).
    pub async fn load_products(&self) -> Vec<Product> {
        debug!("load_products command");

        let ticket = self.view.begin_fetch();
        let products = self.catalog.get_all().await;
        self.view.complete_fetch(ticket, products.clone());
        products
    }

    /// Loads one category into the view.
    pub async fn browse_category(&self, category: Category) -> Vec<Product> {
        debug!(%category, "browse_category command");

        let ticket = self.view.begin_fetch();
        let products = self.catalog.get_by_category(category).await;
        self.view.complete_fetch(ticket, products.clone());
        products
    }

    /// Searches the catalog (case-insensitive, name/description/category)
    /// and shows the hits in the view.
    pub async fn search_products(&self, query: &str) -> Vec<Product> {
        debug!(query = %query, "search_products command");

        let ticket = self.view.begin_fetch();
        let products = self.catalog.search(query).await;
        self.view.complete_fetch(ticket, products.clone());
        products
    }

    /// Fetches a single product for the detail page.
    ///
    /// An absent id surfaces as a NOT_FOUND error here - the accessor
    /// itself only reports absence.
    pub async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        debug!(id, "get_product command");

        self.catalog
            .get_by_id(id)
            .await
            .ok_or_else(|| ApiError::not_found("Product", id))
    }

    /// Updates the filter criteria; the visible list recomputes on read.
    pub fn set_filter_criteria(&self, criteria: FilterCriteria) {
        debug!(?criteria, "set_filter_criteria command");
        self.view.set_criteria(criteria);
    }

    /// Updates the sort key; the visible list recomputes on read.
    pub fn set_sort_key(&self, sort: SortKey) {
        debug!(?sort, "set_sort_key command");
        self.view.set_sort(sort);
    }

    /// The filtered, sorted list the grid renders right now.
    pub fn visible_products(&self) -> Vec<Product> {
        self.view.visible_products()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::test_fixture::storefront_with;
    use shopflow_core::catalog::{CategoryFilter, FilterCriteria, SortKey};
    use shopflow_core::types::Category;

    #[tokio::test]
    async fn test_load_products_fills_the_view() {
        let dir = tempfile::tempdir().unwrap();
        let sf = storefront_with(&dir);

        let products = sf.load_products().await;

        assert!(!products.is_empty());
        assert_eq!(sf.visible_products().len(), products.len());
    }

    #[tokio::test]
    async fn test_criteria_and_sort_shape_the_visible_list() {
        let dir = tempfile::tempdir().unwrap();
        let sf = storefront_with(&dir);
        sf.load_products().await;

        sf.set_filter_criteria(FilterCriteria {
            category: CategoryFilter::Only(Category::Home),
            ..Default::default()
        });
        sf.set_sort_key(SortKey::PriceLow);

        let visible = sf.visible_products();
        assert!(visible.iter().all(|p| p.category == Category::Home));
        let prices: Vec<i64> = visible.iter().map(|p| p.price_cents).collect();
        let mut sorted = prices.clone();
        sorted.sort();
        assert_eq!(prices, sorted);
    }

    #[tokio::test]
    async fn test_search_matches_description() {
        let dir = tempfile::tempdir().unwrap();
        let sf = storefront_with(&dir);

        // "shirt" appears only in the Oxford Button-Down's description
        let hits = sf.search_products("shirt").await;

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Oxford Button-Down");
        // And the hits became the visible list
        assert_eq!(sf.visible_products().len(), 1);
    }

    #[tokio::test]
    async fn test_get_product_miss_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let sf = storefront_with(&dir);

        assert!(sf.get_product(1).await.is_ok());

        let err = sf.get_product(9999).await.unwrap_err();
        assert_eq!(err.message, "Product not found: 9999");
    }

    #[tokio::test]
    async fn test_browse_category_narrows_the_view() {
        let dir = tempfile::tempdir().unwrap();
        let sf = storefront_with(&dir);

        let books = sf.browse_category(Category::Books).await;

        assert!(!books.is_empty());
        assert!(books.iter().all(|p| p.category == Category::Books));
    }
}
