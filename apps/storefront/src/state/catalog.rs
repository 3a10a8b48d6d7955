//! # Catalog View State
//!
//! The browse screen's state: the loaded product list, the active filter
//! criteria and sort key, and the loading/error flags.
//!
//! ## The Stale-Fetch Problem
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Overlapping In-Flight Fetches                        │
//! │                                                                         │
//! │  t0  user opens the grid ──► fetch A starts (ticket 1)                 │
//! │  t1  user types a search ──► fetch B starts (ticket 2)                 │
//! │  t2  fetch B resolves    ──► ticket 2 is current → APPLIED             │
//! │  t3  fetch A resolves    ──► ticket 1 is stale   → DROPPED             │
//! │                                                                         │
//! │  Without the ticket, t3 would overwrite the search results with the    │
//! │  full catalog ("last to resolve wins"). Every fetch takes a ticket     │
//! │  from begin_fetch(); complete_fetch()/fail_fetch() apply only while    │
//! │  that ticket is still the newest.                                      │
//! │                                                                         │
//! │  The counter and the view share ONE mutex, so check-and-apply is       │
//! │  atomic. There is still no cancellation: a stale fetch runs to         │
//! │  completion and is simply ignored.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Mutex;

use serde::Serialize;
use tracing::debug;

use shopflow_core::catalog::{filter_and_sort, FilterCriteria, SortKey};
use shopflow_core::types::Product;

/// What the browse screen renders.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
    /// The last successfully fetched product list.
    pub products: Vec<Product>,

    /// Active category + price-range filter.
    pub criteria: FilterCriteria,

    /// Active sort key.
    pub sort: SortKey,

    /// True while a fetch is in flight.
    pub loading: bool,

    /// Message for the error/retry state, if the last fetch failed.
    pub error: Option<String>,
}

/// Guarded view state with a request-generation counter.
#[derive(Debug, Default)]
pub struct CatalogViewState {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    view: CatalogView,
    /// Ticket of the newest fetch. Only that fetch may update the view.
    generation: u64,
}

impl CatalogViewState {
    /// Creates empty view state (no products, default criteria).
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new in-flight fetch and returns its ticket.
    ///
    /// Marks the view as loading and clears any previous error; all older
    /// tickets become stale immediately.
    pub fn begin_fetch(&self) -> u64 {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.view.loading = true;
        inner.view.error = None;
        inner.generation
    }

    /// Applies a resolved fetch if its ticket is still current.
    ///
    /// Returns whether the result was applied; a stale result is dropped.
    pub fn complete_fetch(&self, ticket: u64, products: Vec<Product>) -> bool {
        let mut inner = self.lock();
        if inner.generation != ticket {
            debug!(
                ticket,
                current = inner.generation,
                "Dropping stale fetch result"
            );
            return false;
        }
        inner.view.products = products;
        inner.view.loading = false;
        true
    }

    /// Records a failed fetch if its ticket is still current.
    ///
    /// The view keeps its previous products and shows the error/retry state.
    pub fn fail_fetch(&self, ticket: u64, message: impl Into<String>) -> bool {
        let mut inner = self.lock();
        if inner.generation != ticket {
            debug!(
                ticket,
                current = inner.generation,
                "Dropping stale fetch failure"
            );
            return false;
        }
        inner.view.error = Some(message.into());
        inner.view.loading = false;
        true
    }

    /// Replaces the filter criteria.
    pub fn set_criteria(&self, criteria: FilterCriteria) {
        self.lock().view.criteria = criteria;
    }

    /// Replaces the sort key.
    pub fn set_sort(&self, sort: SortKey) {
        self.lock().view.sort = sort;
    }

    /// Clones the current view for rendering.
    pub fn snapshot(&self) -> CatalogView {
        self.lock().view.clone()
    }

    /// Runs the pure pipeline over the current view.
    ///
    /// Recomputed on demand rather than cached: the pipeline is
    /// deterministic, so rerunning it is always safe.
    pub fn visible_products(&self) -> Vec<Product> {
        let inner = self.lock();
        filter_and_sort(&inner.view.products, &inner.view.criteria, inner.view.sort)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("Catalog view mutex poisoned")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shopflow_core::catalog::{CategoryFilter, PriceRange};
    use shopflow_core::types::Category;

    fn product(id: i64, name: &str, price_cents: i64) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: String::new(),
            category: Category::Electronics,
            price_cents,
            original_price_cents: None,
            images: vec!["img.jpg".to_string()],
            in_stock: true,
        }
    }

    #[test]
    fn test_fetch_lifecycle() {
        let state = CatalogViewState::new();

        let ticket = state.begin_fetch();
        assert!(state.snapshot().loading);

        assert!(state.complete_fetch(ticket, vec![product(1, "A", 100)]));
        let view = state.snapshot();
        assert!(!view.loading);
        assert_eq!(view.products.len(), 1);
    }

    #[test]
    fn test_stale_fetch_is_dropped() {
        let state = CatalogViewState::new();

        let first = state.begin_fetch();
        let second = state.begin_fetch();

        // Newest resolves first and wins
        assert!(state.complete_fetch(second, vec![product(2, "B", 200)]));
        // The older fetch resolves late; it must NOT overwrite
        assert!(!state.complete_fetch(first, vec![product(1, "A", 100)]));

        let view = state.snapshot();
        assert_eq!(view.products.len(), 1);
        assert_eq!(view.products[0].id, 2);
        assert!(!view.loading);
    }

    #[test]
    fn test_stale_failure_is_dropped_too() {
        let state = CatalogViewState::new();

        let first = state.begin_fetch();
        let second = state.begin_fetch();

        assert!(state.complete_fetch(second, vec![product(2, "B", 200)]));
        assert!(!state.fail_fetch(first, "Failed to load products"));
        assert!(state.snapshot().error.is_none());
    }

    #[test]
    fn test_failed_fetch_keeps_previous_products() {
        let state = CatalogViewState::new();

        let ticket = state.begin_fetch();
        state.complete_fetch(ticket, vec![product(1, "A", 100)]);

        let retry = state.begin_fetch();
        assert!(state.snapshot().error.is_none()); // begin clears the error
        assert!(state.fail_fetch(retry, "Failed to load products"));

        let view = state.snapshot();
        assert_eq!(view.error.as_deref(), Some("Failed to load products"));
        assert_eq!(view.products.len(), 1); // retry state still shows data
    }

    #[test]
    fn test_visible_products_applies_criteria() {
        let state = CatalogViewState::new();
        let ticket = state.begin_fetch();
        state.complete_fetch(
            ticket,
            vec![
                product(1, "Cheap", 500),
                product(2, "Mid", 2000),
                product(3, "Dear", 9000),
            ],
        );

        state.set_criteria(FilterCriteria {
            category: CategoryFilter::All,
            price: PriceRange::new(1000, 5000),
        });
        state.set_sort(SortKey::PriceHigh);

        let visible = state.visible_products();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);

        // The underlying list is untouched
        assert_eq!(state.snapshot().products.len(), 3);
    }
}
