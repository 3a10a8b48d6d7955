//! # Catalog Filter/Sort Pipeline
//!
//! Pure, deterministic derivation of the visible product list from the full
//! catalog and the current criteria.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Visible Product Derivation                           │
//! │                                                                         │
//! │  Full catalog (accessor order)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. Category filter ── skipped when the filter is "all"                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. Price range filter ── inclusive on BOTH ends                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. Sort key ── featured / price-low / price-high / name / newest       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Visible list (new Vec; the source catalog is never mutated)            │
//! │                                                                         │
//! │  Re-running with identical inputs yields an identical output, which     │
//! │  is what lets the view recompute on every criteria change.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Category, Product};

// =============================================================================
// Filter Criteria
// =============================================================================

/// Category selection: everything, or exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,
    /// Exactly one category (exact match, closed vocabulary).
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product in `category` passes this filter.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

/// Inclusive price range in cents. Invariant: `min_cents <= max_cents`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub min_cents: i64,
    pub max_cents: i64,
}

impl PriceRange {
    /// Creates a range, clamping an inverted pair into a valid one by
    /// swapping the bounds.
    pub fn new(min_cents: i64, max_cents: i64) -> Self {
        if min_cents <= max_cents {
            PriceRange {
                min_cents,
                max_cents,
            }
        } else {
            PriceRange {
                min_cents: max_cents,
                max_cents: min_cents,
            }
        }
    }

    /// Inclusive containment check on both ends.
    pub fn contains(&self, price_cents: i64) -> bool {
        price_cents >= self.min_cents && price_cents <= self.max_cents
    }
}

impl Default for PriceRange {
    /// The storefront's slider default: $0 to $1000.
    fn default() -> Self {
        PriceRange {
            min_cents: 0,
            max_cents: 100_000,
        }
    }
}

/// The combination of category filter and price range currently applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub price: PriceRange,
}

// =============================================================================
// Sort Key
// =============================================================================

/// The sort applied after filtering. Wire names match the storefront's
/// sort dropdown values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// No reordering; catalog order is the "featured" order.
    #[default]
    Featured,
    /// Price ascending. Ties keep catalog order.
    PriceLow,
    /// Price descending. Ties keep catalog order.
    PriceHigh,
    /// Name ascending, case-insensitive.
    Name,
    /// Newest first: descending id.
    Newest,
}

// =============================================================================
// Pipeline
// =============================================================================

/// Derives the visible product list.
///
/// Filters by category (exact match unless `All`), then by inclusive price
/// range, then sorts. The source slice is never mutated; price ties keep
/// their relative catalog order (the sort is stable).
pub fn filter_and_sort(
    products: &[Product],
    criteria: &FilterCriteria,
    sort: SortKey,
) -> Vec<Product> {
    let mut visible: Vec<Product> = products
        .iter()
        .filter(|p| criteria.category.matches(p.category))
        .filter(|p| criteria.price.contains(p.price_cents))
        .cloned()
        .collect();

    match sort {
        SortKey::Featured => {}
        SortKey::PriceLow => visible.sort_by_key(|p| p.price_cents),
        SortKey::PriceHigh => visible.sort_by(|a, b| b.price_cents.cmp(&a.price_cents)),
        SortKey::Name => {
            visible.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
        SortKey::Newest => visible.sort_by(|a, b| b.id.cmp(&a.id)),
    }

    visible
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str, category: Category, price_cents: i64) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: String::new(),
            category,
            price_cents,
            original_price_cents: None,
            images: vec!["img.jpg".to_string()],
            in_stock: true,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Wireless Headphones", Category::Electronics, 7999),
            product(2, "Cotton T-Shirt", Category::Clothing, 2000),
            product(3, "Desk Lamp", Category::Home, 2000),
            product(4, "Yoga Mat", Category::Sports, 3499),
            product(5, "Mystery Novel", Category::Books, 1299),
        ]
    }

    #[test]
    fn test_category_all_keeps_membership() {
        let products = catalog();
        let criteria = FilterCriteria::default();

        let visible = filter_and_sort(&products, &criteria, SortKey::Featured);

        assert_eq!(visible, products);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let products = catalog();
        let criteria = FilterCriteria {
            category: CategoryFilter::Only(Category::Clothing),
            ..Default::default()
        };

        let visible = filter_and_sort(&products, &criteria, SortKey::Featured);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
    }

    #[test]
    fn test_price_range_is_inclusive_both_ends() {
        let products = catalog();
        let criteria = FilterCriteria {
            price: PriceRange::new(2000, 2000),
            ..Default::default()
        };

        // [20, 20] keeps only products priced exactly $20.00
        let visible = filter_and_sort(&products, &criteria, SortKey::Featured);
        let ids: Vec<i64> = visible.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_price_range_swaps_inverted_bounds() {
        let range = PriceRange::new(5000, 1000);
        assert_eq!(range.min_cents, 1000);
        assert_eq!(range.max_cents, 5000);
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let products = vec![
            product(1, "Zeta", Category::Home, 100),
            product(2, "Alpha", Category::Home, 100),
            product(3, "Mu", Category::Home, 100),
        ];

        let visible = filter_and_sort(&products, &FilterCriteria::default(), SortKey::Name);
        let names: Vec<&str> = visible.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Mu", "Zeta"]);

        let mixed = vec![
            product(1, "banana stand", Category::Home, 100),
            product(2, "Apple Crate", Category::Home, 100),
        ];
        let visible = filter_and_sort(&mixed, &FilterCriteria::default(), SortKey::Name);
        assert_eq!(visible[0].name, "Apple Crate");
    }

    #[test]
    fn test_sort_by_newest_descends_ids() {
        let products = vec![
            product(3, "C", Category::Home, 100),
            product(1, "A", Category::Home, 100),
            product(2, "B", Category::Home, 100),
        ];

        let visible = filter_and_sort(&products, &FilterCriteria::default(), SortKey::Newest);
        let ids: Vec<i64> = visible.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_price_sort_ties_keep_catalog_order() {
        let products = vec![
            product(10, "First", Category::Home, 2000),
            product(11, "Second", Category::Home, 1000),
            product(12, "Third", Category::Home, 2000),
        ];

        let visible = filter_and_sort(&products, &FilterCriteria::default(), SortKey::PriceLow);
        let ids: Vec<i64> = visible.iter().map(|p| p.id).collect();
        // The two $20.00 products stay in catalog order (10 before 12)
        assert_eq!(ids, vec![11, 10, 12]);

        let visible = filter_and_sort(&products, &FilterCriteria::default(), SortKey::PriceHigh);
        let ids: Vec<i64> = visible.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![10, 12, 11]);
    }

    #[test]
    fn test_pipeline_is_pure_and_deterministic() {
        let products = catalog();
        let criteria = FilterCriteria {
            category: CategoryFilter::Only(Category::Home),
            price: PriceRange::new(0, 5000),
        };

        let first = filter_and_sort(&products, &criteria, SortKey::PriceLow);
        let second = filter_and_sort(&products, &criteria, SortKey::PriceLow);

        assert_eq!(first, second);
        // Source order untouched
        assert_eq!(products[0].id, 1);
    }

    #[test]
    fn test_sort_key_wire_names() {
        assert_eq!(
            serde_json::to_string(&SortKey::PriceLow).unwrap(),
            "\"price-low\""
        );
        assert_eq!(
            serde_json::to_string(&SortKey::Featured).unwrap(),
            "\"featured\""
        );
        let parsed: SortKey = serde_json::from_str("\"newest\"").unwrap();
        assert_eq!(parsed, SortKey::Newest);
    }
}
