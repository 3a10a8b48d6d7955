//! # Seed Dataset
//!
//! The static bundled catalog the storefront launches with.
//!
//! The dataset is embedded at compile time and parsed once at startup; the
//! catalog accessor owns the resulting list and mutates it freely (the
//! embedded JSON itself is immutable, so every launch starts identical).

use shopflow_core::types::Product;

use crate::error::StoreResult;

/// The bundled dataset, embedded at compile time.
const SEED_JSON: &str = include_str!("../data/products.json");

/// Parses the bundled catalog dataset.
///
/// Failure here means the shipped JSON is malformed - it surfaces as a
/// normal [`StoreError`](crate::StoreError) rather than a panic, and the
/// app reports it and exits.
pub fn seed_products() -> StoreResult<Vec<Product>> {
    let products: Vec<Product> = serde_json::from_str(SEED_JSON)?;
    Ok(products)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use shopflow_core::types::Category;
    use std::collections::HashSet;

    #[test]
    fn test_seed_parses() {
        let products = seed_products().unwrap();
        assert!(!products.is_empty());
    }

    #[test]
    fn test_seed_ids_are_unique_and_positive() {
        let products = seed_products().unwrap();
        let ids: HashSet<i64> = products.iter().map(|p| p.id).collect();

        assert_eq!(ids.len(), products.len());
        assert!(products.iter().all(|p| p.id > 0));
    }

    #[test]
    fn test_seed_products_are_well_formed() {
        let products = seed_products().unwrap();

        for product in &products {
            assert!(!product.name.trim().is_empty(), "product {}", product.id);
            assert!(!product.images.is_empty(), "product {}", product.id);
            assert!(product.price_cents >= 0, "product {}", product.id);
        }
    }

    #[test]
    fn test_seed_covers_every_category() {
        let products = seed_products().unwrap();
        let categories: HashSet<Category> = products.iter().map(|p| p.category).collect();

        for category in Category::ALL {
            assert!(categories.contains(&category), "missing {}", category);
        }
    }

    #[test]
    fn test_seed_has_storefront_variety() {
        let products = seed_products().unwrap();

        // The deals rail needs discounts, and the grid needs at least one
        // sold-out card to render its badge
        assert!(products.iter().any(|p| p.is_discounted()));
        assert!(products.iter().any(|p| !p.in_stock));
    }
}
