//! # Commands
//!
//! The operations the storefront UI invokes, grouped by concern:
//!
//! - [`product`] - catalog browsing, filtering, and search
//! - [`cart`] - cart manipulation
//! - [`checkout`] - the multi-step checkout flow
//!
//! Each file extends [`crate::Storefront`] with its command set; the
//! struct itself is wired up in `lib.rs`.

pub mod cart;
pub mod checkout;
pub mod product;
