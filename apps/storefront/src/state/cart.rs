//! # Cart State
//!
//! Wraps the persisted [`CartStore`] for use in storefront commands.
//!
//! ## Thread Safety
//! The cart is wrapped in a `Mutex` because:
//! 1. Multiple commands may access/modify the cart
//! 2. Only one command should modify the cart at a time
//! 3. Every mutation must finish persisting before the next one starts
//!
//! ## Why Not RwLock?
//! Cart operations are quick, and most of them modify state.
//! A RwLock would add complexity with minimal benefit.

use std::sync::Mutex;

use shopflow_store::CartStore;

/// Command-layer handle to the persisted cart.
#[derive(Debug)]
pub struct CartState {
    cart: Mutex<CartStore>,
}

impl CartState {
    /// Wraps an already-opened cart store.
    pub fn new(store: CartStore) -> Self {
        CartState {
            cart: Mutex::new(store),
        }
    }

    /// Executes a function with read access to the cart store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = cart_state.with_cart(|c| c.total());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartStore) -> R,
    {
        let cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&cart)
    }

    /// Executes a function with write access to the cart store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|c| c.add_to_cart(&product))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartStore) -> R,
    {
        let mut cart = self.cart.lock().expect("Cart mutex poisoned");
        f(&mut cart)
    }
}
