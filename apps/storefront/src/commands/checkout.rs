//! # Checkout Commands
//!
//! The multi-step checkout flow: shipping form, payment form, order
//! placement, and the confirmation page lookup.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Step 1 Shipping ── submit_shipping(form)                              │
//! │       │                 missing field → VALIDATION_ERROR, stay put     │
//! │       ▼                                                                 │
//! │  Step 2 Payment ─── place_order(shipping, payment)                     │
//! │       │                 empty cart → BUSINESS_LOGIC                    │
//! │       │                 missing field → VALIDATION_ERROR               │
//! │       ▼                                                                 │
//! │  OrderStore::create (status "confirmed", slowest call in the system)   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  clear_cart ── persisted empty ── navigate to /order-confirmation/:id  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Step 3 Confirmation ── get_order(id)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use shopflow_core::checkout::{validate_payment, validate_shipping, CheckoutStep, CheckoutTotals};
use shopflow_core::error::CoreError;
use shopflow_core::types::{Order, OrderDraft, OrderStatus, PaymentCard, ShippingAddress};

use crate::error::ApiError;
use crate::Storefront;

impl Storefront {
    /// The order summary for the current cart: subtotal, shipping, tax,
    /// grand total.
    pub fn checkout_totals(&self) -> CheckoutTotals {
        let subtotal = self.cart.with_cart(|c| c.total());
        CheckoutTotals::compute(subtotal)
    }

    /// Validates the shipping form and advances to the payment step.
    pub fn submit_shipping(&self, shipping: &ShippingAddress) -> Result<CheckoutStep, ApiError> {
        debug!("submit_shipping command");

        validate_shipping(shipping)?;
        Ok(CheckoutStep::Payment)
    }

    /// Validates the payment form, creates the order, and clears the cart.
    ///
    /// The order carries a copy of the cart lines and the computed grand
    /// total, and is created with status "confirmed". The cart is cleared
    /// (and the empty cart persisted) only after the order exists.
    pub async fn place_order(
        &self,
        shipping: ShippingAddress,
        payment: PaymentCard,
    ) -> Result<Order, ApiError> {
        debug!("place_order command");

        let items = self.cart.with_cart(|c| c.cart().items.clone());
        if items.is_empty() {
            return Err(CoreError::EmptyCart.into());
        }

        validate_shipping(&shipping)?;
        validate_payment(&payment)?;

        let totals = self.checkout_totals();
        let order = self
            .orders
            .create(OrderDraft {
                items,
                total_cents: totals.total_cents,
                shipping,
                payment,
                status: Some(OrderStatus::Confirmed),
            })
            .await;

        self.cart.with_cart_mut(|c| c.clear())?;

        info!(
            order_id = order.id,
            total = %order.total(),
            "Order placed"
        );
        Ok(order)
    }

    /// Fetches an order for the confirmation page.
    pub async fn get_order(&self, id: i64) -> Result<Order, ApiError> {
        debug!(id, "get_order command");

        self.orders
            .get_by_id(id)
            .await
            .ok_or_else(|| ApiError::not_found("Order", id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::test_fixture::storefront_with;

    fn shipping() -> ShippingAddress {
        ShippingAddress {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            address: "1 Analytical Way".to_string(),
            city: "London".to_string(),
            state: "LDN".to_string(),
            zip_code: "12345".to_string(),
            country: "United States".to_string(),
        }
    }

    fn payment() -> PaymentCard {
        PaymentCard {
            card_number: "4242 4242 4242 4242".to_string(),
            expiry_date: "12/29".to_string(),
            cvv: "123".to_string(),
            cardholder_name: "Ada Lovelace".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_shipping_gates_on_required_fields() {
        let dir = tempfile::tempdir().unwrap();
        let sf = storefront_with(&dir);

        assert_eq!(
            sf.submit_shipping(&shipping()).unwrap(),
            CheckoutStep::Payment
        );

        let mut incomplete = shipping();
        incomplete.zip_code = String::new();
        let err = sf.submit_shipping(&incomplete).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "zipCode is required");
    }

    #[tokio::test]
    async fn test_place_order_with_empty_cart_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let sf = storefront_with(&dir);

        let err = sf.place_order(shipping(), payment()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
    }

    #[tokio::test]
    async fn test_place_order_confirms_and_clears_cart() {
        let dir = tempfile::tempdir().unwrap();
        let sf = storefront_with(&dir);

        sf.add_to_cart(5).await.unwrap(); // $20.00 lamp
        let expected_totals = sf.checkout_totals();

        let order = sf.place_order(shipping(), payment()).await.unwrap();

        assert_eq!(order.id, 1);
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.total_cents, expected_totals.total_cents);

        // Cart is emptied (and the empty cart persisted)
        assert!(sf.get_cart().items.is_empty());

        // The confirmation page can fetch it back
        let fetched = sf.get_order(order.id).await.unwrap();
        assert_eq!(fetched, order);
    }

    #[tokio::test]
    async fn test_place_order_keeps_cart_on_validation_failure() {
        let dir = tempfile::tempdir().unwrap();
        let sf = storefront_with(&dir);
        sf.add_to_cart(5).await.unwrap();

        let mut bad_payment = payment();
        bad_payment.card_number = "  ".to_string();

        let err = sf.place_order(shipping(), bad_payment).await.unwrap_err();
        assert_eq!(err.message, "cardNumber is required");
        assert_eq!(sf.get_cart().summary.item_count, 1);
    }

    #[tokio::test]
    async fn test_checkout_totals_track_the_cart() {
        let dir = tempfile::tempdir().unwrap();
        let sf = storefront_with(&dir);

        sf.add_to_cart(5).await.unwrap(); // $20.00 < $50 → flat shipping
        let totals = sf.checkout_totals();
        assert_eq!(totals.subtotal_cents, 2000);
        assert_eq!(totals.shipping_cents, 999);
        assert_eq!(totals.tax_cents, 160);

        sf.add_to_cart(8).await.unwrap(); // + $89.99 shoes → free shipping
        let totals = sf.checkout_totals();
        assert_eq!(totals.shipping_cents, 0);
    }

    #[tokio::test]
    async fn test_get_order_miss_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let sf = storefront_with(&dir);

        let err = sf.get_order(404).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
