//! # Checkout
//!
//! Step progression, form validation, and order totals for the checkout flow.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Flow                                        │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────────┐                    │
//! │  │ Shipping │────►│ Payment  │────►│ Confirmation │                    │
//! │  │  (step 1)│     │ (step 2) │     │   (step 3)   │                    │
//! │  └──────────┘     └──────────┘     └──────────────┘                    │
//! │       │                │                                                │
//! │  validate_shipping  validate_payment + place_order                      │
//! │       │                │                                                │
//! │  Missing field ────► ValidationError::Required { field }                │
//! │  (surfaced as a transient notification; the step does not advance)      │
//! │                                                                         │
//! │  Validation is PRESENCE-ONLY. Nothing is checked against a real         │
//! │  address service or payment processor.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ValidationError, ValidationResult};
use crate::money::{Money, TaxRate};
use crate::types::{PaymentCard, ShippingAddress};
use crate::{CHECKOUT_TAX_RATE_BPS, FLAT_SHIPPING_CENTS, FREE_SHIPPING_THRESHOLD_CENTS};

// =============================================================================
// Checkout Step
// =============================================================================

/// The three steps of the checkout progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutStep {
    Shipping,
    Payment,
    Confirmation,
}

impl CheckoutStep {
    /// 1-based step number shown in the progress indicator.
    pub const fn number(&self) -> u8 {
        match self {
            CheckoutStep::Shipping => 1,
            CheckoutStep::Payment => 2,
            CheckoutStep::Confirmation => 3,
        }
    }

    /// The step after this one, if any.
    pub const fn next(&self) -> Option<CheckoutStep> {
        match self {
            CheckoutStep::Shipping => Some(CheckoutStep::Payment),
            CheckoutStep::Payment => Some(CheckoutStep::Confirmation),
            CheckoutStep::Confirmation => None,
        }
    }
}

// =============================================================================
// Form Validation
// =============================================================================

/// Returns the first `(field, value)` pair whose trimmed value is empty.
fn first_missing<'a>(fields: &[(&'a str, &str)]) -> Option<&'a str> {
    fields
        .iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
}

/// Validates the shipping form before advancing to the payment step.
///
/// ## Rules
/// Required: first name, last name, email, address, city, state, zip code.
/// Phone is optional; country is pre-selected by the form.
/// Whitespace-only input counts as missing.
pub fn validate_shipping(shipping: &ShippingAddress) -> ValidationResult<()> {
    let required = [
        ("firstName", shipping.first_name.as_str()),
        ("lastName", shipping.last_name.as_str()),
        ("email", shipping.email.as_str()),
        ("address", shipping.address.as_str()),
        ("city", shipping.city.as_str()),
        ("state", shipping.state.as_str()),
        ("zipCode", shipping.zip_code.as_str()),
    ];

    match first_missing(&required) {
        Some(field) => Err(ValidationError::Required {
            field: field.to_string(),
        }),
        None => Ok(()),
    }
}

/// Validates the payment form before placing the order.
///
/// ## Rules
/// Every card field is required. The values themselves are never checked
/// against a processor.
pub fn validate_payment(payment: &PaymentCard) -> ValidationResult<()> {
    let required = [
        ("cardNumber", payment.card_number.as_str()),
        ("expiryDate", payment.expiry_date.as_str()),
        ("cvv", payment.cvv.as_str()),
        ("cardholderName", payment.cardholder_name.as_str()),
    ];

    match first_missing(&required) {
        Some(field) => Err(ValidationError::Required {
            field: field.to_string(),
        }),
        None => Ok(()),
    }
}

// =============================================================================
// Checkout Totals
// =============================================================================

/// The order summary box: subtotal, shipping, tax, grand total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutTotals {
    pub subtotal_cents: i64,
    pub shipping_cents: i64,
    pub tax_cents: i64,
    pub total_cents: i64,
}

impl CheckoutTotals {
    /// Computes totals from the cart subtotal.
    ///
    /// ## Rules
    /// - Shipping: free when the subtotal exceeds $50.00, otherwise a flat
    ///   $9.99. At exactly $50.00 shipping is still charged.
    /// - Tax: 8% of the subtotal (not of shipping).
    pub fn compute(subtotal: Money) -> Self {
        let shipping = if subtotal.cents() > FREE_SHIPPING_THRESHOLD_CENTS {
            Money::zero()
        } else {
            Money::from_cents(FLAT_SHIPPING_CENTS)
        };
        let tax = subtotal.calculate_tax(TaxRate::from_bps(CHECKOUT_TAX_RATE_BPS));
        let total = subtotal + shipping + tax;

        CheckoutTotals {
            subtotal_cents: subtotal.cents(),
            shipping_cents: shipping.cents(),
            tax_cents: tax.cents(),
            total_cents: total.cents(),
        }
    }

    /// Grand total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
