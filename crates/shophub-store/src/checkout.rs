//! # Checkout Flow
//!
//! Turns the current cart into an order: saves the shipping form as the
//! draft profile, quotes the price breakdown, appends to the ledger and
//! clears the cart.
//!
//! ## Submission Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Checkout Submission                               │
//! │                                                                         │
//! │  submit(state, request)                                                │
//! │       │                                                                 │
//! │       ├── another submit in flight? ──► Err(CheckoutInProgress)        │
//! │       ├── cart empty? ────────────────► Err(EmptyCart)                 │
//! │       │                                                                 │
//! │       ├── 1. save shipping form as draft profile (prefill next time)   │
//! │       ├── 2. quote subtotal → shipping / GST / total                   │
//! │       ├── 3. append order to ledger (status from payment method)       │
//! │       └── 4. clear the cart — only after the ledger append succeeded   │
//! │                                                                         │
//! │  At most one submission runs at a time: duplicate submit events        │
//! │  cannot create a second order from the same cart.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

use shophub_core::pricing::PricingConfig;
use shophub_core::types::{Order, PaymentMethod, ShippingAddress, ShippingMethod, UserInfo};

use crate::container::CommerceState;
use crate::error::{StoreError, StoreResult};
use crate::orders::OrderLedger;

/// Everything the checkout form submits.
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    /// The shipping/contact form. Saved as the draft profile and frozen
    /// into the order's shipping address.
    pub contact: UserInfo,
    pub payment_method: PaymentMethod,
    pub shipping_method: ShippingMethod,
}

/// The checkout flow over a ledger and a fee schedule.
pub struct Checkout {
    ledger: OrderLedger,
    pricing: PricingConfig,
    in_flight: AtomicBool,
}

impl Checkout {
    /// Creates a checkout flow.
    pub fn new(ledger: OrderLedger, pricing: PricingConfig) -> Self {
        Checkout {
            ledger,
            pricing,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Submits the current cart as an order.
    ///
    /// ## Behavior
    /// - At most one submission per session at a time; a second submit
    ///   while one is in flight fails with `CheckoutInProgress`
    /// - Empty cart fails with `EmptyCart`
    /// - The cart is cleared only after the order is durably in the
    ///   ledger; a persistence failure leaves the cart intact for retry
    pub fn submit(&self, state: &CommerceState, request: &CheckoutRequest) -> StoreResult<Order> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(StoreError::CheckoutInProgress);
        }

        let result = self.submit_locked(state, request);
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    fn submit_locked(
        &self,
        state: &CommerceState,
        request: &CheckoutRequest,
    ) -> StoreResult<Order> {
        let cart = state.cart();
        if cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }

        // Remember the form for next checkout's prefill
        state.set_user_info(request.contact.clone())?;

        let quote = self.pricing.quote(
            cart.total_price(),
            request.shipping_method,
            request.payment_method,
        );

        let order = self.ledger.place_order(
            cart.lines,
            &quote,
            request.payment_method,
            request.shipping_method,
            ShippingAddress::from(&request.contact),
        )?;

        state.clear_cart()?;

        info!(
            order_id = %order.id,
            total = %quote.total,
            "checkout complete"
        );

        Ok(order)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
