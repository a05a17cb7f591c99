//! # Order Ledger
//!
//! The append-only history of placed orders.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Lifecycle                                   │
//! │                                                                         │
//! │  1. PLACE                                                              │
//! │     └── place_order() → Order { id: ORD-…, status from payment }       │
//! │         • cart lines frozen into the order                             │
//! │         • prepended to the ledger (most recent first)                  │
//! │                                                                         │
//! │  2. READ                                                               │
//! │     └── list_orders() → full ledger for the account page               │
//! │                                                                         │
//! │  Orders are immutable once appended and are never deleted; the         │
//! │  ledger outlives the session that created its entries.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use shophub_core::cart::CartLine;
use shophub_core::pricing::PriceBreakdown;
use shophub_core::types::{Order, OrderStatus, PaymentMethod, ShippingAddress, ShippingMethod};

use crate::error::StoreResult;
use crate::kv::{KeyValueStore, KeyValueStoreExt, StorageKey};

/// The persisted order history.
pub struct OrderLedger {
    store: Arc<dyn KeyValueStore>,
}

impl OrderLedger {
    /// Creates a ledger over the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        OrderLedger { store }
    }

    /// Synthesizes an order from a cart snapshot and appends it.
    ///
    /// ## Behavior
    /// - Fresh `ORD-{epoch millis}` identifier and current timestamp
    /// - Status derived solely from the payment method: cash on delivery
    ///   starts `Processing`, everything else starts `Confirmed`
    /// - Prepended, so the ledger stays most-recent-first
    ///
    /// Returns the created order.
    pub fn place_order(
        &self,
        items: Vec<CartLine>,
        quote: &PriceBreakdown,
        payment_method: PaymentMethod,
        shipping_method: ShippingMethod,
        shipping_address: ShippingAddress,
    ) -> StoreResult<Order> {
        let order = Order {
            id: generate_order_id(),
            items,
            subtotal: quote.subtotal.rupees(),
            shipping: quote.shipping.rupees(),
            tax: quote.tax.rupees(),
            total: quote.total.rupees(),
            payment_method,
            shipping_method,
            shipping_address,
            status: OrderStatus::for_payment(payment_method),
            created_at: Utc::now(),
        };

        let mut orders = self.list_orders()?;
        orders.insert(0, order.clone());
        self.store.set_as(StorageKey::Orders, &orders)?;

        debug!(
            order_id = %order.id,
            status = ?order.status,
            total = order.total,
            "order appended to ledger"
        );

        Ok(order)
    }

    /// Returns the full ledger, most-recent-first.
    ///
    /// An absent key is an empty ledger, not an error.
    pub fn list_orders(&self) -> StoreResult<Vec<Order>> {
        Ok(self.store.get_as(StorageKey::Orders)?.unwrap_or_default())
    }
}

/// Generates an order identifier from the creation timestamp.
///
/// Format: `ORD-{epoch millis}` — unique per client in practice and sorts
/// roughly by creation time.
fn generate_order_id() -> String {
    format!("ORD-{}", Utc::now().timestamp_millis())
}

// =============================================================================
// Unit Tests
// =============================================================================
