//! # Domain Types
//!
//! Core domain types used throughout ShopHub.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │    Session      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id (ORD-…)     │   │  user_id        │       │
//! │  │  price (₹)      │   │  items snapshot │   │  display_name   │       │
//! │  │  stock          │   │  status         │   │  login_time     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │  OrderStatus    │   │ PaymentMethod   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  Processing     │   │  Card           │       │
//! │  │  1800 = 18%     │   │  Confirmed      │   │  Cod / Upi      │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! Every record that crosses the persistence or UI boundary serializes as
//! camelCase JSON — the same documents the storefront reads back out of
//! the key-value store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartLine;
use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1800 bps = 18% (GST on most catalog categories)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// The catalog itself lives outside this crate; products arrive here as
/// inputs to cart and wishlist operations, which freeze the fields they
/// need into snapshots.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Display name shown on cards and in the cart.
    pub name: String,

    /// Catalog category (e.g. "electronics").
    pub category: String,

    /// Selling price in whole rupees.
    pub price: i64,

    /// Strike-through price in whole rupees. Equal to `price` when the
    /// product is not discounted.
    pub original_price: i64,

    /// Image URL for cards and cart rows.
    pub image: String,

    /// Average review rating (0.0 - 5.0).
    pub rating: f64,

    /// Number of reviews behind the rating.
    pub reviews: i64,

    /// Units available.
    pub stock: i64,

    /// Optional long description for the detail page.
    pub description: Option<String>,
}

impl Product {
    /// Returns the selling price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_rupees(self.price)
    }

    /// Returns the strike-through price as a Money type.
    #[inline]
    pub fn original_price(&self) -> Money {
        Money::from_rupees(self.original_price)
    }

    /// Checks whether `quantity` units can be ordered against stock.
    ///
    /// Cart operations themselves never reject on stock; every call site
    /// that wants the bound goes through this one check.
    pub fn can_order(&self, quantity: i64) -> bool {
        quantity >= 1 && quantity <= self.stock
    }

    /// Checks if the product is discounted.
    #[inline]
    pub fn is_discounted(&self) -> bool {
        self.original_price > self.price
    }
}

// =============================================================================
// Session
// =============================================================================

/// The record representing the currently signed-in user.
///
/// Exactly one session is active per client at a time; signed-out clients
/// have none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Account id this session belongs to.
    pub user_id: String,

    /// "First Last", for the account menu.
    pub display_name: String,

    pub email: String,

    pub phone: String,

    /// When the user signed in.
    #[ts(as = "String")]
    pub login_time: DateTime<Utc>,
}

// =============================================================================
// Accounts
// =============================================================================

/// A registered user record, as persisted in the local user list.
///
/// ## Not A Security Model
/// The password is stored and compared in plaintext. This is the mock
/// credential backend behind the `CredentialStore` seam; a production
/// deployment substitutes a real credential store there.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    /// Unique identifier (UUID v4).
    pub id: String,

    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,

    /// Plaintext password (mock backend only).
    pub password: String,

    /// When the account was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// Deactivated accounts keep their record but cannot sign in.
    pub is_active: bool,
}

impl UserAccount {
    /// Returns the "First Last" display name.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Input for registering a new account.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    /// Must equal `password`; rejected otherwise.
    pub confirm_password: String,
}

/// Partial profile update; `None` fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

// =============================================================================
// Draft User Info
// =============================================================================

/// Free-form shipping/contact fields cached for checkout prefill.
///
/// Independent of `Session` — a visitor can fill these before ever
/// signing in. Replaced whole-record; merging is the caller's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// The shipping address frozen into an order at submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl From<&UserInfo> for ShippingAddress {
    fn from(info: &UserInfo) -> Self {
        ShippingAddress {
            first_name: info.first_name.clone(),
            last_name: info.last_name.clone(),
            address: info.address.clone(),
            city: info.city.clone(),
            state: info.state.clone(),
            zip_code: info.zip_code.clone(),
        }
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the customer pays at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Card captured at checkout.
    #[default]
    Card,
    /// Cash on delivery. Orders start in `Processing` until paid.
    Cod,
    /// UPI transfer.
    Upi,
}

// =============================================================================
// Shipping Method
// =============================================================================

/// Delivery speed chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    /// 5-7 business days; free above the configured threshold.
    #[default]
    Standard,
    /// 1-2 business days; flat fee regardless of order size.
    Express,
}

// =============================================================================
// Order Status
// =============================================================================

/// The status of a placed order.
///
/// Serialized capitalized ("Processing"/"Confirmed"), exactly as the
/// account page reads them back out of the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum OrderStatus {
    /// Payment is collected on delivery; the order is not yet confirmed.
    Processing,
    /// Payment was captured at checkout.
    Confirmed,
}

impl OrderStatus {
    /// Derives the initial status from the payment method.
    ///
    /// Cash-on-delivery orders start `Processing`; every prepaid method
    /// starts `Confirmed`.
    pub fn for_payment(method: PaymentMethod) -> Self {
        match method {
            PaymentMethod::Cod => OrderStatus::Processing,
            _ => OrderStatus::Confirmed,
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A placed order.
///
/// Immutable once created: the line items are a snapshot of the cart at
/// submission time and the totals are frozen alongside them.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Generated identifier, `ORD-{epoch millis}` — sorts roughly by
    /// creation time.
    pub id: String,

    /// Cart lines frozen at submission.
    pub items: Vec<CartLine>,

    /// Sum of line totals, whole rupees.
    pub subtotal: i64,

    /// Shipping fee charged, whole rupees (0 when free).
    pub shipping: i64,

    /// GST charged, whole rupees.
    pub tax: i64,

    /// subtotal + shipping + tax, whole rupees.
    pub total: i64,

    pub payment_method: PaymentMethod,
    pub shipping_method: ShippingMethod,
    pub shipping_address: ShippingAddress,

    pub status: OrderStatus,

    /// When the order was placed.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Returns the subtotal as a Money type.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_rupees(self.subtotal)
    }

    /// Returns the shipping fee as a Money type.
    #[inline]
    pub fn shipping(&self) -> Money {
        Money::from_rupees(self.shipping)
    }

    /// Returns the tax as a Money type.
    #[inline]
    pub fn tax(&self) -> Money {
        Money::from_rupees(self.tax)
    }

    /// Returns the grand total as a Money type.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_rupees(self.total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(1800);
        assert_eq!(rate.bps(), 1800);
        assert!((rate.percentage() - 18.0).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        let rate = TaxRate::from_percentage(18.0);
        assert_eq!(rate.bps(), 1800);
    }

    #[test]
    fn test_status_from_payment_method() {
        assert_eq!(
            OrderStatus::for_payment(PaymentMethod::Cod),
            OrderStatus::Processing
        );
        assert_eq!(
            OrderStatus::for_payment(PaymentMethod::Card),
            OrderStatus::Confirmed
        );
        assert_eq!(
            OrderStatus::for_payment(PaymentMethod::Upi),
            OrderStatus::Confirmed
        );
    }

    #[test]
    fn test_payment_method_wire_format() {
        assert_eq!(serde_json::to_string(&PaymentMethod::Cod).unwrap(), "\"cod\"");
        assert_eq!(
            serde_json::to_string(&ShippingMethod::Express).unwrap(),
            "\"express\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Processing).unwrap(),
            "\"Processing\""
        );
    }

    #[test]
    fn test_can_order_respects_stock() {
        let product = Product {
            id: "p1".to_string(),
            name: "Wireless Headphones".to_string(),
            category: "electronics".to_string(),
            price: 2999,
            original_price: 3999,
            image: "/images/headphones.jpg".to_string(),
            rating: 4.5,
            reviews: 120,
            stock: 3,
            description: None,
        };

        assert!(product.can_order(1));
        assert!(product.can_order(3));
        assert!(!product.can_order(4));
        assert!(!product.can_order(0));
        assert!(product.is_discounted());
    }
}
