//! # Pricing Calculator
//!
//! The single implementation of the checkout price breakdown: shipping
//! fee, GST and grand total from the cart subtotal and the chosen
//! shipping/payment methods.
//!
//! ## One Formula, One Place
//! Every surface that shows a price breakdown (cart summary, checkout
//! summary, the order ledger) calls [`PricingConfig::quote`]. The fee
//! schedule lives in one configurable struct; nothing else in the
//! codebase carries these numbers.
//!
//! ## Fee Schedule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shipping                                                               │
//! │    express            → flat ₹1,329, regardless of order size           │
//! │    standard, > ₹4,000 → free                                            │
//! │    standard, ≤ ₹4,000 → flat ₹829                                       │
//! │                                                                         │
//! │  Tax                                                                    │
//! │    18% GST on the subtotal, rounded to the nearest whole rupee          │
//! │                                                                         │
//! │  Payment                                                                │
//! │    cash on delivery   → surcharge of ₹0 (explicitly zero, not absent)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{PaymentMethod, ShippingMethod, TaxRate};

// =============================================================================
// Defaults
// =============================================================================

/// Orders strictly above this subtotal ship free on the standard method.
pub const DEFAULT_FREE_SHIPPING_THRESHOLD: Money = Money::from_rupees(4000);

/// Flat standard shipping fee below the free threshold.
pub const DEFAULT_STANDARD_FEE: Money = Money::from_rupees(829);

/// Flat express shipping fee, charged regardless of order size.
pub const DEFAULT_EXPRESS_FEE: Money = Money::from_rupees(1329);

/// GST rate applied to the subtotal.
pub const DEFAULT_TAX_RATE: TaxRate = TaxRate::from_bps(1800);

// =============================================================================
// Pricing Config
// =============================================================================

/// The fee schedule used to quote checkouts.
///
/// Constructed once at startup and passed to the checkout flow; defaults
/// match the production schedule and can be overridden per-environment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    /// Standard shipping is free strictly above this subtotal.
    pub free_shipping_threshold: Money,

    /// Flat standard shipping fee.
    pub standard_fee: Money,

    /// Flat express shipping fee.
    pub express_fee: Money,

    /// Cash-on-delivery surcharge. Zero in the current schedule, but the
    /// line exists so the quote is explicit about it.
    pub cod_fee: Money,

    /// Tax rate in basis points.
    pub tax_rate: TaxRate,
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            free_shipping_threshold: DEFAULT_FREE_SHIPPING_THRESHOLD,
            standard_fee: DEFAULT_STANDARD_FEE,
            express_fee: DEFAULT_EXPRESS_FEE,
            cod_fee: Money::zero(),
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

impl PricingConfig {
    /// Creates a PricingConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SHOPHUB_FREE_SHIPPING_THRESHOLD`: whole rupees
    /// - `SHOPHUB_STANDARD_FEE`: whole rupees
    /// - `SHOPHUB_EXPRESS_FEE`: whole rupees
    /// - `SHOPHUB_TAX_RATE`: percentage (e.g. "18")
    pub fn from_env() -> Self {
        let mut config = PricingConfig::default();

        if let Some(v) = env_rupees("SHOPHUB_FREE_SHIPPING_THRESHOLD") {
            config.free_shipping_threshold = v;
        }
        if let Some(v) = env_rupees("SHOPHUB_STANDARD_FEE") {
            config.standard_fee = v;
        }
        if let Some(v) = env_rupees("SHOPHUB_EXPRESS_FEE") {
            config.express_fee = v;
        }
        if let Ok(rate_str) = std::env::var("SHOPHUB_TAX_RATE") {
            if let Ok(pct) = rate_str.parse::<f64>() {
                config.tax_rate = TaxRate::from_percentage(pct);
            }
        }

        config
    }

    /// Quotes a checkout: shipping, tax and grand total for a subtotal.
    ///
    /// Pure function of its arguments — same inputs, same breakdown.
    ///
    /// ## Example
    /// ```rust
    /// use shophub_core::money::Money;
    /// use shophub_core::pricing::PricingConfig;
    /// use shophub_core::types::{PaymentMethod, ShippingMethod};
    ///
    /// let pricing = PricingConfig::default();
    /// let quote = pricing.quote(
    ///     Money::from_rupees(3000),
    ///     ShippingMethod::Standard,
    ///     PaymentMethod::Card,
    /// );
    ///
    /// assert_eq!(quote.shipping.rupees(), 829);
    /// assert_eq!(quote.tax.rupees(), 540);
    /// assert_eq!(quote.total.rupees(), 4369);
    /// ```
    pub fn quote(
        &self,
        subtotal: Money,
        shipping_method: ShippingMethod,
        payment_method: PaymentMethod,
    ) -> PriceBreakdown {
        let shipping = match shipping_method {
            ShippingMethod::Express => self.express_fee,
            ShippingMethod::Standard => {
                if subtotal > self.free_shipping_threshold {
                    Money::zero()
                } else {
                    self.standard_fee
                }
            }
        };

        let surcharge = match payment_method {
            PaymentMethod::Cod => self.cod_fee,
            _ => Money::zero(),
        };

        let tax = subtotal.tax(self.tax_rate);

        PriceBreakdown {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax + surcharge,
        }
    }
}

/// Reads a whole-rupee amount from an environment variable.
fn env_rupees(var: &str) -> Option<Money> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .map(Money::from_rupees)
}

// =============================================================================
// Price Breakdown
// =============================================================================

/// The quoted breakdown for a checkout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(subtotal: i64, shipping: ShippingMethod, payment: PaymentMethod) -> PriceBreakdown {
        PricingConfig::default().quote(Money::from_rupees(subtotal), shipping, payment)
    }

    #[test]
    fn test_standard_shipping_below_threshold() {
        let q = quote(3000, ShippingMethod::Standard, PaymentMethod::Card);
        assert_eq!(q.shipping.rupees(), 829);
        assert_eq!(q.tax.rupees(), 540);
        assert_eq!(q.total.rupees(), 4369);
    }

    #[test]
    fn test_standard_shipping_above_threshold_is_free() {
        let q = quote(5000, ShippingMethod::Standard, PaymentMethod::Card);
        assert_eq!(q.shipping.rupees(), 0);
        assert_eq!(q.tax.rupees(), 900);
        assert_eq!(q.total.rupees(), 5900);
    }

    #[test]
    fn test_threshold_is_strict() {
        // Exactly at the threshold still pays standard shipping
        let q = quote(4000, ShippingMethod::Standard, PaymentMethod::Card);
        assert_eq!(q.shipping.rupees(), 829);
    }

    #[test]
    fn test_express_ignores_threshold() {
        let q = quote(2000, ShippingMethod::Express, PaymentMethod::Card);
        assert_eq!(q.shipping.rupees(), 1329);

        let big = quote(20000, ShippingMethod::Express, PaymentMethod::Card);
        assert_eq!(big.shipping.rupees(), 1329);
    }

    #[test]
    fn test_cod_surcharge_is_explicitly_zero() {
        let card = quote(3000, ShippingMethod::Standard, PaymentMethod::Card);
        let cod = quote(3000, ShippingMethod::Standard, PaymentMethod::Cod);

        assert_eq!(cod.total, card.total);
        assert_eq!(PricingConfig::default().cod_fee, Money::zero());
    }

    #[test]
    fn test_empty_cart_quote() {
        let q = quote(0, ShippingMethod::Standard, PaymentMethod::Card);
        assert_eq!(q.shipping.rupees(), 829);
        assert_eq!(q.tax.rupees(), 0);
        assert_eq!(q.total.rupees(), 829);
    }
}
