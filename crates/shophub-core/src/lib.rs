//! # shophub-core: Pure Business Logic for ShopHub
//!
//! This crate is the **heart** of ShopHub. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ShopHub Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront UI (TypeScript)                      │   │
//! │  │    Catalog ──► Cart ──► Checkout ──► Account/Orders            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ts-rs bindings                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shophub-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  pricing  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  quote()  │  │   │
//! │  │   │   Order   │  │  TaxRate  │  │  Wishlist │  │  fees/GST │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                shophub-store (Persistence Layer)                │   │
//! │  │        key-value adapter, state container, order ledger         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, Session, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart and wishlist collection math
//! - [`pricing`] - Shipping/GST/total quoting
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole rupees (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use shophub_core::money::Money;
//! use shophub_core::pricing::PricingConfig;
//! use shophub_core::types::{PaymentMethod, ShippingMethod};
//!
//! let pricing = PricingConfig::default();
//!
//! // ₹3,000 subtotal, standard shipping: ₹829 shipping + ₹540 GST
//! let quote = pricing.quote(
//!     Money::from_rupees(3000),
//!     ShippingMethod::Standard,
//!     PaymentMethod::Card,
//! );
//! assert_eq!(quote.total.rupees(), 4369);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shophub_core::Money` instead of
// `use shophub_core::money::Money`

pub use cart::{Cart, CartLine, CartTotals, Wishlist, WishlistEntry};
pub use error::{AuthError, AuthResult, ValidationError};
pub use money::Money;
pub use pricing::{PriceBreakdown, PricingConfig};
pub use types::*;
