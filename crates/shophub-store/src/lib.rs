//! # shophub-store: Persistence Layer for ShopHub
//!
//! This crate provides persistence and the stateful pieces of ShopHub:
//! the key-value store adapter, the commerce state container, the order
//! ledger, the credential store and the checkout flow.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ShopHub Data Flow                                │
//! │                                                                         │
//! │  Storefront action (add to cart, sign in, place order)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   shophub-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌──────────────┐   ┌──────────────────┐  │   │
//! │  │   │ CommerceState │   │ OrderLedger  │   │ LocalCredential  │  │   │
//! │  │   │ cart/wishlist │   │ place/list   │   │ Store (mock)     │  │   │
//! │  │   │ session/draft │   │ orders       │   │ register/login   │  │   │
//! │  │   └───────┬───────┘   └──────┬───────┘   └────────┬─────────┘  │   │
//! │  │           │                  │                    │            │   │
//! │  │           └──────────────────┼────────────────────┘            │   │
//! │  │                              ▼                                 │   │
//! │  │                  KeyValueStore (adapter)                       │   │
//! │  │            MemoryStore    │    JsonFileStore                  │   │
//! │  └───────────────────────────┼─────────────────────────────────────┘   │
//! │                              ▼                                          │
//! │          one JSON document per key in the local data directory          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`kv`] - The key-value adapter: keys, trait, memory/file backends
//! - [`container`] - The commerce state container
//! - [`orders`] - The append-only order ledger
//! - [`auth`] - The credential store seam and its mock-local backend
//! - [`checkout`] - The checkout flow (quote → order → clear cart)
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use shophub_store::container::CommerceState;
//! use shophub_store::kv::MemoryStore;
//!
//! let store = Arc::new(MemoryStore::new());
//! let state = CommerceState::load(store)?;
//! assert_eq!(state.total_items(), 0);
//! # Ok::<(), shophub_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod checkout;
pub mod container;
pub mod error;
pub mod kv;
pub mod orders;

// =============================================================================
// Re-exports
// =============================================================================

pub use auth::{CredentialStore, LocalCredentialStore};
pub use checkout::{Checkout, CheckoutRequest};
pub use container::CommerceState;
pub use error::{StoreError, StoreResult};
pub use kv::{JsonFileStore, KeyValueStore, KeyValueStoreExt, MemoryStore, StorageKey};
pub use orders::OrderLedger;
