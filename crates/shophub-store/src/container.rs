//! # Commerce State Container
//!
//! Owns the in-memory cart, wishlist, session and draft profile, and
//! synchronizes every mutation to the key-value store.
//!
//! ## Thread Safety
//! State lives behind a single `Mutex`, held across the persist call, so
//! each operation is atomic from the caller's perspective: the in-memory
//! value only changes after its document hit the store.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Commerce State Container                                │
//! │                                                                         │
//! │  Storefront Action       Container Op             Persisted Key         │
//! │  ─────────────────       ────────────             ─────────────         │
//! │                                                                         │
//! │  Add to cart ───────────► add_to_cart() ────────► shophub_cart         │
//! │  Qty stepper ───────────► update_quantity() ────► shophub_cart         │
//! │  Heart icon ────────────► add_to_wishlist() ────► shophub_wishlist     │
//! │  Sign in ───────────────► set_session() ────────► shophub_current_user │
//! │  Sign out ──────────────► logout() ─────────────► (key removed)        │
//! │  Checkout form ─────────► set_user_info() ──────► shophub_user_info    │
//! │                                                                         │
//! │  Badge, totals, "in wishlist?" are derived reads — never persisted,    │
//! │  never tracked as separate flags that could desync.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! Constructed once at startup via [`CommerceState::load`], which hydrates
//! from the store. `logout` tears down the session only: cart, wishlist
//! and the draft profile survive sign-out.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use shophub_core::cart::{Cart, CartTotals, Wishlist};
use shophub_core::money::Money;
use shophub_core::types::{Product, Session, UserAccount, UserInfo};

use crate::error::{StoreError, StoreResult};
use crate::kv::{KeyValueStore, KeyValueStoreExt, StorageKey};

/// The in-memory state guarded by the container's mutex.
#[derive(Debug, Default)]
struct AppData {
    cart: Cart,
    wishlist: Wishlist,
    session: Option<Session>,
    user_info: UserInfo,
}

/// The commerce state container.
///
/// Exclusively owns Cart, Wishlist, Session and UserInfo for the process
/// lifetime; the UI renders from the snapshots these methods return.
pub struct CommerceState {
    store: Arc<dyn KeyValueStore>,
    inner: Mutex<AppData>,
}

impl CommerceState {
    /// Hydrates the container from the store.
    ///
    /// Absent keys start at their defaults (empty cart, empty wishlist,
    /// signed out, blank draft). A corrupt document is logged and reset
    /// to its default rather than taking the whole container down; an
    /// unreachable store is a real error and propagates.
    pub fn load(store: Arc<dyn KeyValueStore>) -> StoreResult<Self> {
        let cart: Cart = load_or_default(store.as_ref(), StorageKey::Cart)?;
        let wishlist = load_or_default(store.as_ref(), StorageKey::Wishlist)?;
        let session = load_optional(store.as_ref(), StorageKey::Session)?;
        let user_info = load_or_default(store.as_ref(), StorageKey::UserInfo)?;

        debug!(
            cart_lines = cart.line_count(),
            signed_in = session.is_some(),
            "commerce state hydrated"
        );

        Ok(CommerceState {
            store,
            inner: Mutex::new(AppData {
                cart,
                wishlist,
                session,
                user_info,
            }),
        })
    }

    // =========================================================================
    // Cart Operations
    // =========================================================================

    /// Adds a product to the cart (quantity +1, or a new snapshot line).
    ///
    /// Returns the updated cart for the UI to render.
    pub fn add_to_cart(&self, product: &Product) -> StoreResult<Cart> {
        debug!(product_id = %product.id, "add_to_cart");
        self.mutate_cart(|cart| cart.add(product))
    }

    /// Removes a line by product id. Absent ids are a no-op.
    pub fn remove_from_cart(&self, product_id: &str) -> StoreResult<Cart> {
        debug!(product_id, "remove_from_cart");
        self.mutate_cart(|cart| cart.remove(product_id))
    }

    /// Sets a line's quantity; 0 behaves exactly as removal.
    ///
    /// No stock bound is enforced here — callers check
    /// [`Product::can_order`] before offering the higher quantity.
    pub fn update_quantity(&self, product_id: &str, quantity: i64) -> StoreResult<Cart> {
        debug!(product_id, quantity, "update_quantity");
        self.mutate_cart(|cart| cart.set_quantity(product_id, quantity))
    }

    /// Empties the cart (used after successful order placement).
    pub fn clear_cart(&self) -> StoreResult<Cart> {
        debug!("clear_cart");
        self.mutate_cart(|cart| cart.clear())
    }

    /// Snapshot of the current cart.
    pub fn cart(&self) -> Cart {
        self.lock().cart.clone()
    }

    /// Totals summary for the header badge and cart page.
    pub fn cart_totals(&self) -> CartTotals {
        CartTotals::from(&self.lock().cart)
    }

    /// Total quantity across all lines. Derived read, never persisted.
    pub fn total_items(&self) -> i64 {
        self.lock().cart.total_items()
    }

    /// Sum of unit price × quantity over all lines. Derived read.
    pub fn total_price(&self) -> Money {
        self.lock().cart.total_price()
    }

    // =========================================================================
    // Wishlist Operations
    // =========================================================================

    /// Adds a product to the wishlist. Idempotent.
    pub fn add_to_wishlist(&self, product: &Product) -> StoreResult<Wishlist> {
        debug!(product_id = %product.id, "add_to_wishlist");
        self.mutate_wishlist(|wishlist| wishlist.add(product))
    }

    /// Removes a wishlist entry by product id. Absent ids are a no-op.
    pub fn remove_from_wishlist(&self, product_id: &str) -> StoreResult<Wishlist> {
        debug!(product_id, "remove_from_wishlist");
        self.mutate_wishlist(|wishlist| wishlist.remove(product_id))
    }

    /// Checks whether a product is on the wishlist.
    pub fn is_in_wishlist(&self, product_id: &str) -> bool {
        self.lock().wishlist.contains(product_id)
    }

    /// Snapshot of the current wishlist.
    pub fn wishlist(&self) -> Wishlist {
        self.lock().wishlist.clone()
    }

    // =========================================================================
    // Session Operations
    // =========================================================================

    /// Installs the active session (after a successful sign-in) and
    /// persists it.
    pub fn set_session(&self, session: Session) -> StoreResult<()> {
        debug!(user_id = %session.user_id, "set_session");

        let mut data = self.lock();
        self.store.set_as(StorageKey::Session, &session)?;
        data.session = Some(session);
        Ok(())
    }

    /// Signs out: clears the in-memory session and forgets the session
    /// key. Cart, wishlist and the draft profile are left untouched.
    pub fn logout(&self) -> StoreResult<()> {
        debug!("logout");

        let mut data = self.lock();
        self.store.remove(StorageKey::Session)?;
        data.session = None;
        Ok(())
    }

    /// The active session, if signed in.
    pub fn session(&self) -> Option<Session> {
        self.lock().session.clone()
    }

    /// Derived: is anyone signed in? No separate flag is tracked.
    pub fn is_signed_in(&self) -> bool {
        self.lock().session.is_some()
    }

    /// Rebuilds the active session from an updated account record.
    ///
    /// No-op unless the account is the signed-in user. The original
    /// login time is preserved; only the profile fields refresh.
    pub fn refresh_session(&self, account: &UserAccount) -> StoreResult<()> {
        let current = self.session();
        let Some(current) = current else {
            return Ok(());
        };
        if current.user_id != account.id {
            return Ok(());
        }

        debug!(user_id = %account.id, "refresh_session");
        self.set_session(Session {
            user_id: account.id.clone(),
            display_name: account.display_name(),
            email: account.email.clone(),
            phone: account.phone.clone(),
            login_time: current.login_time,
        })
    }

    // =========================================================================
    // Draft Profile Operations
    // =========================================================================

    /// Replaces the draft profile entirely (not a merge — merging, if
    /// desired, is the caller's job before calling) and persists it.
    pub fn set_user_info(&self, info: UserInfo) -> StoreResult<()> {
        debug!("set_user_info");

        let mut data = self.lock();
        self.store.set_as(StorageKey::UserInfo, &info)?;
        data.user_info = info;
        Ok(())
    }

    /// Snapshot of the draft profile for checkout prefill.
    pub fn user_info(&self) -> UserInfo {
        self.lock().user_info.clone()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn lock(&self) -> std::sync::MutexGuard<'_, AppData> {
        self.inner.lock().expect("commerce state mutex poisoned")
    }

    /// Applies a cart mutation, persists the result, then commits it.
    ///
    /// The in-memory cart is only replaced after the write succeeded, so
    /// a failed persist leaves the container on its previous state.
    fn mutate_cart(&self, f: impl FnOnce(&mut Cart)) -> StoreResult<Cart> {
        let mut data = self.lock();

        let mut cart = data.cart.clone();
        f(&mut cart);

        self.store.set_as(StorageKey::Cart, &cart)?;
        data.cart = cart.clone();
        Ok(cart)
    }

    /// Same commit discipline as [`CommerceState::mutate_cart`], for the
    /// wishlist.
    fn mutate_wishlist(&self, f: impl FnOnce(&mut Wishlist)) -> StoreResult<Wishlist> {
        let mut data = self.lock();

        let mut wishlist = data.wishlist.clone();
        f(&mut wishlist);

        self.store.set_as(StorageKey::Wishlist, &wishlist)?;
        data.wishlist = wishlist.clone();
        Ok(wishlist)
    }
}

/// Loads a defaultable record, recovering from corruption with a warning.
fn load_or_default<T>(store: &dyn KeyValueStore, key: StorageKey) -> StoreResult<T>
where
    T: serde::de::DeserializeOwned + Default,
{
    match store.get_as(key) {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Ok(T::default()),
        Err(StoreError::Corrupt { reason, .. }) => {
            warn!(key = %key, reason, "corrupt document, falling back to default");
            Ok(T::default())
        }
        Err(e) => Err(e),
    }
}

/// Loads an optional record (the session) with the same corruption
/// recovery.
fn load_optional<T>(store: &dyn KeyValueStore, key: StorageKey) -> StoreResult<Option<T>>
where
    T: serde::de::DeserializeOwned,
{
    match store.get_as(key) {
        Ok(value) => Ok(value),
        Err(StoreError::Corrupt { reason, .. }) => {
            warn!(key = %key, reason, "corrupt document, treating as absent");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;
    use chrono::Utc;

    fn test_product(id: &str, price: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            category: "electronics".to_string(),
            price,
            original_price: price,
            image: format!("/images/{}.jpg", id),
            rating: 4.0,
            reviews: 12,
            stock: 50,
            description: None,
        }
    }

    fn test_session(user_id: &str) -> Session {
        Session {
            user_id: user_id.to_string(),
            display_name: "Priya Nair".to_string(),
            email: "priya@example.com".to_string(),
            phone: "9876543210".to_string(),
            login_time: Utc::now(),
        }
    }

    fn fresh() -> (Arc<MemoryStore>, CommerceState) {
        let store = Arc::new(MemoryStore::new());
        let state = CommerceState::load(store.clone()).unwrap();
        (store, state)
    }

    #[test]
    fn test_every_cart_mutation_is_persisted() {
        let (store, state) = fresh();

        state.add_to_cart(&test_product("1", 999)).unwrap();
        state.update_quantity("1", 4).unwrap();

        // A second container over the same store sees the mutations
        let rehydrated = CommerceState::load(store).unwrap();
        assert_eq!(rehydrated.total_items(), 4);
        assert_eq!(rehydrated.total_price().rupees(), 3996);
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let (_, state) = fresh();

        state.add_to_cart(&test_product("1", 999)).unwrap();
        let cart = state.update_quantity("1", 0).unwrap();

        assert!(cart.is_empty());
        assert_eq!(state.total_items(), 0);
    }

    #[test]
    fn test_clear_cart_resets_totals() {
        let (_, state) = fresh();

        state.add_to_cart(&test_product("1", 999)).unwrap();
        state.add_to_cart(&test_product("2", 500)).unwrap();
        state.clear_cart().unwrap();

        assert_eq!(state.total_items(), 0);
        assert_eq!(state.total_price(), Money::zero());
    }

    #[test]
    fn test_wishlist_round_trip_and_idempotence() {
        let (store, state) = fresh();
        let product = test_product("1", 999);

        state.add_to_wishlist(&product).unwrap();
        state.add_to_wishlist(&product).unwrap();

        assert!(state.is_in_wishlist("1"));
        let rehydrated = CommerceState::load(store).unwrap();
        assert_eq!(rehydrated.wishlist().len(), 1);
    }

    #[test]
    fn test_logout_forgets_only_the_session_key() {
        let (store, state) = fresh();

        state.add_to_cart(&test_product("1", 999)).unwrap();
        state.set_session(test_session("u1")).unwrap();
        assert!(state.is_signed_in());

        state.logout().unwrap();

        assert!(!state.is_signed_in());
        assert_eq!(store.get(StorageKey::Session).unwrap(), None);
        // Cart and wishlist survive sign-out
        assert!(store.get(StorageKey::Cart).unwrap().is_some());
        assert_eq!(state.total_items(), 1);
    }

    #[test]
    fn test_session_survives_reload() {
        let (store, state) = fresh();
        state.set_session(test_session("u1")).unwrap();

        let rehydrated = CommerceState::load(store).unwrap();
        assert_eq!(rehydrated.session().unwrap().user_id, "u1");
    }

    #[test]
    fn test_set_user_info_replaces_whole_record() {
        let (_, state) = fresh();

        let mut info = UserInfo::default();
        info.first_name = "Priya".to_string();
        info.city = "Bengaluru".to_string();
        state.set_user_info(info).unwrap();

        let mut partial = UserInfo::default();
        partial.first_name = "Arjun".to_string();
        state.set_user_info(partial.clone()).unwrap();

        // Whole-record replace: the city is gone, not merged
        assert_eq!(state.user_info(), partial);
    }

    #[test]
    fn test_corrupt_cart_document_falls_back_to_empty() {
        let store = Arc::new(MemoryStore::new());
        store
            .set(StorageKey::Cart, serde_json::json!("definitely not a cart"))
            .unwrap();

        let state = CommerceState::load(store).unwrap();
        assert_eq!(state.total_items(), 0);
    }

    #[test]
    fn test_refresh_session_updates_only_matching_user() {
        let (_, state) = fresh();
        state.set_session(test_session("u1")).unwrap();
        let login_time = state.session().unwrap().login_time;

        let account = UserAccount {
            id: "u1".to_string(),
            first_name: "Priya".to_string(),
            last_name: "Sharma".to_string(),
            email: "priya.sharma@example.com".to_string(),
            phone: "9876543210".to_string(),
            password: "secret1".to_string(),
            created_at: Utc::now(),
            is_active: true,
        };
        state.refresh_session(&account).unwrap();

        let session = state.session().unwrap();
        assert_eq!(session.display_name, "Priya Sharma");
        assert_eq!(session.email, "priya.sharma@example.com");
        assert_eq!(session.login_time, login_time);

        // A different account leaves the session alone
        let other = UserAccount {
            id: "u2".to_string(),
            ..account
        };
        state.refresh_session(&other).unwrap();
        assert_eq!(state.session().unwrap().user_id, "u1");
    }
}
