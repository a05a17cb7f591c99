//! # Cart & Wishlist Math
//!
//! Pure collection types behind the shopping cart and the wishlist.
//! No I/O here — the state container in `shophub-store` owns loading
//! these from and writing them back to the key-value store.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Storefront Action        Container Op            Cart Change           │
//! │  ─────────────────        ────────────            ───────────           │
//! │                                                                         │
//! │  "Add to Cart" ──────────► add_to_cart() ───────► qty += 1 | insert    │
//! │                                                                         │
//! │  Qty stepper ────────────► update_quantity() ───► qty = n (0 removes)  │
//! │                                                                         │
//! │  Remove link ────────────► remove_from_cart() ──► retain-filter        │
//! │                                                                         │
//! │  Order placed ───────────► clear_cart() ────────► lines.clear()        │
//! │                                                                         │
//! │  Badge / totals ─────────► total_items() ───────► (derived read)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Line
// =============================================================================

/// One product entry in the shopping cart.
///
/// ## Snapshot Pattern
/// Display fields (name, prices, image) are frozen at add time, so the
/// cart renders consistently even if the catalog entry changes after the
/// product was added.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product this line refers to. Unique within a cart.
    pub product_id: String,

    /// Name at time of adding (frozen).
    pub name: String,

    /// Price in whole rupees at time of adding (frozen).
    pub unit_price: i64,

    /// Strike-through price at time of adding (frozen).
    pub original_price: i64,

    /// Image URL at time of adding (frozen).
    pub image: String,

    /// Quantity in cart. Always >= 1; a line never persists at 0.
    pub quantity: i64,

    /// When this line was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new cart line from a product, with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            original_price: product.original_price,
            image: product.image.clone(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_rupees(self.unit_price)
    }

    /// Line total: unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_rupees(self.unit_price * self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product again
///   increments its quantity)
/// - Quantity is always >= 1 (setting it to 0 removes the line)
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in the cart, in insertion order.
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds a product to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: its quantity increases by 1
    /// - Product not in cart: a new line with quantity 1 and a
    ///   point-in-time snapshot of the product fields
    ///
    /// Always succeeds; stock bounds are checked by callers through
    /// [`Product::can_order`].
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product.id)
        {
            line.quantity += 1;
            return;
        }

        self.lines.push(CartLine::from_product(product));
    }

    /// Removes a line by product id. Absent ids are a no-op, not an error.
    pub fn remove(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Sets the quantity of a line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: behaves exactly as [`Cart::remove`]
    /// - Line present: quantity replaced (no upper bound here)
    /// - Line absent: no-op
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Returns the number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines (the cart badge number).
    pub fn total_items(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of unit price × quantity over all lines.
    pub fn total_price(&self) -> Money {
        Money::from_rupees(self.lines.iter().map(|l| l.unit_price * l.quantity).sum())
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Looks up a line by product id.
    pub fn line(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }
}

/// Cart totals summary for the storefront.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_items: i64,
    pub total_price: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_items: cart.total_items(),
            total_price: cart.total_price().rupees(),
        }
    }
}

// =============================================================================
// Wishlist
// =============================================================================

/// A saved-for-later product reference without quantity.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    /// Product this entry refers to. Unique within a wishlist.
    pub product_id: String,

    /// Name at time of adding (frozen).
    pub name: String,

    /// Price in whole rupees at time of adding (frozen).
    pub price: i64,

    /// Strike-through price at time of adding (frozen).
    pub original_price: i64,

    /// Image URL at time of adding (frozen).
    pub image: String,

    /// Rating at time of adding (frozen).
    pub rating: f64,

    /// When this entry was added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl WishlistEntry {
    /// Creates a wishlist entry from a product.
    pub fn from_product(product: &Product) -> Self {
        WishlistEntry {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            original_price: product.original_price,
            image: product.image.clone(),
            rating: product.rating,
            added_at: Utc::now(),
        }
    }
}

/// The wishlist: set semantics over product id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    /// Entries in insertion order.
    pub entries: Vec<WishlistEntry>,
}

impl Wishlist {
    /// Creates a new empty wishlist.
    pub fn new() -> Self {
        Wishlist {
            entries: Vec::new(),
        }
    }

    /// Adds a product. Idempotent: adding a product already present is a
    /// no-op, consistent with the cart's uniqueness invariant but without
    /// a quantity.
    pub fn add(&mut self, product: &Product) {
        if self.contains(&product.id) {
            return;
        }

        self.entries.push(WishlistEntry::from_product(product));
    }

    /// Removes an entry by product id. Absent ids are a no-op.
    pub fn remove(&mut self, product_id: &str) {
        self.entries.retain(|e| e.product_id != product_id);
    }

    /// Checks whether a product is on the wishlist.
    pub fn contains(&self, product_id: &str) -> bool {
        self.entries.iter().any(|e| e.product_id == product_id)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str, price: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            category: "electronics".to_string(),
            price,
            original_price: price + 500,
            image: format!("/images/{}.jpg", id),
            rating: 4.2,
            reviews: 37,
            stock: 10,
            description: None,
        }
    }

    #[test]
    fn test_add_inserts_snapshot_with_quantity_one() {
        let mut cart = Cart::new();
        let product = test_product("1", 999);

        cart.add(&product);

        assert_eq!(cart.line_count(), 1);
        let line = cart.line("1").unwrap();
        assert_eq!(line.quantity, 1);
        assert_eq!(line.unit_price, 999);
        assert_eq!(line.name, "Product 1");
    }

    #[test]
    fn test_repeated_add_yields_one_line_with_call_count_quantity() {
        let mut cart = Cart::new();
        let product = test_product("1", 999);

        for _ in 0..5 {
            cart.add(&product);
        }

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.line("1").unwrap().quantity, 5);
        assert_eq!(cart.total_items(), 5);
    }

    #[test]
    fn test_snapshot_survives_catalog_change() {
        let mut cart = Cart::new();
        let mut product = test_product("1", 999);

        cart.add(&product);
        product.price = 1299; // catalog price change after adding
        cart.add(&product);

        // Price stays frozen at the first add
        assert_eq!(cart.line("1").unwrap().unit_price, 999);
        assert_eq!(cart.total_price().rupees(), 1998);
    }

    #[test]
    fn test_set_quantity_zero_equals_remove() {
        let product = test_product("1", 999);

        let mut via_zero = Cart::new();
        via_zero.add(&product);
        via_zero.set_quantity("1", 0);

        let mut via_remove = Cart::new();
        via_remove.add(&product);
        via_remove.remove("1");

        assert!(via_zero.is_empty());
        assert!(via_remove.is_empty());
        assert_eq!(via_zero.line_count(), via_remove.line_count());
    }

    #[test]
    fn test_set_quantity_replaces_and_ignores_absent() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 999));

        cart.set_quantity("1", 7);
        assert_eq!(cart.line("1").unwrap().quantity, 7);

        // Absent id: no-op, not an error
        cart.set_quantity("missing", 3);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 999));

        cart.remove("missing");
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_total_price_sums_lines() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 999));
        cart.add(&test_product("2", 1500));
        cart.set_quantity("2", 3);

        assert_eq!(cart.total_price().rupees(), 999 + 1500 * 3);
        assert_eq!(cart.total_items(), 4);
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add(&test_product("1", 999));
        cart.add(&test_product("2", 1500));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Money::zero());
    }

    #[test]
    fn test_wishlist_add_is_idempotent() {
        let mut wishlist = Wishlist::new();
        let product = test_product("1", 999);

        wishlist.add(&product);
        wishlist.add(&product);

        assert_eq!(wishlist.len(), 1);
        assert!(wishlist.contains("1"));
    }

    #[test]
    fn test_wishlist_remove() {
        let mut wishlist = Wishlist::new();
        wishlist.add(&test_product("1", 999));
        wishlist.add(&test_product("2", 1500));

        wishlist.remove("1");

        assert!(!wishlist.contains("1"));
        assert!(wishlist.contains("2"));
        assert_eq!(wishlist.len(), 1);
    }
}
