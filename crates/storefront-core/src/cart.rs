//! # Cart
//!
//! Cart lines keyed by product id, in the order products were first added.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Renderer Action          Operation               Cart Change           │
//! │  ───────────────          ─────────               ───────────           │
//! │                                                                         │
//! │  "В корзину" button ────► add(id) ──────────────► qty + 1 or new line  │
//! │                                                                         │
//! │  − / + in cart panel ───► update_quantity(id, ±1) qty + delta,         │
//! │                                                   line gone at ≤ 0     │
//! │                                                                         │
//! │  Trash icon ────────────► remove(id) ───────────► line gone            │
//! │                                                                         │
//! │  Badge / total ─────────► count() / total() ────► (read only, derived) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals are never stored. They are recomputed from the lines and the
//! catalog's prices on every read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::money::Money;
use crate::types::{Product, ProductId};
use crate::MAX_LINE_QUANTITY;

/// One product's entry in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    pub product_id: ProductId,

    /// 1 to [`MAX_LINE_QUANTITY`]; a line that would drop to 0 is removed instead.
    pub quantity: u32,

    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

/// A cart line joined with its product, for the cart panel.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLineView {
    pub product: Product,
    pub quantity: u32,
    pub line_total: Money,
}

/// The shopping cart.
///
/// ## Invariants
/// - A product appears at most once
/// - Every line has quantity in 1..=[`MAX_LINE_QUANTITY`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Adds one unit of a product, inserting a line if needed.
    ///
    /// Returns the line's new quantity, which stops at [`MAX_LINE_QUANTITY`].
    pub fn add(&mut self, product_id: ProductId) -> u32 {
        if let Some(line) = self.line_mut(product_id) {
            line.quantity = line.quantity.saturating_add(1).min(MAX_LINE_QUANTITY);
            return line.quantity;
        }

        self.lines.push(CartLine {
            product_id,
            quantity: 1,
            added_at: Utc::now(),
        });
        1
    }

    /// Applies a signed change to a line's quantity.
    ///
    /// ## Behavior
    /// - Result ≤ 0: the line is removed
    /// - Result above [`MAX_LINE_QUANTITY`]: clamped
    /// - Product not in cart: no-op
    ///
    /// ## Returns
    /// The remaining quantity, or `None` if the line is gone or never existed.
    pub fn update_quantity(&mut self, product_id: ProductId, delta: i64) -> Option<u32> {
        let pos = self.lines.iter().position(|l| l.product_id == product_id)?;
        let next = i64::from(self.lines[pos].quantity).saturating_add(delta);

        if next <= 0 {
            self.lines.remove(pos);
            return None;
        }

        let quantity = next.min(i64::from(MAX_LINE_QUANTITY)) as u32;
        self.lines[pos].quantity = quantity;
        Some(quantity)
    }

    /// Removes a line. Returns whether anything was removed.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        self.lines.len() != before
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Quantity of one product, 0 when absent.
    pub fn quantity_of(&self, product_id: ProductId) -> u32 {
        self.lines
            .iter()
            .find(|l| l.product_id == product_id)
            .map_or(0, |l| l.quantity)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.lines.iter().any(|l| l.product_id == product_id)
    }

    /// Number of distinct products.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities (the header badge).
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of price × quantity over all lines.
    pub fn total(&self, catalog: &Catalog) -> Money {
        self.lines
            .iter()
            .filter_map(|l| {
                catalog
                    .product(l.product_id)
                    .map(|p| p.price.multiply_quantity(l.quantity))
            })
            .sum()
    }

    /// Lines joined with their products, in cart order.
    pub fn view(&self, catalog: &Catalog) -> Vec<CartLineView> {
        self.lines
            .iter()
            .filter_map(|l| {
                catalog.product(l.product_id).map(|p| CartLineView {
                    product: p.clone(),
                    quantity: l.quantity,
                    line_total: p.price.multiply_quantity(l.quantity),
                })
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product_id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::mock_catalog;

    const IPHONE: ProductId = ProductId::new(1);
    const AIRPODS: ProductId = ProductId::new(5);

    #[test]
    fn test_add_new_product_increases_count_and_total() {
        let catalog = mock_catalog().unwrap();
        let mut cart = Cart::new();

        cart.add(AIRPODS);

        assert_eq!(cart.count(), 1);
        assert_eq!(cart.total(&catalog).rubles(), 16_990);
    }

    #[test]
    fn test_add_same_product_increments_single_line() {
        let mut cart = Cart::new();

        assert_eq!(cart.add(IPHONE), 1);
        assert_eq!(cart.add(IPHONE), 2);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity_of(IPHONE), 2);
    }

    #[test]
    fn test_update_quantity_by_negative_quantity_removes_line() {
        let mut cart = Cart::new();
        cart.add(IPHONE);
        cart.add(IPHONE);
        cart.add(IPHONE);

        assert_eq!(cart.update_quantity(IPHONE, -3), None);
        assert!(!cart.contains(IPHONE));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_overshoot_removes_line() {
        let mut cart = Cart::new();
        cart.add(IPHONE);

        assert_eq!(cart.update_quantity(IPHONE, -10), None);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add(IPHONE);

        assert_eq!(cart.update_quantity(AIRPODS, 5), None);
        assert_eq!(cart.count(), 1);
        assert!(!cart.contains(AIRPODS));
    }

    #[test]
    fn test_update_quantity_positive_delta() {
        let mut cart = Cart::new();
        cart.add(AIRPODS);

        assert_eq!(cart.update_quantity(AIRPODS, 4), Some(5));
        assert_eq!(cart.count(), 5);
    }

    #[test]
    fn test_remove_is_unconditional_and_idempotent() {
        let mut cart = Cart::new();
        cart.add(IPHONE);
        cart.add(IPHONE);

        assert!(cart.remove(IPHONE));
        assert!(!cart.remove(IPHONE));
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let catalog = mock_catalog().unwrap();
        let mut cart = Cart::new();
        cart.add(AIRPODS);
        cart.add(IPHONE);
        cart.add(AIRPODS);

        let view = cart.view(&catalog);
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].product.id, AIRPODS);
        assert_eq!(view[0].quantity, 2);
        assert_eq!(view[0].line_total.rubles(), 33_980);
        assert_eq!(view[1].product.id, IPHONE);
    }

    #[test]
    fn test_quantity_stops_at_line_maximum() {
        let mut cart = Cart::new();
        cart.add(AIRPODS);

        assert_eq!(cart.update_quantity(AIRPODS, MAX_LINE_QUANTITY as i64 - 1), Some(MAX_LINE_QUANTITY));
        assert_eq!(cart.add(AIRPODS), MAX_LINE_QUANTITY);
        assert_eq!(cart.update_quantity(AIRPODS, 1), Some(MAX_LINE_QUANTITY));
    }

    #[test]
    fn test_update_quantity_extreme_deltas() {
        let catalog = mock_catalog().unwrap();
        let mut cart = Cart::new();
        cart.add(IPHONE);
        cart.add(AIRPODS);

        assert_eq!(cart.update_quantity(IPHONE, i64::MAX), Some(MAX_LINE_QUANTITY));
        assert_eq!(cart.count(), u64::from(MAX_LINE_QUANTITY) + 1);
        assert_eq!(
            cart.total(&catalog).rubles(),
            89_990 * i64::from(MAX_LINE_QUANTITY) + 16_990
        );

        assert_eq!(cart.update_quantity(IPHONE, i64::MIN), None);
        assert!(!cart.contains(IPHONE));
        assert_eq!(cart.total(&catalog).rubles(), 16_990);
    }

    #[test]
    fn test_total_at_price_and_quantity_limits() {
        let catalog = Catalog::from_json(
            r#"{"products": [
                {"id": 1, "name": "Yacht", "price": 1000000000000, "oldPrice": 0, "discount": 0,
                 "image": "", "category": "boats", "rating": 5.0, "reviews": 0},
                {"id": 2, "name": "Island", "price": 1000000000000, "oldPrice": 0, "discount": 0,
                 "image": "", "category": "land", "rating": 5.0, "reviews": 0}
            ]}"#,
        )
        .unwrap();
        let mut cart = Cart::new();
        cart.add(ProductId::new(1));
        cart.update_quantity(ProductId::new(1), i64::MAX);

        let expected = 1_000_000_000_000 * i64::from(MAX_LINE_QUANTITY);
        assert_eq!(cart.total(&catalog).rubles(), expected);

        cart.add(ProductId::new(2));
        assert_eq!(cart.total(&catalog).rubles(), expected + 1_000_000_000_000);
    }
}
