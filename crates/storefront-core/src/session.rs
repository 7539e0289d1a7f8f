//! # Storefront Session
//!
//! The state manager: one shopper's cart, favorites and view over a shared
//! read-only catalog. Every mutation the renderer can cause goes through a
//! method here.
//!
//! ## Composition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       StorefrontSession                                 │
//! │                                                                         │
//! │   Arc<Catalog> ─────────┬──────────────┬────────────────┐              │
//! │   (shared, read-only)   │              │                │              │
//! │                         ▼              ▼                ▼              │
//! │                    ┌─────────┐   ┌───────────┐   ┌────────────┐        │
//! │                    │  Cart   │   │ Favorites │   │ ViewState  │        │
//! │                    │ lines   │   │  id set   │   │ screen,    │        │
//! │                    └─────────┘   └───────────┘   │ filter,    │        │
//! │                                                  │ overlays   │        │
//! │                                                  └────────────┘        │
//! │                                                                         │
//! │   Derived on demand: filtered_products, cart_total, cart_count,        │
//! │                      favorite_products, selected_product               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Unknown Ids
//! Operations that would put an id into the session (`add_to_cart`, adding a
//! favorite, `open_product`, category selection) check it against the catalog.
//! Operations that only take something away are no-ops for unknown ids.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::{Cart, CartLineView};
use crate::catalog::Catalog;
use crate::error::CoreResult;
use crate::favorites::FavoriteSet;
use crate::money::Money;
use crate::types::{Category, CategoryFilter, Product, ProductId, Screen};
use crate::validation::clamp_search_query;
use crate::view::ViewState;

/// One shopper's storefront state.
#[derive(Debug, Clone)]
pub struct StorefrontSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    catalog: Arc<Catalog>,
    cart: Cart,
    favorites: FavoriteSet,
    view: ViewState,
}

impl StorefrontSession {
    /// Starts a session with an empty cart and no favorites, on the home screen.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        StorefrontSession {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            catalog,
            cart: Cart::new(),
            favorites: FavoriteSet::new(),
            view: ViewState::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Adds one unit to the cart and opens the cart panel.
    ///
    /// Returns the line's new quantity.
    pub fn add_to_cart(&mut self, id: ProductId) -> CoreResult<u32> {
        self.catalog.require(id)?;
        let quantity = self.cart.add(id);
        self.view.set_cart_open(true);
        Ok(quantity)
    }

    /// Adds `delta` to a line; the line is dropped at ≤ 0. No-op if absent.
    pub fn update_quantity(&mut self, id: ProductId, delta: i64) -> Option<u32> {
        self.cart.update_quantity(id, delta)
    }

    /// Drops a line if present.
    pub fn remove_from_cart(&mut self, id: ProductId) -> bool {
        self.cart.remove(id)
    }

    pub fn set_cart_open(&mut self, open: bool) {
        self.view.set_cart_open(open);
    }

    pub fn toggle_cart(&mut self) -> bool {
        self.view.toggle_cart()
    }

    /// Σ price × quantity.
    pub fn cart_total(&self) -> Money {
        self.cart.total(&self.catalog)
    }

    /// Σ quantity.
    pub fn cart_count(&self) -> u64 {
        self.cart.count()
    }

    pub fn cart_lines(&self) -> Vec<CartLineView> {
        self.cart.view(&self.catalog)
    }

    // =========================================================================
    // Favorites
    // =========================================================================

    /// Flips a product's favorite flag; returns whether it is now a favorite.
    ///
    /// Un-favoriting never fails. Favoriting an id outside the catalog does.
    pub fn toggle_favorite(&mut self, id: ProductId) -> CoreResult<bool> {
        if !self.favorites.contains(id) {
            self.catalog.require(id)?;
        }
        Ok(self.favorites.toggle(id))
    }

    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.favorites.contains(id)
    }

    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    /// Favorited products in catalog order.
    pub fn favorite_products(&self) -> Vec<&Product> {
        self.favorites.products(&self.catalog)
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Products matching the current category filter and search text.
    pub fn filtered_products(&self) -> Vec<&Product> {
        self.catalog.filter(&self.view.category, &self.view.search)
    }

    /// Products matching an explicit category and search text.
    pub fn filter_products(&self, category: &CategoryFilter, search: &str) -> Vec<&Product> {
        self.catalog.filter(category, search)
    }

    pub fn hot_deals(&self, limit: usize) -> &[Product] {
        self.catalog.hot_deals(limit)
    }

    pub fn categories(&self) -> &[Category] {
        self.catalog.categories()
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn navigate(&mut self, screen: Screen) {
        self.view.navigate(screen);
    }

    /// Sets the filter and switches to the catalog screen.
    pub fn browse_category(&mut self, category: CategoryFilter) -> CoreResult<()> {
        self.catalog.check_filter(&category)?;
        self.view.browse_category(category);
        Ok(())
    }

    /// Sets the filter without leaving the current screen.
    pub fn select_category(&mut self, category: CategoryFilter) -> CoreResult<()> {
        self.catalog.check_filter(&category)?;
        self.view.select_category(category);
        Ok(())
    }

    /// Text past [`MAX_SEARCH_QUERY_LEN`](crate::MAX_SEARCH_QUERY_LEN)
    /// characters is dropped.
    pub fn set_search(&mut self, text: &str) {
        self.view.set_search(clamp_search_query(text));
    }

    /// Opens the detail overlay for a product.
    pub fn open_product(&mut self, id: ProductId) -> CoreResult<&Product> {
        let product = self.catalog.require(id)?;
        self.view.open_product(id);
        Ok(product)
    }

    pub fn close_product(&mut self) {
        self.view.close_product();
    }

    /// The product in the detail overlay, if any.
    pub fn selected_product(&self) -> Option<&Product> {
        self.view
            .selected_product
            .and_then(|id| self.catalog.product(id))
    }

    // =========================================================================
    // Snapshot
    // =========================================================================

    /// Everything the renderers read, in one serializable value.
    pub fn snapshot(&self, hot_deals_limit: usize) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id.to_string(),
            started_at: self.started_at,
            view: self.view.clone(),
            categories: self.catalog.categories().to_vec(),
            products: self.filtered_products().into_iter().cloned().collect(),
            hot_deals: self.hot_deals(hot_deals_limit).to_vec(),
            cart: self.cart_lines(),
            cart_count: self.cart_count(),
            cart_total: self.cart_total(),
            favorites: self.favorite_products().into_iter().cloned().collect(),
            selected_product: self.selected_product().cloned(),
        }
    }
}

/// Serializable view model of a whole session.
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SessionSnapshot {
    pub session_id: String,
    #[ts(type = "string")]
    pub started_at: DateTime<Utc>,
    pub view: ViewState,
    pub categories: Vec<Category>,
    /// The catalog screen's grid: filtered by the view's category and search.
    pub products: Vec<Product>,
    pub hot_deals: Vec<Product>,
    pub cart: Vec<CartLineView>,
    pub cart_count: u64,
    pub cart_total: Money,
    pub favorites: Vec<Product>,
    pub selected_product: Option<Product>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::mock::mock_catalog;
    use crate::DEFAULT_HOT_DEALS_LIMIT;

    fn session() -> StorefrontSession {
        StorefrontSession::new(Arc::new(mock_catalog().unwrap()))
    }

    const IPHONE: ProductId = ProductId::new(1);

    #[test]
    fn test_cart_scenario() {
        let mut s = session();

        s.add_to_cart(IPHONE).unwrap();
        assert_eq!(s.cart_count(), 1);
        assert_eq!(s.cart_total().rubles(), 89_990);

        s.add_to_cart(IPHONE).unwrap();
        assert_eq!(s.cart_count(), 2);
        assert_eq!(s.cart_total().rubles(), 179_980);

        s.update_quantity(IPHONE, -1);
        assert_eq!(s.cart_count(), 1);

        s.remove_from_cart(IPHONE);
        assert!(s.cart().is_empty());
        assert_eq!(s.cart_count(), 0);
        assert!(s.cart_total().is_zero());
    }

    #[test]
    fn test_add_each_product_adds_its_price() {
        let mut s = session();
        let products: Vec<Product> = s.catalog().products().to_vec();

        for product in products {
            let count = s.cart_count();
            let total = s.cart_total();

            s.add_to_cart(product.id).unwrap();

            assert_eq!(s.cart_count(), count + 1);
            assert_eq!(s.cart_total(), total + product.price);
        }
    }

    #[test]
    fn test_add_to_cart_opens_panel() {
        let mut s = session();
        assert!(!s.view().cart_open);
        s.add_to_cart(ProductId::new(5)).unwrap();
        assert!(s.view().cart_open);
    }

    #[test]
    fn test_add_unknown_product_rejected_without_side_effects() {
        let mut s = session();
        let err = s.add_to_cart(ProductId::new(999)).unwrap_err();

        assert!(matches!(err, CoreError::ProductNotFound(_)));
        assert!(s.cart().is_empty());
        assert!(!s.view().cart_open);
    }

    #[test]
    fn test_toggle_favorite_is_involution() {
        let mut s = session();
        s.toggle_favorite(ProductId::new(3)).unwrap();
        let before: Vec<ProductId> = s.favorites().iter().collect();

        assert!(s.toggle_favorite(ProductId::new(7)).unwrap());
        assert!(!s.toggle_favorite(ProductId::new(7)).unwrap());

        let after: Vec<ProductId> = s.favorites().iter().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_favorite_unknown_product_rejected() {
        let mut s = session();
        assert!(s.toggle_favorite(ProductId::new(42)).is_err());
        assert_eq!(s.favorite_count(), 0);
    }

    #[test]
    fn test_search_scenario() {
        let mut s = session();
        s.set_search("iPhone");

        let names: Vec<&str> = s.filtered_products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["iPhone 15 Pro Max 256GB"]);
    }

    #[test]
    fn test_default_filter_returns_whole_catalog() {
        let s = session();
        let ids: Vec<u32> = s.filtered_products().iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());
    }

    #[test]
    fn test_browse_category_from_home() {
        let mut s = session();
        s.browse_category(CategoryFilter::from("cars")).unwrap();

        assert_eq!(s.view().screen, Screen::Catalog);
        let names: Vec<&str> = s.filtered_products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Toyota Camry 2023", "Tesla Model 3"]);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let mut s = session();
        assert!(s.browse_category(CategoryFilter::from("boats")).is_err());
        assert!(s.select_category(CategoryFilter::from("boats")).is_err());
        assert_eq!(s.view().screen, Screen::Home);
        assert_eq!(s.view().category, CategoryFilter::All);
    }

    #[test]
    fn test_overlong_search_truncated() {
        let mut s = session();
        s.set_search(&format!("Dyson{}", " ".repeat(200)));

        assert_eq!(s.view().search.chars().count(), 100);
        assert!(s.view().search.starts_with("Dyson"));
        assert_eq!(s.filtered_products().len(), 0);

        s.set_search("Dyson");
        assert_eq!(s.filtered_products().len(), 1);
    }

    #[test]
    fn test_product_overlay() {
        let mut s = session();
        let name = s.open_product(ProductId::new(4)).unwrap().name.clone();
        assert_eq!(name, "MacBook Pro 14\" M3");
        assert_eq!(s.selected_product().unwrap().id, ProductId::new(4));

        s.close_product();
        assert!(s.selected_product().is_none());
        assert!(s.open_product(ProductId::new(0)).is_err());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut s = session();
        s.add_to_cart(ProductId::new(5)).unwrap();
        s.toggle_favorite(ProductId::new(8)).unwrap();
        s.select_category(CategoryFilter::from("electronics")).unwrap();

        let snap = s.snapshot(DEFAULT_HOT_DEALS_LIMIT);
        assert_eq!(snap.cart_count, 1);
        assert_eq!(snap.cart_total.rubles(), 16_990);
        assert_eq!(snap.products.len(), 2);
        assert_eq!(snap.hot_deals.len(), 8);
        assert_eq!(snap.favorites.len(), 1);
        assert_eq!(snap.categories.len(), 6);
        assert!(snap.selected_product.is_none());

        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["cartTotal"], 16_990);
        assert_eq!(json["view"]["category"], "electronics");
    }
}
