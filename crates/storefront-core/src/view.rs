//! # View State
//!
//! Which screen is showing, what the catalog is filtered by, and the two
//! overlays (product detail, cart panel).
//!
//! ## Navigation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Screen Transitions                              │
//! │                                                                         │
//! │              ┌──── "Смотреть каталог" / "Все товары" ────┐              │
//! │              │                                           ▼              │
//! │          ┌───────┐   category tile (sets filter)   ┌─────────┐         │
//! │          │ Home  │ ──────────────────────────────► │ Catalog │         │
//! │          └───────┘ ◄────────── back arrow ──────── └─────────┘         │
//! │            ▲   ▲                                        ▲              │
//! │   back     │   │ back                 "Перейти в каталог"│              │
//! │   arrow    │   │                                        │              │
//! │        ┌─────────┐                               ┌───────────┐         │
//! │        │ Profile │                               │ Favorites │         │
//! │        └─────────┘                               └───────────┘         │
//! │                                                                         │
//! │  Header buttons reach Favorites and Profile from anywhere.             │
//! │  The product overlay and cart panel are orthogonal to the screen.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every transition is a plain assignment; there are no guards here. Checking
//! that a category or product exists is the session's job.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{CategoryFilter, ProductId, Screen};

/// Screen, filter and overlay state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ViewState {
    pub screen: Screen,

    /// `"all"` or a category id.
    #[ts(type = "string")]
    pub category: CategoryFilter,

    /// Search text exactly as typed.
    pub search: String,

    /// Product shown in the detail overlay.
    pub selected_product: Option<ProductId>,

    /// Whether the cart side panel is open.
    pub cart_open: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches the active screen. Overlays are left as they are.
    pub fn navigate(&mut self, screen: Screen) {
        self.screen = screen;
    }

    /// Home screen category tile: set the filter and show the catalog.
    pub fn browse_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.screen = Screen::Catalog;
    }

    /// Catalog tab: set the filter only.
    pub fn select_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn open_product(&mut self, id: ProductId) {
        self.selected_product = Some(id);
    }

    pub fn close_product(&mut self) {
        self.selected_product = None;
    }

    pub fn is_detail_open(&self) -> bool {
        self.selected_product.is_some()
    }

    pub fn set_cart_open(&mut self, open: bool) {
        self.cart_open = open;
    }

    /// Flips the cart panel and returns the new state.
    pub fn toggle_cart(&mut self) -> bool {
        self.cart_open = !self.cart_open;
        self.cart_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let view = ViewState::new();
        assert_eq!(view.screen, Screen::Home);
        assert_eq!(view.category, CategoryFilter::All);
        assert!(view.search.is_empty());
        assert!(!view.is_detail_open());
        assert!(!view.cart_open);
    }

    #[test]
    fn test_browse_category_switches_to_catalog() {
        let mut view = ViewState::new();
        view.browse_category(CategoryFilter::from("cars"));

        assert_eq!(view.screen, Screen::Catalog);
        assert_eq!(view.category.as_str(), "cars");
    }

    #[test]
    fn test_select_category_keeps_screen() {
        let mut view = ViewState::new();
        view.navigate(Screen::Catalog);
        view.select_category(CategoryFilter::from("phones"));
        view.navigate(Screen::Home);

        assert_eq!(view.screen, Screen::Home);
        assert_eq!(view.category.as_str(), "phones");
    }

    #[test]
    fn test_detail_overlay_survives_navigation() {
        let mut view = ViewState::new();
        view.open_product(ProductId::new(4));
        view.navigate(Screen::Favorites);

        assert_eq!(view.selected_product, Some(ProductId::new(4)));
        view.close_product();
        assert!(!view.is_detail_open());
    }

    #[test]
    fn test_cart_panel_toggle() {
        let mut view = ViewState::new();
        assert!(view.toggle_cart());
        assert!(!view.toggle_cart());
        view.set_cart_open(true);
        assert!(view.cart_open);
    }

    #[test]
    fn test_serializes_filter_as_string() {
        let mut view = ViewState::new();
        view.select_category(CategoryFilter::from("home"));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["category"], "home");
        assert_eq!(json["screen"], "home");
        assert_eq!(json["cartOpen"], false);
    }
}
