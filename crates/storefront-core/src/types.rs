//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │     Screen      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  id ("phones")  │   │  Home           │       │
//! │  │  name           │   │  name           │   │  Catalog        │       │
//! │  │  price/oldPrice │   │  icon           │   │  Favorites      │       │
//! │  │  category       │   └─────────────────┘   │  Profile        │       │
//! │  │  rating/reviews │                         └─────────────────┘       │
//! │  └─────────────────┘   ┌─────────────────┐                             │
//! │                        │ CategoryFilter  │                             │
//! │                        │  All | "cars"   │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Catalog records use camelCase on the wire (`oldPrice`) so a catalog file
//! reads the same as the renderer's props.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::money::Money;
use crate::ALL_CATEGORY;

// =============================================================================
// Product Id
// =============================================================================

/// Catalog-unique product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductId(u32);

impl ProductId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,

    /// Display name, also the search target.
    pub name: String,

    /// Current selling price.
    pub price: Money,

    /// Reference ("was") price shown struck through.
    pub old_price: Money,

    /// Discount badge in percent (0-100).
    pub discount: u8,

    /// Image URL.
    pub image: String,

    /// Category id this product is listed under.
    pub category: String,

    /// Average rating, 0.0 to 5.0.
    pub rating: f32,

    /// Number of reviews behind the rating.
    pub reviews: u32,
}

impl Product {
    /// Case-insensitive substring match on the name.
    ///
    /// `query_lower` must already be lowercased; the catalog filter lowercases
    /// once per call instead of once per product.
    pub fn name_matches(&self, query_lower: &str) -> bool {
        query_lower.is_empty() || self.name.to_lowercase().contains(query_lower)
    }

    /// Amount saved against the reference price.
    #[inline]
    pub fn savings(&self) -> Money {
        self.price.savings_from(self.old_price)
    }
}

// =============================================================================
// Category
// =============================================================================

/// A catalog category as shown on the home tiles and catalog tabs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    /// Stable id (`"phones"`), referenced by `Product::category`.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Icon name for the renderer.
    pub icon: String,
}

impl Category {
    /// Returns true for the `all` pseudo-category.
    pub fn is_all(&self) -> bool {
        self.id == ALL_CATEGORY
    }
}

// =============================================================================
// Category Filter
// =============================================================================

/// The category selection applied to the catalog screen.
///
/// Serialized as a plain string: `"all"` or the category id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    /// No category restriction.
    #[default]
    All,

    /// Only products whose `category` equals this id.
    Only(String),
}

impl CategoryFilter {
    /// Returns true if a product in `category` passes this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => id == category,
        }
    }

    /// The id as the renderer knows it (`"all"` for `All`).
    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORY,
            CategoryFilter::Only(id) => id,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(id: &str) -> Self {
        if id == ALL_CATEGORY {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(id.to_string())
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(id: String) -> Self {
        if id == ALL_CATEGORY {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(id)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => ALL_CATEGORY.to_string(),
            CategoryFilter::Only(id) => id,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Screen
// =============================================================================

/// The active top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Screen {
    /// Hero banner, category tiles, hot deals.
    #[default]
    Home,
    /// Filterable product grid.
    Catalog,
    /// Favorited products.
    Favorites,
    /// Account page.
    Profile,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Catalog => "catalog",
            Screen::Favorites => "favorites",
            Screen::Profile => "profile",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown screen name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown screen: '{0}'. Valid options: home, catalog, favorites, profile")]
pub struct ParseScreenError(pub String);

impl FromStr for Screen {
    type Err = ParseScreenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "home" => Ok(Screen::Home),
            "catalog" => Ok(Screen::Catalog),
            "favorites" => Ok(Screen::Favorites),
            "profile" => Ok(Screen::Profile),
            other => Err(ParseScreenError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> Product {
        Product {
            id: ProductId::new(1),
            name: "iPhone 15 Pro Max 256GB".to_string(),
            price: Money::from_rubles(89_990),
            old_price: Money::from_rubles(139_990),
            discount: 36,
            image: "https://example.com/iphone.jpg".to_string(),
            category: "phones".to_string(),
            rating: 4.9,
            reviews: 2847,
        }
    }

    #[test]
    fn test_name_matches_is_case_insensitive() {
        let product = phone();
        assert!(product.name_matches("iphone"));
        assert!(product.name_matches("pro max"));
        assert!(product.name_matches(""));
        assert!(!product.name_matches("tesla"));
    }

    #[test]
    fn test_product_json_uses_camel_case() {
        let json = serde_json::to_value(phone()).unwrap();
        assert_eq!(json["oldPrice"], 139_990);
        assert_eq!(json["id"], 1);
        assert_eq!(json["category"], "phones");
    }

    #[test]
    fn test_category_filter_string_round_trip() {
        let all: CategoryFilter = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(all, CategoryFilter::All);

        let cars: CategoryFilter = serde_json::from_str("\"cars\"").unwrap();
        assert_eq!(cars, CategoryFilter::Only("cars".to_string()));
        assert_eq!(serde_json::to_string(&cars).unwrap(), "\"cars\"");
    }

    #[test]
    fn test_category_filter_matches() {
        assert!(CategoryFilter::All.matches("phones"));
        assert!(CategoryFilter::from("phones").matches("phones"));
        assert!(!CategoryFilter::from("cars").matches("phones"));
    }

    #[test]
    fn test_screen_parsing() {
        assert_eq!("home".parse::<Screen>().unwrap(), Screen::Home);
        assert_eq!("Catalog".parse::<Screen>().unwrap(), Screen::Catalog);
        assert_eq!("favorites".parse::<Screen>().unwrap(), Screen::Favorites);
        assert!("checkout".parse::<Screen>().is_err());
        assert_eq!(Screen::default(), Screen::Home);
    }
}
