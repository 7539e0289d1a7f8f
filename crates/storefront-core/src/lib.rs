//! # storefront-core: Pure State Manager for the Storefront
//!
//! This crate owns everything the storefront page knows: the product catalog,
//! the cart, the favorites list and which screen is showing. It has no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Renderer (web page)                          │   │
//! │  │    Header ──► Product Cards ──► Detail Dialog ──► Cart Panel    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ invoke bridge (JSON lines)             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    App Commands                                 │   │
//! │  │    add_to_cart, toggle_favorite, browse_category, etc.          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │ catalog  │ │   cart   │ │favorites │ │ view + session   │  │   │
//! │  │   │ filter   │ │ CartLine │ │ toggle   │ │ Screen, overlay  │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO GLOBAL STATE                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, Screen, filters)
//! - [`money`] - Integer money with ru-RU display
//! - [`error`] - Domain error types
//! - [`validation`] - Record and input validation
//! - [`catalog`] - The fixed product list and its filter
//! - [`mock`] - Built-in demo catalog
//! - [`cart`] - Cart lines and derived totals
//! - [`favorites`] - Favorite product set
//! - [`view`] - Screen navigation and overlay state
//! - [`session`] - The composed state manager
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use storefront_core::{mock, ProductId, StorefrontSession};
//!
//! let catalog = Arc::new(mock::mock_catalog().unwrap());
//! let mut session = StorefrontSession::new(catalog);
//!
//! session.add_to_cart(ProductId::new(1)).unwrap();
//! session.add_to_cart(ProductId::new(1)).unwrap();
//!
//! assert_eq!(session.cart_count(), 2);
//! assert_eq!(session.cart_total().rubles(), 179_980);
//! assert!(session.view().cart_open);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod favorites;
pub mod mock;
pub mod money;
pub mod session;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartLineView};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use favorites::FavoriteSet;
pub use money::Money;
pub use session::{SessionSnapshot, StorefrontSession};
pub use types::*;
pub use view::ViewState;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Category id meaning "every product".
pub const ALL_CATEGORY: &str = "all";

/// How many leading catalog products the home screen shows as hot deals.
pub const DEFAULT_HOT_DEALS_LIMIT: usize = 8;

/// Longest search text accepted from the renderer.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;

/// Longest product name accepted when loading a catalog.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Most units of one product a cart line holds.
pub const MAX_LINE_QUANTITY: u32 = 999;

/// Highest price (in rubles) accepted when loading a catalog.
pub const MAX_PRICE: i64 = 1_000_000_000_000;
