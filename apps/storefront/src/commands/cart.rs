//! # Cart Commands
//!
//! Commands behind the cart panel and the "В корзину" buttons.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart   ┌──────────┐  update_quantity(-qty)       │
//! │  │  Empty   │───────────────►│ In Cart  │──────────────────┐           │
//! │  │  Cart    │                │ (panel   │  remove_from_cart │           │
//! │  └──────────┘                │  opens)  │──────────────────┤           │
//! │       ▲                      └──────────┘                  │           │
//! │       │                        │    ▲                      │           │
//! │       │                        └────┘                      │           │
//! │       │               add_to_cart / update_quantity(±1)    │           │
//! │       └────────────────── last line removed ◄──────────────┘           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};
use storefront_core::{CartLineView, Money, ProductId, StorefrontSession};

/// Cart response: lines plus the derived badge count and total.
///
/// ## Serialization
/// ```json
/// {
///   "lines": [{ "product": {...}, "quantity": 2, "lineTotal": 179980 }],
///   "count": 2,
///   "total": 179980,
///   "formattedTotal": "179 980 ₽",
///   "open": true
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLineView>,
    pub count: u64,
    pub total: Money,
    pub formatted_total: String,
    pub open: bool,
}

impl CartResponse {
    fn build(session: &StorefrontSession, config: &ConfigState) -> Self {
        let total = session.cart_total();
        CartResponse {
            lines: session.cart_lines(),
            count: session.cart_count(),
            total,
            formatted_total: config.format_price(total),
            open: session.view().cart_open,
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(session: &SessionState, config: &ConfigState) -> CartResponse {
    debug!("get_cart command");
    session.with_session(|s| CartResponse::build(s, config))
}

/// Adds one unit of a product and opens the cart panel.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Shopper clicks "В корзину" on a product card                           │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  invoke('add_to_cart', { productId: 1 })                                │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  1. Check the product exists in the catalog                   │    │
/// │  │  2. Already in cart? quantity + 1 : new line with quantity 1  │    │
/// │  │  3. Open the cart panel                                       │    │
/// │  │  4. Return updated cart                                       │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn add_to_cart(
    session: &SessionState,
    config: &ConfigState,
    product_id: ProductId,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    session.with_session_mut(|s| -> Result<CartResponse, ApiError> {
        let quantity = s.add_to_cart(product_id)?;
        debug!(product_id = %product_id, quantity, "Cart line updated");
        Ok(CartResponse::build(s, config))
    })
}

/// Adjusts a line's quantity by `delta` (the − / + buttons send ∓1).
///
/// The line is removed when the result would be zero or less. Unknown ids
/// leave the cart unchanged.
pub fn update_quantity(
    session: &SessionState,
    config: &ConfigState,
    product_id: ProductId,
    delta: i64,
) -> CartResponse {
    debug!(product_id = %product_id, delta, "update_quantity command");

    session.with_session_mut(|s| {
        let quantity = s.update_quantity(product_id, delta);
        debug!(product_id = %product_id, ?quantity, "Cart line adjusted");
        CartResponse::build(s, config)
    })
}

/// Removes a product's line. Unknown ids leave the cart unchanged.
pub fn remove_from_cart(
    session: &SessionState,
    config: &ConfigState,
    product_id: ProductId,
) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");
    session.with_session_mut(|s| {
        s.remove_from_cart(product_id);
        CartResponse::build(s, config)
    })
}

/// Opens or closes the cart panel.
pub fn set_cart_open(session: &SessionState, config: &ConfigState, open: bool) -> CartResponse {
    debug!(open, "set_cart_open command");
    session.with_session_mut(|s| {
        s.set_cart_open(open);
        CartResponse::build(s, config)
    })
}

/// Flips the cart panel (header cart button).
pub fn toggle_cart(session: &SessionState, config: &ConfigState) -> CartResponse {
    debug!("toggle_cart command");
    session.with_session_mut(|s| {
        s.toggle_cart();
        CartResponse::build(s, config)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::sync::Arc;
    use storefront_core::mock::mock_catalog;

    const IPHONE: ProductId = ProductId::new(1);

    fn setup() -> (SessionState, ConfigState) {
        (
            SessionState::new(Arc::new(mock_catalog().unwrap())),
            ConfigState::default(),
        )
    }

    #[test]
    fn test_cart_command_scenario() {
        let (session, config) = setup();

        let cart = add_to_cart(&session, &config, IPHONE).unwrap();
        assert_eq!(cart.count, 1);
        assert_eq!(cart.total.rubles(), 89_990);
        assert!(cart.open);

        let cart = add_to_cart(&session, &config, IPHONE).unwrap();
        assert_eq!(cart.count, 2);
        assert_eq!(cart.total.rubles(), 179_980);
        assert_eq!(cart.formatted_total, "179\u{a0}980\u{a0}₽");

        let cart = update_quantity(&session, &config, IPHONE, -1);
        assert_eq!(cart.count, 1);

        let cart = remove_from_cart(&session, &config, IPHONE);
        assert!(cart.lines.is_empty());
        assert_eq!(cart.count, 0);
        assert!(cart.total.is_zero());
    }

    #[test]
    fn test_update_by_negative_quantity_removes_line() {
        let (session, config) = setup();
        add_to_cart(&session, &config, IPHONE).unwrap();
        add_to_cart(&session, &config, IPHONE).unwrap();

        let cart = update_quantity(&session, &config, IPHONE, -2);
        assert!(cart.lines.is_empty());
    }

    #[test]
    fn test_add_unknown_product() {
        let (session, config) = setup();
        let err = add_to_cart(&session, &config, ProductId::new(404)).unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(get_cart(&session, &config).count, 0);
    }

    #[test]
    fn test_panel_open_close() {
        let (session, config) = setup();
        assert!(!get_cart(&session, &config).open);
        assert!(toggle_cart(&session, &config).open);
        assert!(!set_cart_open(&session, &config, false).open);
    }

    #[test]
    fn test_currency_symbol_from_config() {
        let (session, mut config) = setup();
        config.currency_symbol = "руб.".to_string();
        let cart = add_to_cart(&session, &config, ProductId::new(5)).unwrap();
        assert_eq!(cart.formatted_total, "16\u{a0}990\u{a0}руб.");
    }
}
