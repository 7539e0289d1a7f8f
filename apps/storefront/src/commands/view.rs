//! # Navigation Commands
//!
//! Screen switches, category and search filters, and the product overlay.
//! Every command returns the resulting [`ViewState`] so the renderer can
//! redraw from one value.

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};
use storefront_core::{CategoryFilter, Money, Product, ProductId, Screen, ViewState};

/// What the detail overlay shows for one product.
///
/// ## Serialization
/// ```json
/// {
///   "id": 1, "name": "iPhone 15 Pro Max 256GB", "price": 89990, ...,
///   "savings": 50000,
///   "formattedPrice": "89 990 ₽",
///   "formattedOldPrice": "139 990 ₽",
///   "favorite": false,
///   "cartQuantity": 0
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    pub savings: Money,
    pub formatted_price: String,
    pub formatted_old_price: String,
    pub favorite: bool,
    pub cart_quantity: u32,
}

pub fn get_view(session: &SessionState) -> ViewState {
    debug!("get_view command");
    session.with_session(|s| s.view().clone())
}

/// Header buttons and back arrows.
pub fn navigate(session: &SessionState, screen: Screen) -> ViewState {
    debug!(screen = %screen, "navigate command");
    session.with_session_mut(|s| {
        s.navigate(screen);
        s.view().clone()
    })
}

/// Home screen category tile: sets the filter and shows the catalog.
pub fn browse_category(session: &SessionState, category: String) -> Result<ViewState, ApiError> {
    debug!(category = %category, "browse_category command");
    session.with_session_mut(|s| -> Result<ViewState, ApiError> {
        s.browse_category(CategoryFilter::from(category))?;
        Ok(s.view().clone())
    })
}

/// Catalog tab: sets the filter and stays on the current screen.
pub fn select_category(session: &SessionState, category: String) -> Result<ViewState, ApiError> {
    debug!(category = %category, "select_category command");
    session.with_session_mut(|s| -> Result<ViewState, ApiError> {
        s.select_category(CategoryFilter::from(category))?;
        Ok(s.view().clone())
    })
}

/// Search box input. The text is stored as typed, cut to the length limit.
pub fn set_search(session: &SessionState, text: String) -> ViewState {
    debug!(len = text.chars().count(), "set_search command");
    session.with_session_mut(|s| {
        s.set_search(&text);
        s.view().clone()
    })
}

/// Opens the detail overlay and returns what it shows.
pub fn open_product(
    session: &SessionState,
    config: &ConfigState,
    product_id: ProductId,
) -> Result<ProductDetail, ApiError> {
    debug!(product_id = %product_id, "open_product command");
    session.with_session_mut(|s| -> Result<ProductDetail, ApiError> {
        let product = s.open_product(product_id)?.clone();
        Ok(ProductDetail {
            savings: product.savings(),
            formatted_price: config.format_price(product.price),
            formatted_old_price: config.format_price(product.old_price),
            favorite: s.is_favorite(product_id),
            cart_quantity: s.cart().quantity_of(product_id),
            product,
        })
    })
}

pub fn close_product(session: &SessionState) -> ViewState {
    debug!("close_product command");
    session.with_session_mut(|s| {
        s.close_product();
        s.view().clone()
    })
}
