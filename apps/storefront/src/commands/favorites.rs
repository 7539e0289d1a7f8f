//! # Favorites Commands
//!
//! The heart icon on product cards and the Favorites screen.

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::SessionState;
use storefront_core::{Product, ProductId};

/// Result of flipping a heart icon.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleFavoriteResponse {
    pub product_id: ProductId,
    /// Whether the product is a favorite after the toggle.
    pub favorite: bool,
    /// Header badge count.
    pub count: usize,
}

/// Favorites screen contents, in catalog order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesResponse {
    pub products: Vec<Product>,
    pub count: usize,
}

/// Adds the product to favorites if absent, removes it otherwise.
///
/// Removing always succeeds; adding an id outside the catalog is NOT_FOUND.
pub fn toggle_favorite(
    session: &SessionState,
    product_id: ProductId,
) -> Result<ToggleFavoriteResponse, ApiError> {
    debug!(product_id = %product_id, "toggle_favorite command");

    session.with_session_mut(|s| -> Result<ToggleFavoriteResponse, ApiError> {
        let favorite = s.toggle_favorite(product_id)?;
        Ok(ToggleFavoriteResponse {
            product_id,
            favorite,
            count: s.favorite_count(),
        })
    })
}

pub fn get_favorites(session: &SessionState) -> FavoritesResponse {
    debug!("get_favorites command");
    session.with_session(|s| FavoritesResponse {
        products: s.favorite_products().into_iter().cloned().collect(),
        count: s.favorite_count(),
    })
}
