//! # Catalog Commands
//!
//! Read-only access to products and categories.
//!
//! ## Catalog Screen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Каталог                                       [ Поиск товаров...   ]  │
//! │                                                                         │
//! │  [Все товары] [Электроника] [Телефоны] [Автомобили] [Аксессуары] ...   │
//! │                                                                         │
//! │  ┌─────────────┐ ┌─────────────┐ ┌─────────────┐ ┌─────────────┐       │
//! │  │ -10%     ♡  │ │ -11%     ♡  │ │ -9%      ♡  │ │ -6%      ♡  │       │
//! │  │ iPhone 15   │ │ Galaxy S24  │ │ Camry 2023  │ │ MacBook Pro │       │
//! │  │ 89 990 ₽    │ │ 79 990 ₽    │ │ 2 499 000 ₽ │ │ 149 990 ₽   │       │
//! │  └─────────────┘ └─────────────┘ └─────────────┘ └─────────────┘       │
//! │                                                                         │
//! │  invoke('get_catalog') → products for the view's category and search   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};
use storefront_core::validation::clamp_search_query;
use storefront_core::{Category, CategoryFilter, Product, ProductId};

/// Lists products matching a category and search text.
///
/// Omitted arguments fall back to the session's current filter and search,
/// so a bare `get_catalog` returns exactly what the catalog screen shows.
pub fn get_catalog(
    session: &SessionState,
    category: Option<String>,
    search: Option<String>,
) -> Result<Vec<Product>, ApiError> {
    debug!(?category, ?search, "get_catalog command");

    session.with_session(|s| -> Result<Vec<Product>, ApiError> {
        let category = category
            .map(CategoryFilter::from)
            .unwrap_or_else(|| s.view().category.clone());
        let search = search.unwrap_or_else(|| s.view().search.clone());

        s.catalog().check_filter(&category)?;

        Ok(s
            .filter_products(&category, clamp_search_query(&search))
            .into_iter()
            .cloned()
            .collect())
    })
}

/// Lists categories with `all` first.
pub fn list_categories(session: &SessionState) -> Vec<Category> {
    debug!("list_categories command");
    session.with_session(|s| s.categories().to_vec())
}

/// Gets one product by id.
pub fn get_product(session: &SessionState, product_id: ProductId) -> Result<Product, ApiError> {
    debug!(product_id = %product_id, "get_product command");
    session.with_session(|s| {
        s.catalog()
            .product(product_id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Product", product_id))
    })
}

/// Products for the home screen's hot deals strip.
///
/// `limit` defaults to the configured `hot_deals_limit`.
pub fn hot_deals(
    session: &SessionState,
    config: &ConfigState,
    limit: Option<usize>,
) -> Vec<Product> {
    let limit = limit.unwrap_or(config.hot_deals_limit);
    debug!(limit, "hot_deals command");
    session.with_session(|s| s.hot_deals(limit).to_vec())
}
