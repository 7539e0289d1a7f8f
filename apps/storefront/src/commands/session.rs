//! # Session Commands
//!
//! One-shot read of everything the renderer draws.

use serde::Serialize;
use tracing::debug;

use crate::state::{ConfigState, SessionState};
use storefront_core::SessionSnapshot;

/// Snapshot plus the display strings that depend on configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotResponse {
    pub store_name: String,
    #[serde(flatten)]
    pub snapshot: SessionSnapshot,
    pub formatted_cart_total: String,
}

/// Gets the whole session view model.
///
/// The renderer calls this on startup and after reconnecting; individual
/// commands return only the slice they changed.
pub fn get_snapshot(session: &SessionState, config: &ConfigState) -> SnapshotResponse {
    debug!("get_snapshot command");
    let snapshot = session.with_session(|s| s.snapshot(config.hot_deals_limit));

    SnapshotResponse {
        store_name: config.store_name.clone(),
        formatted_cart_total: config.format_price(snapshot.cart_total),
        snapshot,
    }
}
