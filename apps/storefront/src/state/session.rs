//! # Session State
//!
//! Holds the shopper's [`StorefrontSession`] for the lifetime of the process.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>`: every command may read or
//! mutate it, and only one command may mutate it at a time.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Operations                             │
//! │                                                                         │
//! │  Renderer Action          Command                 Session Change        │
//! │  ───────────────          ───────                 ──────────────        │
//! │                                                                         │
//! │  "В корзину" ────────────► add_to_cart() ───────► cart line +1, panel  │
//! │                                                                         │
//! │  − / + buttons ──────────► update_quantity() ───► line qty ± 1         │
//! │                                                                         │
//! │  Heart icon ─────────────► toggle_favorite() ───► id in/out of set     │
//! │                                                                         │
//! │  Category tile ──────────► browse_category() ───► filter + catalog     │
//! │                                                                         │
//! │  Any screen ─────────────► get_snapshot() ──────► (read only)          │
//! │                                                                         │
//! │  NOTE: Reads take the lock too, but only long enough to clone out      │
//! │        the response.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use storefront_core::{Catalog, StorefrontSession};
use uuid::Uuid;

/// Wrapper for thread-safe session access.
#[derive(Debug, Clone)]
pub struct SessionState {
    session: Arc<Mutex<StorefrontSession>>,
}

impl SessionState {
    /// Starts a fresh session over `catalog`.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        SessionState {
            session: Arc::new(Mutex::new(StorefrontSession::new(catalog))),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = session_state.with_session(|s| s.cart_total());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&StorefrontSession) -> R,
    {
        // A panic mid-command leaves the session as it was at the panic;
        // every mutation is a single assignment, so it is still consistent.
        let session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session_state.with_session_mut(|s| s.add_to_cart(id))?;
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut StorefrontSession) -> R,
    {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }

    pub fn session_id(&self) -> Uuid {
        self.with_session(|s| s.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{mock::mock_catalog, ProductId};

    fn state() -> SessionState {
        SessionState::new(Arc::new(mock_catalog().unwrap()))
    }

    #[test]
    fn test_mutations_visible_to_reads() {
        let state = state();
        state
            .with_session_mut(|s| s.add_to_cart(ProductId::new(2)))
            .unwrap();

        assert_eq!(state.with_session(|s| s.cart_count()), 1);
        assert_eq!(state.with_session(|s| s.cart_total().rubles()), 79_990);
    }

    #[test]
    fn test_clones_share_one_session() {
        let state = state();
        let other = state.clone();

        other
            .with_session_mut(|s| s.toggle_favorite(ProductId::new(6)))
            .unwrap();

        assert!(state.with_session(|s| s.is_favorite(ProductId::new(6))));
        assert_eq!(state.session_id(), other.session_id());
    }

    #[test]
    fn test_concurrent_adds_are_not_lost() {
        let state = state();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let state = state.clone();
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        state
                            .with_session_mut(|s| s.add_to_cart(ProductId::new(5)))
                            .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(state.with_session(|s| s.cart_count()), 100);
    }
}
