//! # State Module
//!
//! Process-wide state handed to every command.
//!
//! ## Why Two State Types?
//! Commands declare exactly what they need: cart and navigation commands take
//! the session, formatting and hot deals also take the config. The config is
//! read-only after startup and needs no lock.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Invoke Bridge                              │   │
//! │  │  dispatch(&session_state, &config_state, request)               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │                 ┌────────────┴────────────┐                             │
//! │                 ▼                         ▼                             │
//! │  ┌──────────────────────────┐  ┌──────────────────────────┐            │
//! │  │      SessionState        │  │       ConfigState        │            │
//! │  │                          │  │                          │            │
//! │  │  Arc<Mutex<              │  │  store_name              │            │
//! │  │    StorefrontSession     │  │  currency_symbol         │            │
//! │  │  >>                      │  │  hot_deals_limit         │            │
//! │  └──────────────────────────┘  └──────────────────────────┘            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{ConfigError, ConfigState};
pub use session::SessionState;
