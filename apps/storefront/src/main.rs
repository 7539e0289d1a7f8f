//! # Storefront Entry Point
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Host                                  │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                        Renderer                                  │  │
//! │  │  • Home (hot deals, categories)   • Catalog (tabs, search)       │  │
//! │  │  • Favorites                      • Profile                      │  │
//! │  │  • Product overlay                • Cart panel                   │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                     JSON lines │ stdin / stdout                         │
//! │                                ▼                                        │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Starts the runtime                               │  │
//! │  │  lib.rs ─────► Logging, config, catalog, state, bridge          │  │
//! │  │  commands/ ──► add_to_cart, toggle_favorite, browse_category    │  │
//! │  │  state/ ─────► SessionState, ConfigState                        │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                ▼                                        │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                 storefront-core (pure, no I/O)                   │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Setup lives in lib.rs for testability
    match storefront_app::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("storefront: {}", e);
            ExitCode::FAILURE
        }
    }
}
