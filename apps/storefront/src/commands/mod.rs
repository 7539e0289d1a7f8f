//! # Commands Module
//!
//! Every operation the renderer can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── catalog.rs    ◄─── Products, categories, hot deals
//! ├── cart.rs       ◄─── Cart lines and the cart panel
//! ├── favorites.rs  ◄─── Heart icons and the Favorites screen
//! ├── view.rs       ◄─── Screens, filters, product overlay
//! ├── session.rs    ◄─── Whole-session snapshot
//! └── config.rs     ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Renderer                                                               │
//! │  ────────                                                               │
//! │  {"command": "add_to_cart", "args": {"productId": 1}}                   │
//! │         │                                                               │
//! │         │ (JSON line on stdin)                                          │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  bridge::dispatch decodes args, then calls                              │
//! │  fn add_to_cart(                                                        │
//! │      session: &SessionState,  ◄── Shared session                        │
//! │      config: &ConfigState,    ◄── Read-only config                      │
//! │      product_id: ProductId,   ◄── From args                             │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Renderer receives: {"ok": true, "data": {lines, count, total, ...}}    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands are plain functions; each declares only the state it needs.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod favorites;
pub mod session;
pub mod view;
