//! # Invoke Bridge
//!
//! Newline-delimited JSON between the renderer and the commands.
//!
//! ## Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Request, One Response                            │
//! │                                                                         │
//! │  stdin  ──► {"id": 7, "command": "add_to_cart", "args": {"productId": 1}}│
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │             handle_line ──► decode ──► dispatch ──► command            │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  stdout ◄── {"id": 7, "ok": true, "data": {"count": 1, ...}}            │
//! │                                                                         │
//! │  Failure:   {"id": 7, "ok": false,                                      │
//! │              "error": {"code": "NOT_FOUND", "message": "..."}}          │
//! │                                                                         │
//! │  • `id` is optional and echoed back untouched                          │
//! │  • `args` may be omitted for commands without arguments                │
//! │  • A line that is not a request (or not UTF-8) gets INVALID_REQUEST;   │
//! │    the loop keeps reading. Blank lines are skipped.                    │
//! │  • End of input stops the loop.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Logs go to stderr; stdout carries nothing but responses.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info, warn};

use crate::commands;
use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};
use storefront_core::{ProductId, Screen};

/// Last-resort response when a response itself cannot be encoded.
const SERIALIZATION_FAILURE: &str =
    r#"{"ok":false,"error":{"code":"INTERNAL","message":"Failed to encode response"}}"#;

// =============================================================================
// Wire Types
// =============================================================================

/// A decoded request line.
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    /// Correlation id chosen by the renderer.
    #[serde(default)]
    pub id: Option<Value>,

    pub command: String,

    #[serde(default)]
    pub args: Value,
}

/// A response line.
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    pub ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl Response {
    pub fn success(id: Option<Value>, data: Value) -> Self {
        Response {
            id,
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(id: Option<Value>, error: ApiError) -> Self {
        Response {
            id,
            ok: false,
            data: None,
            error: Some(error),
        }
    }
}

// =============================================================================
// Command Arguments
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductArgs {
    product_id: ProductId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateQuantityArgs {
    product_id: ProductId,
    delta: i64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogArgs {
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    search: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HotDealsArgs {
    #[serde(default)]
    limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct CartOpenArgs {
    open: bool,
}

#[derive(Debug, Deserialize)]
struct NavigateArgs {
    screen: Screen,
}

#[derive(Debug, Deserialize)]
struct CategoryArgs {
    category: String,
}

#[derive(Debug, Deserialize)]
struct SearchArgs {
    text: String,
}

/// Decodes `args` for `command`. Missing args count as `{}`.
fn parse_args<T: DeserializeOwned>(command: &str, args: &Value) -> Result<T, ApiError> {
    let args = match args {
        Value::Null => Value::Object(serde_json::Map::new()),
        other => other.clone(),
    };

    serde_json::from_value(args).map_err(|e| {
        ApiError::invalid_request(format!("Invalid arguments for {}: {}", command, e))
    })
}

fn to_data<T: Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| {
        error!(error = %e, "Failed to encode command result");
        ApiError::internal("Failed to encode command result")
    })
}

// =============================================================================
// Dispatch
// =============================================================================

/// Routes a request to its command and encodes the result.
pub fn dispatch(
    session: &SessionState,
    config: &ConfigState,
    request: &Request,
) -> Result<Value, ApiError> {
    let name = request.command.as_str();
    let args = &request.args;

    match name {
        // Catalog
        "get_catalog" => {
            let a: CatalogArgs = parse_args(name, args)?;
            to_data(commands::catalog::get_catalog(session, a.category, a.search)?)
        }
        "list_categories" => to_data(commands::catalog::list_categories(session)),
        "get_product" => {
            let a: ProductArgs = parse_args(name, args)?;
            to_data(commands::catalog::get_product(session, a.product_id)?)
        }
        "hot_deals" => {
            let a: HotDealsArgs = parse_args(name, args)?;
            to_data(commands::catalog::hot_deals(session, config, a.limit))
        }

        // Cart
        "get_cart" => to_data(commands::cart::get_cart(session, config)),
        "add_to_cart" => {
            let a: ProductArgs = parse_args(name, args)?;
            to_data(commands::cart::add_to_cart(session, config, a.product_id)?)
        }
        "update_quantity" => {
            let a: UpdateQuantityArgs = parse_args(name, args)?;
            to_data(commands::cart::update_quantity(session, config, a.product_id, a.delta))
        }
        "remove_from_cart" => {
            let a: ProductArgs = parse_args(name, args)?;
            to_data(commands::cart::remove_from_cart(session, config, a.product_id))
        }
        "set_cart_open" => {
            let a: CartOpenArgs = parse_args(name, args)?;
            to_data(commands::cart::set_cart_open(session, config, a.open))
        }
        "toggle_cart" => to_data(commands::cart::toggle_cart(session, config)),

        // Favorites
        "toggle_favorite" => {
            let a: ProductArgs = parse_args(name, args)?;
            to_data(commands::favorites::toggle_favorite(session, a.product_id)?)
        }
        "get_favorites" => to_data(commands::favorites::get_favorites(session)),

        // Navigation
        "get_view" => to_data(commands::view::get_view(session)),
        "navigate" => {
            let a: NavigateArgs = parse_args(name, args)?;
            to_data(commands::view::navigate(session, a.screen))
        }
        "browse_category" => {
            let a: CategoryArgs = parse_args(name, args)?;
            to_data(commands::view::browse_category(session, a.category)?)
        }
        "select_category" => {
            let a: CategoryArgs = parse_args(name, args)?;
            to_data(commands::view::select_category(session, a.category)?)
        }
        "set_search" => {
            let a: SearchArgs = parse_args(name, args)?;
            to_data(commands::view::set_search(session, a.text))
        }
        "open_product" => {
            let a: ProductArgs = parse_args(name, args)?;
            to_data(commands::view::open_product(session, config, a.product_id)?)
        }
        "close_product" => to_data(commands::view::close_product(session)),

        // Session and config
        "get_snapshot" => to_data(commands::session::get_snapshot(session, config)),
        "get_config" => to_data(commands::config::get_config(config)),

        other => Err(ApiError::unknown_command(other)),
    }
}

/// Handles one input line. Returns `None` for blank lines.
///
/// Never fails: every problem becomes an error response.
pub fn handle_line(session: &SessionState, config: &ConfigState, line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let response = match serde_json::from_str::<Request>(line) {
        Ok(request) => {
            debug!(command = %request.command, "Dispatching request");
            match dispatch(session, config, &request) {
                Ok(data) => Response::success(request.id, data),
                Err(err) => {
                    warn!(command = %request.command, code = ?err.code, "{}", err.message);
                    Response::failure(request.id, err)
                }
            }
        }
        Err(e) => {
            warn!(error = %e, "Malformed request line");
            Response::failure(None, ApiError::invalid_request(format!("Malformed request: {}", e)))
        }
    };

    Some(encode(&response))
}

/// Handles one raw input line, as read off the wire.
///
/// Bytes that are not UTF-8 get INVALID_REQUEST like any other bad line.
pub fn handle_bytes(session: &SessionState, config: &ConfigState, line: &[u8]) -> Option<String> {
    match std::str::from_utf8(line) {
        Ok(text) => handle_line(session, config, text),
        Err(e) => {
            warn!(error = %e, "Request line is not valid UTF-8");
            let err = ApiError::invalid_request(format!("Request is not valid UTF-8: {}", e));
            Some(encode(&Response::failure(None, err)))
        }
    }
}

fn encode(response: &Response) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        error!(error = %e, "Failed to encode response");
        SERIALIZATION_FAILURE.to_string()
    })
}

/// Reads requests from `reader` and writes responses to `writer` until
/// end of input.
pub async fn serve<R, W>(
    mut reader: R,
    mut writer: W,
    session: &SessionState,
    config: &ConfigState,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!(session_id = %session.session_id(), "Bridge ready");

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        if let Some(response) = handle_bytes(session, config, &buf) {
            writer.write_all(response.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
    }

    info!("Input closed, bridge stopping");
    Ok(())
}
