//! # Storefront Host Library
//!
//! Host side of the storefront: loads configuration and the catalog, owns the
//! session, and answers the renderer over the invoke bridge.
//!
//! ## Module Organization
//! ```text
//! storefront_app/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── bridge.rs       ◄─── JSON-lines request/response loop
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Session wrapper (Arc<Mutex<_>>)
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Products, categories, hot deals
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   ├── favorites.rs◄─── Favorites
//! │   ├── view.rs     ◄─── Navigation and filters
//! │   ├── session.rs  ◄─── Snapshot
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API and startup error types
//! ```

pub mod bridge;
pub mod commands;
pub mod error;
pub mod state;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::StartupError;
use state::{ConfigState, SessionState};
use storefront_core::{mock, Catalog};

/// Command-line options.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliOptions {
    /// `--config <path>`
    pub config_path: Option<PathBuf>,

    /// `--help`
    pub show_help: bool,
}

impl CliOptions {
    /// Parses arguments, skipping the program name.
    ///
    /// Unknown arguments are ignored.
    pub fn parse(args: &[String]) -> Self {
        let mut options = CliOptions::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    if i + 1 < args.len() {
                        options.config_path = Some(PathBuf::from(&args[i + 1]));
                        i += 1;
                    }
                }
                "--help" | "-h" => options.show_help = true,
                _ => {}
            }
            i += 1;
        }

        options
    }
}

/// Runs the storefront host until stdin closes.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info,storefront=debug; override with RUST_LOG            │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → storefront.toml → STOREFRONT_* env                     │
/// │                                                                         │
/// │  3. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • catalog_path set: read and validate the JSON file                 │
/// │     • otherwise: built-in mock catalog                                  │
/// │                                                                         │
/// │  4. Initialize State Objects ─────────────────────────────────────────► │
/// │     • SessionState: fresh session with Mutex for exclusive updates      │
/// │     • ConfigState: read-only                                            │
/// │                                                                         │
/// │  5. Serve the Bridge ─────────────────────────────────────────────────► │
/// │     • stdin requests, stdout responses, until end of input              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), StartupError> {
    let args: Vec<String> = std::env::args().collect();
    let options = CliOptions::parse(&args);

    if options.show_help {
        print_help();
        return Ok(());
    }

    init_tracing();

    info!("Starting storefront");

    let config = ConfigState::load(options.config_path)?;
    info!(store_name = %config.store_name, "Configuration loaded");

    let catalog = load_catalog(&config)?;
    info!(
        products = catalog.len(),
        categories = catalog.categories().len(),
        "Catalog loaded"
    );

    let session = SessionState::new(Arc::new(catalog));
    info!(session_id = %session.session_id(), "Session started");

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    bridge::serve(stdin, stdout, &session, &config).await?;

    Ok(())
}

/// Loads the configured catalog file, or the built-in mock catalog.
pub fn load_catalog(config: &ConfigState) -> Result<Catalog, StartupError> {
    match &config.catalog_path {
        Some(path) => {
            info!(?path, "Loading catalog from file");
            read_catalog_file(path)
        }
        None => {
            info!("Using built-in mock catalog");
            Ok(mock::mock_catalog()?)
        }
    }
}

fn read_catalog_file(path: &Path) -> Result<Catalog, StartupError> {
    let json = std::fs::read_to_string(path).map_err(|source| StartupError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Catalog::from_json(&json)?)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_app=trace` - Show trace for the host only
/// - Default: INFO, DEBUG for storefront crates
///
/// Output goes to stderr; stdout belongs to the bridge.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug,storefront_app=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_help() {
    println!("Storefront state host");
    println!();
    println!("Usage: storefront [OPTIONS]");
    println!();
    println!("Reads JSON requests from stdin, one per line, and writes one JSON");
    println!("response per line to stdout.");
    println!();
    println!("Options:");
    println!("  -c, --config <PATH>  Config file (default: platform config dir/storefront.toml)");
    println!("  -h, --help           Show this help message");
}
