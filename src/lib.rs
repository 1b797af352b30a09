//! Groupie Trackers Catalogue Library
//!
//! This library retrieves the four related collections of the Groupie Trackers
//! API (artists, locations, concert dates, relations), joins them by artist id
//! and serves searchable views from an in-memory snapshot that is refreshed in
//! the background.
//!
//! # Modules
//!
//! - `aggregate` - concurrent fan-out/fan-in resolution of one artist
//! - `api` - JSON endpoints over the core
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Transport, decode and lookup error types
//! - `management` - Snapshot cache with stale-while-revalidate refresh
//! - `provider` - Fetching and decoding the remote collections
//! - `search` - Substring filtering and labeled suggestions
//! - `server` - Local HTTP server for the JSON endpoints
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use groupiecli::{management::CatalogCache, provider::{Provider, ProviderConfig}, search};
//!
//! #[tokio::main]
//! async fn main() -> groupiecli::Res<()> {
//!     let provider = Provider::http(ProviderConfig::default())?;
//!     let cache = CatalogCache::with_defaults(provider);
//!     let snapshot = cache.read().await?;
//!     for artist in search::filter(&snapshot, "queen") {
//!         println!("{}", artist.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod provider;
pub mod search;
pub mod server;
pub mod types;
pub mod utils;

/// Boxed-error result used by the binary glue (server start-up, CLI).
///
/// Library operations return the typed errors of the `error` module; this alias
/// is for call sites that mix those with I/O and address parsing errors.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints a `[o]` status line to stdout.
///
/// ```
/// info!("{} of {} artists", shown, total);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a green `[✓]` line once an operation completed.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `[!]` line and exits the process with status 1.
///
/// Only for failures the CLI cannot continue from, such as a catalogue that
/// could not be loaded at all. Evaluates to `!`, so it can end a match arm:
///
/// ```
/// let snapshot = match catalog.cache.read().await {
///     Ok(snapshot) => snapshot,
///     Err(e) => error!("Failed to load catalogue. Err: {}", e),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a yellow `[!]` line for a recoverable condition, e.g. an empty
/// search result.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
