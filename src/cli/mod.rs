//! # CLI Module
//!
//! User-facing commands of the `groupiecli` binary. Each command is a thin
//! layer over the catalogue core: it reads through the cache or resolves an
//! artist through the aggregator, then renders the result as tables or
//! labeled lines.
//!
//! ## Commands
//!
//! - [`list_artists`] - table of artists with optional `--search`
//! - [`suggest`] - labeled suggestions (`"<value> - <category>"`)
//! - [`show_artist`] - joined detail view for one id
//! - [`info`] - snapshot statistics
//! - [`serve`] - JSON server over the same core
//!
//! ```text
//! CLI Layer
//!     ↓
//! Catalog (cache + aggregator)
//!     ↓
//! Provider (fetch + decode)
//! ```
//!
//! ## Usage
//!
//! ```bash
//! groupiecli artists --search queen
//! groupiecli suggest freddie
//! groupiecli artist 1
//! groupiecli serve
//! ```

mod artist;
mod artists;
mod info;
mod serve;

pub use artist::show_artist;
pub use artists::list_artists;
pub use artists::suggest;
pub use info::info;
pub use serve::serve;

use crate::{
    aggregate::Aggregator,
    config,
    error::TransportError,
    management::CatalogCache,
    provider::Provider,
};

/// Core handles built once from the environment configuration.
pub struct Catalog {
    pub cache: CatalogCache,
    pub aggregator: Aggregator,
}

impl Catalog {
    pub fn from_env() -> Result<Self, TransportError> {
        let provider = Provider::http(config::provider_config())?;
        Ok(Self {
            cache: CatalogCache::new(provider.clone(), config::cache_config()),
            aggregator: Aggregator::new(provider),
        })
    }
}
