//! # API Module
//!
//! JSON endpoints over the catalogue core. Every handler reads through the
//! shared [`CatalogCache`] except the artist detail endpoint, which resolves
//! the joined record through the [`Aggregator`].
//!
//! ## Endpoints
//!
//! - [`health`] - application status plus snapshot state
//! - [`artists`] - artists, optionally filtered with `?query=`
//! - [`locations`], [`dates`], [`relations`] - the raw cached collections
//! - [`artist`] - one joined record by numeric id
//! - [`suggestions`] - labeled search suggestions for `?q=`
//!
//! ## Status codes
//!
//! | Failure | Status |
//! |---|---|
//! | non-numeric id | 400 |
//! | id missing from a collection | 404 |
//! | provider timeout | 504 |
//! | any other provider or payload failure | 502 |

mod catalog;
mod health;

pub use catalog::{artist, artists, dates, locations, relations, suggestions};
pub use health::health;

use crate::{aggregate::Aggregator, management::CatalogCache};

/// Shared handles injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub cache: CatalogCache,
    pub aggregator: Aggregator,
}
