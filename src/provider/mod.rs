//! # Provider Module
//!
//! Network access to the remote catalogue provider. The provider exposes four
//! collections (artists, locations, dates, relations); each is fetched with a
//! single request and decoded into its typed records.
//!
//! ```text
//! Aggregator / Cache
//!        ↓
//! Provider (locators, deadline)
//!     ├── Fetcher (bytes | TransportError)
//!     └── Decoder (records | DecodeError)
//!        ↓
//! Remote API
//! ```
//!
//! [`Provider`] is cheap to clone and is shared by every task the aggregator
//! and the cache spawn.

mod decode;
mod fetch;

use std::{fmt, sync::Arc, time::Duration};

use serde::de::DeserializeOwned;
use tokio::time::timeout;

pub use decode::{Shape, decode};
pub use fetch::{Fetcher, HttpFetcher};

use crate::{
    error::{CatalogError, NotFoundError, TransportError},
    types::{Artist, ConcertDate, Identified, Location, Relation},
};

pub const DEFAULT_API_URL: &str = "https://groupietrackers.herokuapp.com/api";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Artists,
    Locations,
    Dates,
    Relations,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Artists,
        Resource::Locations,
        Resource::Dates,
        Resource::Relations,
    ];

    /// Path segment under the provider's base url.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Artists => "artists",
            Resource::Locations => "locations",
            Resource::Dates => "dates",
            Resource::Relations => "relation",
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            Resource::Artists => Shape::BareArray,
            _ => Shape::Indexed,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Artists => "artist",
            Resource::Locations => "location",
            Resource::Dates => "date",
            Resource::Relations => "relation",
        };
        write!(f, "{}", name)
    }
}

/// Where each collection lives and how long a single read may take.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub artists_url: String,
    pub locations_url: String,
    pub dates_url: String,
    pub relations_url: String,
    pub request_timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::from_base_url(DEFAULT_API_URL)
    }
}

impl ProviderConfig {
    /// Derives the four collection locators from a common base url.
    pub fn from_base_url(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let url = |resource: Resource| format!("{}/{}", base, resource.path());
        Self {
            artists_url: url(Resource::Artists),
            locations_url: url(Resource::Locations),
            dates_url: url(Resource::Dates),
            relations_url: url(Resource::Relations),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_locator(mut self, resource: Resource, locator: impl Into<String>) -> Self {
        let locator = locator.into();
        match resource {
            Resource::Artists => self.artists_url = locator,
            Resource::Locations => self.locations_url = locator,
            Resource::Dates => self.dates_url = locator,
            Resource::Relations => self.relations_url = locator,
        }
        self
    }

    pub fn locator(&self, resource: Resource) -> &str {
        match resource {
            Resource::Artists => &self.artists_url,
            Resource::Locations => &self.locations_url,
            Resource::Dates => &self.dates_url,
            Resource::Relations => &self.relations_url,
        }
    }
}

/// Fetch-and-decode access to the four collections.
#[derive(Clone)]
pub struct Provider {
    fetcher: Arc<dyn Fetcher>,
    config: Arc<ProviderConfig>,
}

impl Provider {
    pub fn new(fetcher: Arc<dyn Fetcher>, config: ProviderConfig) -> Self {
        Self {
            fetcher,
            config: Arc::new(config),
        }
    }

    /// Provider talking HTTP to the configured locators.
    pub fn http(config: ProviderConfig) -> Result<Self, TransportError> {
        let fetcher = HttpFetcher::new(config.request_timeout)?;
        Ok(Self::new(Arc::new(fetcher), config))
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub async fn artists(&self) -> Result<Vec<Artist>, CatalogError> {
        self.collection(Resource::Artists).await
    }

    pub async fn locations(&self) -> Result<Vec<Location>, CatalogError> {
        self.collection(Resource::Locations).await
    }

    pub async fn dates(&self) -> Result<Vec<ConcertDate>, CatalogError> {
        self.collection(Resource::Dates).await
    }

    pub async fn relations(&self) -> Result<Vec<Relation>, CatalogError> {
        self.collection(Resource::Relations).await
    }

    /// Fetches a collection and scans it for `id`.
    pub async fn find<T>(&self, resource: Resource, id: u32) -> Result<T, CatalogError>
    where
        T: DeserializeOwned + Identified,
    {
        let records: Vec<T> = self.collection(resource).await?;
        records
            .into_iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| NotFoundError { resource, id }.into())
    }

    async fn collection<T: DeserializeOwned>(
        &self,
        resource: Resource,
    ) -> Result<Vec<T>, CatalogError> {
        let bytes = self.fetch(resource).await?;
        Ok(decode(&bytes, resource.shape(), resource)?)
    }

    // The deadline is enforced here as well so any Fetcher is bounded.
    async fn fetch(&self, resource: Resource) -> Result<Vec<u8>, TransportError> {
        let locator = self.config.locator(resource);
        match timeout(self.config.request_timeout, self.fetcher.fetch(locator)).await {
            Ok(result) => result,
            Err(_) => Err(TransportError::timeout(
                locator,
                format!("no response within {:?}", self.config.request_timeout),
            )),
        }
    }
}
