mod cache;
mod snapshot;

pub use cache::CacheConfig;
pub use cache::CacheState;
pub use cache::CatalogCache;
pub use cache::DEFAULT_FRESHNESS;
pub use snapshot::Snapshot;
