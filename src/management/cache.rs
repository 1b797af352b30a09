use std::{
    sync::{
        Arc, RwLock,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
    time::{Duration, Instant},
};

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::{
    error::CatalogError,
    management::Snapshot,
    provider::Provider,
    types::{Artist, ConcertDate, Location, Relation},
};

pub const DEFAULT_FRESHNESS: Duration = Duration::from_secs(10 * 60);

#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Age after which a held snapshot is refreshed in the background.
    pub freshness: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            freshness: DEFAULT_FRESHNESS,
        }
    }
}

impl CacheConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_freshness(mut self, freshness: Duration) -> Self {
        self.freshness = freshness;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// No refresh has succeeded yet.
    Uninitialized,
    /// The held snapshot is younger than the freshness threshold.
    Populated,
    /// The held snapshot is still served but due for a background refresh.
    Stale,
}

/// Read-through, stale-while-revalidate cache of the four collections.
///
/// The first [`read`](CatalogCache::read) blocks on a full refresh; every
/// later read returns the held snapshot immediately and, once it is older
/// than [`CacheConfig::freshness`], starts a single background refresh.
/// Failed refreshes never replace or clear the held snapshot; the failure is
/// kept in [`last_refresh_error`](CatalogCache::last_refresh_error).
///
/// Cloning the cache is cheap; clones share the same state.
#[derive(Clone)]
pub struct CatalogCache {
    inner: Arc<CacheInner>,
}

struct CacheInner {
    provider: Provider,
    config: CacheConfig,
    // held only for the pointer clone or swap
    current: RwLock<Option<Arc<Snapshot>>>,
    last_error: RwLock<Option<CatalogError>>,
    init_gate: Mutex<()>,
    // finished initialization attempts, bumped under init_gate
    init_finished: AtomicU64,
    refreshing: AtomicBool,
    generation: AtomicU64,
}

/// Clears the in-flight flag however the refresh ends.
struct RefreshGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for RefreshGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl CatalogCache {
    pub fn new(provider: Provider, config: CacheConfig) -> Self {
        Self {
            inner: Arc::new(CacheInner {
                provider,
                config,
                current: RwLock::new(None),
                last_error: RwLock::new(None),
                init_gate: Mutex::new(()),
                init_finished: AtomicU64::new(0),
                refreshing: AtomicBool::new(false),
                generation: AtomicU64::new(0),
            }),
        }
    }

    pub fn with_defaults(provider: Provider) -> Self {
        Self::new(provider, CacheConfig::default())
    }

    pub fn config(&self) -> &CacheConfig {
        &self.inner.config
    }

    pub fn provider(&self) -> &Provider {
        &self.inner.provider
    }

    /// Returns the current snapshot.
    ///
    /// Only the very first successful read touches the network on the
    /// caller's behalf. Concurrent first reads wait for one shared
    /// initialization. An error is returned only while no snapshot has ever
    /// been populated; stale data is always preferred over an error.
    pub async fn read(&self) -> Result<Arc<Snapshot>, CatalogError> {
        if let Some(snapshot) = self.inner.current() {
            if snapshot.age() >= self.inner.config.freshness {
                self.spawn_background_refresh();
            }
            return Ok(snapshot);
        }

        self.initialize().await
    }

    /// The held snapshot, without triggering any refresh.
    pub fn snapshot(&self) -> Option<Arc<Snapshot>> {
        self.inner.current()
    }

    pub fn state(&self) -> CacheState {
        match self.inner.current() {
            None => CacheState::Uninitialized,
            Some(s) if s.age() >= self.inner.config.freshness => CacheState::Stale,
            Some(_) => CacheState::Populated,
        }
    }

    pub fn is_refreshing(&self) -> bool {
        self.inner.refreshing.load(Ordering::Acquire)
    }

    /// Error of the most recent refresh, cleared by the next success.
    pub fn last_refresh_error(&self) -> Option<CatalogError> {
        self.inner
            .last_error
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Generation of the held snapshot, 0 while uninitialized.
    pub fn generation(&self) -> u64 {
        self.inner.current().map_or(0, |s| s.generation())
    }

    async fn initialize(&self) -> Result<Arc<Snapshot>, CatalogError> {
        let ticket = self.inner.init_finished.load(Ordering::Acquire);
        let _gate = self.inner.init_gate.lock().await;

        if let Some(snapshot) = self.inner.current() {
            return Ok(snapshot);
        }

        // An attempt finished without a snapshot while we were queued: share its outcome.
        if self.inner.init_finished.load(Ordering::Acquire) != ticket {
            if let Some(e) = self.last_refresh_error() {
                return Err(e);
            }
        }

        self.inner.refreshing.store(true, Ordering::Release);
        let _guard = RefreshGuard {
            flag: &self.inner.refreshing,
        };

        let result = self.inner.refresh().await;
        self.inner.init_finished.fetch_add(1, Ordering::AcqRel);
        result
    }

    fn spawn_background_refresh(&self) {
        if self
            .inner
            .refreshing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return;
        }

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let _guard = RefreshGuard {
                flag: &inner.refreshing,
            };
            if let Err(e) = inner.refresh().await {
                warn!(error = %e, "background refresh failed; keeping previous snapshot");
            }
        });
    }
}

impl CacheInner {
    fn current(&self) -> Option<Arc<Snapshot>> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn publish(&self, snapshot: Arc<Snapshot>) {
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = Some(snapshot);
    }

    fn record_error(&self, error: Option<CatalogError>) {
        *self.last_error.write().unwrap_or_else(|e| e.into_inner()) = error;
    }

    /// Fetches all four collections and publishes them as one snapshot.
    ///
    /// Nothing is published unless every collection arrived and decoded.
    async fn refresh(&self) -> Result<Arc<Snapshot>, CatalogError> {
        let started = Instant::now();
        debug!("refreshing catalogue snapshot");

        match self.fetch_all().await {
            Ok((artists, locations, dates, relations)) => {
                let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
                let snapshot = Arc::new(Snapshot::new(
                    artists, locations, dates, relations, generation,
                ));
                self.publish(Arc::clone(&snapshot));
                self.record_error(None);
                debug!(
                    generation,
                    artists = snapshot.artists().len(),
                    locations = snapshot.locations().len(),
                    dates = snapshot.dates().len(),
                    relations = snapshot.relations().len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "catalogue snapshot published"
                );
                Ok(snapshot)
            }
            Err(e) => {
                self.record_error(Some(e.clone()));
                Err(e)
            }
        }
    }

    async fn fetch_all(
        &self,
    ) -> Result<(Vec<Artist>, Vec<Location>, Vec<ConcertDate>, Vec<Relation>), CatalogError> {
        let artists = tokio::spawn({
            let p = self.provider.clone();
            async move { p.artists().await }
        });
        let locations = tokio::spawn({
            let p = self.provider.clone();
            async move { p.locations().await }
        });
        let dates = tokio::spawn({
            let p = self.provider.clone();
            async move { p.dates().await }
        });
        let relations = tokio::spawn({
            let p = self.provider.clone();
            async move { p.relations().await }
        });

        let (artists, locations, dates, relations) =
            tokio::join!(artists, locations, dates, relations);

        Ok((artists??, locations??, dates??, relations??))
    }
}
