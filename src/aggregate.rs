//! Fan-out/fan-in resolution of a single artist.
//!
//! [`Aggregator::resolve`] spawns one lookup per collection onto the tokio
//! runtime and joins them into a [`JoinedRecord`]. The first lookup to fail
//! decides the outcome; the remaining lookups keep running in the background
//! and whatever they send afterwards is dropped with the channel.

use tokio::sync::mpsc;
use tracing::debug;

use crate::{
    error::CatalogError,
    provider::{Provider, Resource},
    types::{Artist, ConcertDate, JoinedRecord, Location, Relation},
};

enum Lookup {
    Artist(Result<Artist, CatalogError>),
    Location(Result<Location, CatalogError>),
    Dates(Result<ConcertDate, CatalogError>),
    Relation(Result<Relation, CatalogError>),
}

#[derive(Clone)]
pub struct Aggregator {
    provider: Provider,
}

impl Aggregator {
    pub fn new(provider: Provider) -> Self {
        Self { provider }
    }

    /// Resolves artist `id` from all four collections concurrently.
    ///
    /// Reads go straight to the provider, never through the cache. Returns the
    /// first error any lookup reports, unchanged in kind. When several lookups
    /// fail at about the same time, whichever reaches the join first wins.
    pub async fn resolve(&self, id: u32) -> Result<JoinedRecord, CatalogError> {
        // one slot per lookup so a late sender never waits on a gone receiver
        let (tx, mut rx) = mpsc::channel::<Lookup>(Resource::ALL.len());

        self.spawn_lookup(&tx, move |p| async move {
            Lookup::Artist(p.find(Resource::Artists, id).await)
        });
        self.spawn_lookup(&tx, move |p| async move {
            Lookup::Location(p.find(Resource::Locations, id).await)
        });
        self.spawn_lookup(&tx, move |p| async move {
            Lookup::Dates(p.find(Resource::Dates, id).await)
        });
        self.spawn_lookup(&tx, move |p| async move {
            Lookup::Relation(p.find(Resource::Relations, id).await)
        });
        drop(tx);

        let mut artist = None;
        let mut location = None;
        let mut dates = None;
        let mut relation = None;

        while let Some(lookup) = rx.recv().await {
            let outcome = match lookup {
                Lookup::Artist(r) => r.map(|v| artist = Some(v)),
                Lookup::Location(r) => r.map(|v| location = Some(v)),
                Lookup::Dates(r) => r.map(|v| dates = Some(v)),
                Lookup::Relation(r) => r.map(|v| relation = Some(v)),
            };

            if let Err(e) = outcome {
                debug!(id, error = %e, "artist resolution failed early");
                return Err(e);
            }

            if artist.is_some() && location.is_some() && dates.is_some() && relation.is_some() {
                break;
            }
        }

        match (artist, location, dates, relation) {
            (Some(artist), Some(location), Some(dates), Some(relation)) => Ok(JoinedRecord {
                artist,
                location,
                dates,
                relation,
            }),
            // every sender is gone without reporting: a lookup task panicked
            _ => Err(CatalogError::Task(format!(
                "lookup for artist {} ended without a result",
                id
            ))),
        }
    }

    fn spawn_lookup<F, Fut>(&self, tx: &mpsc::Sender<Lookup>, lookup: F)
    where
        F: FnOnce(Provider) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = Lookup> + Send + 'static,
    {
        let provider = self.provider.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = lookup(provider).await;
            // receiver is gone once resolve returned early; discard
            let _ = tx.send(result).await;
        });
    }
}
