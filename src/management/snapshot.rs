use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::types::{Artist, ConcertDate, Location, Relation};

/// The four collections captured by one successful refresh.
///
/// A snapshot is never mutated after it is published; the cache replaces the
/// whole `Arc<Snapshot>` instead. Every collection in it therefore belongs to
/// the same refresh cycle, identified by [`Snapshot::generation`].
#[derive(Debug, Clone)]
pub struct Snapshot {
    artists: Vec<Artist>,
    locations: Vec<Location>,
    dates: Vec<ConcertDate>,
    relations: Vec<Relation>,
    generation: u64,
    captured: Instant,
    captured_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(
        artists: Vec<Artist>,
        locations: Vec<Location>,
        dates: Vec<ConcertDate>,
        relations: Vec<Relation>,
        generation: u64,
    ) -> Self {
        Self {
            artists,
            locations,
            dates,
            relations,
            generation,
            captured: Instant::now(),
            captured_at: Utc::now(),
        }
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn dates(&self) -> &[ConcertDate] {
        &self.dates
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Refresh cycle that produced this snapshot, starting at 1.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn age(&self) -> Duration {
        self.captured.elapsed()
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
            && self.locations.is_empty()
            && self.dates.is_empty()
            && self.relations.is_empty()
    }
}
