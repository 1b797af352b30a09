use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub creation_date: i32,
    pub first_album: String,
    pub members: Vec<String>,
    pub locations: String,
    pub concert_dates: String,
    pub relations: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: u32,
    pub locations: Vec<String>,
    pub dates: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcertDate {
    pub id: u32,
    pub dates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    pub id: u32,
    pub dates_locations: BTreeMap<String, Vec<String>>,
}

/// Wire envelope used by the locations, dates and relations collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexResponse<T> {
    pub index: Vec<T>,
}

/// An artist together with its location, date and relation records.
///
/// Built on demand by the aggregator; all four parts carry the same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinedRecord {
    pub artist: Artist,
    pub location: Location,
    pub dates: ConcertDate,
    pub relation: Relation,
}

impl JoinedRecord {
    pub fn id(&self) -> u32 {
        self.artist.id
    }
}

/// Records that are addressed by the provider's numeric id.
pub trait Identified {
    fn id(&self) -> u32;
}

impl Identified for Artist {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Identified for Location {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Identified for ConcertDate {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Identified for Relation {
    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub id: u32,
    pub name: String,
    pub created: i32,
    pub first_album: String,
    pub members: String,
}

#[derive(Tabled)]
pub struct ConcertTableRow {
    pub location: String,
    pub dates: String,
}
