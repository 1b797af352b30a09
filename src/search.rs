//! Substring search and suggestions over a cached snapshot.
//!
//! Both functions are read-only, case-insensitive and keep the collection's
//! original order. Neither has an error path: no match is an empty result.

use std::{collections::HashMap, fmt};

use crate::{
    management::Snapshot,
    types::{Artist, Location},
};

/// The artist field a suggestion was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Band,
    Member,
    FirstAlbum,
    CreationDate,
    Location,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Band => "artist/band",
            Category::Member => "member",
            Category::FirstAlbum => "first album date",
            Category::CreationDate => "creation date",
            Category::Location => "location",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub value: String,
    pub category: Category,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.value, self.category)
    }
}

/// Artists with at least one field containing `query`.
///
/// Matches name, each member, first album date, creation year and the
/// artist's location tags joined with `", "`. An empty query returns every
/// artist.
pub fn filter(snapshot: &Snapshot, query: &str) -> Vec<Artist> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return snapshot.artists().to_vec();
    }

    let locations = locations_by_id(snapshot);
    snapshot
        .artists()
        .iter()
        .filter(|artist| {
            let joined = locations
                .get(&artist.id)
                .map(|l| l.locations.join(", "))
                .unwrap_or_default();
            contains(&artist.name, &needle)
                || artist.members.iter().any(|m| contains(m, &needle))
                || contains(&artist.first_album, &needle)
                || contains(&artist.creation_date.to_string(), &needle)
                || contains(&joined, &needle)
        })
        .cloned()
        .collect()
}

/// Labeled suggestions for every field that contains `query`.
///
/// One entry per matching value: an artist may contribute several, and
/// identical values from different artists are all kept. An empty query
/// matches every field, yielding the full labeled list.
pub fn suggestions(snapshot: &Snapshot, query: &str) -> Vec<Suggestion> {
    let needle = query.trim().to_lowercase();
    let locations = locations_by_id(snapshot);
    let mut out = Vec::new();

    for artist in snapshot.artists() {
        let mut push = |value: &str, category: Category| {
            if contains(value, &needle) {
                out.push(Suggestion {
                    value: value.to_string(),
                    category,
                });
            }
        };

        push(&artist.name, Category::Band);
        for member in &artist.members {
            push(member, Category::Member);
        }
        push(&artist.first_album, Category::FirstAlbum);
        push(&artist.creation_date.to_string(), Category::CreationDate);
        if let Some(location) = locations.get(&artist.id) {
            for tag in &location.locations {
                push(tag, Category::Location);
            }
        }
    }

    out
}

/// [`suggestions`] rendered as `"<value> - <category>"`.
pub fn suggest(snapshot: &Snapshot, query: &str) -> Vec<String> {
    suggestions(snapshot, query)
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn locations_by_id(snapshot: &Snapshot) -> HashMap<u32, &Location> {
    snapshot.locations().iter().map(|l| (l.id, l)).collect()
}

fn contains(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}
