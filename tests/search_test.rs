mod common;

use groupiecli::{
    management::Snapshot,
    search::{self, Category, Suggestion},
};
use pretty_assertions::assert_eq;

fn ids(artists: &[groupiecli::types::Artist]) -> Vec<u32> {
    artists.iter().map(|a| a.id).collect()
}

#[test]
fn test_filter_empty_query_returns_everything_in_order() {
    let snapshot = common::snapshot();
    assert_eq!(search::filter(&snapshot, ""), common::artists());
    assert_eq!(ids(&search::filter(&snapshot, "   ")), vec![1, 2]);
}

#[test]
fn test_filter_matches_band_name_case_insensitively() {
    let snapshot = common::snapshot();
    assert_eq!(ids(&search::filter(&snapshot, "queen")), vec![1]);
    assert_eq!(ids(&search::filter(&snapshot, "BEAT")), vec![2]);
}

#[test]
fn test_filter_matches_members_dates_and_year() {
    let snapshot = common::snapshot();

    assert_eq!(ids(&search::filter(&snapshot, "mccartney")), vec![2]);
    assert_eq!(ids(&search::filter(&snapshot, "14-12-1973")), vec![1]);
    assert_eq!(ids(&search::filter(&snapshot, "1957")), vec![2]);
    // "19" hits both creation years and album dates
    assert_eq!(ids(&search::filter(&snapshot, "19")), vec![1, 2]);
}

#[test]
fn test_filter_matches_locations_by_artist_id() {
    let snapshot = common::snapshot();

    assert_eq!(ids(&search::filter(&snapshot, "liverpool")), vec![2]);
    assert_eq!(ids(&search::filter(&snapshot, "osaka")), vec![1, 2]);
    // the joined tag string spans tag boundaries
    assert_eq!(
        ids(&search::filter(&snapshot, "north_carolina-usa, osaka")),
        vec![1]
    );
}

#[test]
fn test_filter_without_matches_is_empty() {
    let snapshot = common::snapshot();
    assert!(search::filter(&snapshot, "metallica").is_empty());
}

#[test]
fn test_filter_on_empty_snapshot() {
    let snapshot = Snapshot::new(Vec::new(), Vec::new(), Vec::new(), Vec::new(), 1);
    assert!(search::filter(&snapshot, "").is_empty());
    assert!(search::filter(&snapshot, "queen").is_empty());
}

#[test]
fn test_suggest_member_only() {
    let snapshot = common::snapshot();
    assert_eq!(
        search::suggest(&snapshot, "Freddie"),
        vec!["Freddie Mercury - member".to_string()]
    );
}

#[test]
fn test_suggest_band_name_label() {
    let snapshot = common::snapshot();
    assert_eq!(
        search::suggest(&snapshot, "Queen"),
        vec!["Queen - artist/band".to_string()]
    );
}

#[test]
fn test_suggest_emits_one_entry_per_matching_field() {
    let snapshot = common::snapshot();

    // "john" is in two Queen/Beatles members, nothing else
    assert_eq!(
        search::suggest(&snapshot, "john"),
        vec![
            "John Daecon - member".to_string(),
            "John Lennon - member".to_string(),
        ]
    );

    assert_eq!(
        search::suggestions(&snapshot, "197"),
        vec![
            Suggestion {
                value: "14-12-1973".to_string(),
                category: Category::FirstAlbum,
            },
            Suggestion {
                value: "1970".to_string(),
                category: Category::CreationDate,
            },
        ]
    );
}

#[test]
fn test_suggest_keeps_duplicates_across_artists() {
    let snapshot = common::snapshot();
    assert_eq!(
        search::suggest(&snapshot, "osaka"),
        vec![
            "osaka-japan - location".to_string(),
            "osaka-japan - location".to_string(),
        ]
    );
}

#[test]
fn test_suggest_empty_query_lists_every_field() {
    let snapshot = common::snapshot();
    let all = search::suggest(&snapshot, "");

    // name + 4 members + album + year + 2 locations, for both artists
    assert_eq!(all.len(), 18);
    assert_eq!(
        &all[..3],
        &[
            "Queen - artist/band".to_string(),
            "Freddie Mercury - member".to_string(),
            "Brian May - member".to_string(),
        ]
    );
    assert_eq!(all[9], "Beatles - artist/band");
    assert_eq!(all[17], "osaka-japan - location");
    assert_eq!(search::suggest(&snapshot, "   "), all);
}

#[test]
fn test_suggest_without_matches_or_data_is_empty() {
    let snapshot = common::snapshot();
    assert!(search::suggest(&snapshot, "zzz").is_empty());

    let empty = Snapshot::new(Vec::new(), Vec::new(), Vec::new(), Vec::new(), 1);
    assert!(search::suggest(&empty, "").is_empty());
    assert!(search::suggest(&empty, "queen").is_empty());
}

#[test]
fn test_category_labels() {
    let labels: Vec<String> = [
        Category::Band,
        Category::Member,
        Category::FirstAlbum,
        Category::CreationDate,
        Category::Location,
    ]
    .iter()
    .map(|c| c.to_string())
    .collect();

    assert_eq!(
        labels,
        vec![
            "artist/band",
            "member",
            "first album date",
            "creation date",
            "location"
        ]
    );
}
