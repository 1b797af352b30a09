use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::types::{Artist, ArtistTableRow, ConcertTableRow, Relation};

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

pub fn artist_rows(artists: &[Artist]) -> Vec<ArtistTableRow> {
    artists
        .iter()
        .map(|a| ArtistTableRow {
            id: a.id,
            name: a.name.clone(),
            created: a.creation_date,
            first_album: a.first_album.clone(),
            members: a
                .members
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect()
}

pub fn concert_rows(relation: &Relation) -> Vec<ConcertTableRow> {
    relation
        .dates_locations
        .iter()
        .map(|(location, dates)| ConcertTableRow {
            location: format_location(location),
            dates: dates.join(", "),
        })
        .collect()
}

/// Turns a provider location tag like `north_carolina-usa` into `North Carolina, USA`.
pub fn format_location(tag: &str) -> String {
    let (place, country) = match tag.rsplit_once('-') {
        Some((place, country)) => (place, Some(country)),
        None => (tag, None),
    };

    let place = place
        .split('_')
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    match country {
        Some(c) if c.len() <= 3 => format!("{}, {}", place, c.to_uppercase()),
        Some(c) => format!(
            "{}, {}",
            place,
            c.split('_').map(capitalize).collect::<Vec<_>>().join(" ")
        ),
        None => place,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
