use tabled::Table;

use crate::{cli::Catalog, error, info, utils, warning};

/// Shows one artist with members and concerts, resolved live from all four
/// collections.
pub async fn show_artist(catalog: &Catalog, id: u32) {
    let pb = utils::spinner(&format!("Resolving artist {}...", id));
    let record = match catalog.aggregator.resolve(id).await {
        Ok(record) => record,
        Err(e) if e.is_not_found() => {
            pb.finish_and_clear();
            warning!("No artist with id {}.", id);
            return;
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to resolve artist {}. Err: {}", id, e);
        }
    };
    pb.finish_and_clear();

    let artist = &record.artist;
    info!("{} (id {})", artist.name, artist.id);
    info!("Created: {}", artist.creation_date);
    info!("First album: {}", artist.first_album);
    info!("Members: {}", artist.members.join(", "));
    info!(
        "Concert dates: {}",
        record
            .dates
            .dates
            .iter()
            .map(|d| d.trim_start_matches('*'))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let rows = utils::concert_rows(&record.relation);
    if rows.is_empty() {
        warning!("No concerts on record.");
        return;
    }
    println!("{}", Table::new(rows));
}
