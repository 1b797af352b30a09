use tabled::Table;

use crate::{cli::Catalog, error, info, search, utils, warning};

/// Lists artists from the catalogue, optionally filtered by a search term.
///
/// The term is matched case-insensitively against band name, members, first
/// album date, creation year and concert locations. Results keep the
/// provider's order.
pub async fn list_artists(catalog: &Catalog, search: Option<String>) {
    let pb = utils::spinner("Loading catalogue...");
    let snapshot = match catalog.cache.read().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to load artists. Err: {}", e);
        }
    };
    pb.finish_and_clear();

    let query = search.unwrap_or_default();
    let artists = search::filter(&snapshot, &query);

    if artists.is_empty() {
        warning!("No artists match \"{}\".", query);
        return;
    }

    let table = Table::new(utils::artist_rows(&artists));
    println!("{}", table);
    info!("{} of {} artists", artists.len(), snapshot.artists().len());
}

/// Prints labeled search suggestions, one per matching field value.
pub async fn suggest(catalog: &Catalog, query: String) {
    let snapshot = match catalog.cache.read().await {
        Ok(snapshot) => snapshot,
        Err(e) => error!("Failed to load catalogue. Err: {}", e),
    };

    let suggestions = search::suggest(&snapshot, &query);
    if suggestions.is_empty() {
        warning!("No suggestions for \"{}\".", query);
        return;
    }

    for suggestion in suggestions {
        println!("{}", suggestion);
    }
}
