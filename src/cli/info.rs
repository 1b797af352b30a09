use crate::{cli::Catalog, error, info, success, warning};

/// Displays statistics about the loaded catalogue snapshot.
///
/// Loads the snapshot (blocking on the first fetch) and reports collection
/// sizes, the refresh generation and when it was captured.
///
/// # Output Example
///
/// ```text
/// [✓] Catalogue loaded (generation 1)
/// [o] Captured at: 2024-03-02 10:15:04 UTC (age 0s)
/// [o] Artists: 52, locations: 52, dates: 52, relations: 52
/// ```
pub async fn info(catalog: &Catalog) {
    let snapshot = match catalog.cache.read().await {
        Ok(snapshot) => snapshot,
        Err(e) => error!("Failed to load catalogue. Err: {}", e),
    };

    success!("Catalogue loaded (generation {})", snapshot.generation());
    info!(
        "Captured at: {} (age {}s)",
        snapshot.captured_at().format("%Y-%m-%d %H:%M:%S UTC"),
        snapshot.age().as_secs()
    );
    info!(
        "Artists: {}, locations: {}, dates: {}, relations: {}",
        snapshot.artists().len(),
        snapshot.locations().len(),
        snapshot.dates().len(),
        snapshot.relations().len()
    );
    info!(
        "Refresh after: {}s",
        catalog.cache.config().freshness.as_secs()
    );
    info!("Provider: {}", catalog.cache.provider().config().artists_url);

    if snapshot.is_empty() {
        warning!("The provider returned an empty catalogue.");
    }
}
