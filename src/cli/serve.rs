use crate::{api::AppState, cli::Catalog, config, error, info, server};

pub async fn serve(catalog: &Catalog) {
    let addr = config::server_addr();
    let state = AppState {
        cache: catalog.cache.clone(),
        aggregator: catalog.aggregator.clone(),
    };

    info!("Serving catalogue on http://{}", addr);
    if let Err(e) = server::start_api_server(&addr, state).await {
        error!("Server stopped. Err: {}", e);
    }
}
