use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr};

use crate::{Res, api};

pub fn router(state: api::AppState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/api/artists", get(api::artists))
        .route("/api/artists/{id}", get(api::artist))
        .route("/api/locations", get(api::locations))
        .route("/api/dates", get(api::dates))
        .route("/api/relations", get(api::relations))
        .route("/api/search-suggestions", get(api::suggestions))
        .layer(Extension(state))
}

pub async fn start_api_server(addr: &str, state: api::AppState) -> Res<()> {
    let addr = SocketAddr::from_str(addr)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(state)).await?;
    Ok(())
}
