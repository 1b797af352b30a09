use axum::{
    Extension,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    api::AppState,
    error::{CatalogError, TransportKind},
    search,
    types::{Artist, ConcertDate, JoinedRecord, Location, Relation},
};

#[derive(Debug, Deserialize)]
pub struct ArtistsQuery {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionsQuery {
    #[serde(default)]
    pub q: String,
}

pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        let status = match &err {
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::Transport(e) if e.kind == TransportKind::Timeout => {
                StatusCode::GATEWAY_TIMEOUT
            }
            _ => StatusCode::BAD_GATEWAY,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

pub async fn artists(
    Query(params): Query<ArtistsQuery>,
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<Artist>>, ApiError> {
    let snapshot = state.cache.read().await?;
    Ok(Json(search::filter(&snapshot, &params.query)))
}

pub async fn locations(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<Location>>, ApiError> {
    let snapshot = state.cache.read().await?;
    Ok(Json(snapshot.locations().to_vec()))
}

pub async fn dates(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<ConcertDate>>, ApiError> {
    let snapshot = state.cache.read().await?;
    Ok(Json(snapshot.dates().to_vec()))
}

pub async fn relations(
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<Relation>>, ApiError> {
    let snapshot = state.cache.read().await?;
    Ok(Json(snapshot.relations().to_vec()))
}

pub async fn artist(
    Path(id): Path<String>,
    Extension(state): Extension<AppState>,
) -> Result<Json<JoinedRecord>, ApiError> {
    let Ok(id) = id.parse::<u32>() else {
        return Err(ApiError {
            status: StatusCode::BAD_REQUEST,
            message: "Invalid artist ID".to_string(),
        });
    };

    Ok(Json(state.aggregator.resolve(id).await?))
}

pub async fn suggestions(
    Query(params): Query<SuggestionsQuery>,
    Extension(state): Extension<AppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    let snapshot = state.cache.read().await?;
    Ok(Json(search::suggest(&snapshot, &params.q)))
}
