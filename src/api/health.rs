use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::api::AppState;

pub async fn health(Extension(state): Extension<AppState>) -> Json<Value> {
    let cache = &state.cache;
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "snapshot": {
            "state": format!("{:?}", cache.state()),
            "generation": cache.generation(),
            "refreshing": cache.is_refreshing(),
            "lastRefreshError": cache.last_refresh_error().map(|e| e.to_string()),
        }
    }))
}
