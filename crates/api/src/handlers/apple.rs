//! Handlers for the `/apples` resource.

use axum::extract::State;
use axum::Json;
use orchard_db::models::apple::{serialize_apples, AppleSummary};

use crate::error::AppResult;
use crate::state::AppState;

/// ANY /apples/
///
/// List every stored apple as a bare JSON array of
/// `{ name, color, photo_url }` objects. Store failures propagate as a
/// server error; nothing is retried.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<AppleSummary>>> {
    let apples = state.apples.list_all().await?;
    let body = serialize_apples(&apples);
    tracing::debug!(count = body.len(), "Listed apples");
    Ok(Json(body))
}
