use super::service::{update_many, update_one};
use super::types::{BulkUpdateEntry, BulkUpdateResponse, ScoreUpdate, UpdateResponse};
use crate::search::types::error_response;
use crate::store::client::StoreState;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_update_score(
    Path(test_id): Path<i64>,
    Extension(store): Extension<Arc<StoreState>>,
    Json(update): Json<ScoreUpdate>,
) -> Response {
    let client = match store.client() {
        Ok(client) => client,
        Err(err) => return error_response(err.status_code(), err.to_string()),
    };

    match update_one(client, test_id, &update).await {
        Ok(record) => (
            StatusCode::OK,
            Json(UpdateResponse {
                message: "Test scores updated successfully".to_string(),
                data: record,
            }),
        )
            .into_response(),
        Err(err) => {
            if err.status_code().is_server_error() {
                tracing::error!("Update for record {} failed: {}", test_id, err);
            }
            error_response(err.status_code(), err.to_string())
        }
    }
}

pub async fn handle_bulk_update(
    Extension(store): Extension<Arc<StoreState>>,
    Json(updates): Json<Vec<BulkUpdateEntry>>,
) -> Response {
    let client = match store.client() {
        Ok(client) => client,
        Err(err) => return error_response(err.status_code(), err.to_string()),
    };

    match update_many(client, &updates).await {
        Ok(updated) => (
            StatusCode::OK,
            Json(BulkUpdateResponse {
                message: format!("Updated {} records", updated.len()),
                data: updated,
            }),
        )
            .into_response(),
        Err(err) => {
            if err.status_code().is_server_error() {
                tracing::error!("Bulk update failed: {}", err);
            }
            error_response(err.status_code(), err.to_string())
        }
    }
}
