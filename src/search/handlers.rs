use super::engine::{apply_exam_shortcut, build_query, execute, search};
use super::types::{
    FilterCriteria, HealthResponse, LivenessResponse, SearchParams, SearchResponse, error_response,
};
use crate::store::client::StoreState;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_root() -> (StatusCode, Json<LivenessResponse>) {
    (
        StatusCode::OK,
        Json(LivenessResponse {
            message: "Hello World".to_string(),
        }),
    )
}

/// Reports the store client's construction state. Does not probe the remote
/// store; a constructed client counts as connected.
pub async fn handle_health(
    Extension(store): Extension<Arc<StoreState>>,
) -> (StatusCode, Json<HealthResponse>) {
    let (database, detail) = match store.as_ref() {
        StoreState::Connected(_) => ("connected", None),
        StoreState::Disconnected => ("disconnected", None),
        StoreState::Failed(reason) => ("error", Some(reason.clone())),
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            database: database.to_string(),
            detail,
        }),
    )
}

pub async fn handle_search_tests(
    Query(params): Query<SearchParams>,
    Extension(store): Extension<Arc<StoreState>>,
) -> Response {
    tracing::debug!(
        "Received search parameters: clep_exam={:?}, min_score={:?}, city={:?}, state={:?}",
        params.clep_exam,
        params.min_score,
        params.city,
        params.state
    );

    let client = match store.client() {
        Ok(client) => client,
        Err(err) => return error_response(err.status_code(), err.to_string()),
    };

    let mut query = build_query(&params.criteria());
    if let Some(exam) = &params.clep_exam {
        query = apply_exam_shortcut(query, exam, params.min_score);
    }

    match execute(client, &query).await {
        Ok((data, count)) => (StatusCode::OK, Json(SearchResponse { data, count })).into_response(),
        Err(err) => {
            tracing::error!("Search failed: {}", err);
            error_response(err.status_code(), err.to_string())
        }
    }
}

pub async fn handle_filter_tests(
    Extension(store): Extension<Arc<StoreState>>,
    Json(criteria): Json<FilterCriteria>,
) -> Response {
    let client = match store.client() {
        Ok(client) => client,
        Err(err) => return error_response(err.status_code(), err.to_string()),
    };

    match search(client, &criteria).await {
        Ok((data, count)) => (StatusCode::OK, Json(SearchResponse { data, count })).into_response(),
        Err(err) => {
            tracing::error!("Filter failed: {}", err);
            error_response(err.status_code(), err.to_string())
        }
    }
}
