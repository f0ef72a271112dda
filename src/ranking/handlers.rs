use super::engine::rank;
use super::types::TopSchoolsResponse;
use crate::search::types::{ScoreColumn, error_response};
use crate::store::client::StoreState;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct TopSchoolsParams {
    pub exam: String,
    pub min_score: Option<f64>,
    pub limit: Option<usize>,
}

pub async fn handle_top_schools(
    Query(params): Query<TopSchoolsParams>,
    Extension(store): Extension<Arc<StoreState>>,
) -> Response {
    let Some(column) = ScoreColumn::parse_alias(&params.exam) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            format!("Unknown CLEP exam: {}", params.exam),
        );
    };

    let client = match store.client() {
        Ok(client) => client,
        Err(err) => return error_response(err.status_code(), err.to_string()),
    };

    let threshold = params.min_score.unwrap_or(0.0);
    match rank(client, column, threshold, params.limit).await {
        Ok(entries) => (
            StatusCode::OK,
            Json(TopSchoolsResponse {
                exam: column.column_name().to_string(),
                count: entries.len(),
                data: entries,
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!("Ranking for {} failed: {}", column.column_name(), err);
            error_response(err.status_code(), err.to_string())
        }
    }
}
