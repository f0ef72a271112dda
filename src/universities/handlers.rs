use super::types::{UNIVERSITIES_TABLE, University};
use crate::search::types::error_response;
use crate::store::client::StoreState;
use crate::store::query::SelectQuery;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct UniversityParams {
    pub zip_code: String,
}

pub async fn handle_universities(
    Query(params): Query<UniversityParams>,
    Extension(store): Extension<Arc<StoreState>>,
) -> Response {
    let client = match store.client() {
        Ok(client) => client,
        Err(err) => return error_response(err.status_code(), err.to_string()),
    };

    let query = SelectQuery::table(UNIVERSITIES_TABLE).eq("zip_code", &params.zip_code);

    match client.select::<University>(&query).await {
        Ok(universities) => (StatusCode::OK, Json(universities)).into_response(),
        Err(err) => {
            tracing::error!("University lookup for {} failed: {}", params.zip_code, err);
            error_response(
                err.status_code(),
                format!("Error fetching universities: {}", err),
            )
        }
    }
}
