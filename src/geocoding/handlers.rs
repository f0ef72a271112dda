use super::service::{GeocodeError, Geocoder};
use crate::search::types::error_response;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct CoordinatesParams {
    pub zip: String,
}

pub async fn handle_zip_coordinates(
    Query(params): Query<CoordinatesParams>,
    Extension(geocoder): Extension<Arc<Geocoder>>,
) -> Response {
    match geocoder.zip_to_coordinates(&params.zip).await {
        Ok(Some(coordinates)) => (StatusCode::OK, Json(coordinates)).into_response(),
        Ok(None) => error_response(
            StatusCode::NOT_FOUND,
            format!("No coordinates found for zip {}", params.zip),
        ),
        Err(err @ GeocodeError::MissingToken) => {
            error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
        Err(err) => {
            tracing::error!("Coordinate lookup for {} failed: {}", params.zip, err);
            error_response(StatusCode::BAD_GATEWAY, err.to_string())
        }
    }
}
