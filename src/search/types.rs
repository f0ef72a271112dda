//! Score Table Data Types
//!
//! Defines the score record, the trackable score columns, the filter criteria,
//! and the response DTOs shared by the HTTP endpoints. Other modules (ranking,
//! update) import the record and column types from here.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::ranking::types::{CellOutcome, coerce_score};

/// The remote table holding one row per school's test-score data.
pub const SCORES_TABLE: &str = "ms_sample_small";

/// The numeric score columns the service tracks.
///
/// Callers supply aliases ("Humanities", "american_government", ...); this is
/// the single place they map to the underlying remote column names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreColumn {
    Humanities,
    AmericanGovernment,
}

impl ScoreColumn {
    /// The column name on the remote table.
    pub fn column_name(self) -> &'static str {
        match self {
            ScoreColumn::Humanities => "humanities",
            ScoreColumn::AmericanGovernment => "american_government",
        }
    }

    /// Resolves a caller-supplied exam alias, case-insensitively.
    pub fn parse_alias(alias: &str) -> Option<Self> {
        match alias.trim().to_lowercase().as_str() {
            "humanities" => Some(ScoreColumn::Humanities),
            "american government" | "american_government" | "american-government" => {
                Some(ScoreColumn::AmericanGovernment)
            }
            _ => None,
        }
    }
}

/// One row of the score table.
///
/// Score cells pass through [`coerce_score`] during deserialization: a cell
/// that is null or fails numeric coercion comes out as `None`, never as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: i64,
    pub school_name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub humanities: Option<f64>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub american_government: Option<f64>,
}

fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match coerce_score(&raw) {
        CellOutcome::Score(value) => Some(value),
        CellOutcome::Missing | CellOutcome::Malformed => None,
    })
}

/// The optional predicates a search/filter request may supply.
///
/// Absence of a bound means no constraint on that side; substring matches are
/// case-insensitive and unanchored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterCriteria {
    pub school_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub min_humanities: Option<f64>,
    pub max_humanities: Option<f64>,
    pub min_american_government: Option<f64>,
    pub max_american_government: Option<f64>,
}

/// Query parameters of `GET /tests/search`.
///
/// The same criteria as [`FilterCriteria`] plus the `clep_exam`/`min_score`
/// alias pair, which selects one score column and applies a lower bound to it.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub school_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub clep_exam: Option<String>,
    pub min_score: Option<f64>,
    pub min_humanities: Option<f64>,
    pub max_humanities: Option<f64>,
    pub min_american_government: Option<f64>,
    pub max_american_government: Option<f64>,
}

impl SearchParams {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            school_name: self.school_name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            min_humanities: self.min_humanities,
            max_humanities: self.max_humanities,
            min_american_government: self.min_american_government,
            max_american_government: self.max_american_government,
        }
    }
}

/// Response of the search/filter endpoints: the matching rows and their count.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub data: Vec<ScoreRecord>,
    pub count: usize,
}

/// Liveness message for `GET /`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LivenessResponse {
    pub message: String,
}

/// Store connectivity report for `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Structured error body, FastAPI-style: `{"detail": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Builds the structured error response every failing endpoint returns.
pub fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            detail: detail.into(),
        }),
    )
        .into_response()
}
