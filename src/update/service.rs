use axum::http::StatusCode;
use serde_json::Value;
use thiserror::Error;

use super::types::{BulkUpdateEntry, ScoreUpdate};
use crate::search::types::{SCORES_TABLE, ScoreRecord};
use crate::store::client::StoreClient;
use crate::store::error::StoreError;

/// Failure modes of the update paths.
#[derive(Debug, Error)]
pub enum UpdateError {
    /// The caller supplied no recognized updatable field.
    #[error("No scores provided to update")]
    NoFields,

    /// A bulk entry carried no id; the whole batch is rejected.
    #[error("Each update must have 'id'")]
    MissingId,

    /// No row with the given id exists.
    #[error("Test record not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl UpdateError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            UpdateError::NoFields | UpdateError::MissingId => StatusCode::BAD_REQUEST,
            UpdateError::NotFound => StatusCode::NOT_FOUND,
            UpdateError::Store(err) => err.status_code(),
        }
    }
}

/// Updates one row by id and returns its post-update state as stored remotely
/// (not merely the submitted delta, guarding against server-side defaults).
///
/// An empty field set fails before any remote call; a missing row is NotFound.
pub async fn update_one(
    store: &StoreClient,
    id: i64,
    update: &ScoreUpdate,
) -> Result<ScoreRecord, UpdateError> {
    let patch = update.patch();
    if patch.is_empty() {
        return Err(UpdateError::NoFields);
    }

    let rows: Vec<ScoreRecord> = store
        .update_by_id(SCORES_TABLE, id, &Value::Object(patch))
        .await?;

    rows.into_iter().next().ok_or(UpdateError::NotFound)
}

/// Applies a batch of partial updates sequentially and returns the rows that
/// produced an update.
///
/// Validation is all-or-nothing: any entry without an id rejects the batch
/// before any remote call. Entries with an id but no recognized fields are
/// skipped, not errors. A store failure on a later entry aborts the request;
/// entries already applied remain applied (no cross-entry atomicity).
pub async fn update_many(
    store: &StoreClient,
    updates: &[BulkUpdateEntry],
) -> Result<Vec<ScoreRecord>, UpdateError> {
    if updates.iter().any(|entry| entry.id.is_none()) {
        return Err(UpdateError::MissingId);
    }

    let mut updated = Vec::new();
    for entry in updates {
        let Some(id) = entry.id else {
            continue;
        };

        let patch = entry.scores.patch();
        if patch.is_empty() {
            continue;
        }

        let rows: Vec<ScoreRecord> = store
            .update_by_id(SCORES_TABLE, id, &Value::Object(patch))
            .await?;
        updated.extend(rows);
    }

    Ok(updated)
}
