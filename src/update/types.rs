//! Update Data Types
//!
//! The partial update DTOs for the single and bulk paths, and their response
//! shapes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::search::types::ScoreRecord;

/// A partial set of score fields to overwrite. Only fields explicitly present
/// are written.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScoreUpdate {
    pub humanities: Option<f64>,
    pub american_government: Option<f64>,
}

impl ScoreUpdate {
    /// The update payload: exactly the fields the caller supplied, keyed by
    /// remote column name.
    pub fn patch(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        if let Some(humanities) = self.humanities {
            fields.insert("humanities".to_string(), Value::from(humanities));
        }
        if let Some(american_government) = self.american_government {
            fields.insert(
                "american_government".to_string(),
                Value::from(american_government),
            );
        }
        fields
    }

    pub fn is_empty(&self) -> bool {
        self.humanities.is_none() && self.american_government.is_none()
    }
}

/// One entry of a bulk update request: `{id, ...fields}`.
///
/// The id is optional at the serde level so a missing id reaches the batch
/// validation step and fails with the service's 400, not a decode rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkUpdateEntry {
    pub id: Option<i64>,
    #[serde(flatten)]
    pub scores: ScoreUpdate,
}

/// Response of the single update: the post-update row as stored remotely.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub message: String,
    pub data: ScoreRecord,
}

/// Response of the bulk update: all rows that produced an update.
#[derive(Debug, Serialize, Deserialize)]
pub struct BulkUpdateResponse {
    pub message: String,
    pub data: Vec<ScoreRecord>,
}
