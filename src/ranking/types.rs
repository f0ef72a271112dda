//! Ranking Data Types
//!
//! The typed per-cell coercion outcome and the leaderboard DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of coercing one raw score cell.
///
/// Coercion failures are typed rather than silently folded into `None` so
/// callers (and tests) can tell "skipped due to bad data" from "absent".
#[derive(Debug, Clone, PartialEq)]
pub enum CellOutcome {
    /// A finite numeric score.
    Score(f64),
    /// The cell was null or not present on the row.
    Missing,
    /// The cell held a value that does not coerce to a finite number.
    Malformed,
}

/// Coerces a raw cell into a score.
///
/// Numbers and numeric strings are accepted; everything else is `Malformed`.
/// A value that fails coercion is treated as absent downstream, never as zero.
pub fn coerce_score(raw: &Value) -> CellOutcome {
    match raw {
        Value::Null => CellOutcome::Missing,
        Value::Number(number) => match number.as_f64() {
            Some(score) if score.is_finite() => CellOutcome::Score(score),
            _ => CellOutcome::Malformed,
        },
        Value::String(text) => match text.trim().parse::<f64>() {
            Ok(score) if score.is_finite() => CellOutcome::Score(score),
            _ => CellOutcome::Malformed,
        },
        _ => CellOutcome::Malformed,
    }
}

/// One leaderboard entry: a school and its score for the ranked column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub school_name: String,
    pub score: f64,
}

/// Response of `GET /tests/top`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TopSchoolsResponse {
    pub exam: String,
    pub data: Vec<RankingEntry>,
    pub count: usize,
}
