use std::collections::HashMap;

use serde_json::Value;

use super::types::{CellOutcome, RankingEntry, coerce_score};
use crate::search::types::{SCORES_TABLE, ScoreColumn};
use crate::store::client::StoreClient;
use crate::store::error::StoreError;
use crate::store::query::SelectQuery;

/// Ranks raw projection rows for one score column.
///
/// Rows with a missing or malformed cell are skipped, as are scores below
/// `threshold`. Duplicate school names collapse keep-last: the map holds one
/// entry per name and a later qualifying row overwrites an earlier one.
/// The result is sorted by score descending (tie order unspecified) and
/// truncated to `top_k` when supplied.
pub fn rank_rows(
    rows: &[Value],
    column: &str,
    threshold: f64,
    top_k: Option<usize>,
) -> Vec<RankingEntry> {
    let mut scores_by_school: HashMap<String, f64> = HashMap::new();

    for row in rows {
        let Some(school) = row.get("school_name").and_then(Value::as_str) else {
            continue;
        };

        let raw = row.get(column).unwrap_or(&Value::Null);
        match coerce_score(raw) {
            CellOutcome::Score(score) => {
                if score >= threshold {
                    scores_by_school.insert(school.to_string(), score);
                }
            }
            CellOutcome::Missing => {}
            CellOutcome::Malformed => {
                tracing::debug!("Skipping malformed {} cell for {}", column, school);
            }
        }
    }

    let mut entries: Vec<RankingEntry> = scores_by_school
        .into_iter()
        .map(|(school_name, score)| RankingEntry { school_name, score })
        .collect();

    entries.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if let Some(k) = top_k {
        entries.truncate(k);
    }

    entries
}

/// Loads the (school name, score) projection for `column` and ranks it.
///
/// A zero-row projection triggers a 1-row existence probe: if the probe also
/// fails or comes back empty, the table is reported as unavailable rather
/// than returning an empty leaderboard for what may be a permission fault.
pub async fn rank(
    store: &StoreClient,
    column: ScoreColumn,
    threshold: f64,
    top_k: Option<usize>,
) -> Result<Vec<RankingEntry>, StoreError> {
    let projection = format!("school_name,{}", column.column_name());
    let query = SelectQuery::table(SCORES_TABLE).columns(projection);

    let rows: Vec<Value> = store.select(&query).await?;

    if rows.is_empty() {
        let probe = SelectQuery::table(SCORES_TABLE)
            .columns("school_name")
            .limit(1);
        let sample: Vec<Value> = store.select(&probe).await.map_err(|err| {
            StoreError::DataUnavailable(format!(
                "no data returned from table; table may be empty or access denied ({})",
                err
            ))
        })?;

        if sample.is_empty() {
            return Err(StoreError::DataUnavailable(
                "no data returned from table; table may be empty or access denied".to_string(),
            ));
        }
    }

    Ok(rank_rows(&rows, column.column_name(), threshold, top_k))
}
