use super::types::{FilterCriteria, SCORES_TABLE, ScoreColumn, ScoreRecord};
use crate::store::client::StoreClient;
use crate::store::error::StoreError;
use crate::store::query::SelectQuery;

/// Translates filter criteria into a predicate conjunction.
///
/// Each set criterion adds one predicate: substring fields add a
/// case-insensitive contains, numeric bounds add an inclusive range predicate
/// on the native numeric column, guarded by not-null so absent cells never
/// enter the comparison.
pub fn build_query(criteria: &FilterCriteria) -> SelectQuery {
    let mut query = SelectQuery::table(SCORES_TABLE);

    if let Some(name) = &criteria.school_name {
        query = query.ilike("school_name", name);
    }

    if let Some(city) = &criteria.city {
        query = query.ilike("city", city);
    }

    if let Some(state) = &criteria.state {
        query = query.ilike("state", state);
    }

    if let Some(min) = criteria.min_humanities {
        query = query.not_null("humanities").gte("humanities", min);
    }

    if let Some(max) = criteria.max_humanities {
        query = query.not_null("humanities").lte("humanities", max);
    }

    if let Some(min) = criteria.min_american_government {
        query = query
            .not_null("american_government")
            .gte("american_government", min);
    }

    if let Some(max) = criteria.max_american_government {
        query = query
            .not_null("american_government")
            .lte("american_government", max);
    }

    query
}

/// Applies the `clep_exam`/`min_score` alias pair of `GET /tests/search`.
///
/// A recognized exam adds its not-null guard and, when `min_score` is present,
/// an inclusive lower bound. An unrecognized alias leaves the query untouched.
pub fn apply_exam_shortcut(
    query: SelectQuery,
    exam: &str,
    min_score: Option<f64>,
) -> SelectQuery {
    match ScoreColumn::parse_alias(exam) {
        Some(column) => {
            let mut query = query.not_null(column.column_name());
            if let Some(min) = min_score {
                query = query.gte(column.column_name(), min);
            }
            query
        }
        None => {
            tracing::warn!("Ignoring unknown CLEP exam alias: {}", exam);
            query
        }
    }
}

/// Runs a score-table query and returns the full matching row set with its
/// count. An empty result is a valid, non-error outcome.
pub async fn execute(
    store: &StoreClient,
    query: &SelectQuery,
) -> Result<(Vec<ScoreRecord>, usize), StoreError> {
    let rows: Vec<ScoreRecord> = store.select(query).await?;
    let count = rows.len();
    Ok((rows, count))
}

/// Filtered search over the score table in a single remote round trip.
pub async fn search(
    store: &StoreClient,
    criteria: &FilterCriteria,
) -> Result<(Vec<ScoreRecord>, usize), StoreError> {
    execute(store, &build_query(criteria)).await
}
