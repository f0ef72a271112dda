//! Select Query Builder
//!
//! Composes a column projection with a conjunction of predicates and renders
//! them as PostgREST query parameters. Only the predicate forms the service
//! needs are supported: case-insensitive substring, inclusive numeric bounds,
//! equality, and not-null guards. All predicates are ANDed; there is no OR/NOT
//! composition.

/// A filtered read against one table of the remote store.
///
/// Numeric bounds are taken as `f64` and rendered from the native numeric
/// value. They must never be built from strings: lexicographic ordering
/// diverges from numeric ordering once magnitudes differ ("9" > "10").
#[derive(Debug, Clone)]
pub struct SelectQuery {
    table: String,
    columns: String,
    filters: Vec<(String, String)>,
    limit: Option<usize>,
}

impl SelectQuery {
    pub fn table(name: impl Into<String>) -> Self {
        Self {
            table: name.into(),
            columns: "*".to_string(),
            filters: Vec::new(),
            limit: None,
        }
    }

    /// Restricts the projection, e.g. `"school_name,humanities"`.
    pub fn columns(mut self, columns: impl Into<String>) -> Self {
        self.columns = columns.into();
        self
    }

    /// Case-insensitive "contains" match, unanchored.
    pub fn ilike(mut self, column: &str, term: &str) -> Self {
        self.filters
            .push((column.to_string(), format!("ilike.*{}*", term)));
        self
    }

    /// Inclusive lower bound on a numeric column.
    pub fn gte(mut self, column: &str, bound: f64) -> Self {
        self.filters
            .push((column.to_string(), format!("gte.{}", bound)));
        self
    }

    /// Inclusive upper bound on a numeric column.
    pub fn lte(mut self, column: &str, bound: f64) -> Self {
        self.filters
            .push((column.to_string(), format!("lte.{}", bound)));
        self
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value)));
        self
    }

    /// Excludes rows where the column is null. Paired with numeric bounds so
    /// absent cells never enter a range comparison.
    pub fn not_null(mut self, column: &str) -> Self {
        self.filters
            .push((column.to_string(), "not.is.null".to_string()));
        self
    }

    pub fn limit(mut self, rows: usize) -> Self {
        self.limit = Some(rows);
        self
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// Renders the query as URL parameters, projection first.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(self.filters.len() + 2);
        params.push(("select".to_string(), self.columns.clone()));
        params.extend(self.filters.iter().cloned());
        if let Some(rows) = self.limit {
            params.push(("limit".to_string(), rows.to_string()));
        }
        params
    }
}
