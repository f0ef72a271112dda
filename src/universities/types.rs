use serde::{Deserialize, Serialize};

/// The remote table holding university records.
pub const UNIVERSITIES_TABLE: &str = "universities";

/// One university record, keyed by postal code for lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct University {
    pub id: i64,
    pub name: String,
    pub zip_code: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}
