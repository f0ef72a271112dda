//! Update Module Tests
//!
//! Validates patch construction and the two validation paths, which differ
//! on purpose between single and bulk updates.
//!
//! ## Test Scopes
//! - **Patch**: Only supplied fields appear in the update payload.
//! - **Single path**: An empty field set is rejected before any remote call.
//! - **Bulk path**: A missing id rejects the whole batch; no-op entries are
//!   skipped instead.
//! - **Wire format**: Bulk entries decode from `{id, ...fields}` objects.

#[cfg(test)]
mod tests {
    use crate::store::client::{StoreClient, StoreConfig};
    use crate::update::service::{UpdateError, update_many, update_one};
    use crate::update::types::{BulkUpdateEntry, ScoreUpdate};
    use axum::http::StatusCode;

    /// A client pointed at an unroutable address. Tests using it only pass if
    /// the code under test returns before issuing any remote call; a request
    /// would surface as `UpdateError::Store` instead of the expected variant.
    fn offline_client() -> StoreClient {
        StoreClient::new(StoreConfig {
            url: "http://127.0.0.1:9".to_string(),
            key: "test-key".to_string(),
        })
        .expect("client construction is offline")
    }

    // ============================================================
    // PATCH CONSTRUCTION
    // ============================================================

    #[test]
    fn test_patch_contains_only_supplied_fields() {
        let update = ScoreUpdate {
            humanities: Some(72.0),
            american_government: None,
        };

        let patch = update.patch();

        assert_eq!(patch.len(), 1);
        assert_eq!(patch.get("humanities").and_then(|v| v.as_f64()), Some(72.0));
        assert!(!patch.contains_key("american_government"));
    }

    #[test]
    fn test_patch_with_both_fields() {
        let update = ScoreUpdate {
            humanities: Some(60.0),
            american_government: Some(65.0),
        };

        let patch = update.patch();
        assert_eq!(patch.len(), 2);
    }

    #[test]
    fn test_empty_update_has_empty_patch() {
        let update = ScoreUpdate::default();

        assert!(update.is_empty());
        assert!(update.patch().is_empty());
    }

    // ============================================================
    // SINGLE PATH - validation precedes any remote call
    // ============================================================

    #[tokio::test]
    async fn test_update_one_rejects_empty_field_set() {
        let client = offline_client();

        let result = update_one(&client, 1, &ScoreUpdate::default()).await;

        match result {
            Err(UpdateError::NoFields) => {}
            other => panic!("Expected NoFields before any remote call, got {:?}", other.err()),
        }
    }

    // ============================================================
    // BULK PATH - all-or-nothing id validation, no-op tolerance
    // ============================================================

    #[tokio::test]
    async fn test_update_many_rejects_batch_with_missing_id() {
        let client = offline_client();
        let updates = vec![
            BulkUpdateEntry {
                id: Some(1),
                scores: ScoreUpdate {
                    humanities: Some(80.0),
                    american_government: None,
                },
            },
            BulkUpdateEntry {
                id: None,
                scores: ScoreUpdate {
                    humanities: Some(55.0),
                    american_government: None,
                },
            },
        ];

        let result = update_many(&client, &updates).await;

        match result {
            Err(UpdateError::MissingId) => {}
            other => panic!("Expected MissingId for the whole batch, got {:?}", other.err()),
        }
    }

    #[tokio::test]
    async fn test_update_many_skips_entries_without_fields() {
        let client = offline_client();
        // Every entry has an id but none carries a field, so the batch is all
        // no-ops and completes without touching the store.
        let updates = vec![
            BulkUpdateEntry {
                id: Some(1),
                scores: ScoreUpdate::default(),
            },
            BulkUpdateEntry {
                id: Some(2),
                scores: ScoreUpdate::default(),
            },
        ];

        let updated = update_many(&client, &updates)
            .await
            .expect("no-op entries are not errors");

        assert!(updated.is_empty(), "skipped entries produce no updated rows");
    }

    #[tokio::test]
    async fn test_update_many_empty_batch() {
        let client = offline_client();
        let updated = update_many(&client, &[]).await.expect("empty batch is valid");
        assert!(updated.is_empty());
    }

    // ============================================================
    // WIRE FORMAT
    // ============================================================

    #[test]
    fn test_bulk_entry_decodes_flattened_fields() {
        let entry: BulkUpdateEntry =
            serde_json::from_str(r#"{"id": 7, "humanities": 88.5}"#).expect("decode");

        assert_eq!(entry.id, Some(7));
        assert_eq!(entry.scores.humanities, Some(88.5));
        assert_eq!(entry.scores.american_government, None);
    }

    #[test]
    fn test_bulk_entry_without_id_decodes_to_none() {
        let entry: BulkUpdateEntry =
            serde_json::from_str(r#"{"american_government": 61.0}"#).expect("decode");

        assert_eq!(entry.id, None);
        assert_eq!(entry.scores.american_government, Some(61.0));
    }

    // ============================================================
    // STATUS MAPPING
    // ============================================================

    #[test]
    fn test_update_error_status_codes() {
        assert_eq!(UpdateError::NoFields.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(UpdateError::MissingId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(UpdateError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }
}
