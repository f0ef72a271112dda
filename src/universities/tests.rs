//! University Module Tests

#[cfg(test)]
mod tests {
    use crate::store::query::SelectQuery;
    use crate::universities::types::{UNIVERSITIES_TABLE, University};

    #[test]
    fn test_university_decodes_with_optional_fields_absent() {
        let university: University = serde_json::from_str(
            r#"{"id": 3, "name": "State University", "zip_code": "35004"}"#,
        )
        .expect("decode");

        assert_eq!(university.id, 3);
        assert_eq!(university.zip_code, "35004");
        assert!(university.address.is_none());
        assert!(university.website.is_none());
    }

    #[test]
    fn test_university_round_trips() {
        let university = University {
            id: 1,
            name: "Tech Institute".to_string(),
            zip_code: "10001".to_string(),
            address: Some("1 Main St".to_string()),
            website: Some("https://tech.example.edu".to_string()),
        };

        let json = serde_json::to_string(&university).expect("encode");
        let restored: University = serde_json::from_str(&json).expect("decode");

        assert_eq!(restored.name, university.name);
        assert_eq!(restored.website, university.website);
    }

    #[test]
    fn test_zip_lookup_query_shape() {
        let query = SelectQuery::table(UNIVERSITIES_TABLE).eq("zip_code", "35004");
        let params = query.params();

        assert_eq!(query.table_name(), "universities");
        assert!(
            params.contains(&("zip_code".to_string(), "eq.35004".to_string())),
            "lookup is an equality predicate on zip_code"
        );
    }
}
