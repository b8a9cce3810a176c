#[cfg(test)]
mod tests {
    use playdesk::libs::params::{ListQuery, Params};
    use serde_json::{json, Value};

    #[test]
    fn test_sanitized_drops_null_and_empty() {
        let params: Params = [
            ("branch_id", Value::Null),
            ("search", json!("")),
            ("status", json!("active")),
            ("min_age", json!(3)),
            ("paid", json!(false)),
        ]
        .into_iter()
        .collect();

        let sanitized = params.sanitized();
        assert_eq!(sanitized.len(), 3);
        assert_eq!(sanitized.get("status").map(String::as_str), Some("active"));
        assert_eq!(sanitized.get("min_age").map(String::as_str), Some("3"));
        assert_eq!(sanitized.get("paid").map(String::as_str), Some("false"));
        assert!(!sanitized.contains_key("branch_id"));
        assert!(!sanitized.contains_key("search"));
    }

    #[test]
    fn test_set_null_removes_key() {
        let mut params = Params::new();
        params.set("branch_id", json!(5));
        assert_eq!(params.len(), 1);

        params.set("branch_id", Value::Null);
        assert!(params.is_empty());
    }

    #[test]
    fn test_merge_later_values_win() {
        let mut params: Params = [("status", json!("active")), ("branch_id", json!(5))].into_iter().collect();
        let partial: Params = [("status", json!("closed")), ("branch_id", Value::Null)].into_iter().collect();

        let merged = params.merged(&partial);
        assert_eq!(merged.get("status"), Some(&json!("closed")));
        assert!(merged.get("branch_id").is_none());
        // merged() leaves the original alone
        assert_eq!(params.get("branch_id"), Some(&json!(5)));

        params.merge(&partial);
        assert_eq!(params, merged);
    }

    #[test]
    fn test_array_values_are_joined() {
        let mut params = Params::new();
        params.set("ids", json!([1, "", 3]));
        params.set("tags", json!([]));

        let sanitized = params.sanitized();
        assert_eq!(sanitized.get("ids").map(String::as_str), Some("1,3"));
        assert!(!sanitized.contains_key("tags"));
    }

    #[test]
    fn test_query_offsets() {
        let query = ListQuery::new(&Params::new(), 3, 25);
        assert_eq!(query.skip(), 50);
        assert_eq!(query.limit(), 25);

        let first = ListQuery::new(&Params::new(), 0, 25);
        assert_eq!(first.page, 1);
        assert_eq!(first.skip(), 0);
    }

    #[test]
    fn test_query_pairs() {
        let params: Params = [("search", json!("anna")), ("branch_id", Value::Null)].into_iter().collect();
        let query = ListQuery::new(&params, 2, 10);

        let pairs = query.to_pairs();
        assert_eq!(
            pairs,
            vec![
                ("search".to_string(), "anna".to_string()),
                ("page".to_string(), "2".to_string()),
                ("skip".to_string(), "10".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_params_deserialize_from_json() {
        let params: Params = serde_json::from_str(r#"{"status": "active", "branch_id": null}"#).unwrap();
        assert_eq!(params.sanitized().len(), 1);
    }
}
