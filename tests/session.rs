#[cfg(test)]
mod tests {
    use playdesk::libs::session::{SessionContext, BRANCH_PARAM};
    use serde_json::json;

    #[test]
    fn test_empty_token_is_no_token() {
        let session = SessionContext::new(Some(String::new()), None);
        assert_eq!(session.token(), None);
        assert_eq!(SessionContext::anonymous().token(), None);
    }

    #[test]
    fn test_default_params_carry_branch() {
        let session = SessionContext::new(Some("abc".to_string()), Some(9));
        let params = session.default_params();
        assert_eq!(params.get(BRANCH_PARAM), Some(&json!(9)));

        assert!(SessionContext::anonymous().default_params().is_empty());
    }
}
