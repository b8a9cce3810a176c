#[cfg(test)]
mod tests {
    use parking_lot::{Mutex, MutexGuard};
    use playdesk::libs::config::{
        ApiConfig, Config, ListConfig, CONFIG_FILE_NAME, ENV_API_URL, ENV_BRANCH_ID, ENV_PAGE_SIZE, ENV_TOKEN,
    };
    use playdesk::libs::data_storage::DataStorage;
    use playdesk::libs::list::DEFAULT_PAGE_SIZE;
    use playdesk::libs::session::BRANCH_PARAM;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // Tests in this file mutate process-wide environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Points the data directory at a temporary home and clears overrides.
    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        temp_dir: TempDir,
        api_url: String,
        token: String,
    }

    fn clear_overrides() {
        for var in [ENV_API_URL, ENV_TOKEN, ENV_BRANCH_ID, ENV_PAGE_SIZE] {
            std::env::remove_var(var);
        }
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock();
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            clear_overrides();
            ConfigTestContext {
                _guard: guard,
                temp_dir,
                api_url: "https://play.example.com/api".to_string(),
                token: "token123".to_string(),
            }
        }

        fn teardown(self) {
            clear_overrides();
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api.is_none());
        assert_eq!(config.list, ListConfig::default());
        assert_eq!(config.list.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            api: Some(ApiConfig {
                api_url: ctx.api_url.clone(),
                auth_token: Some(ctx.token.clone()),
                branch_id: Some(4),
            }),
            list: ListConfig { page_size: 25 },
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_saved_under_data_dir(ctx: &mut ConfigTestContext) {
        let storage = DataStorage::new();
        assert!(storage.base_path().starts_with(ctx.temp_dir.path()));

        let path = storage.config_path().unwrap();
        assert!(path.ends_with(CONFIG_FILE_NAME));
        assert!(!path.exists());

        Config::default().save().unwrap();
        assert!(path.exists());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_list_section_uses_default(_ctx: &mut ConfigTestContext) {
        let config: Config = serde_json::from_str(r#"{"api": {"api_url": "http://localhost:8000"}}"#).unwrap();
        assert_eq!(config.list.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.api.unwrap().auth_token, None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_env_overrides(ctx: &mut ConfigTestContext) {
        std::env::set_var(ENV_API_URL, &ctx.api_url);
        std::env::set_var(ENV_TOKEN, &ctx.token);
        std::env::set_var(ENV_BRANCH_ID, "7");
        std::env::set_var(ENV_PAGE_SIZE, "50");

        let mut config = Config::default();
        config.apply_env();

        let api = config.api.clone().unwrap();
        assert_eq!(api.api_url, ctx.api_url);
        assert_eq!(api.auth_token.as_deref(), Some(ctx.token.as_str()));
        assert_eq!(api.branch_id, Some(7));
        assert_eq!(config.list.page_size, 50);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_env_invalid_numbers_are_ignored(ctx: &mut ConfigTestContext) {
        std::env::set_var(ENV_API_URL, &ctx.api_url);
        std::env::set_var(ENV_BRANCH_ID, "main");
        std::env::set_var(ENV_PAGE_SIZE, "lots");

        let mut config = Config::default();
        config.apply_env();

        assert_eq!(config.api.unwrap().branch_id, None);
        assert_eq!(config.list.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_session_from_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            api: Some(ApiConfig {
                api_url: ctx.api_url.clone(),
                auth_token: Some(ctx.token.clone()),
                branch_id: Some(3),
            }),
            list: ListConfig::default(),
        };

        let session = config.session();
        assert_eq!(session.token(), Some(ctx.token.as_str()));
        assert_eq!(session.default_params().sanitized().get(BRANCH_PARAM).map(String::as_str), Some("3"));

        assert_eq!(Config::default().session().token(), None);
    }
}
