#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use ticklist::libs::config::{ClientConfig, Config, ServerConfig, API_URL_ENV, HOST_ENV, PORT_ENV};

    struct ConfigTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("config.json");
            ConfigTestContext { _temp_dir: temp_dir, path }
        }
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.path).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.server.is_none());
        assert!(config.client.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_sections_default_when_absent(_ctx: &mut ConfigTestContext) {
        let config = Config::default();

        assert_eq!(config.server(), ServerConfig { host: "127.0.0.1".into(), port: 3000 });
        let client = config.client();
        assert_eq!(client.api_url, "http://127.0.0.1:3000");
        assert_eq!(client.debounce(), Duration::from_millis(1000));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ServerConfig { host: "0.0.0.0".into(), port: 8080 }),
            client: Some(ClientConfig {
                api_url: "http://todo.local:8080".into(),
                debounce_ms: 250,
            }),
        };
        config.save_to(&ctx.path).unwrap();

        assert_eq!(Config::read_from(&ctx.path).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unconfigured_sections_are_omitted(ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ServerConfig::default()),
            client: None,
        };
        config.save_to(&ctx.path).unwrap();

        let raw = std::fs::read_to_string(&ctx.path).unwrap();
        assert!(raw.contains("server"));
        assert!(!raw.contains("client"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_sections_fill_missing_fields(ctx: &mut ConfigTestContext) {
        std::fs::write(&ctx.path, r#"{"server": {"port": 8080}, "client": {"api_url": "http://todo.local:8080"}}"#).unwrap();

        let config = Config::read_from(&ctx.path).unwrap();
        assert_eq!(config.server(), ServerConfig { host: "127.0.0.1".into(), port: 8080 });
        assert_eq!(config.client().api_url, "http://todo.local:8080");
        assert_eq!(config.client().debounce(), Duration::from_millis(1000));

        std::fs::write(&ctx.path, r#"{"client": {"debounce_ms": 250}}"#).unwrap();

        let config = Config::read_from(&ctx.path).unwrap();
        assert!(config.server.is_none());
        assert_eq!(config.client(), ClientConfig { api_url: "http://127.0.0.1:3000".into(), debounce_ms: 250 });
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupted_config_is_an_error(ctx: &mut ConfigTestContext) {
        std::fs::write(&ctx.path, "{ not json").unwrap();

        assert!(Config::read_from(&ctx.path).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_environment_overrides(_ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        config.apply_overrides(env(&[(HOST_ENV, "0.0.0.0"), (PORT_ENV, "4000"), (API_URL_ENV, "http://remote:4000")]));

        assert_eq!(config.server(), ServerConfig { host: "0.0.0.0".into(), port: 4000 });
        assert_eq!(config.client().api_url, "http://remote:4000");
        // untouched fields keep their defaults
        assert_eq!(config.client().debounce_ms, 1000);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_blank_and_invalid_overrides_are_ignored(_ctx: &mut ConfigTestContext) {
        let mut config = Config {
            server: Some(ServerConfig { host: "10.0.0.1".into(), port: 5000 }),
            client: None,
        };
        config.apply_overrides(env(&[(HOST_ENV, "  "), (PORT_ENV, "not-a-port")]));

        assert_eq!(config.server(), ServerConfig { host: "10.0.0.1".into(), port: 5000 });
        assert!(config.client.is_none());
    }
}
