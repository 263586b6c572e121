//! Configuration provider integration tests.

use std::collections::HashMap;

use envconf::{ConfigError, ConfigProvider, Environment, EnvironmentConfig};

#[test]
fn test_every_environment_has_a_complete_record() {
    let provider = ConfigProvider::builtin();
    for environment in Environment::ALL {
        let config = provider.get(environment);
        assert!(!config.web_url.is_empty(), "{environment}: empty web_url");
        assert!(!config.api_url.is_empty(), "{environment}: empty api_url");
        assert!(!config.api_key.is_empty(), "{environment}: empty api_key");
    }
}

#[test]
fn test_mock_configuration_values() {
    let provider = ConfigProvider::builtin();
    let config = provider.get(Environment::Mock);
    assert_eq!(config.web_url, "http://www.google.com/");
    assert_eq!(
        config.api_url,
        "http://private-778487-alvinrusliappschef.apiary-mock.com/"
    );
    assert_eq!(config.api_key, "mymockapikey");
}

#[test]
fn test_staging_matches_mock() {
    let provider = ConfigProvider::builtin();
    assert_eq!(
        provider.get(Environment::Staging),
        provider.get(Environment::Mock)
    );
}

#[test]
fn test_production_key_is_distinct() {
    let provider = ConfigProvider::builtin();
    let production = provider.get(Environment::Production);
    assert_eq!(production.api_key, "myproductionapikey");
    assert_ne!(production.api_key, provider.get(Environment::Mock).api_key);
}

#[test]
fn test_lookup_is_idempotent() {
    let provider = ConfigProvider::builtin();
    for environment in Environment::ALL {
        assert_eq!(provider.get(environment), provider.get(environment));
        assert_eq!(
            provider.api_key(environment),
            provider.get(environment).api_key
        );
    }
}

#[test]
fn test_unknown_selector_is_rejected() {
    let err = "qa".parse::<Environment>().unwrap_err();
    match err {
        ConfigError::UnknownEnvironment { selector } => assert_eq!(selector, "qa"),
        other => panic!("expected UnknownEnvironment, got {other:?}"),
    }
}

#[test]
fn test_injected_table_must_cover_every_environment() {
    let entry = EnvironmentConfig::new(
        "https://example.com/",
        "https://api.example.com/",
        "key",
    )
    .unwrap();

    let mut table = HashMap::new();
    table.insert(Environment::Mock, entry.clone());
    table.insert(Environment::Staging, entry);

    let err = ConfigProvider::with_table(table).unwrap_err();
    match err {
        ConfigError::IncompleteTable { environment } => {
            assert_eq!(environment, Environment::Production)
        }
        other => panic!("expected IncompleteTable, got {other:?}"),
    }
}

#[test]
fn test_injected_table_is_served_verbatim() {
    let mut table = HashMap::new();
    for (environment, key) in [
        (Environment::Mock, "mock-key"),
        (Environment::Staging, "staging-key"),
        (Environment::Production, "production-key"),
    ] {
        table.insert(
            environment,
            EnvironmentConfig::new("https://example.com/", "https://api.example.com/", key)
                .unwrap(),
        );
    }

    let provider = ConfigProvider::with_table(table).unwrap();
    assert_eq!(provider.api_key(Environment::Staging), "staging-key");
    assert_eq!(provider.api_key(Environment::Production), "production-key");
    assert_eq!(provider.web_url(Environment::Mock), "https://example.com/");
}

#[test]
fn test_malformed_url_never_produces_a_provider() {
    let mut table = HashMap::new();
    for environment in Environment::ALL {
        table.insert(
            environment,
            EnvironmentConfig {
                web_url: "https://example.com/".to_string(),
                api_url: "not a url".to_string(),
                api_key: "key".to_string(),
            },
        );
    }

    let err = ConfigProvider::with_table(table).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidUrl { .. }));
}

#[test]
fn test_shared_provider_serves_builtin_table() {
    let provider = ConfigProvider::shared();
    assert_eq!(provider.api_key(Environment::Mock), "mymockapikey");
    assert_eq!(
        provider.api_key(Environment::Production),
        "myproductionapikey"
    );
}
