use std::{fs, time::Duration};

use smartcast_config::{
    ConfigGuardRailError, ConfigLoadError, ConfigLoader, EnvConfig,
};
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("smartcast.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn defaults_apply_without_file_or_environment() {
    let load = ConfigLoader::new()
        .load_with_env(EnvConfig::default(), false)
        .unwrap();

    let config = load.config;
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.bind_address(), "0.0.0.0:5000");
    assert!(config.catalog.path.is_none());
    assert!(config.cors.is_wildcard_included());
    assert_eq!(config.player.server_url, "http://localhost:5000");
    assert_eq!(config.player.controls_hide_delay, Duration::from_millis(3000));
    assert_eq!(config.player.seek_step_seconds, 10.0);
    assert!(config.metadata.config_path.is_none());

    let messages: Vec<_> =
        load.warnings.items.iter().map(|w| w.message.as_str()).collect();
    assert!(messages.iter().any(|m| m.contains("No smartcast.toml")));
    assert!(messages.iter().any(|m| m.contains("any origin")));
}

#[test]
fn file_values_are_used_and_environment_wins() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
        [server]
        host = "127.0.0.1"
        port = 8080

        [cors]
        allowed_origins = ["http://localhost:8081"]

        [player]
        server_url = "http://media.local:8080/"
        controls_hide_delay_ms = 1500
        "#,
    );

    let env = EnvConfig {
        server_port: Some(9090),
        seek_step_seconds: Some(15.0),
        ..EnvConfig::default()
    };
    let load = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(env, false)
        .unwrap();

    let config = load.config;
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9090);
    assert_eq!(config.cors.allowed_origins, vec!["http://localhost:8081"]);
    assert_eq!(config.player.server_url, "http://media.local:8080");
    assert_eq!(config.player.controls_hide_delay, Duration::from_millis(1500));
    assert_eq!(config.player.seek_step_seconds, 15.0);
    assert_eq!(config.metadata.config_path.as_deref(), Some(path.as_path()));
    assert!(load.warnings.is_empty());
}

#[test]
fn config_path_from_environment_is_honoured() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[server]\nport = 6000\n");

    let env = EnvConfig {
        config_path: Some(path),
        ..EnvConfig::default()
    };
    let load = ConfigLoader::new().load_with_env(env, false).unwrap();
    assert_eq!(load.config.server.port, 6000);
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = ConfigLoader::new()
        .with_config_path(&missing)
        .load_with_env(EnvConfig::default(), false)
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::MissingConfig { path } if path == missing));
}

#[test]
fn malformed_toml_is_reported_with_its_path() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[server\nport = ");

    let err = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_env(EnvConfig::default(), false)
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::Parse { .. }));
}

#[test]
fn zero_hide_delay_is_rejected() {
    let env = EnvConfig {
        controls_hide_delay_ms: Some(0),
        ..EnvConfig::default()
    };
    let err = ConfigLoader::new().load_with_env(env, false).unwrap_err();
    assert!(matches!(
        err,
        ConfigLoadError::GuardRail(ConfigGuardRailError::ZeroHideDelay)
    ));
}

#[test]
fn non_positive_seek_step_is_rejected() {
    for step in [0.0, -5.0, f64::NAN] {
        let env = EnvConfig {
            seek_step_seconds: Some(step),
            ..EnvConfig::default()
        };
        let err = ConfigLoader::new().load_with_env(env, false).unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::GuardRail(ConfigGuardRailError::InvalidSeekStep(_))
        ));
    }
}

#[test]
fn missing_catalog_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let env = EnvConfig {
        catalog_path: Some(dir.path().join("videos.json")),
        ..EnvConfig::default()
    };
    let err = ConfigLoader::new().load_with_env(env, false).unwrap_err();
    assert!(matches!(
        err,
        ConfigLoadError::GuardRail(ConfigGuardRailError::MissingCatalog { .. })
    ));
}

#[test]
fn server_url_must_be_http() {
    let env = EnvConfig {
        server_url: Some("ftp://media.local".into()),
        ..EnvConfig::default()
    };
    let err = ConfigLoader::new().load_with_env(env, false).unwrap_err();
    assert!(matches!(
        err,
        ConfigLoadError::GuardRail(
            ConfigGuardRailError::UnsupportedServerScheme(_)
        )
    ));

    let env = EnvConfig {
        server_url: Some("not a url".into()),
        ..EnvConfig::default()
    };
    let err = ConfigLoader::new().load_with_env(env, false).unwrap_err();
    assert!(matches!(
        err,
        ConfigLoadError::GuardRail(ConfigGuardRailError::InvalidServerUrl { .. })
    ));
}

#[test]
fn explicit_env_file_feeds_the_environment() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(&dir, "[server]\nport = 6100\n");
    let env_path = dir.path().join("smartcast.env");
    fs::write(&env_path, "SEEK_STEP_SECONDS=12.5\n").unwrap();

    let load = ConfigLoader::new()
        .with_config_path(&config_path)
        .with_env_file(&env_path)
        .load()
        .unwrap();

    assert!(load.config.metadata.env_file_loaded);
    assert_eq!(load.config.player.seek_step_seconds, 12.5);
}

#[test]
fn explicit_missing_env_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(&dir, "");

    let err = ConfigLoader::new()
        .with_config_path(&config_path)
        .with_env_file(dir.path().join("missing.env"))
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::EnvFile(_)));
}
