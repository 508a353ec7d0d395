#![allow(dead_code)]

use axum_test::TestServer;
use smartcast_config::{Config, ConfigLoader, EnvConfig};
use smartcast_core::Catalog;
use smartcast_server::{AppState, create_app};

pub fn test_config() -> Config {
    ConfigLoader::new()
        .load_with_env(EnvConfig::default(), false)
        .expect("default configuration is valid")
        .config
}

pub fn server_with(catalog: Catalog, config: Config) -> TestServer {
    let app = create_app(AppState::new(catalog, config));
    TestServer::new(app).expect("test server starts")
}

pub fn sample_server() -> TestServer {
    server_with(Catalog::sample(), test_config())
}
