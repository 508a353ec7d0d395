//! Shared configuration library for SmartCast.
//!
//! Both the catalog server and the client load their settings through
//! [`ConfigLoader`], so file locations, environment variable names, defaults
//! and guard rails live in one place. Precedence, lowest first: built-in
//! defaults, `smartcast.toml`, environment (including `.env`), then whatever
//! CLI overrides the binary applies to the returned [`Config`].
#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{
    CatalogConfig, Config, ConfigMetadata, CorsConfig, PlayerConfig,
    ServerConfig,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
