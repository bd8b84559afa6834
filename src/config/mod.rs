//! Configuration file loading and CLI/file/environment resolution.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_PIVOT_LANG, DEFAULT_SERVICE, DEFAULT_SOURCE_LANG,
    ResolveOptions, ResolvedConfig, ServiceConfig, T2Config, env_override_name, resolve_config,
    resolve_config_with_env,
};
