use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::double::TranslationConfig;
use crate::error::ConfigError;
use crate::paths;

/// Built-in defaults used when neither the CLI nor the config file decide.
pub const DEFAULT_SERVICE: &str = "deepl";
pub const DEFAULT_SOURCE_LANG: &str = "EN-US";
pub const DEFAULT_PIVOT_LANG: &str = "FR";

/// Default settings in the `[t2]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct T2Config {
    /// Default translation service name.
    pub service: Option<String>,
    /// Default source language code.
    pub source: Option<String>,
    /// Default pivot language code.
    pub pivot: Option<String>,
    /// HTTP request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// Endpoint and credentials of one translation service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// Translate endpoint URL.
    #[serde(default)]
    pub endpoint: String,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
    /// Usage endpoint URL, for services that report quotas.
    #[serde(default)]
    pub usage_endpoint: Option<String>,
}

impl ServiceConfig {
    /// Gets the API key, preferring the `api_key_env` variable over the
    /// inline `api_key`.
    pub fn get_api_key(&self, env: impl Fn(&str) -> Option<String>) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Some(key) = env(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone().filter(|key| !key.is_empty())
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/t2/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub t2: T2Config,
    /// Service configurations keyed by service name.
    #[serde(default)]
    pub services: HashMap<String, ServiceConfig>,
}

impl ConfigFile {
    /// Looks a service up by name, ignoring ASCII case.
    pub fn service(&self, name: &str) -> Option<&ServiceConfig> {
        self.services.get(name).or_else(|| {
            self.services
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, service)| service)
        })
    }
}

/// Resolved configuration after merging CLI arguments, environment and
/// config file. Immutable for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// The selected service name.
    pub service_name: String,
    /// Translate endpoint. Empty when nothing configured it.
    pub endpoint: String,
    /// API key. Empty when nothing configured it.
    pub api_key: String,
    /// Explicit usage endpoint, if any.
    pub usage_endpoint: Option<String>,
    /// HTTP request timeout.
    pub timeout: Option<Duration>,
    /// Settings handed to the translator.
    pub translation: TranslationConfig,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub service: Option<String>,
    pub source: Option<String>,
    pub pivot: Option<String>,
    pub timeout_secs: Option<u64>,
    pub diff_only: bool,
    pub copy_to_clipboard: bool,
}

/// Name of the environment variable overriding `field` for `service`,
/// e.g. `T2_DEEPL_API_KEY`.
pub fn env_override_name(service: &str, field: &str) -> String {
    let service: String = service
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("T2_{service}_{field}")
}

/// Resolves configuration using the process environment.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> ResolvedConfig {
    resolve_config_with_env(options, config_file, |name| std::env::var(name).ok())
}

/// Resolves configuration with an explicit environment lookup.
///
/// Priority: CLI options, then environment overrides (endpoint and key
/// only), then the config file, then built-in defaults. Missing endpoint or
/// key are left empty; backend selection rejects them.
pub fn resolve_config_with_env(
    options: &ResolveOptions,
    config_file: &ConfigFile,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let pick = |cli: &Option<String>, file: &Option<String>, default: &str| {
        cli.as_ref()
            .or(file.as_ref())
            .cloned()
            .unwrap_or_else(|| default.to_string())
    };

    let service_name = pick(&options.service, &config_file.t2.service, DEFAULT_SERVICE);
    let source_lang = pick(&options.source, &config_file.t2.source, DEFAULT_SOURCE_LANG);
    let pivot_lang = pick(&options.pivot, &config_file.t2.pivot, DEFAULT_PIVOT_LANG);

    let service = config_file.service(&service_name);
    let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());

    let endpoint = non_empty(env(&env_override_name(&service_name, "ENDPOINT")))
        .or_else(|| service.map(|s| s.endpoint.clone()))
        .unwrap_or_default();

    let api_key = non_empty(env(&env_override_name(&service_name, "API_KEY")))
        .or_else(|| service.and_then(|s| s.get_api_key(&env)))
        .unwrap_or_default();

    let timeout = options
        .timeout_secs
        .or(config_file.t2.timeout_secs)
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs);

    ResolvedConfig {
        service_name,
        endpoint,
        api_key,
        usage_endpoint: service.and_then(|s| s.usage_endpoint.clone()),
        timeout,
        translation: TranslationConfig {
            source_lang,
            pivot_lang,
            diff_only: options.diff_only,
            copy_to_clipboard: options.copy_to_clipboard,
        },
    }
}

/// Loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
    explicit: bool,
}

impl ConfigManager {
    /// Uses `path` when given, otherwise `$XDG_CONFIG_HOME/t2/config.toml`
    /// or `~/.config/t2/config.toml`.
    pub fn new(path: Option<PathBuf>) -> anyhow::Result<Self> {
        Ok(match path {
            Some(config_path) => Self {
                config_path,
                explicit: true,
            },
            None => Self {
                config_path: paths::config_file()?,
                explicit: false,
            },
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile, ConfigError> {
        let contents = fs::read_to_string(&self.config_path).map_err(|source| ConfigError::Read {
            path: self.config_path.clone(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: self.config_path.clone(),
            source,
        })
    }

    /// Loads the file if there is one.
    ///
    /// A missing default file yields `None`; a missing file that was
    /// explicitly requested is an error.
    pub fn load_if_present(&self) -> Result<Option<ConfigFile>, ConfigError> {
        if !self.explicit && !self.config_path.exists() {
            return Ok(None);
        }
        self.load().map(Some)
    }
}
