//! Subcommand implementations.

/// Service listing command handler.
pub mod services;

/// Double translation command handler.
pub mod translate;

/// Usage command handler.
pub mod usage;

use anyhow::Result;

use crate::backend::{Backend, BackendOptions, select_backend};
use crate::cli::GlobalArgs;
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};

/// Loads the config file and merges it with the command-line options.
///
/// Prints which file was used, unless in diff-only mode.
pub fn load_config(
    global: &GlobalArgs,
    source: Option<String>,
    pivot: Option<String>,
) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new(global.config.clone())?;
    let file = manager.load_if_present()?;
    if file.is_some() && !global.diff_only {
        crate::status!("Using config file: {}", manager.config_path().display());
    }

    let options = ResolveOptions {
        service: global.service.clone(),
        source,
        pivot,
        timeout_secs: global.timeout,
        diff_only: global.diff_only,
        copy_to_clipboard: global.to_clipboard,
    };

    Ok(resolve_config(&options, &file.unwrap_or_default()))
}

/// Builds the backend selected by `config`.
pub fn backend_for(config: &ResolvedConfig) -> Result<Box<dyn Backend>> {
    let options = BackendOptions {
        timeout: config.timeout,
        usage_endpoint: config.usage_endpoint.clone(),
    };

    Ok(select_backend(
        &config.service_name,
        &config.endpoint,
        &config.api_key,
        &options,
    )?)
}
