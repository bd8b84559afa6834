//! Service listing command handler.

use anyhow::Result;

use crate::backend::ServiceKind;
use crate::cli::GlobalArgs;
use crate::config::{ConfigFile, ConfigManager, DEFAULT_SERVICE, env_override_name};
use crate::ui::Style;

/// Prints every supported service with its configuration state.
///
/// API keys are never printed, only whether one is available.
pub fn print_services(global: &GlobalArgs) -> Result<()> {
    let manager = ConfigManager::new(global.config.clone())?;
    let config = manager.load_if_present()?.unwrap_or_default();

    println!(
        "{} {}\n",
        Style::header("Translation services"),
        Style::secondary(format!("({})", manager.config_path().display()))
    );

    let default_service = global
        .service
        .as_deref()
        .or(config.t2.service.as_deref())
        .unwrap_or(DEFAULT_SERVICE);

    for kind in ServiceKind::ALL {
        let name = kind.as_str();
        let is_default = name.eq_ignore_ascii_case(default_service);
        println!(
            "  {}{}",
            Style::value(name),
            if is_default {
                format!(" {}", Style::default_marker())
            } else {
                String::new()
            }
        );
        print_service_state(&config, name);
    }

    for name in config.services.keys() {
        if ServiceKind::parse(name).is_none() {
            crate::warn!(
                "{} [services.{name}] is not a supported service and will be ignored",
                Style::warning("Warning:")
            );
        }
    }

    Ok(())
}

fn print_service_state(config: &ConfigFile, name: &str) {
    let env = |var: &str| std::env::var(var).ok().filter(|v| !v.is_empty());
    let service = config.service(name);

    let endpoint = env(&env_override_name(name, "ENDPOINT"))
        .or_else(|| service.map(|s| s.endpoint.clone()).filter(|e| !e.is_empty()));
    let has_key = env(&env_override_name(name, "API_KEY")).is_some()
        || service.is_some_and(|s| s.get_api_key(env).is_some());

    println!(
        "    {} {}",
        Style::label("endpoint:"),
        endpoint.as_deref().map_or_else(
            || Style::warning("(not set)"),
            Style::secondary
        )
    );
    println!(
        "    {} {}",
        Style::label("api_key: "),
        if has_key {
            Style::success("(set)")
        } else {
            Style::warning("(not set)")
        }
    );
}
