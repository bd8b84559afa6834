//! Usage command handler.

use anyhow::Result;

use super::{backend_for, load_config};
use crate::backend::Backend;
use crate::cli::GlobalArgs;
use crate::ui::{Style, WithSpinner};

/// Prints `Usage: <used>/<limit>` for the selected service.
pub async fn print_usage(global: &GlobalArgs) -> Result<()> {
    let config = load_config(global, None, None)?;
    let backend = backend_for(&config)?;

    let usage = WithSpinner::new(backend.as_ref()).usage().await?;

    println!("{} {usage}", Style::label("Usage:"));
    Ok(())
}
