use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "t2")]
#[command(about = "Double translation: translate to a pivot language and back, then diff")]
#[command(
    long_about = "Use online translation services to translate from a source language \
                  to a pivot language, then translate back to the source language.\n\
                  The diff against the original surfaces the most obvious errors."
)]
#[command(after_help = "Example: t2 --pivot FR \"I will treat my wound.\"")]
#[command(version)]
pub struct Args {
    /// Text to translate (reads from stdin if not provided)
    pub text: Option<String>,

    /// Source language code (default EN-US)
    #[arg(short = 's', long, global = true)]
    pub source: Option<String>,

    /// Pivot language code (default FR)
    #[arg(short = 'p', long, global = true)]
    pub pivot: Option<String>,

    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options shared by every command.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Translation service to use (deepl or google)
    #[arg(short = 't', long = "translation-service", global = true)]
    pub service: Option<String>,

    /// Show only differences
    #[arg(short = 'd', long, global = true)]
    pub diff_only: bool,

    /// Copy result to clipboard
    #[arg(short = 'c', long = "to-clipboard", global = true)]
    pub to_clipboard: bool,

    /// Config file (default is ~/.config/t2/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Suppress status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Display usage of the translation service
    Usage,
    /// Use clipboard as input
    Clipboard,
    /// List configured translation services
    Services,
}
