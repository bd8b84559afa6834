use std::process;

use clap::Parser;

use t2_cli::cli::commands::{services, translate, usage};
use t2_cli::cli::{Args, Command};
use t2_cli::error::{BackendError, ClipboardError, ConfigError, Error};
use t2_cli::output::{self, OutputConfig};
use t2_cli::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(
        args.global.quiet,
        args.global.no_color,
    ));
    t2_cli::logging::init(args.global.verbose);

    if let Err(err) = run(args).await {
        eprintln!("{} {err:#}", Style::error("Error:"));
        process::exit(exit_code(&err));
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Some(Command::Usage) => usage::print_usage(&args.global).await,
        Some(Command::Services) => services::print_services(&args.global),
        Some(Command::Clipboard) => {
            translate::run_translate(translate::TranslateOptions {
                input: translate::TextSource::Clipboard,
                source: args.source,
                pivot: args.pivot,
                global: args.global,
            })
            .await
        }
        None => {
            translate::run_translate(translate::TranslateOptions {
                input: translate::TextSource::Argument(args.text),
                source: args.source,
                pivot: args.pivot,
                global: args.global,
            })
            .await
        }
    }
}

/// Input problems and anything unclassified.
const GENERAL_FAILURE: i32 = 1;

/// Maps the error chain to a sysexits code.
fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if cause.is::<ConfigError>() {
            return exitcode::CONFIG;
        }
        if cause.is::<BackendError>() || cause.is::<ClipboardError>() {
            return exitcode::UNAVAILABLE;
        }
        if let Some(run_error) = cause.downcast_ref::<Error>() {
            return match run_error {
                Error::Backend(_) | Error::Clipboard(_) => exitcode::UNAVAILABLE,
                Error::Output(_) => exitcode::IOERR,
            };
        }
    }
    GENERAL_FAILURE
}
