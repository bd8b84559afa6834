//! Error kinds surfaced by the library layer.
//!
//! Nothing in the library terminates the process: every fallible operation
//! returns one of these to its caller, and only `main` decides to exit.

use std::path::PathBuf;

use thiserror::Error;

/// Invalid or incomplete configuration, detected before any network call.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Missing or incomplete configuration for '{service}': endpoint and API key are required\n\n\
         Set them under [services.{service}] in the config file,\n\
         or export {} and {}",
        crate::config::env_override_name(.service, "ENDPOINT"),
        crate::config::env_override_name(.service, "API_KEY")
    )]
    MissingCredentials { service: String },

    #[error("Unknown translation service: '{0}' (expected 'deepl' or 'google')")]
    UnknownService(String),

    #[error("Failed to read config file: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to build HTTP client")]
    HttpClient(#[from] reqwest::Error),
}

/// Failure talking to a translation provider.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("{service}: request failed")]
    Network {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service}: status: {status} body: {body}")]
    Status {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("{service}: unexpected response")]
    Decode {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{service}: usage is not supported. {hint}")]
    UsageNotSupported {
        service: &'static str,
        hint: &'static str,
    },
}

/// The system clipboard could not be reached.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(#[from] arboard::Error),
}

/// Errors raised while running a double translation.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
