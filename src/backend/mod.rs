//! Translation backends behind a uniform contract.
//!
//! A [`Backend`] hides one HTTP translation provider. [`select_backend`]
//! turns a service name plus credentials into a ready-to-use backend
//! without touching the network.

mod deepl;
mod google;
pub mod language;
#[cfg(test)]
mod test_server;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{BackendError, ConfigError};

pub use deepl::{DEFAULT_USAGE_ENDPOINT, DeepL};
pub use google::Google;
pub use language::LanguageRules;

/// Quota snapshot reported by a provider, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageInfo {
    pub used: u64,
    pub limit: u64,
}

impl fmt::Display for UsageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.used, self.limit)
    }
}

/// A remote translation provider.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Human-readable provider name, for display only.
    fn name(&self) -> &'static str;

    /// Translates `text` from `source` to `target`.
    async fn translate(&self, text: &str, source: &str, target: &str)
    -> Result<String, BackendError>;

    /// Queries the account's character quota.
    async fn usage(&self) -> Result<UsageInfo, BackendError>;
}

/// Known provider families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    DeepL,
    Google,
}

impl ServiceKind {
    pub const ALL: [Self; 2] = [Self::DeepL, Self::Google];

    /// Parses a service name, ignoring ASCII case.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
    }

    /// The name used on the command line and in the config file.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DeepL => "deepl",
            Self::Google => "google",
        }
    }
}

/// Optional knobs applied when a backend is constructed.
#[derive(Debug, Clone, Default)]
pub struct BackendOptions {
    /// Whole-request timeout. `None` keeps the HTTP client default.
    pub timeout: Option<Duration>,
    /// Explicit usage endpoint (DeepL only).
    pub usage_endpoint: Option<String>,
}

/// Builds the backend for `name`.
///
/// Fails when the endpoint or API key is empty, or when `name` is not a
/// known provider. Nothing is sent over the network.
pub fn select_backend(
    name: &str,
    endpoint: &str,
    api_key: &str,
    options: &BackendOptions,
) -> Result<Box<dyn Backend>, ConfigError> {
    if endpoint.is_empty() || api_key.is_empty() {
        return Err(ConfigError::MissingCredentials {
            service: name.to_string(),
        });
    }

    let kind = ServiceKind::parse(name).ok_or_else(|| ConfigError::UnknownService(name.into()))?;

    let mut builder = Client::builder();
    if let Some(timeout) = options.timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build()?;

    debug!(service = kind.as_str(), endpoint, "backend selected");

    Ok(match kind {
        ServiceKind::DeepL => Box::new(DeepL::new(
            client,
            endpoint.to_string(),
            api_key.to_string(),
            options.usage_endpoint.clone(),
        )),
        ServiceKind::Google => Box::new(Google::new(
            client,
            endpoint.to_string(),
            api_key.to_string(),
        )),
    })
}

/// Sends `request` and decodes a successful JSON body into `T`.
///
/// Non-success statuses are reported with the body verbatim.
async fn send_json<T: DeserializeOwned>(
    service: &'static str,
    request: RequestBuilder,
) -> Result<T, BackendError> {
    let response = request
        .send()
        .await
        .map_err(|source| BackendError::Network { service, source })?;

    let status = response.status();
    debug!(service, %status, "response received");

    let body = response
        .text()
        .await
        .map_err(|source| BackendError::Network { service, source })?;

    if !status.is_success() {
        return Err(BackendError::Status {
            service,
            status: status.as_u16(),
            body,
        });
    }

    decode(service, &body)
}

fn decode<T: DeserializeOwned>(service: &'static str, body: &str) -> Result<T, BackendError> {
    serde_json::from_str(body).map_err(|source| BackendError::Decode { service, source })
}
