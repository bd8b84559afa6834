//! Spinner feedback around slow backend calls.

use async_trait::async_trait;

use super::Spinner;
use crate::backend::{Backend, UsageInfo};
use crate::error::BackendError;

/// Wraps a backend and shows a spinner for the duration of each call.
///
/// The spinner is cleared before the call returns, so it never overlaps
/// the sections written to stdout between calls.
pub struct WithSpinner<'a> {
    inner: &'a dyn Backend,
}

impl<'a> WithSpinner<'a> {
    pub fn new(inner: &'a dyn Backend) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl Backend for WithSpinner<'_> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, BackendError> {
        let spinner = Spinner::new(format!(
            "Translating {source} -> {target} with {}...",
            self.inner.name()
        ));
        let result = self.inner.translate(text, source, target).await;
        spinner.stop();
        result
    }

    async fn usage(&self) -> Result<UsageInfo, BackendError> {
        let spinner = Spinner::new(format!("Fetching {} usage...", self.inner.name()));
        let result = self.inner.usage().await;
        spinner.stop();
        result
    }
}
