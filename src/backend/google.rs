//! Google Cloud Translation API v2 client.

use std::borrow::Cow;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::language::LanguageRules;
use super::{Backend, UsageInfo, send_json};
use crate::error::BackendError;

const NAME: &str = "Google";

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    data: TranslationList,
}

#[derive(Debug, Deserialize)]
struct TranslationList {
    translations: Vec<Fragment>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Fragment {
    #[serde(default)]
    model: Option<String>,
    translated_text: String,
}

pub struct Google {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl Google {
    const RULES: LanguageRules = LanguageRules::GOOGLE;

    pub const fn new(client: Client, endpoint: String, api_key: String) -> Self {
        Self {
            client,
            endpoint,
            api_key,
        }
    }

    fn form<'a>(
        &'a self,
        text: &'a str,
        source: &'a str,
        target: &'a str,
    ) -> [(&'static str, Cow<'a, str>); 5] {
        [
            ("q", Cow::Borrowed(text)),
            ("target", Self::RULES.target(target)),
            ("format", Cow::Borrowed("text")),
            ("source", Self::RULES.source(source)),
            ("key", Cow::Borrowed(self.api_key.as_str())),
        ]
    }
}

#[async_trait]
impl Backend for Google {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, BackendError> {
        let form = self.form(text, source, target);
        debug!(
            service = NAME,
            url = %self.endpoint,
            source_lang = %form[3].1,
            target_lang = %form[1].1,
            "sending translate request"
        );

        let request = self.client.post(&self.endpoint).form(&form);

        let response: TranslateResponse = send_json(NAME, request).await?;
        Ok(join_fragments(response))
    }

    async fn usage(&self) -> Result<UsageInfo, BackendError> {
        Err(BackendError::UsageNotSupported {
            service: NAME,
            hint: "Check Google Cloud Console for usages.",
        })
    }
}

fn join_fragments(response: TranslateResponse) -> String {
    if let Some(model) = response
        .data
        .translations
        .first()
        .and_then(|f| f.model.as_deref())
    {
        debug!(service = NAME, model, "translation model");
    }
    response
        .data
        .translations
        .into_iter()
        .map(|f| f.translated_text)
        .collect()
}
