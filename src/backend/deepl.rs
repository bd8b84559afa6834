//! DeepL API v2 client.

use std::borrow::Cow;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::language::LanguageRules;
use super::{Backend, UsageInfo, send_json};
use crate::error::BackendError;

const NAME: &str = "DeepL";

/// Usage endpoint of the free API tier, used when none can be derived.
pub const DEFAULT_USAGE_ENDPOINT: &str = "https://api-free.deepl.com/v2/usage";

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    translations: Vec<Fragment>,
}

#[derive(Debug, Deserialize)]
struct Fragment {
    #[serde(default)]
    detected_source_language: Option<String>,
    text: String,
}

#[derive(Debug, Deserialize)]
struct UsageResponse {
    character_count: u64,
    character_limit: u64,
}

pub struct DeepL {
    client: Client,
    endpoint: String,
    usage_endpoint: String,
    api_key: String,
}

impl DeepL {
    const RULES: LanguageRules = LanguageRules::DEEPL;

    pub fn new(
        client: Client,
        endpoint: String,
        api_key: String,
        usage_endpoint: Option<String>,
    ) -> Self {
        let usage_endpoint = usage_endpoint.unwrap_or_else(|| derive_usage_endpoint(&endpoint));
        Self {
            client,
            endpoint,
            usage_endpoint,
            api_key,
        }
    }

    fn authorization(&self) -> String {
        format!("DeepL-Auth-Key {}", self.api_key)
    }

    /// Form fields for a translate request, with language codes normalized.
    fn form<'a>(
        text: &'a str,
        source: &'a str,
        target: &'a str,
    ) -> [(&'static str, Cow<'a, str>); 3] {
        [
            ("text", Cow::Borrowed(text)),
            ("source_lang", Self::RULES.source(source)),
            ("target_lang", Self::RULES.target(target)),
        ]
    }
}

#[async_trait]
impl Backend for DeepL {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<String, BackendError> {
        let form = Self::form(text, source, target);
        debug!(
            service = NAME,
            url = %self.endpoint,
            source_lang = %form[1].1,
            target_lang = %form[2].1,
            "sending translate request"
        );

        let request = self
            .client
            .post(&self.endpoint)
            .header("Authorization", self.authorization())
            .form(&form);

        let response: TranslateResponse = send_json(NAME, request).await?;
        Ok(join_fragments(response))
    }

    async fn usage(&self) -> Result<UsageInfo, BackendError> {
        debug!(service = NAME, url = %self.usage_endpoint, "sending usage request");

        let request = self
            .client
            .get(&self.usage_endpoint)
            .header("Authorization", self.authorization());

        let response: UsageResponse = send_json(NAME, request).await?;
        Ok(UsageInfo {
            used: response.character_count,
            limit: response.character_limit,
        })
    }
}

fn join_fragments(response: TranslateResponse) -> String {
    if let Some(detected) = response
        .translations
        .first()
        .and_then(|f| f.detected_source_language.as_deref())
    {
        debug!(service = NAME, detected, "detected source language");
    }
    response.translations.into_iter().map(|f| f.text).collect()
}

/// `https://api.deepl.com/v2/translate` becomes `https://api.deepl.com/v2/usage`.
fn derive_usage_endpoint(endpoint: &str) -> String {
    endpoint
        .trim_end_matches('/')
        .strip_suffix("/translate")
        .map_or_else(|| DEFAULT_USAGE_ENDPOINT.to_string(), |base| format!("{base}/usage"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::backend::decode;
    use crate::backend::test_server::{client, serve_once};

    #[test]
    fn test_form_collapses_regional_english_source() {
        for source in ["EN-GB", "EN-US"] {
            let form = DeepL::form("Hello", source, "FR");
            assert_eq!(form[0], ("text", Cow::Borrowed("Hello")));
            assert_eq!(form[1].1, "EN");
            assert_eq!(form[2].1, "FR");
        }
    }

    #[test]
    fn test_form_keeps_regional_english_target() {
        let form = DeepL::form("Bonjour", "FR", "EN-US");
        assert_eq!(form[1].1, "FR");
        assert_eq!(form[2].1, "EN-US");
    }

    #[test]
    fn test_join_multiple_fragments_without_separator() {
        let body = r#"{"translations":[
            {"detected_source_language":"EN","text":"Hello, "},
            {"detected_source_language":"EN","text":"world."}
        ]}"#;
        let response: TranslateResponse = decode(NAME, body).unwrap();
        assert_eq!(join_fragments(response), "Hello, world.");
    }

    #[test]
    fn test_join_tolerates_missing_detected_language() {
        let body = r#"{"translations":[{"text":"Salut"}]}"#;
        let response: TranslateResponse = decode(NAME, body).unwrap();
        assert_eq!(join_fragments(response), "Salut");
    }

    #[test]
    fn test_empty_translations_yield_empty_text() {
        let response: TranslateResponse = decode(NAME, r#"{"translations":[]}"#).unwrap();
        assert_eq!(join_fragments(response), "");
    }

    #[test]
    fn test_malformed_translate_response() {
        let result: Result<TranslateResponse, _> = decode(NAME, r#"{"message":"oops"}"#);
        assert!(matches!(result, Err(BackendError::Decode { .. })));
    }

    #[test]
    fn test_usage_response_decoding() {
        let body = r#"{"character_count":180118,"character_limit":1250000}"#;
        let usage: UsageResponse = decode(NAME, body).unwrap();
        assert_eq!(usage.character_count, 180_118);
        assert_eq!(usage.character_limit, 1_250_000);
    }

    #[test]
    fn test_derive_usage_endpoint() {
        assert_eq!(
            derive_usage_endpoint("https://api.deepl.com/v2/translate"),
            "https://api.deepl.com/v2/usage"
        );
        assert_eq!(
            derive_usage_endpoint("https://api-free.deepl.com/v2/translate/"),
            "https://api-free.deepl.com/v2/usage"
        );
        assert_eq!(
            derive_usage_endpoint("http://localhost:8080/proxy"),
            DEFAULT_USAGE_ENDPOINT
        );
    }

    #[test]
    fn test_explicit_usage_endpoint_wins() {
        let deepl = DeepL::new(
            Client::new(),
            "https://api.deepl.com/v2/translate".to_string(),
            "key".to_string(),
            Some("http://localhost:9000/usage".to_string()),
        );
        assert_eq!(deepl.usage_endpoint, "http://localhost:9000/usage");
        assert_eq!(deepl.authorization(), "DeepL-Auth-Key key");
    }

    fn deepl_at(base: &str) -> DeepL {
        DeepL::new(
            client(),
            format!("{base}/v2/translate"),
            "k1".to_string(),
            None,
        )
    }

    #[tokio::test]
    async fn test_translate_posts_form_with_auth_header() {
        let (base, server) = serve_once(
            200,
            r#"{"translations":[{"detected_source_language":"EN","text":"Salut"}]}"#,
        )
        .await;

        let text = deepl_at(&base)
            .translate("Hi there", "EN-GB", "EN-US")
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert_eq!(text, "Salut");
        assert_eq!(request.request_line, "POST /v2/translate HTTP/1.1");
        assert_eq!(request.header("authorization"), Some("DeepL-Auth-Key k1"));
        assert_eq!(
            request.header("content-type"),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(
            request.body,
            "text=Hi+there&source_lang=EN&target_lang=EN-US"
        );
    }

    #[tokio::test]
    async fn test_error_status_keeps_body_verbatim() {
        let (base, server) = serve_once(456, "no quota!").await;

        let err = deepl_at(&base)
            .translate("Hi", "EN-US", "FR")
            .await
            .unwrap_err();
        server.await.unwrap();

        match &err {
            BackendError::Status {
                service,
                status,
                body,
            } => {
                assert_eq!(*service, "DeepL");
                assert_eq!(*status, 456);
                assert_eq!(body, "no quota!");
            }
            other => panic!("expected Status, got {other:?}"),
        }
        assert_eq!(err.to_string(), "DeepL: status: 456 body: no quota!");
    }

    #[tokio::test]
    async fn test_success_with_unexpected_body_is_decode_error() {
        let (base, server) = serve_once(200, r#"{"message":"oops"}"#).await;

        let err = deepl_at(&base)
            .translate("Hi", "EN-US", "FR")
            .await
            .unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, BackendError::Decode { service: "DeepL", .. }));
    }

    #[tokio::test]
    async fn test_usage_gets_derived_endpoint() {
        let (base, server) = serve_once(
            200,
            r#"{"character_count":180118,"character_limit":1250000}"#,
        )
        .await;

        let usage = deepl_at(&base).usage().await.unwrap();
        let request = server.await.unwrap();

        assert_eq!(
            usage,
            UsageInfo {
                used: 180_118,
                limit: 1_250_000
            }
        );
        assert_eq!(request.request_line, "GET /v2/usage HTTP/1.1");
        assert_eq!(request.header("authorization"), Some("DeepL-Auth-Key k1"));
        assert!(request.body.is_empty());
    }

    #[tokio::test]
    async fn test_usage_error_status_is_reported() {
        let (base, server) = serve_once(403, "Wrong endpoint").await;

        let err = deepl_at(&base).usage().await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, BackendError::Status { status: 403, .. }));
    }
}
