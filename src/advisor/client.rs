use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::json;

use super::{response_schema, RemedySource};

const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Advisor knobs, read once from the process environment at startup. A
/// missing credential is not a startup failure; it surfaces later as a
/// call failure that the advisor converts into the fallback result.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl AdvisorConfig {
    pub fn from_env() -> Self {
        // API_KEY is the legacy name the first deployment used.
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok()
            .filter(|key| !key.is_empty());

        let model =
            std::env::var("VASTU_ADVISOR_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url = std::env::var("VASTU_ADVISOR_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = std::env::var("VASTU_ADVISOR_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Self {
            api_key,
            model,
            base_url,
            timeout,
        }
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Gemini `generateContent` client. One schema-constrained request per
/// invocation; the client-side timeout bounds the otherwise unbounded
/// round trip so expiry lands on the fallback path like any other
/// transport failure.
pub struct GeminiClient {
    client: Client,
    config: AdvisorConfig,
}

impl GeminiClient {
    pub fn new(config: AdvisorConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to build advisor HTTP client")?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl RemedySource for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            bail!("advisor credential missing (set GEMINI_API_KEY)");
        };

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
            }
        });

        debug!("requesting vastu analysis from {}", self.config.model);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let reply: serde_json::Value = response.json().await?;
        let text = reply["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .context("no candidate text in reasoning-service response")?;

        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_the_deployed_service() {
        let config = AdvisorConfig::default();
        assert_eq!(config.model, "gemini-3-flash-preview");
        assert_eq!(config.timeout, Duration::from_secs(20));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn endpoint_tolerates_trailing_slashes() {
        let config = AdvisorConfig {
            base_url: "https://example.test/".to_string(),
            ..AdvisorConfig::default()
        };
        let client = GeminiClient::new(config).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[tokio::test]
    async fn missing_credential_fails_before_any_network_io() {
        let client = GeminiClient::new(AdvisorConfig::default()).unwrap();
        let err = client.generate("prompt").await.unwrap_err();
        assert!(err.to_string().contains("credential"));
    }
}
