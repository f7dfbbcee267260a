use reqwest::Client;

use crate::config::GeminiConfig;

/// Shared Gemini HTTP client configuration.
pub struct GeminiClient {
    pub client: Client,
    pub config: GeminiConfig,
    pub base_url: String,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            config,
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.config.api_key
    }

    /// Returns the generateContent endpoint URL for the configured model.
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url, self.config.model
        )
    }
}

/// Extracts the first candidate's text from a generateContent response.
pub fn first_candidate_text(data: &serde_json::Value) -> Option<&str> {
    data["candidates"]
        .as_array()
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate["content"]["parts"].as_array())
        .and_then(|parts| parts.iter().find_map(|part| part["text"].as_str()))
}
