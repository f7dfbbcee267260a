/// Default model used for all consultation and discovery calls.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Configuration for Gemini API access.
///
/// Built once at wiring time and handed to [`crate::client::GeminiClient::new`];
/// adapters never read the environment themselves.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Load Gemini configuration from environment variables
    ///
    /// Environment variables:
    /// - GEMINI_API_KEY: API key (required)
    /// - GEMINI_MODEL: Model name (default: gemini-3-flash-preview)
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .expect("GEMINI_API_KEY environment variable must be set");
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self { api_key, model }
    }
}
