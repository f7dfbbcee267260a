use async_trait::async_trait;
use serde_json::json;

use business::domain::consultation::errors::ConsultationError;
use business::domain::consultation::model::ImageAttachment;
use business::domain::consultation::services::ConsultantService;

use crate::client::{GeminiClient, first_candidate_text};

const SYSTEM_INSTRUCTION: &str = r#"You are the fragrance consultant of a luxury perfume boutique.
Advise users briefly and precisely.

Expertise:
1. Explaining note pyramids (top, heart, base).
2. Matching perfumes to occasions and seasons.
3. Pointing out dupes and affordable alternatives.
4. Assessing perfume bottles from photos.

Keep answers direct and compact."#;

pub struct ConsultantGemini {
    client: GeminiClient,
}

impl ConsultantGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Gemini expects bare base64; uploads often arrive as data URLs
    /// with embedded line breaks.
    fn to_clean_base64(raw: &str) -> String {
        let stripped = regex::Regex::new(r"^data:[a-z]+/[a-z0-9.+-]+;base64,")
            .map(|re| re.replace(raw, "").to_string())
            .unwrap_or_else(|_| raw.to_string());
        stripped.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

#[async_trait]
impl ConsultantService for ConsultantGemini {
    async fn reply(
        &self,
        message: &str,
        attachment: Option<ImageAttachment>,
    ) -> Result<String, ConsultationError> {
        let mut parts = vec![json!({"text": message})];
        if let Some(attachment) = attachment {
            parts.push(json!({
                "inline_data": {
                    "mime_type": attachment.mime_type,
                    "data": Self::to_clean_base64(&attachment.data),
                }
            }));
        }

        let body = json!({
            "system_instruction": {"parts": [{"text": SYSTEM_INSTRUCTION}]},
            "contents": [
                {"role": "user", "parts": parts},
            ],
        });

        let response = self
            .client
            .client
            .post(self.client.generate_content_url())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", self.client.api_key())
            .json(&body)
            .send()
            .await
            .map_err(|_| ConsultationError::GenerationFailed)?;

        if !response.status().is_success() {
            return Err(ConsultationError::GenerationFailed);
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| ConsultationError::GenerationFailed)?;

        let text = first_candidate_text(&data).ok_or(ConsultationError::GenerationFailed)?;

        Ok(text.to_string())
    }
}
