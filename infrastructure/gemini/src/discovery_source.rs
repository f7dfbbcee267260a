use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;

use business::domain::discovery::errors::DiscoveryError;
use business::domain::discovery::model::{DiscoveryCard, ScentNotes, Vibe, create_card};
use business::domain::discovery::services::DiscoverySourceService;

use crate::client::{GeminiClient, first_candidate_text};

const SYSTEM_PROMPT: &str = r#"You are a fragrance curator for a luxury perfume boutique.
You produce discovery card data for a swipeable recommendation deck.

Core principles:
- Only suggest real, purchasable perfumes
- The image must match the perfume's character (no dark woody image for a fresh scent)
- Descriptions are short, professional and poetic
- Return ONLY a valid JSON array, no additional text"#;

pub struct DiscoverySourceGemini {
    client: GeminiClient,
}

impl DiscoverySourceGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn build_prompt(vibe: Vibe) -> String {
        format!(
            r#"Generate 5 unique and real perfume discovery cards for the "{}" vibe.
The 'imageUrl' MUST be a high-quality Unsplash URL featuring a perfume bottle whose aesthetic matches the name and brand.

Return a JSON array with this EXACT structure:
[
  {{
    "id": "stable-unique-id",
    "name": "Perfume name",
    "brand": "House name",
    "vibe": "{}",
    "imageUrl": "https://images.unsplash.com/...",
    "description": "Short poetic description",
    "notes": {{
      "top": ["note", "note"],
      "heart": ["note"],
      "base": ["note"]
    }}
  }}
]"#,
            vibe, vibe
        )
    }

    fn parse_response(content: &str, vibe: Vibe) -> Result<Vec<DiscoveryCard>, DiscoveryError> {
        // Remove markdown code blocks if present
        let mut json_text = content.trim().to_string();
        if json_text.starts_with("```json") {
            json_text = json_text
                .replace("```json", "")
                .replace("```", "")
                .trim()
                .to_string();
        } else if json_text.starts_with("```") {
            json_text = json_text.replace("```", "").trim().to_string();
        }

        let parsed: Vec<serde_json::Value> =
            serde_json::from_str(&json_text).map_err(|_| DiscoveryError::FetchFailed)?;

        let mut cards = Vec::new();

        for (index, item) in parsed.iter().enumerate() {
            let id = item
                .get("id")
                .and_then(|v| v.as_str())
                .map(|v| v.to_string())
                .unwrap_or_else(|| {
                    format!("gemini-{}-{}", Utc::now().timestamp_millis(), index)
                });

            let name = item
                .get("name")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string();

            let brand = item
                .get("brand")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string();

            // An off-list vibe string means the card still belongs to the
            // batch that requested it.
            let card_vibe = item
                .get("vibe")
                .and_then(|v| v.as_str())
                .and_then(|v| v.parse().ok())
                .unwrap_or(vibe);

            let image_url = item
                .get("imageUrl")
                .and_then(|v| v.as_str())
                .map(|v| v.to_string());

            let description = item
                .get("description")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string();

            let notes = item
                .get("notes")
                .map(|n| ScentNotes {
                    top: string_list(n.get("top")),
                    heart: string_list(n.get("heart")),
                    base: string_list(n.get("base")),
                })
                .unwrap_or_default();

            // Entries that fail validation are skipped, never fatal.
            if let Ok(card) = create_card(id, name, brand, card_vibe, image_url, description, notes)
            {
                cards.push(card);
            }
        }

        Ok(cards)
    }

    async fn request_batch(&self, vibe: Vibe) -> Result<Vec<DiscoveryCard>, DiscoveryError> {
        let body = json!({
            "system_instruction": {"parts": [{"text": SYSTEM_PROMPT}]},
            "contents": [
                {"role": "user", "parts": [{"text": Self::build_prompt(vibe)}]},
            ],
            "generationConfig": {
                "response_mime_type": "application/json",
                "temperature": 0.8,
            },
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
            .map_err(|_| DiscoveryError::FetchFailed)?;

        if !response.status().is_success() {
            return Err(DiscoveryError::FetchFailed);
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| DiscoveryError::FetchFailed)?;

        let content = first_candidate_text(&data).ok_or(DiscoveryError::FetchFailed)?;

        Self::parse_response(content, vibe)
    }
}

fn string_list(value: Option<&serde_json::Value>) -> Vec<String> {
    value
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|s| s.as_str().map(|s| s.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

#[async_trait]
impl DiscoverySourceService for DiscoverySourceGemini {
    async fn fetch_batch(&self, vibe: Vibe) -> Vec<DiscoveryCard> {
        // The feed never sees a structured error; every failure mode is
        // an empty batch.
        self.request_batch(vibe).await.unwrap_or_default()
    }
}
