use async_trait::async_trait;
use serde_json::json;

use business::domain::dupe::errors::DupeError;
use business::domain::dupe::model::{DupeMatch, create_dupe_match};
use business::domain::dupe::services::DupeFinderService;

use crate::client::{GeminiClient, first_candidate_text};

pub struct DupeFinderGemini {
    client: GeminiClient,
}

impl DupeFinderGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn build_prompt(perfume_name: &str) -> String {
        format!(
            r#"Find 3 high-quality affordable dupes for: "{}".

Return a JSON array with this EXACT structure:
[
  {{
    "dupeName": "Name of the dupe",
    "brand": "House name",
    "similarity": "How close it smells, e.g. 90% - same drydown",
    "pricePoint": "$ | $$ | $$$",
    "reason": "Why it works as a dupe"
  }}
]"#,
            perfume_name
        )
    }

    fn parse_response(content: &str) -> Result<Vec<DupeMatch>, DupeError> {
        let json_match = regex::Regex::new(r"\[[\s\S]*\]")
            .ok()
            .and_then(|re| re.find(content));

        let json_str = json_match.map(|m| m.as_str()).ok_or(DupeError::SearchFailed)?;

        let parsed: Vec<serde_json::Value> =
            serde_json::from_str(json_str).map_err(|_| DupeError::SearchFailed)?;

        let matches = parsed
            .iter()
            .filter_map(|item| {
                create_dupe_match(
                    item.get("dupeName")?.as_str()?.to_string(),
                    item.get("brand")?.as_str()?.to_string(),
                    item.get("similarity")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                    item.get("pricePoint")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                    item.get("reason")
                        .and_then(|v| v.as_str())
                        .unwrap_or("")
                        .to_string(),
                )
                .ok()
            })
            .collect();

        Ok(matches)
    }
}

#[async_trait]
impl DupeFinderService for DupeFinderGemini {
    async fn find(&self, perfume_name: &str) -> Result<Vec<DupeMatch>, DupeError> {
        let body = json!({
            "contents": [
                {"role": "user", "parts": [{"text": Self::build_prompt(perfume_name)}]},
            ],
            "generationConfig": {
                "response_mime_type": "application/json",
                "temperature": 0.4,
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
            .map_err(|_| DupeError::SearchFailed)?;

        if !response.status().is_success() {
            return Err(DupeError::SearchFailed);
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| DupeError::SearchFailed)?;

        let content = first_candidate_text(&data).ok_or(DupeError::SearchFailed)?;

        Self::parse_response(content)
    }
}
