use async_trait::async_trait;

use super::errors::ConsultationError;
use super::model::ImageAttachment;

/// Service port for the conversational fragrance consultant.
#[async_trait]
pub trait ConsultantService: Send + Sync {
    async fn reply(
        &self,
        message: &str,
        attachment: Option<ImageAttachment>,
    ) -> Result<String, ConsultationError>;
}
