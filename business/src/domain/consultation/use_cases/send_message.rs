use async_trait::async_trait;

use crate::domain::consultation::errors::ConsultationError;
use crate::domain::consultation::model::{ImageAttachment, Message};

pub struct SendMessageParams {
    pub text: String,
    pub attachment: Option<ImageAttachment>,
}

/// Appends the user's message to the session history and returns the
/// consultant's reply. Remote failures come back as a fallback reply,
/// not an error; only an empty submission is rejected.
#[async_trait]
pub trait SendMessageUseCase: Send + Sync {
    async fn execute(&self, params: SendMessageParams) -> Result<Message, ConsultationError>;
}
