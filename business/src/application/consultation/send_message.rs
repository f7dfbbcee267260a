use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::consultation::errors::ConsultationError;
use crate::domain::consultation::model::{
    ChatSession, DEFAULT_IMAGE_PROMPT, FALLBACK_REPLY, Message, Role,
};
use crate::domain::consultation::services::ConsultantService;
use crate::domain::consultation::use_cases::send_message::{SendMessageParams, SendMessageUseCase};
use crate::domain::logger::Logger;

pub struct SendMessageUseCaseImpl {
    pub session: Arc<Mutex<ChatSession>>,
    pub consultant: Arc<dyn ConsultantService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SendMessageUseCase for SendMessageUseCaseImpl {
    async fn execute(&self, params: SendMessageParams) -> Result<Message, ConsultationError> {
        let text = params.text.trim();
        if text.is_empty() && params.attachment.is_none() {
            return Err(ConsultationError::EmptyMessage);
        }
        let text = if text.is_empty() {
            DEFAULT_IMAGE_PROMPT
        } else {
            text
        };

        // Lock held across the remote call so interleaved sends cannot
        // scramble the history order.
        let mut session = self.session.lock().await;
        session.push(Role::User, text.to_string());

        let reply = match self.consultant.reply(text, params.attachment).await {
            Ok(reply) => reply,
            Err(err) => {
                self.logger
                    .warn(&format!("Consultant reply failed: {}", err));
                FALLBACK_REPLY.to_string()
            }
        };

        Ok(session.push(Role::Model, reply))
    }
}
