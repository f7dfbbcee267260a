use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Model => write!(f, "model"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

/// Image sent alongside a chat message, e.g. a photo of a bottle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    /// Base64-encoded bytes, with or without a data-URL prefix.
    pub data: String,
    pub mime_type: String,
}

/// Reply recorded when the consultant cannot be reached. Failures are
/// never surfaced as errors, only as this placeholder.
pub const FALLBACK_REPLY: &str =
    "I could not reach the fragrance consultant just now. Please try again in a moment.";

/// Prompt substituted when the user sends an image without text.
pub const DEFAULT_IMAGE_PROMPT: &str = "Please take a look at this perfume bottle.";

/// Ordered consultation history, memory-resident for the lifetime of the
/// view that owns it.
#[derive(Debug)]
pub struct ChatSession {
    id: Uuid,
    history: Vec<Message>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn push(&mut self, role: Role, content: String) -> Message {
        let message = Message {
            role,
            content,
            sent_at: Utc::now(),
        };
        self.history.push(message.clone());
        message
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_messages_in_insertion_order() {
        let mut session = ChatSession::new();
        session.push(Role::User, "Which vetiver suits summer?".to_string());
        session.push(Role::Model, "Try a citrus-forward vetiver.".to_string());

        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history()[0].role, Role::User);
        assert_eq!(session.history()[1].role, Role::Model);
    }
}
