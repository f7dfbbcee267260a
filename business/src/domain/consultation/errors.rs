#[derive(Debug, thiserror::Error)]
pub enum ConsultationError {
    #[error("consultation.empty_message")]
    EmptyMessage,
    #[error("consultation.generation_failed")]
    GenerationFailed,
}
