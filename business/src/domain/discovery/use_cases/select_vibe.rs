use async_trait::async_trait;

use crate::domain::discovery::model::Vibe;
use crate::domain::discovery::session::FeedSnapshot;

pub struct SelectVibeParams {
    pub vibe: Vibe,
}

/// Switches the feed to a new vibe and fetches a fresh batch for it.
/// Total: failures surface as an `Empty` snapshot, never as an error.
#[async_trait]
pub trait SelectVibeUseCase: Send + Sync {
    async fn execute(&self, params: SelectVibeParams) -> FeedSnapshot;
}
