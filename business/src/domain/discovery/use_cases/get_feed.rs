use async_trait::async_trait;

use crate::domain::discovery::session::FeedSnapshot;

/// Read-only snapshot of the feed for presentation adapters.
#[async_trait]
pub trait GetFeedUseCase: Send + Sync {
    async fn execute(&self) -> FeedSnapshot;
}
