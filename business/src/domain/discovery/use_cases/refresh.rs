use async_trait::async_trait;

use crate::domain::discovery::session::FeedSnapshot;

/// Discards the current batch and fetches a new one for the same vibe.
/// The wishlist is untouched.
#[async_trait]
pub trait RefreshFeedUseCase: Send + Sync {
    async fn execute(&self) -> FeedSnapshot;
}
