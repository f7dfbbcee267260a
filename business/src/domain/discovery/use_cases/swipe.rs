use async_trait::async_trait;

use crate::domain::discovery::session::FeedSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Pass on the card.
    Left,
    /// Add the card to the wishlist.
    Right,
}

pub struct SwipeParams {
    pub direction: SwipeDirection,
}

/// Consumes the card under the cursor. Exhausting the batch triggers an
/// automatic refill fetch for the unchanged vibe.
#[async_trait]
pub trait SwipeCardUseCase: Send + Sync {
    async fn execute(&self, params: SwipeParams) -> FeedSnapshot;
}
