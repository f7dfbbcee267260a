use std::sync::Arc;

use async_trait::async_trait;

use crate::application::discovery::feed::SharedFeedSession;
use crate::domain::discovery::session::FeedSnapshot;
use crate::domain::discovery::use_cases::get_feed::GetFeedUseCase;
use crate::domain::logger::Logger;

pub struct GetFeedUseCaseImpl {
    pub session: SharedFeedSession,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFeedUseCase for GetFeedUseCaseImpl {
    async fn execute(&self) -> FeedSnapshot {
        let snapshot = self.session.lock().await.snapshot();
        self.logger.debug(&format!(
            "Feed snapshot: {:?}, {} visible, {} wishlisted",
            snapshot.state,
            snapshot.visible.len(),
            snapshot.wishlist.len()
        ));
        snapshot
    }
}
