use std::sync::Arc;

use async_trait::async_trait;

use crate::application::discovery::feed::{SharedFeedSession, run_fetch};
use crate::domain::discovery::services::DiscoverySourceService;
use crate::domain::discovery::session::FeedSnapshot;
use crate::domain::discovery::use_cases::refresh::RefreshFeedUseCase;
use crate::domain::logger::Logger;

pub struct RefreshFeedUseCaseImpl {
    pub session: SharedFeedSession,
    pub source: Arc<dyn DiscoverySourceService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RefreshFeedUseCase for RefreshFeedUseCaseImpl {
    async fn execute(&self) -> FeedSnapshot {
        let (token, vibe) = {
            let mut session = self.session.lock().await;
            let vibe = session.vibe();
            (session.begin_fetch(vibe), vibe)
        };

        self.logger
            .info(&format!("Refreshing discovery feed for vibe: {}", vibe));
        run_fetch(
            &self.session,
            self.source.as_ref(),
            self.logger.as_ref(),
            token,
            vibe,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::discovery::feed::new_shared_session;
    use crate::domain::discovery::model::{DiscoveryCard, ScentNotes, Vibe, create_card};
    use crate::domain::discovery::session::FeedState;
    use mockall::mock;

    mock! {
        pub DiscoverySource {}

        #[async_trait]
        impl DiscoverySourceService for DiscoverySource {
            async fn fetch_batch(&self, vibe: Vibe) -> Vec<DiscoveryCard>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn card(id: &str) -> DiscoveryCard {
        create_card(
            id.to_string(),
            format!("Perfume {}", id),
            "Maison Test".to_string(),
            Vibe::Spicy,
            None,
            "A test scent.".to_string(),
            ScentNotes::default(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn should_replace_batch_but_keep_wishlist() {
        let session = new_shared_session(Vibe::Spicy);
        {
            let mut locked = session.lock().await;
            let token = locked.begin_fetch(Vibe::Spicy);
            locked.resolve_fetch(token, vec![card("old-1"), card("old-2")]);
            locked.accept();
        }

        let mut source = MockDiscoverySource::new();
        source
            .expect_fetch_batch()
            .withf(|vibe| *vibe == Vibe::Spicy)
            .times(1)
            .returning(|_| vec![card("new-1"), card("new-2"), card("new-3")]);

        let use_case = RefreshFeedUseCaseImpl {
            session,
            source: Arc::new(source),
            logger: mock_logger(),
        };

        let snapshot = use_case.execute().await;

        assert_eq!(snapshot.state, FeedState::Ready);
        assert_eq!(snapshot.cursor, 0);
        assert_eq!(snapshot.batch_len, 3);
        assert_eq!(snapshot.visible[0].id, "new-1");
        assert_eq!(snapshot.wishlist.len(), 1);
        assert_eq!(snapshot.wishlist[0].id, "old-1");
    }

    #[tokio::test]
    async fn should_allow_retry_out_of_empty_state() {
        let session = new_shared_session(Vibe::Spicy);
        {
            let mut locked = session.lock().await;
            let token = locked.begin_fetch(Vibe::Spicy);
            locked.resolve_fetch(token, vec![]);
        }

        let mut source = MockDiscoverySource::new();
        source
            .expect_fetch_batch()
            .times(1)
            .returning(|_| vec![card("retry-1")]);

        let use_case = RefreshFeedUseCaseImpl {
            session,
            source: Arc::new(source),
            logger: mock_logger(),
        };

        let snapshot = use_case.execute().await;
        assert_eq!(snapshot.state, FeedState::Ready);
        assert_eq!(snapshot.visible[0].id, "retry-1");
    }
}
