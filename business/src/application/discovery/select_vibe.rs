use std::sync::Arc;

use async_trait::async_trait;

use crate::application::discovery::feed::{SharedFeedSession, run_fetch};
use crate::domain::discovery::services::DiscoverySourceService;
use crate::domain::discovery::session::FeedSnapshot;
use crate::domain::discovery::use_cases::select_vibe::{SelectVibeParams, SelectVibeUseCase};
use crate::domain::logger::Logger;

pub struct SelectVibeUseCaseImpl {
    pub session: SharedFeedSession,
    pub source: Arc<dyn DiscoverySourceService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SelectVibeUseCase for SelectVibeUseCaseImpl {
    async fn execute(&self, params: SelectVibeParams) -> FeedSnapshot {
        self.logger
            .info(&format!("Selecting discovery vibe: {}", params.vibe));

        let token = self.session.lock().await.begin_fetch(params.vibe);
        run_fetch(
            &self.session,
            self.source.as_ref(),
            self.logger.as_ref(),
            token,
            params.vibe,
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
    use tokio::sync::oneshot;

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

    fn card(id: &str, vibe: Vibe) -> DiscoveryCard {
        create_card(
            id.to_string(),
            format!("Perfume {}", id),
            "Maison Test".to_string(),
            vibe,
            None,
            "A test scent.".to_string(),
            ScentNotes::default(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn should_present_fresh_batch_for_selected_vibe() {
        let mut source = MockDiscoverySource::new();
        source
            .expect_fetch_batch()
            .withf(|vibe| *vibe == Vibe::Floral)
            .times(1)
            .returning(|vibe| vec![card("f1", vibe), card("f2", vibe)]);

        let use_case = SelectVibeUseCaseImpl {
            session: new_shared_session(Vibe::Fresh),
            source: Arc::new(source),
            logger: mock_logger(),
        };

        let snapshot = use_case
            .execute(SelectVibeParams { vibe: Vibe::Floral })
            .await;

        assert_eq!(snapshot.state, FeedState::Ready);
        assert_eq!(snapshot.vibe, Vibe::Floral);
        assert_eq!(snapshot.cursor, 0);
        assert_eq!(snapshot.batch_len, 2);
        assert_eq!(snapshot.visible[0].id, "f1");
    }

    #[tokio::test]
    async fn should_report_empty_when_source_returns_nothing() {
        let mut source = MockDiscoverySource::new();
        source.expect_fetch_batch().returning(|_| vec![]);

        let use_case = SelectVibeUseCaseImpl {
            session: new_shared_session(Vibe::Fresh),
            source: Arc::new(source),
            logger: mock_logger(),
        };

        let snapshot = use_case
            .execute(SelectVibeParams { vibe: Vibe::Woody })
            .await;

        assert_eq!(snapshot.state, FeedState::Empty);
        assert!(snapshot.visible.is_empty());
    }

    /// Source whose Woody fetch blocks until released, so tests can
    /// interleave a second selection while the first is in flight.
    struct GatedSource {
        started: std::sync::Mutex<Option<oneshot::Sender<()>>>,
        gate: tokio::sync::Mutex<Option<oneshot::Receiver<()>>>,
    }

    #[async_trait]
    impl DiscoverySourceService for GatedSource {
        async fn fetch_batch(&self, vibe: Vibe) -> Vec<DiscoveryCard> {
            if vibe == Vibe::Woody {
                if let Some(started) = self.started.lock().unwrap().take() {
                    let _ = started.send(());
                }
                if let Some(gate) = self.gate.lock().await.take() {
                    let _ = gate.await;
                }
                vec![card("w1", vibe), card("w2", vibe), card("w3", vibe)]
            } else {
                vec![card("s1", vibe)]
            }
        }
    }

    #[tokio::test]
    async fn should_disregard_slow_fetch_superseded_by_newer_vibe() {
        let (started_tx, started_rx) = oneshot::channel();
        let (gate_tx, gate_rx) = oneshot::channel();

        let session = new_shared_session(Vibe::Woody);
        let use_case = Arc::new(SelectVibeUseCaseImpl {
            session: session.clone(),
            source: Arc::new(GatedSource {
                started: std::sync::Mutex::new(Some(started_tx)),
                gate: tokio::sync::Mutex::new(Some(gate_rx)),
            }),
            logger: mock_logger(),
        });

        let slow = tokio::spawn({
            let use_case = use_case.clone();
            async move { use_case.execute(SelectVibeParams { vibe: Vibe::Woody }).await }
        });
        started_rx.await.unwrap();

        let snapshot = use_case
            .execute(SelectVibeParams { vibe: Vibe::Spicy })
            .await;
        assert_eq!(snapshot.vibe, Vibe::Spicy);
        assert_eq!(snapshot.visible[0].id, "s1");

        // Release the Woody fetch; its result must be thrown away.
        gate_tx.send(()).unwrap();
        let stale_view = slow.await.unwrap();
        assert_eq!(stale_view.vibe, Vibe::Spicy);
        assert_eq!(stale_view.batch_len, 1);
        assert_eq!(stale_view.visible[0].id, "s1");

        let final_state = session.lock().await.snapshot();
        assert_eq!(final_state.vibe, Vibe::Spicy);
        assert_eq!(final_state.visible[0].id, "s1");
    }
}
