use std::sync::Arc;

use async_trait::async_trait;

use crate::application::discovery::feed::{SharedFeedSession, run_fetch};
use crate::domain::discovery::services::DiscoverySourceService;
use crate::domain::discovery::session::{FeedSnapshot, SwipeOutcome};
use crate::domain::discovery::use_cases::swipe::{SwipeCardUseCase, SwipeDirection, SwipeParams};
use crate::domain::logger::Logger;

pub struct SwipeCardUseCaseImpl {
    pub session: SharedFeedSession,
    pub source: Arc<dyn DiscoverySourceService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SwipeCardUseCase for SwipeCardUseCaseImpl {
    async fn execute(&self, params: SwipeParams) -> FeedSnapshot {
        // Exhaustion must atomically become a refill fetch for the same
        // vibe, so the token is stamped under the same lock as the swipe.
        let mut refill = None;
        let (outcome, snapshot) = {
            let mut session = self.session.lock().await;
            let outcome = match params.direction {
                SwipeDirection::Right => session.accept(),
                SwipeDirection::Left => session.reject(),
            };
            if outcome == SwipeOutcome::Exhausted {
                let vibe = session.vibe();
                refill = Some((session.begin_fetch(vibe), vibe));
            }
            (outcome, session.snapshot())
        };

        if outcome == SwipeOutcome::Ignored {
            self.logger.debug("Ignored swipe outside a ready deck");
        }

        if let Some((token, vibe)) = refill {
            self.logger
                .info(&format!("Batch exhausted, refilling vibe: {}", vibe));
            return run_fetch(
                &self.session,
                self.source.as_ref(),
                self.logger.as_ref(),
                token,
                vibe,
            )
            .await;
        }
        snapshot
    }
}
