use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::discovery::model::Vibe;
use crate::domain::discovery::services::DiscoverySourceService;
use crate::domain::discovery::session::{FeedSession, FeedSnapshot, FetchToken, Resolution};
use crate::domain::logger::Logger;

/// Shared handle to one feed session. All mutations are serialized
/// behind this lock; the session machine itself is not safe for
/// concurrent mutation.
pub type SharedFeedSession = Arc<Mutex<FeedSession>>;

/// Creates the session handle the discovery use cases share.
pub fn new_shared_session(vibe: Vibe) -> SharedFeedSession {
    Arc::new(Mutex::new(FeedSession::new(vibe)))
}

/// Runs the fetch stamped with `token` and applies the batch unless a
/// newer fetch superseded it while the request was in flight. The lock
/// is released for the duration of the fetch.
pub(crate) async fn run_fetch(
    session: &Mutex<FeedSession>,
    source: &dyn DiscoverySourceService,
    logger: &dyn Logger,
    token: FetchToken,
    vibe: Vibe,
) -> FeedSnapshot {
    let cards = source.fetch_batch(vibe).await;

    let mut session = session.lock().await;
    match session.resolve_fetch(token, cards) {
        Resolution::Applied => {
            logger.info(&format!(
                "Applied discovery batch of {} cards for vibe: {}",
                session.batch_len(),
                vibe
            ));
        }
        Resolution::Stale => {
            logger.debug(&format!("Discarded stale discovery batch for vibe: {}", vibe));
        }
    }
    session.snapshot()
}
