use async_trait::async_trait;

use super::model::{DiscoveryCard, Vibe};

/// Source port for fetching perfume discovery batches.
///
/// Infallible by contract: transport errors, malformed payloads and
/// "nothing matched" all collapse to an empty batch, which callers treat
/// as a valid terminal outcome rather than an error. Each call returns a
/// full fresh batch; the source is non-deterministic and unpaginated.
#[async_trait]
pub trait DiscoverySourceService: Send + Sync {
    async fn fetch_batch(&self, vibe: Vibe) -> Vec<DiscoveryCard>;
}
