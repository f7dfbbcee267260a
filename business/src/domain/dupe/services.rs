use async_trait::async_trait;

use super::errors::DupeError;
use super::model::DupeMatch;

/// Service port for finding affordable alternatives to a perfume.
#[async_trait]
pub trait DupeFinderService: Send + Sync {
    async fn find(&self, perfume_name: &str) -> Result<Vec<DupeMatch>, DupeError>;
}
