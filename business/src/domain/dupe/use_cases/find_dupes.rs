use async_trait::async_trait;

use crate::domain::dupe::errors::DupeError;
use crate::domain::dupe::model::DupeMatch;

pub struct FindDupesParams {
    pub perfume_name: String,
}

/// Looks up alternatives for the named perfume. A remote failure shows
/// up as an empty list, the same as "nothing matched"; only a blank
/// query is an error.
#[async_trait]
pub trait FindDupesUseCase: Send + Sync {
    async fn execute(&self, params: FindDupesParams) -> Result<Vec<DupeMatch>, DupeError>;
}
