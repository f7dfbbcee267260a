use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::dupe::errors::DupeError;
use crate::domain::dupe::model::DupeMatch;
use crate::domain::dupe::services::DupeFinderService;
use crate::domain::dupe::use_cases::find_dupes::{FindDupesParams, FindDupesUseCase};
use crate::domain::logger::Logger;

pub struct FindDupesUseCaseImpl {
    pub finder: Arc<dyn DupeFinderService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FindDupesUseCase for FindDupesUseCaseImpl {
    async fn execute(&self, params: FindDupesParams) -> Result<Vec<DupeMatch>, DupeError> {
        let name = params.perfume_name.trim();
        if name.is_empty() {
            return Err(DupeError::EmptyQuery);
        }

        self.logger.info(&format!("Searching dupes for: {}", name));

        match self.finder.find(name).await {
            Ok(matches) => {
                self.logger
                    .info(&format!("Found {} dupe candidates", matches.len()));
                Ok(matches)
            }
            Err(err) => {
                // Same policy as the discovery boundary: failure looks
                // like an empty result, never a user-visible error.
                self.logger.warn(&format!("Dupe search failed: {}", err));
                Ok(vec![])
            }
        }
    }
}
