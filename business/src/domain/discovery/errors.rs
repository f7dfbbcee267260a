#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("discovery.invalid_card")]
    InvalidCard,
    #[error("discovery.fetch_failed")]
    FetchFailed,
}
