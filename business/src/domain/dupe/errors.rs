#[derive(Debug, thiserror::Error)]
pub enum DupeError {
    #[error("dupe.empty_query")]
    EmptyQuery,
    #[error("dupe.invalid_match")]
    InvalidMatch,
    #[error("dupe.search_failed")]
    SearchFailed,
}
