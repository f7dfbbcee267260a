/// An affordable alternative to a (usually pricier) reference perfume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DupeMatch {
    pub dupe_name: String,
    pub brand: String,
    /// Free-text similarity estimate, e.g. "90% — same drydown".
    pub similarity: String,
    pub price_point: String,
    pub reason: String,
}

/// Creates a new DupeMatch with validation.
pub fn create_dupe_match(
    dupe_name: String,
    brand: String,
    similarity: String,
    price_point: String,
    reason: String,
) -> Result<DupeMatch, super::errors::DupeError> {
    if dupe_name.trim().is_empty() || brand.trim().is_empty() {
        return Err(super::errors::DupeError::InvalidMatch);
    }

    Ok(DupeMatch {
        dupe_name: dupe_name.trim().to_string(),
        brand: brand.trim().to_string(),
        similarity,
        price_point,
        reason,
    })
}
