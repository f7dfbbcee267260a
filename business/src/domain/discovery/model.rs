/// Scent family driving a discovery batch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vibe {
    Fresh,
    Woody,
    Floral,
    Spicy,
}

impl std::fmt::Display for Vibe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Vibe::Fresh => write!(f, "Fresh"),
            Vibe::Woody => write!(f, "Woody"),
            Vibe::Floral => write!(f, "Floral"),
            Vibe::Spicy => write!(f, "Spicy"),
        }
    }
}

impl std::str::FromStr for Vibe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fresh" => Ok(Vibe::Fresh),
            "woody" => Ok(Vibe::Woody),
            "floral" => Ok(Vibe::Floral),
            "spicy" => Ok(Vibe::Spicy),
            _ => Err(format!("Invalid vibe: {}", s)),
        }
    }
}

/// Note pyramid of a fragrance. Any level may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScentNotes {
    pub top: Vec<String>,
    pub heart: Vec<String>,
    pub base: Vec<String>,
}

/// A single perfume card inside a discovery batch.
///
/// Immutable once constructed; `id` is only guaranteed unique within the
/// batch that delivered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryCard {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub vibe: Vibe,
    /// Absent when the source gave no image; the presentation layer
    /// substitutes its default asset.
    pub image_url: Option<String>,
    pub description: String,
    pub notes: ScentNotes,
}

/// Creates a new DiscoveryCard with validation.
pub fn create_card(
    id: String,
    name: String,
    brand: String,
    vibe: Vibe,
    image_url: Option<String>,
    description: String,
    notes: ScentNotes,
) -> Result<DiscoveryCard, super::errors::DiscoveryError> {
    if id.trim().is_empty() || name.trim().is_empty() || brand.trim().is_empty() {
        return Err(super::errors::DiscoveryError::InvalidCard);
    }

    Ok(DiscoveryCard {
        id: id.trim().to_string(),
        name: name.trim().to_string(),
        brand: brand.trim().to_string(),
        vibe,
        image_url: image_url.filter(|url| !url.trim().is_empty()),
        description,
        notes,
    })
}
