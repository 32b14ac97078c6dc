/// Glyph shown for category keys outside the known set.
pub(crate) const FALLBACK_GLYPH: &str = "📦";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Category {
    FoodAndDining,
    Housing,
    Transportation,
    Shopping,
    Entertainment,
    Healthcare,
    Education,
    Utilities,
    Travel,
    Other,
}

impl Category {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::FoodAndDining => "Food & Dining",
            Self::Housing => "Housing",
            Self::Transportation => "Transportation",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Utilities => "Utilities",
            Self::Travel => "Travel",
            Self::Other => "Other",
        }
    }

    pub(crate) fn glyph(&self) -> &'static str {
        match self {
            Self::FoodAndDining => "🍽️",
            Self::Housing => "🏠",
            Self::Transportation => "🚗",
            Self::Shopping => "🛍️",
            Self::Entertainment => "🎬",
            Self::Healthcare => "🏥",
            Self::Education => "📚",
            Self::Utilities => "⚡",
            Self::Travel => "✈️",
            Self::Other => "📦",
        }
    }

    /// Exact key match. Stored records keep their raw key, so an unknown
    /// key is not an error anywhere but here.
    pub(crate) fn parse(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.as_str() == key)
    }

    /// Case-insensitive lookup used by command input (`:budget food & dining 200`).
    pub(crate) fn find_by_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str().to_lowercase() == lower)
    }

    pub(crate) fn all() -> &'static [Category] {
        &[
            Self::FoodAndDining,
            Self::Housing,
            Self::Transportation,
            Self::Shopping,
            Self::Entertainment,
            Self::Healthcare,
            Self::Education,
            Self::Utilities,
            Self::Travel,
            Self::Other,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Glyph for a stored category key, falling back to the generic box.
pub(crate) fn category_glyph(key: &str) -> &'static str {
    Category::parse(key).map_or(FALLBACK_GLYPH, |c| c.glyph())
}
