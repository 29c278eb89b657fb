//! Product categories.

use serde::{Deserialize, Serialize};

/// The fixed set of catalog categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Electronics,
    Home,
    Cars,
}

impl Category {
    /// Every category, in navigation order.
    pub const ALL: [Self; 3] = [Self::Electronics, Self::Home, Self::Cars];

    /// URL-safe slug, identical to the serialized form.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Electronics => "electronics",
            Self::Home => "home",
            Self::Cars => "cars",
        }
    }

    /// Display name shown in the storefront navigation.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Electronics => "إلكترونيات",
            Self::Home => "منزل وأثاث",
            Self::Cars => "سيارات",
        }
    }

    /// Navigation icon.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Electronics => "📱",
            Self::Home => "🏠",
            Self::Cars => "🚗",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.slug() == s)
            .ok_or_else(|| format!("invalid category: {s}"))
    }
}

/// Category selector used by the storefront listing.
///
/// `"all"` disables filtering; any category slug selects that category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product in `category` passes this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_parsing() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "cars".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Cars)
        );
        assert!("boats".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_filter_matching() {
        assert!(CategoryFilter::All.matches(Category::Home));
        assert!(CategoryFilter::Only(Category::Home).matches(Category::Home));
        assert!(!CategoryFilter::Only(Category::Home).matches(Category::Cars));
    }

    #[test]
    fn test_slug_matches_serde() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.slug()));
        }
    }
}
