//! Category identifiers.

use std::fmt;

use compact_str::CompactString;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sentinel name materialized for torrents without a category.
pub const UNCATEGORIZED: &str = "__UNCATEGORIZED__";

/// A download-client category.
///
/// Torrents without a category are an explicit variant rather than a magic
/// string; the sentinel only appears at serialization and display
/// boundaries. Named categories order alphabetically and the uncategorized
/// variant sorts after all of them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// A named category as configured in the download client.
    Named(CompactString),
    /// No category assigned.
    Uncategorized,
}

impl Category {
    /// Create a named category.
    pub fn named(name: impl Into<CompactString>) -> Self {
        Self::Named(name.into())
    }

    /// Interpret a client-reported category field.
    ///
    /// The Web API reports "no category" as an absent or empty string; the
    /// sentinel itself is also folded back to the variant so a round trip
    /// through serialization stays lossless.
    pub fn from_client(name: Option<&str>) -> Self {
        match name {
            Some(n) if !n.is_empty() && n != UNCATEGORIZED => Self::Named(n.into()),
            _ => Self::Uncategorized,
        }
    }

    /// The category name, with the sentinel for the uncategorized variant.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Named(name) => name.as_str(),
            Self::Uncategorized => UNCATEGORIZED,
        }
    }

    /// Check if this is the uncategorized variant.
    pub fn is_uncategorized(&self) -> bool {
        matches!(self, Self::Uncategorized)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = CompactString::deserialize(deserializer)?;
        Ok(Self::from_client(Some(name.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_client() {
        assert_eq!(Category::from_client(Some("Films")), Category::named("Films"));
        assert_eq!(Category::from_client(Some("")), Category::Uncategorized);
        assert_eq!(Category::from_client(None), Category::Uncategorized);
        assert_eq!(
            Category::from_client(Some(UNCATEGORIZED)),
            Category::Uncategorized
        );
    }

    #[test]
    fn test_sentinel_at_boundary() {
        assert_eq!(Category::Uncategorized.as_str(), UNCATEGORIZED);
        assert_eq!(Category::named("Shows").to_string(), "Shows");
        assert_eq!(Category::Uncategorized.to_string(), UNCATEGORIZED);
    }

    #[test]
    fn test_ordering() {
        let mut categories = vec![
            Category::Uncategorized,
            Category::named("Shows"),
            Category::named("Films"),
        ];
        categories.sort();
        assert_eq!(
            categories,
            vec![
                Category::named("Films"),
                Category::named("Shows"),
                Category::Uncategorized,
            ]
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Category::Uncategorized).unwrap();
        assert_eq!(json, format!("\"{UNCATEGORIZED}\""));

        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Uncategorized);

        let named: Category = serde_json::from_str("\"Films\"").unwrap();
        assert_eq!(named, Category::named("Films"));
    }
}
