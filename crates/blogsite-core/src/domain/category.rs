use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Topic a blog is filed under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Food,
    Travel,
    Fashion,
    Technology,
    Business,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::All,
        Category::Food,
        Category::Travel,
        Category::Fashion,
        Category::Technology,
        Category::Business,
    ];

    /// Parse a category name, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(value))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Food => "food",
            Category::Travel => "travel",
            Category::Fashion => "fashion",
            Category::Technology => "technology",
            Category::Business => "business",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
