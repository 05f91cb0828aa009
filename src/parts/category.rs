use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Semantic house-part group used for color control.
///
/// The set is closed. What each category matches, and which material slot it
/// owns on composite meshes, lives in
/// [`ClassifierConfig`](crate::parts::ClassifierConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Walls,
    Roof,
    Doors,
    Windows,
    Other,
}

impl Category {
    pub const COUNT: usize = 5;

    pub const ALL: [Category; Self::COUNT] = [
        Category::Walls,
        Category::Roof,
        Category::Doors,
        Category::Windows,
        Category::Other,
    ];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Walls => "walls",
            Category::Roof => "roof",
            Category::Doors => "doors",
            Category::Windows => "windows",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ConfigError;

    /// Accepts the canonical names plus the singular forms UI labels use.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "walls" | "wall" => Ok(Category::Walls),
            "roof" | "roofs" => Ok(Category::Roof),
            "doors" | "door" => Ok(Category::Doors),
            "windows" | "window" => Ok(Category::Windows),
            "other" => Ok(Category::Other),
            _ => Err(ConfigError::UnknownCategory(s.to_string())),
        }
    }
}
