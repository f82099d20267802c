//! The fixed snack category set.
//!
//! Categories are stored as raw strings; the enum is the vocabulary used for
//! validation and display mapping. An unrecognized stored value falls back to
//! [`Category::Other`] at display-mapping time only — storage keeps whatever
//! string was written.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ramen,
    Chips,
    Sweets,
    Fruits,
    Chocolate,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Ramen,
        Category::Chips,
        Category::Sweets,
        Category::Fruits,
        Category::Chocolate,
        Category::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Ramen => "ramen",
            Category::Chips => "chips",
            Category::Sweets => "sweets",
            Category::Fruits => "fruits",
            Category::Chocolate => "chocolate",
            Category::Other => "other",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::Ramen => "Ramen & Noodles",
            Category::Chips => "Chips & Savory",
            Category::Sweets => "Cookies & Baked",
            Category::Fruits => "Fruit & Healthy",
            Category::Chocolate => "Chocolate",
            Category::Other => "Other",
        }
    }

    /// Display-mapping parse: unrecognized values become [`Category::Other`].
    pub fn from_str_lossy(s: &str) -> Category {
        s.parse().unwrap_or(Category::Other)
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ramen" => Ok(Category::Ramen),
            "chips" => Ok(Category::Chips),
            "sweets" => Ok(Category::Sweets),
            "fruits" => Ok(Category::Fruits),
            "chocolate" => Ok(Category::Chocolate),
            "other" => Ok(Category::Other),
            _ => Err(ValidationError::UnknownCategory(s.to_string())),
        }
    }
}

/// Display name for a stored category string, falling back to "Other" for
/// anything outside the enumerated set.
pub fn display_name(category: &str) -> &'static str {
    Category::from_str_lossy(category).display_name()
}
