use core::str::FromStr;
use serde::{Deserialize, Serialize};

use tidewater_core::{DomainError, ItemId};

/// Filter taxonomy: the fixed set of keys the category tabs select on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Starters,
    Mains,
    Desserts,
    Drinks,
}

impl Category {
    pub fn as_key(&self) -> &'static str {
        match self {
            Category::Starters => "starters",
            Category::Mains => "mains",
            Category::Desserts => "desserts",
            Category::Drinks => "drinks",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_key())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "starters" => Ok(Category::Starters),
            "mains" => Ok(Category::Mains),
            "desserts" => Ok(Category::Desserts),
            "drinks" => Ok(Category::Drinks),
            other => Err(DomainError::validation(format!(
                "unknown category key: {other}"
            ))),
        }
    }
}

/// Active category selection: either the "all" sentinel or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl CategoryFilter {
    /// Whether an item's category passes this filter.
    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        Ok(CategoryFilter::Only(s.parse()?))
    }
}

/// One purchasable menu item.
///
/// `category_display` is the human-readable tag shown on the card and is
/// orthogonal to the filter taxonomy (a `mains` item may display
/// "Vegetarian"). `image` is an opaque asset reference the core never
/// interprets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    /// Price in whole currency units.
    pub price: u64,
    pub category: Category,
    pub category_display: String,
    pub image: String,
}
