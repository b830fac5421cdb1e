//! User-curated recipe lists.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Recipe, slugify};

/// Validation errors for list identifiers and titles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomListValidationError {
    /// Identifiers are positive integers.
    #[error("list id must be a positive integer")]
    InvalidId,
    /// Titles must contain non-whitespace characters.
    #[error("list title must not be empty")]
    EmptyTitle,
}

/// Positive numeric list identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ListId(u64);

impl ListId {
    /// Validate and wrap a raw identifier.
    pub fn new(raw: u64) -> Result<Self, CustomListValidationError> {
        if raw == 0 {
            return Err(CustomListValidationError::InvalidId);
        }
        Ok(Self(raw))
    }

    /// The first identifier handed out by an empty store.
    pub(crate) const fn first() -> Self {
        Self(1)
    }

    /// The identifier following this one.
    pub(crate) const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ListId {
    type Err = CustomListValidationError;

    /// Parse a decimal identifier such as a path segment.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CustomListValidationError::InvalidId);
        }
        let raw = s
            .parse::<u64>()
            .map_err(|_| CustomListValidationError::InvalidId)?;
        Self::new(raw)
    }
}

impl TryFrom<u64> for ListId {
    type Error = CustomListValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ListId> for u64 {
    fn from(value: ListId) -> Self {
        value.0
    }
}

/// Non-blank list title. Titles are unique across the store and compared
/// exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ListTitle(String);

impl ListTitle {
    /// Validate and construct a title.
    pub fn new(title: impl Into<String>) -> Result<Self, CustomListValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CustomListValidationError::EmptyTitle);
        }
        Ok(Self(title))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for ListTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ListTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ListTitle {
    type Error = CustomListValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ListTitle> for String {
    fn from(value: ListTitle) -> Self {
        value.0
    }
}

/// A named, ordered collection of recipe copies.
///
/// Serialised as `{"listId": 1, "title": "...", "recipes": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomList {
    list_id: ListId,
    title: ListTitle,
    recipes: Vec<Recipe>,
}

impl CustomList {
    pub fn new(list_id: ListId, title: ListTitle, recipes: Vec<Recipe>) -> Self {
        Self {
            list_id,
            title,
            recipes,
        }
    }

    pub fn list_id(&self) -> ListId {
        self.list_id
    }

    pub fn title(&self) -> &ListTitle {
        &self.title
    }

    /// Recipes in insertion order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Whether a recipe with the same slug is already present.
    pub fn contains_slug(&self, slug: &str) -> bool {
        self.recipes.iter().any(|recipe| recipe.slug() == slug)
    }

    pub(crate) fn push_recipe(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
    }

    /// Remove the first recipe whose name slugifies to the same token as
    /// `recipe_name`.
    pub(crate) fn remove_recipe(&mut self, recipe_name: &str) -> Option<Recipe> {
        let wanted = slugify(recipe_name);
        let index = self
            .recipes
            .iter()
            .position(|recipe| recipe.slug() == wanted)?;
        Some(self.recipes.remove(index))
    }
}
