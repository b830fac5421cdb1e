//! Recipe data model.
//!
//! Recipes are value objects: the catalogue owns its copies and every list
//! owns independent clones. The serialised field names match the bundled
//! data file (`Name`, `url`, `Description`, `Author`, `Ingredients`,
//! `Method`).

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use super::slugify;

/// Validation errors returned by [`Recipe::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecipeValidationError {
    /// The name is blank.
    #[error("recipe name must not be empty")]
    EmptyName,
    /// The source URL is not an absolute URL.
    #[error("recipe url must be an absolute URL")]
    InvalidUrl,
}

/// Unvalidated recipe fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecipeDraft {
    #[serde(rename = "Name")]
    pub name: String,
    pub url: String,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Author", default)]
    pub author: Option<String>,
    #[serde(rename = "Ingredients")]
    pub ingredients: Vec<String>,
    #[serde(rename = "Method")]
    pub method: Vec<String>,
}

/// A recipe with a non-blank name and an absolute source URL.
///
/// # Examples
/// ```
/// use cookbook::domain::{Recipe, RecipeDraft};
///
/// let recipe = Recipe::new(RecipeDraft {
///     name: "Chicken Curry!".into(),
///     url: "https://example.org/chicken-curry".into(),
///     description: None,
///     author: None,
///     ingredients: vec!["chicken".into()],
///     method: vec!["cook".into()],
/// })
/// .expect("valid recipe");
/// assert_eq!(recipe.slug(), "chicken-curry");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecipeDraft")]
pub struct Recipe {
    #[serde(rename = "Name")]
    name: String,
    url: String,
    #[serde(rename = "Description")]
    description: Option<String>,
    #[serde(rename = "Author")]
    author: Option<String>,
    #[serde(rename = "Ingredients")]
    ingredients: Vec<String>,
    #[serde(rename = "Method")]
    method: Vec<String>,
}

impl Recipe {
    /// Validate a draft into a recipe.
    pub fn new(draft: RecipeDraft) -> Result<Self, RecipeValidationError> {
        let RecipeDraft {
            name,
            url,
            description,
            author,
            ingredients,
            method,
        } = draft;

        if name.trim().is_empty() {
            return Err(RecipeValidationError::EmptyName);
        }
        Url::parse(&url).map_err(|_| RecipeValidationError::InvalidUrl)?;

        Ok(Self {
            name,
            url,
            description,
            author,
            ingredients,
            method,
        })
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Source URL.
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Ingredients in listed order.
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Method steps in listed order.
    pub fn method(&self) -> &[String] {
        &self.method
    }

    /// Identity token derived from the name.
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }
}

impl TryFrom<RecipeDraft> for Recipe {
    type Error = RecipeValidationError;

    fn try_from(value: RecipeDraft) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
