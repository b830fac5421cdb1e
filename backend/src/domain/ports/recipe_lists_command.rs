//! Driving port for custom list mutations.

use async_trait::async_trait;

use crate::domain::{CustomList, Error, ListId, NewRecipeList, Recipe};

/// Domain use-case port for changing custom lists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeListsCommand: Send + Sync {
    /// Create a list with a unique title.
    async fn create_list(&self, new_list: NewRecipeList) -> Result<CustomList, Error>;

    /// Add a recipe to a list unless one with the same slug is present.
    async fn add_recipe(&self, list_id: ListId, recipe: Recipe) -> Result<CustomList, Error>;

    /// Remove a recipe by name and return every list.
    async fn remove_recipe(
        &self,
        list_id: ListId,
        recipe_name: &str,
    ) -> Result<Vec<CustomList>, Error>;
}
