//! Driven port for custom list storage.
//!
//! Each method is a complete unit of work: adapters must apply the rule
//! check and the mutation atomically so concurrent callers cannot both pass
//! a uniqueness check.

use async_trait::async_trait;

use crate::domain::{CustomList, ListBookError, ListId, NewRecipeList, Recipe};

use super::define_port_error;

define_port_error! {
    /// Errors raised by list repository adapters.
    pub enum RecipeListRepositoryError {
        /// A list rule rejected the operation.
        Rejected { reason: ListBookError } => "list update rejected: {reason}",
        /// The store cannot be used (for example a poisoned lock).
        Unavailable { message: String } => "list repository unavailable: {message}",
    }
}

impl From<ListBookError> for RecipeListRepositoryError {
    fn from(reason: ListBookError) -> Self {
        Self::Rejected { reason }
    }
}

/// Port for reading and mutating custom lists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeListRepository: Send + Sync {
    /// Every list in creation order.
    async fn list_all(&self) -> Result<Vec<CustomList>, RecipeListRepositoryError>;

    async fn find_by_id(&self, list_id: ListId) -> Result<CustomList, RecipeListRepositoryError>;

    /// Create a list, assigning the next identifier.
    async fn create(&self, new_list: NewRecipeList)
    -> Result<CustomList, RecipeListRepositoryError>;

    /// Append a recipe copy and return the updated list.
    async fn add_recipe(
        &self,
        list_id: ListId,
        recipe: Recipe,
    ) -> Result<CustomList, RecipeListRepositoryError>;

    /// Remove a recipe by slug and return every list.
    async fn remove_recipe(
        &self,
        list_id: ListId,
        recipe_name: &str,
    ) -> Result<Vec<CustomList>, RecipeListRepositoryError>;
}
