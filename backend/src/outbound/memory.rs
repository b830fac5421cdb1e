//! In-memory list repository.
//!
//! Lists live for the lifetime of the process. Every port call takes the
//! mutex once and runs the [`ListBook`] operation to completion under it.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{RecipeListRepository, RecipeListRepositoryError};
use crate::domain::{CustomList, ListBook, ListId, NewRecipeList, Recipe};

/// Mutex-guarded [`ListBook`] implementing [`RecipeListRepository`].
#[derive(Debug, Default)]
pub struct InMemoryRecipeListRepository {
    book: Mutex<ListBook>,
}

impl InMemoryRecipeListRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, ListBook>, RecipeListRepositoryError> {
        self.book.lock().map_err(|_| {
            error!("list book mutex poisoned");
            RecipeListRepositoryError::unavailable("list store lock poisoned")
        })
    }
}

#[async_trait]
impl RecipeListRepository for InMemoryRecipeListRepository {
    async fn list_all(&self) -> Result<Vec<CustomList>, RecipeListRepositoryError> {
        Ok(self.lock()?.lists().to_vec())
    }

    async fn find_by_id(&self, list_id: ListId) -> Result<CustomList, RecipeListRepositoryError> {
        Ok(self.lock()?.find_by_id(list_id)?.clone())
    }

    async fn create(
        &self,
        new_list: NewRecipeList,
    ) -> Result<CustomList, RecipeListRepositoryError> {
        Ok(self.lock()?.create(new_list)?)
    }

    async fn add_recipe(
        &self,
        list_id: ListId,
        recipe: Recipe,
    ) -> Result<CustomList, RecipeListRepositoryError> {
        Ok(self.lock()?.add_recipe(list_id, recipe)?)
    }

    async fn remove_recipe(
        &self,
        list_id: ListId,
        recipe_name: &str,
    ) -> Result<Vec<CustomList>, RecipeListRepositoryError> {
        Ok(self.lock()?.remove_recipe(list_id, recipe_name)?)
    }
}
