//! In-memory list book enforcing the list store rules.
//!
//! The book is a plain synchronous value; adapters that share it between
//! request workers wrap it in a mutex so each operation's check-then-mutate
//! sequence runs under one lock.

use thiserror::Error;

use super::{CustomList, ListId, ListTitle, Recipe};

/// Rule violations raised by [`ListBook`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListBookError {
    #[error("list {list_id} not found")]
    ListNotFound { list_id: ListId },
    #[error("a list titled {title:?} already exists")]
    ListAlreadyExists { title: String },
    #[error("list {list_id} already contains a recipe named {name:?}")]
    DuplicateRecipeName { list_id: ListId, name: String },
    #[error("list {list_id} has no recipe matching {recipe_name:?}")]
    RecipeNotInList { list_id: ListId, recipe_name: String },
}

/// Request to create a list, optionally seeded with one recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipeList {
    pub title: ListTitle,
    pub recipe: Option<Recipe>,
}

/// Ordered collection of lists plus the monotonic id counter.
///
/// Identifiers are never reused: the counter advances only when a list is
/// actually created.
#[derive(Debug, Clone)]
pub struct ListBook {
    lists: Vec<CustomList>,
    next_id: ListId,
}

impl Default for ListBook {
    fn default() -> Self {
        Self {
            lists: Vec::new(),
            next_id: ListId::first(),
        }
    }
}

impl ListBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lists in creation order.
    pub fn lists(&self) -> &[CustomList] {
        &self.lists
    }

    /// Exact title match.
    pub fn find_by_title(&self, title: &str) -> Option<&CustomList> {
        self.lists.iter().find(|list| list.title().as_str() == title)
    }

    pub fn find_by_id(&self, list_id: ListId) -> Result<&CustomList, ListBookError> {
        self.lists
            .iter()
            .find(|list| list.list_id() == list_id)
            .ok_or(ListBookError::ListNotFound { list_id })
    }

    fn find_by_id_mut(&mut self, list_id: ListId) -> Result<&mut CustomList, ListBookError> {
        self.lists
            .iter_mut()
            .find(|list| list.list_id() == list_id)
            .ok_or(ListBookError::ListNotFound { list_id })
    }

    /// Create a list with the next identifier.
    pub fn create(&mut self, new_list: NewRecipeList) -> Result<CustomList, ListBookError> {
        let NewRecipeList { title, recipe } = new_list;
        if self.find_by_title(title.as_str()).is_some() {
            return Err(ListBookError::ListAlreadyExists {
                title: title.into(),
            });
        }

        let list_id = self.next_id;
        self.next_id = list_id.next();
        let list = CustomList::new(list_id, title, recipe.into_iter().collect());
        self.lists.push(list.clone());
        Ok(list)
    }

    /// Append a recipe copy unless one with the same slug is present.
    pub fn add_recipe(
        &mut self,
        list_id: ListId,
        recipe: Recipe,
    ) -> Result<CustomList, ListBookError> {
        let list = self.find_by_id_mut(list_id)?;
        if list.contains_slug(&recipe.slug()) {
            return Err(ListBookError::DuplicateRecipeName {
                list_id,
                name: recipe.name().to_owned(),
            });
        }
        list.push_recipe(recipe);
        Ok(list.clone())
    }

    /// Remove the recipe whose slug matches `recipe_name` and return every
    /// list.
    pub fn remove_recipe(
        &mut self,
        list_id: ListId,
        recipe_name: &str,
    ) -> Result<Vec<CustomList>, ListBookError> {
        let list = self.find_by_id_mut(list_id)?;
        if list.remove_recipe(recipe_name).is_none() {
            return Err(ListBookError::RecipeNotInList {
                list_id,
                recipe_name: recipe_name.to_owned(),
            });
        }
        Ok(self.lists.clone())
    }
}
