//! Custom list domain service.
//!
//! Implements the list driving ports on top of a [`RecipeListRepository`],
//! translating repository failures into domain [`Error`] values.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};

use crate::domain::ports::{
    RecipeListRepository, RecipeListRepositoryError, RecipeListsCommand, RecipeListsQuery,
};
use crate::domain::{CustomList, Error, ListBookError, ListId, NewRecipeList, Recipe};

pub(crate) const LIST_NOT_FOUND: &str = "List not found";
pub(crate) const LIST_ALREADY_EXISTS: &str = "List already exists";
pub(crate) const DUPLICATE_RECIPE_NAME: &str =
    "A recipe with the same name already exists in this list";
pub(crate) const RECIPE_NOT_IN_LIST: &str = "Recipe not found in the list";

/// Service implementing [`RecipeListsCommand`] and [`RecipeListsQuery`].
#[derive(Clone)]
pub struct RecipeListsService<R> {
    repository: Arc<R>,
}

impl<R> RecipeListsService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> RecipeListsService<R>
where
    R: RecipeListRepository,
{
    fn map_repository_error(error: RecipeListRepositoryError) -> Error {
        match error {
            RecipeListRepositoryError::Rejected { reason } => Self::map_rule_violation(reason),
            RecipeListRepositoryError::Unavailable { message } => {
                Error::internal(format!("list repository unavailable: {message}"))
            }
        }
    }

    fn map_rule_violation(reason: ListBookError) -> Error {
        match reason {
            ListBookError::ListNotFound { list_id } => {
                Error::list_not_found(LIST_NOT_FOUND).with_details(json!({ "listId": list_id }))
            }
            ListBookError::ListAlreadyExists { title } => {
                Error::list_already_exists(LIST_ALREADY_EXISTS)
                    .with_details(json!({ "title": title }))
            }
            ListBookError::DuplicateRecipeName { list_id, name } => {
                Error::duplicate_recipe_name(DUPLICATE_RECIPE_NAME)
                    .with_details(json!({ "listId": list_id, "name": name }))
            }
            ListBookError::RecipeNotInList {
                list_id,
                recipe_name,
            } => Error::recipe_not_found(RECIPE_NOT_IN_LIST)
                .with_details(json!({ "listId": list_id, "recipeName": recipe_name })),
        }
    }
}

#[async_trait]
impl<R> RecipeListsCommand for RecipeListsService<R>
where
    R: RecipeListRepository,
{
    async fn create_list(&self, new_list: NewRecipeList) -> Result<CustomList, Error> {
        let title = new_list.title.clone();
        let list = self.repository.create(new_list).await.map_err(|err| {
            warn!(%title, error = %err, "list creation rejected");
            Self::map_repository_error(err)
        })?;
        info!(list_id = %list.list_id(), %title, "list created");
        Ok(list)
    }

    async fn add_recipe(&self, list_id: ListId, recipe: Recipe) -> Result<CustomList, Error> {
        let name = recipe.name().to_owned();
        let list = self
            .repository
            .add_recipe(list_id, recipe)
            .await
            .map_err(Self::map_repository_error)?;
        info!(%list_id, recipe = %name, "recipe added to list");
        Ok(list)
    }

    async fn remove_recipe(
        &self,
        list_id: ListId,
        recipe_name: &str,
    ) -> Result<Vec<CustomList>, Error> {
        let lists = self
            .repository
            .remove_recipe(list_id, recipe_name)
            .await
            .map_err(Self::map_repository_error)?;
        info!(%list_id, recipe = recipe_name, "recipe removed from list");
        Ok(lists)
    }
}

#[async_trait]
impl<R> RecipeListsQuery for RecipeListsService<R>
where
    R: RecipeListRepository,
{
    async fn list_all(&self) -> Result<Vec<CustomList>, Error> {
        self.repository
            .list_all()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn find_by_id(&self, list_id: ListId) -> Result<CustomList, Error> {
        self.repository
            .find_by_id(list_id)
            .await
            .map_err(Self::map_repository_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockRecipeListRepository;
    use crate::domain::{ErrorCode, ListTitle, RecipeDraft};
    use rstest::rstest;

    fn id(raw: u64) -> ListId {
        ListId::new(raw).expect("valid id")
    }

    fn title(raw: &str) -> ListTitle {
        ListTitle::new(raw).expect("valid title")
    }

    fn recipe(name: &str) -> Recipe {
        Recipe::new(RecipeDraft {
            name: name.to_owned(),
            url: "https://example.org/recipe".to_owned(),
            description: None,
            author: None,
            ingredients: Vec::new(),
            method: Vec::new(),
        })
        .expect("valid recipe")
    }

    fn service(repository: MockRecipeListRepository) -> RecipeListsService<MockRecipeListRepository> {
        RecipeListsService::new(Arc::new(repository))
    }

    #[rstest]
    #[case(
        ListBookError::ListNotFound { list_id: id(3) },
        ErrorCode::ListNotFound,
        LIST_NOT_FOUND
    )]
    #[case(
        ListBookError::ListAlreadyExists { title: "Favorites".to_owned() },
        ErrorCode::ListAlreadyExists,
        LIST_ALREADY_EXISTS
    )]
    #[case(
        ListBookError::DuplicateRecipeName { list_id: id(1), name: "Soup".to_owned() },
        ErrorCode::DuplicateRecipeName,
        DUPLICATE_RECIPE_NAME
    )]
    #[case(
        ListBookError::RecipeNotInList { list_id: id(1), recipe_name: "soup".to_owned() },
        ErrorCode::RecipeNotFound,
        RECIPE_NOT_IN_LIST
    )]
    fn maps_rule_violations(
        #[case] reason: ListBookError,
        #[case] code: ErrorCode,
        #[case] message: &str,
    ) {
        let error = RecipeListsService::<MockRecipeListRepository>::map_repository_error(
            RecipeListRepositoryError::rejected(reason),
        );

        assert_eq!(error.code(), code);
        assert_eq!(error.message(), message);
        assert!(error.details().is_some());
    }

    #[rstest]
    fn unavailable_repository_is_internal() {
        let error = RecipeListsService::<MockRecipeListRepository>::map_repository_error(
            RecipeListRepositoryError::unavailable("lock poisoned"),
        );

        assert_eq!(error.code(), ErrorCode::InternalError);
    }

    #[tokio::test]
    async fn create_list_returns_the_stored_list() {
        let mut repository = MockRecipeListRepository::new();
        repository
            .expect_create()
            .withf(|new_list| new_list.title.as_str() == "Favorites" && new_list.recipe.is_none())
            .times(1)
            .returning(|new_list| Ok(CustomList::new(id(1), new_list.title, Vec::new())));

        let list = service(repository)
            .create_list(NewRecipeList {
                title: title("Favorites"),
                recipe: None,
            })
            .await
            .expect("list created");

        assert_eq!(list.list_id(), id(1));
    }

    #[tokio::test]
    async fn add_recipe_surfaces_duplicates() {
        let mut repository = MockRecipeListRepository::new();
        repository
            .expect_add_recipe()
            .times(1)
            .returning(|list_id, recipe| {
                Err(RecipeListRepositoryError::rejected(
                    ListBookError::DuplicateRecipeName {
                        list_id,
                        name: recipe.name().to_owned(),
                    },
                ))
            });

        let error = service(repository)
            .add_recipe(id(1), recipe("Soup"))
            .await
            .expect_err("duplicate");

        assert_eq!(error.code(), ErrorCode::DuplicateRecipeName);
    }

    #[tokio::test]
    async fn remove_recipe_passes_the_name_through() {
        let mut repository = MockRecipeListRepository::new();
        repository
            .expect_remove_recipe()
            .withf(|list_id, recipe_name| *list_id == id(2) && recipe_name.to_string() == "chicken-curry")
            .times(1)
            .returning(|_, _| Ok(Vec::new()));

        let lists = service(repository)
            .remove_recipe(id(2), "chicken-curry")
            .await
            .expect("removed");

        assert!(lists.is_empty());
    }

    #[tokio::test]
    async fn find_by_id_reports_missing_lists() {
        let mut repository = MockRecipeListRepository::new();
        repository
            .expect_find_by_id()
            .returning(|list_id| Err(ListBookError::ListNotFound { list_id }.into()));

        let error = service(repository)
            .find_by_id(id(9))
            .await
            .expect_err("missing");

        assert_eq!(error.code(), ErrorCode::ListNotFound);
        assert_eq!(error.message(), LIST_NOT_FOUND);
    }
}
