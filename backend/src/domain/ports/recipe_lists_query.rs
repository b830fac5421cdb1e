//! Driving port for custom list reads.

use async_trait::async_trait;

use crate::domain::{CustomList, Error, ListId};

/// Domain use-case port for reading custom lists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeListsQuery: Send + Sync {
    async fn list_all(&self) -> Result<Vec<CustomList>, Error>;

    async fn find_by_id(&self, list_id: ListId) -> Result<CustomList, Error>;
}
