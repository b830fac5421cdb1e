//! Driving port for catalogue reads.

use async_trait::async_trait;
use pagination::{PageRequest, Paginated};

use crate::domain::{Error, Recipe};

/// Domain use-case port for browsing the recipe catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeCatalogueQuery: Send + Sync {
    /// One page of recipes with pagination metadata.
    async fn paginate(&self, request: PageRequest) -> Result<Paginated<Recipe>, Error>;

    /// The recipe whose slugified name equals `slug`.
    async fn find_by_slug(&self, slug: &str) -> Result<Recipe, Error>;

    /// Recipes whose slug contains the slugified search term.
    async fn search(&self, term: &str) -> Result<Vec<Recipe>, Error>;

    /// Number of recipes loaded.
    fn recipe_count(&self) -> usize;
}
