//! Read-only recipe catalogue.
//!
//! The catalogue is loaded once at startup from a [`RecipeSource`] and shared
//! behind an `Arc`; nothing mutates it afterwards, so reads need no locking.

use async_trait::async_trait;
use pagination::{PageRequest, Paginated};
use tracing::debug;

use super::ports::{RecipeCatalogueQuery, RecipeSource, RecipeSourceError};
use super::{Error, Recipe, slugify};

pub(crate) const NO_RECIPES: &str = "There are no recipes";
pub(crate) const NO_RECIPE_WITH_NAME: &str = "There is no recipe with this name";

/// Ordered recipe collection with slug lookup, search, and pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeCatalogue {
    recipes: Vec<Recipe>,
}

impl RecipeCatalogue {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Load every recipe the source provides.
    pub fn from_source(source: &dyn RecipeSource) -> Result<Self, RecipeSourceError> {
        let recipes = source.load()?;
        debug!(count = recipes.len(), "recipe catalogue loaded");
        Ok(Self::new(recipes))
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Slice the catalogue for `request`.
    ///
    /// Fails when the catalogue is empty or the page starts past the end.
    pub fn paginate(&self, request: PageRequest) -> Result<Paginated<Recipe>, Error> {
        if self.recipes.is_empty() {
            return Err(Error::recipe_not_found(NO_RECIPES));
        }
        Paginated::from_slice(&self.recipes, request)
            .ok_or_else(|| Error::recipe_not_found(NO_RECIPES))
    }

    /// First recipe whose slugified name equals `slug`.
    pub fn find_by_slug(&self, slug: &str) -> Result<&Recipe, Error> {
        self.recipes
            .iter()
            .find(|recipe| recipe.slug() == slug)
            .ok_or_else(|| Error::recipe_not_found(NO_RECIPE_WITH_NAME))
    }

    /// Recipes whose slug contains the slugified `term`, in catalogue order.
    ///
    /// A term that normalises to nothing (only punctuation, say) matches no
    /// recipe.
    pub fn search(&self, term: &str) -> Vec<Recipe> {
        let needle = slugify(term);
        if needle.is_empty() {
            return Vec::new();
        }
        self.recipes
            .iter()
            .filter(|recipe| recipe.slug().contains(needle.as_str()))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl RecipeCatalogueQuery for RecipeCatalogue {
    async fn paginate(&self, request: PageRequest) -> Result<Paginated<Recipe>, Error> {
        RecipeCatalogue::paginate(self, request)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Recipe, Error> {
        RecipeCatalogue::find_by_slug(self, slug).cloned()
    }

    async fn search(&self, term: &str) -> Result<Vec<Recipe>, Error> {
        Ok(RecipeCatalogue::search(self, term))
    }

    fn recipe_count(&self) -> usize {
        self.len()
    }
}
