//! Driven port supplying the recipe catalogue's contents.
//!
//! The catalogue is loaded once during startup, before the HTTP server
//! binds, so the port is synchronous.

use crate::domain::Recipe;

use super::define_port_error;

define_port_error! {
    /// Errors raised while loading recipe data.
    pub enum RecipeSourceError {
        /// The backing file could not be read.
        Read { path: String, message: String } =>
            "failed to read recipes from {path}: {message}",
        /// The data was read but is not a valid recipe array.
        Parse { message: String } => "failed to parse recipe data: {message}",
    }
}

/// Port providing the full, ordered recipe collection.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeSource: Send + Sync {
    /// Load every recipe in source order.
    fn load(&self) -> Result<Vec<Recipe>, RecipeSourceError>;
}

/// Fixture source yielding no recipes.
#[cfg(test)]
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRecipeSource;

#[cfg(test)]
impl RecipeSource for FixtureRecipeSource {
    fn load(&self) -> Result<Vec<Recipe>, RecipeSourceError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecipeCatalogue;

    #[test]
    fn fixture_source_builds_an_empty_catalogue() {
        let catalogue = RecipeCatalogue::from_source(&FixtureRecipeSource).expect("load");
        assert!(catalogue.is_empty());
    }

    #[test]
    fn source_failures_propagate() {
        let mut source = MockRecipeSource::new();
        source
            .expect_load()
            .times(1)
            .returning(|| Err(RecipeSourceError::parse("expected an array")));

        let err = RecipeCatalogue::from_source(&source).expect_err("load fails");

        assert_eq!(
            err.to_string(),
            "failed to parse recipe data: expected an array"
        );
    }
}
