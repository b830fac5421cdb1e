//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`RecipeCatalogueQuery`, `RecipeListsCommand`,
//! `RecipeListsQuery`) are consumed by inbound adapters. Driven ports
//! (`RecipeSource`, `RecipeListRepository`) are implemented by outbound
//! adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod recipe_catalogue_query;
mod recipe_list_repository;
mod recipe_lists_command;
mod recipe_lists_query;
mod recipe_source;

#[cfg(test)]
pub use recipe_catalogue_query::MockRecipeCatalogueQuery;
pub use recipe_catalogue_query::RecipeCatalogueQuery;
#[cfg(test)]
pub use recipe_list_repository::MockRecipeListRepository;
pub use recipe_list_repository::{RecipeListRepository, RecipeListRepositoryError};
#[cfg(test)]
pub use recipe_lists_command::MockRecipeListsCommand;
pub use recipe_lists_command::RecipeListsCommand;
#[cfg(test)]
pub use recipe_lists_query::MockRecipeListsQuery;
pub use recipe_lists_query::RecipeListsQuery;
#[cfg(test)]
pub use recipe_source::MockRecipeSource;
pub use recipe_source::{RecipeSource, RecipeSourceError};
