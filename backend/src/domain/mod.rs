//! Domain primitives, aggregates, and services.
//!
//! Purpose: define strongly typed recipe and list entities plus the use-case
//! services the HTTP adapter drives. Nothing here depends on Actix.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and stable error identifier.
//! - Recipe / RecipeDraft: validated recipe value object.
//! - CustomList / ListId / ListTitle: user-curated recipe lists.
//! - ListBook: list collection enforcing title and recipe uniqueness.
//! - RecipeCatalogue: read-only catalogue with pagination and search.
//! - RecipeListsService: list use cases over a repository port.

pub mod catalogue;
pub mod custom_list;
pub mod error;
pub mod ports;
pub mod recipe;
pub mod recipe_lists;
pub mod recipe_lists_service;
pub mod slug;
pub mod trace_id;

pub use self::catalogue::RecipeCatalogue;
pub use self::custom_list::{CustomList, CustomListValidationError, ListId, ListTitle};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::recipe::{Recipe, RecipeDraft, RecipeValidationError};
pub use self::recipe_lists::{ListBook, ListBookError, NewRecipeList};
pub use self::recipe_lists_service::RecipeListsService;
pub use self::slug::{is_slug, slugify};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use cookbook::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::list_not_found("List not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
