//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers below mirror their wire shape for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// A list with the requested title already exists.
    #[schema(rename = "list_already_exists")]
    ListAlreadyExists,
    /// The list already holds a recipe with the same name.
    #[schema(rename = "duplicate_recipe_name")]
    DuplicateRecipeName,
    /// The requested list does not exist.
    #[schema(rename = "list_not_found")]
    ListNotFound,
    /// The requested recipe does not exist.
    #[schema(rename = "recipe_not_found")]
    RecipeNotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "list_not_found")]
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "List not found")]
    error: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(rename = "traceId", example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details such as the offending field.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Recipe`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Recipe)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct RecipeSchema {
    #[schema(rename = "Name", example = "Chicken Curry!")]
    name: String,
    #[schema(example = "https://example.org/chicken-curry")]
    url: String,
    #[schema(rename = "Description")]
    description: Option<String>,
    #[schema(rename = "Author")]
    author: Option<String>,
    #[schema(rename = "Ingredients")]
    ingredients: Vec<String>,
    #[schema(rename = "Method")]
    method: Vec<String>,
}

/// OpenAPI schema for [`crate::domain::CustomList`].
#[derive(ToSchema)]
#[schema(as = crate::domain::CustomList)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CustomListSchema {
    /// Identifier assigned at creation, starting at 1.
    #[schema(rename = "listId", example = 1)]
    list_id: u64,
    #[schema(example = "Favorites")]
    title: String,
    recipes: Vec<RecipeSchema>,
}

/// OpenAPI schema for [`pagination::Pagination`].
#[derive(ToSchema)]
#[schema(as = pagination::Pagination)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PaginationSchema {
    #[schema(rename = "totalRecords", example = 25)]
    total_records: u64,
    #[schema(rename = "currentPage", example = 1)]
    current_page: u64,
    #[schema(rename = "totalPages", example = 3)]
    total_pages: u64,
    /// Next page number, capped at `totalPages`.
    #[schema(rename = "nextPage", example = 2)]
    next_page: u64,
    /// Previous page number; null on the first page.
    #[schema(rename = "prevPage")]
    prev_page: Option<u64>,
}

/// OpenAPI schema for a page of recipes.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct RecipePageSchema {
    data: Vec<RecipeSchema>,
    pagination: PaginationSchema,
}
