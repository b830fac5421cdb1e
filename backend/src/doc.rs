//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every recipe, list, and health path plus the schema
//! wrappers from [`crate::inbound::http::schemas`]. Swagger UI serves it in
//! debug builds.

use utoipa::OpenApi;

use crate::inbound::http::lists::{ListResponse, ListsResponse};
use crate::inbound::http::recipes::SearchResponse;
use crate::inbound::http::schemas::{
    CustomListSchema, ErrorCodeSchema, ErrorSchema, PaginationSchema, RecipePageSchema,
    RecipeSchema,
};
use crate::inbound::http::validation::{NewListBody, RecipeBody};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cookbook API",
        description = "Browse a recipe catalogue and curate named recipe lists."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::recipes::search_recipes,
        crate::inbound::http::recipes::list_recipes,
        crate::inbound::http::recipes::get_recipe,
        crate::inbound::http::lists::get_lists,
        crate::inbound::http::lists::create_list,
        crate::inbound::http::lists::add_recipe,
        crate::inbound::http::lists::remove_recipe,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        RecipeSchema,
        CustomListSchema,
        PaginationSchema,
        RecipePageSchema,
        SearchResponse,
        ListResponse,
        ListsResponse,
        NewListBody,
        RecipeBody,
    )),
    tags(
        (name = "recipes", description = "Read-only recipe catalogue"),
        (name = "lists", description = "User-curated recipe lists"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
