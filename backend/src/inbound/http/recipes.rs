//! Recipe catalogue HTTP handlers.
//!
//! ```text
//! GET /api/recipes/search?q=soup
//! GET /api/recipes/all[/{page}[/{limit}]]
//! GET /api/recipes/{slug}
//! ```

use actix_web::{get, routes, web};
use pagination::Paginated;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::Recipe;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, RecipePageSchema, RecipeSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{parse_page_request, parse_search_query, parse_slug};

/// Query string for recipe search.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// Optional page and limit path segments.
#[derive(Debug, Default, Deserialize)]
pub struct PageSegments {
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Search results.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    #[schema(value_type = Vec<RecipeSchema>)]
    pub recipes: Vec<Recipe>,
}

/// Search recipes by name.
#[utoipa::path(
    get,
    path = "/api/recipes/search",
    params(("q" = String, Query, description = "Search term, matched against recipe slugs")),
    responses(
        (status = 200, description = "Matching recipes in catalogue order", body = SearchResponse),
        (status = 400, description = "Missing search term", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "searchRecipes"
)]
#[get("/recipes/search")]
pub async fn search_recipes(
    state: web::Data<HttpState>,
    query: web::Query<SearchParams>,
) -> ApiResult<web::Json<SearchResponse>> {
    let term = parse_search_query(query.into_inner().q)?;
    let recipes = state.catalogue.search(&term).await?;
    debug!(term = %term, matches = recipes.len(), "recipe search");
    Ok(web::Json(SearchResponse { recipes }))
}

/// Page through the catalogue.
#[utoipa::path(
    get,
    path = "/api/recipes/all/{page}/{limit}",
    params(
        ("page" = Option<u64>, Path, description = "One-based page number (default 1)"),
        ("limit" = Option<u64>, Path, description = "Page size (default 10)")
    ),
    responses(
        (status = 200, description = "One page of recipes", body = RecipePageSchema),
        (status = 400, description = "Invalid page or limit", body = ErrorSchema),
        (status = 404, description = "Page lies beyond the catalogue", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "listRecipes"
)]
#[routes]
#[get("/recipes/all")]
#[get("/recipes/all/{page}")]
#[get("/recipes/all/{page}/{limit}")]
pub async fn list_recipes(
    state: web::Data<HttpState>,
    path: web::Path<PageSegments>,
) -> ApiResult<web::Json<Paginated<Recipe>>> {
    let PageSegments { page, limit } = path.into_inner();
    let request = parse_page_request(
        page.as_deref(),
        limit.as_deref(),
        state.default_page_size,
    )?;
    let page = state.catalogue.paginate(request).await?;
    Ok(web::Json(page))
}

/// Fetch one recipe by slug.
#[utoipa::path(
    get,
    path = "/api/recipes/{slug}",
    params(("slug" = String, Path, description = "Slugified recipe name, e.g. chicken-curry")),
    responses(
        (status = 200, description = "The recipe", body = RecipeSchema),
        (status = 400, description = "Malformed slug", body = ErrorSchema),
        (status = 404, description = "No recipe with this slug", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "getRecipe"
)]
#[get("/recipes/{slug}")]
pub async fn get_recipe(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Recipe>> {
    let slug = path.into_inner();
    let recipe = state.catalogue.find_by_slug(parse_slug(&slug)?).await?;
    Ok(web::Json(recipe))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockRecipeCatalogueQuery;
    use crate::domain::Error;
    use crate::inbound::http::test_utils::{recipe, state_with_catalogue, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use pagination::Pagination;
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[case("/api/recipes/all", 1, 10)]
    #[case("/api/recipes/all/2", 2, 10)]
    #[case("/api/recipes/all/3/5", 3, 5)]
    #[actix_web::test]
    async fn list_routes_forward_page_requests(
        #[case] uri: &str,
        #[case] page: u64,
        #[case] limit: u64,
    ) {
        let mut catalogue = MockRecipeCatalogueQuery::new();
        catalogue
            .expect_paginate()
            .withf(move |request| request.page() == page && request.limit() == limit)
            .times(1)
            .returning(|request| {
                Ok(Paginated {
                    data: vec![recipe("Soup")],
                    pagination: Pagination::for_request(request, 30),
                })
            });
        let app = test::init_service(test_app(state_with_catalogue(catalogue))).await;

        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["pagination"]["currentPage"], page);
    }

    #[rstest]
    #[case("/api/recipes/all/0")]
    #[case("/api/recipes/all/x")]
    #[case("/api/recipes/all/1/0")]
    #[actix_web::test]
    async fn invalid_page_segments_are_rejected(#[case] uri: &str) {
        let app =
            test::init_service(test_app(state_with_catalogue(MockRecipeCatalogueQuery::new())))
                .await;

        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["code"], "invalid_request");
    }

    #[actix_web::test]
    async fn search_route_wins_over_slug_route() {
        let mut catalogue = MockRecipeCatalogueQuery::new();
        catalogue
            .expect_search()
            .withf(|term| term.to_string() == "soup")
            .times(1)
            .returning(|_| Ok(vec![recipe("Tomato Soup")]));
        let app = test::init_service(test_app(state_with_catalogue(catalogue))).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/recipes/search?q=soup")
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["recipes"][0]["Name"], "Tomato Soup");
    }

    #[rstest]
    #[case("/api/recipes/search")]
    #[case("/api/recipes/search?q=")]
    #[actix_web::test]
    async fn search_requires_a_term(#[case] uri: &str) {
        let app =
            test::init_service(test_app(state_with_catalogue(MockRecipeCatalogueQuery::new())))
                .await;

        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "Invalid or missing query string");
    }

    #[actix_web::test]
    async fn missing_recipe_maps_to_not_found() {
        let mut catalogue = MockRecipeCatalogueQuery::new();
        catalogue
            .expect_find_by_slug()
            .returning(|_| Err(Error::recipe_not_found("There is no recipe with this name")));
        let app = test::init_service(test_app(state_with_catalogue(catalogue))).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/recipes/beef-wellington")
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["code"], "recipe_not_found");
        assert_eq!(body["error"], "There is no recipe with this name");
    }

    #[actix_web::test]
    async fn malformed_slugs_never_reach_the_catalogue() {
        let app =
            test::init_service(test_app(state_with_catalogue(MockRecipeCatalogueQuery::new())))
                .await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/recipes/Chicken-Curry")
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["details"]["code"], "invalid_slug");
    }
}
