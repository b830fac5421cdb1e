//! Custom list HTTP handlers.
//!
//! ```text
//! GET    /api/lists
//! POST   /api/lists
//! POST   /api/lists/{listId}
//! DELETE /api/lists/{listId}/recipes/{recipeName}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::CustomList;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CustomListSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    NewListBody, RecipeBody, parse_list_id, parse_new_list, parse_recipe, parse_recipe_name,
};

/// A single list.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListResponse {
    #[schema(value_type = CustomListSchema)]
    pub list: CustomList,
}

/// Every list after a mutation.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListsResponse {
    #[schema(value_type = Vec<CustomListSchema>)]
    pub lists: Vec<CustomList>,
}

/// Fetch every list in creation order.
#[utoipa::path(
    get,
    path = "/api/lists",
    responses(
        (status = 200, description = "All lists", body = Vec<CustomListSchema>),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["lists"],
    operation_id = "getLists"
)]
#[get("/lists")]
pub async fn get_lists(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<CustomList>>> {
    let lists = state.lists_query.list_all().await?;
    Ok(web::Json(lists))
}

/// Create a list, optionally seeded with a recipe.
#[utoipa::path(
    post,
    path = "/api/lists",
    request_body = NewListBody,
    responses(
        (status = 201, description = "List created", body = ListResponse),
        (status = 400, description = "Invalid body or duplicate title", body = ErrorSchema)
    ),
    tags = ["lists"],
    operation_id = "createList"
)]
#[post("/lists")]
pub async fn create_list(
    state: web::Data<HttpState>,
    payload: web::Json<NewListBody>,
) -> ApiResult<HttpResponse> {
    let new_list = parse_new_list(payload.into_inner())?;
    let list = state.lists.create_list(new_list).await?;
    Ok(HttpResponse::Created().json(ListResponse { list }))
}

/// Add a recipe to a list.
#[utoipa::path(
    post,
    path = "/api/lists/{listId}",
    params(("listId" = u64, Path, description = "List identifier")),
    request_body = RecipeBody,
    responses(
        (status = 201, description = "Recipe added", body = ListResponse),
        (status = 400, description = "Invalid input or duplicate recipe", body = ErrorSchema),
        (status = 404, description = "List not found", body = ErrorSchema)
    ),
    tags = ["lists"],
    operation_id = "addRecipeToList"
)]
#[post("/lists/{listId}")]
pub async fn add_recipe(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<RecipeBody>,
) -> ApiResult<HttpResponse> {
    let list_id = parse_list_id(&path.into_inner())?;
    let recipe = parse_recipe(payload.into_inner())?;
    let list = state.lists.add_recipe(list_id, recipe).await?;
    Ok(HttpResponse::Created().json(ListResponse { list }))
}

/// Remove a recipe from a list by name or slug.
#[utoipa::path(
    delete,
    path = "/api/lists/{listId}/recipes/{recipeName}",
    params(
        ("listId" = u64, Path, description = "List identifier"),
        ("recipeName" = String, Path, description = "Recipe name; compared by slug")
    ),
    responses(
        (status = 201, description = "Recipe removed; every list returned", body = ListsResponse),
        (status = 400, description = "Invalid path parameters", body = ErrorSchema),
        (status = 404, description = "List or recipe not found", body = ErrorSchema)
    ),
    tags = ["lists"],
    operation_id = "removeRecipeFromList"
)]
#[delete("/lists/{listId}/recipes/{recipeName}")]
pub async fn remove_recipe(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<HttpResponse> {
    let (raw_list_id, raw_recipe_name) = path.into_inner();
    let list_id = parse_list_id(&raw_list_id)?;
    let recipe_name = parse_recipe_name(&raw_recipe_name)?;
    let lists = state.lists.remove_recipe(list_id, recipe_name).await?;
    Ok(HttpResponse::Created().json(ListsResponse { lists }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockRecipeListsCommand, MockRecipeListsQuery};
    use crate::domain::{Error, ListId};
    use crate::inbound::http::test_utils::{in_memory_state, state_with_lists, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn soup() -> Value {
        json!({
            "Name": "Soup",
            "url": "https://example.org/soup",
            "Description": null,
            "Author": null,
            "Ingredients": ["water"],
            "Method": ["Boil."],
        })
    }

    #[actix_web::test]
    async fn create_list_returns_created_envelope() {
        let app = test::init_service(test_app(in_memory_state())).await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/lists")
                .set_json(json!({ "title": "Favorites", "recipe": soup() }))
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["list"]["listId"], 1);
        assert_eq!(body["list"]["title"], "Favorites");
        assert_eq!(body["list"]["recipes"][0]["Name"], "Soup");
    }

    #[rstest]
    #[case(json!({}), "missing_field")]
    #[case(json!({ "title": "" }), "empty_title")]
    #[case(json!({ "title": 7 }), "malformed_body")]
    #[case(json!({ "title": "Soups", "recipe": { "Name": "Soup", "url": "nope", "Ingredients": [], "Method": [] } }), "invalid_url")]
    #[actix_web::test]
    async fn invalid_list_bodies_are_rejected(#[case] payload: Value, #[case] code: &str) {
        let app = test::init_service(test_app(in_memory_state())).await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/lists")
                .set_json(payload)
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["details"]["code"], code);
    }

    #[actix_web::test]
    async fn non_json_bodies_use_the_error_envelope() {
        let app = test::init_service(test_app(in_memory_state())).await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/lists")
                .insert_header(("content-type", "application/json"))
                .set_payload("{not json")
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["details"]["code"], "malformed_body");
    }

    #[actix_web::test]
    async fn add_recipe_validates_list_id_before_calling_the_port() {
        let app = test::init_service(test_app(state_with_lists(
            MockRecipeListsCommand::new(),
            MockRecipeListsQuery::new(),
        )))
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/lists/abc")
                .set_json(soup())
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["details"]["code"], "invalid_list_id");
    }

    #[actix_web::test]
    async fn add_recipe_to_missing_list_is_not_found() {
        let mut lists = MockRecipeListsCommand::new();
        lists
            .expect_add_recipe()
            .withf(|list_id, _| list_id.get() == 42)
            .times(1)
            .returning(|_, _| Err(Error::list_not_found("List not found")));
        let app = test::init_service(test_app(state_with_lists(
            lists,
            MockRecipeListsQuery::new(),
        )))
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/lists/42")
                .set_json(soup())
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "List not found");
    }

    #[actix_web::test]
    async fn remove_recipe_decodes_the_name() {
        let mut lists = MockRecipeListsCommand::new();
        lists
            .expect_remove_recipe()
            .withf(|list_id, name| *list_id == ListId::new(1).expect("id") && name.to_string() == "Chicken Curry!")
            .times(1)
            .returning(|_, _| Ok(Vec::new()));
        let app = test::init_service(test_app(state_with_lists(
            lists,
            MockRecipeListsQuery::new(),
        )))
        .await;

        let res = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri("/api/lists/1/recipes/Chicken%20Curry!")
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!({ "lists": [] }));
    }

    #[actix_web::test]
    async fn get_lists_returns_a_bare_array() {
        let mut query = MockRecipeListsQuery::new();
        query.expect_list_all().times(1).returning(|| Ok(Vec::new()));
        let app = test::init_service(test_app(state_with_lists(
            MockRecipeListsCommand::new(),
            query,
        )))
        .await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/api/lists").to_request())
                .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body, json!([]));
    }
}
