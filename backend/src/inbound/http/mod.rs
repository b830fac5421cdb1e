//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod lists;
pub mod recipes;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;

use actix_web::{Scope, web};

use self::error::{json_error_handler, path_error_handler, query_error_handler};

/// The `/api` scope with every recipe and list route.
///
/// Search and paging routes are registered ahead of `/recipes/{slug}` so
/// `search` and `all` are never read as slugs.
pub fn api_scope() -> Scope {
    web::scope("/api")
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(recipes::search_recipes)
        .service(recipes::list_recipes)
        .service(recipes::get_recipe)
        .service(lists::get_lists)
        .service(lists::create_list)
        .service(lists::add_recipe)
        .service(lists::remove_recipe)
}
