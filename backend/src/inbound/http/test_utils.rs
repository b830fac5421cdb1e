//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::ports::{MockRecipeCatalogueQuery, MockRecipeListsCommand, MockRecipeListsQuery};
use crate::domain::{Recipe, RecipeCatalogue, RecipeDraft, RecipeListsService, slugify};
use crate::inbound::http::api_scope;
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::InMemoryRecipeListRepository;

/// Build a valid recipe named `name`.
pub fn recipe(name: &str) -> Recipe {
    Recipe::new(RecipeDraft {
        name: name.to_owned(),
        url: format!("https://example.org/{}", slugify(name)),
        description: None,
        author: None,
        ingredients: vec!["salt".to_owned()],
        method: vec!["Season.".to_owned()],
    })
    .expect("valid recipe")
}

/// State backed by real in-memory adapters and a small catalogue.
pub fn in_memory_state() -> HttpState {
    let lists = Arc::new(RecipeListsService::new(Arc::new(
        InMemoryRecipeListRepository::new(),
    )));
    HttpState::new(HttpStatePorts {
        catalogue: Arc::new(RecipeCatalogue::new(vec![
            recipe("Tomato Soup"),
            recipe("Chicken Curry!"),
        ])),
        lists: lists.clone(),
        lists_query: lists,
    })
}

/// State whose catalogue port is the supplied mock.
pub fn state_with_catalogue(catalogue: MockRecipeCatalogueQuery) -> HttpState {
    HttpState {
        catalogue: Arc::new(catalogue),
        ..in_memory_state()
    }
}

/// State whose list ports are the supplied mocks.
pub fn state_with_lists(lists: MockRecipeListsCommand, query: MockRecipeListsQuery) -> HttpState {
    HttpState {
        lists: Arc::new(lists),
        lists_query: Arc::new(query),
        ..in_memory_state()
    }
}

/// App with the `/api` scope and tracing middleware.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(api_scope())
}
