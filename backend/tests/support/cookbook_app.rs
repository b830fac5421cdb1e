//! Shared app construction for HTTP integration tests.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use cookbook::Trace;
use cookbook::domain::{RecipeCatalogue, RecipeListsService};
use cookbook::inbound::http::api_scope;
use cookbook::inbound::http::state::{HttpState, HttpStatePorts};
use cookbook::outbound::{InMemoryRecipeListRepository, JsonRecipeSource};

/// Catalogue loaded from the bundled data file.
pub fn bundled_catalogue() -> RecipeCatalogue {
    RecipeCatalogue::from_source(&JsonRecipeSource::Bundled).expect("bundled recipes load")
}

/// Handler state over `catalogue` and an empty in-memory list store.
pub fn state(catalogue: RecipeCatalogue) -> HttpState {
    let lists = Arc::new(RecipeListsService::new(Arc::new(
        InMemoryRecipeListRepository::new(),
    )));
    HttpState::new(HttpStatePorts {
        catalogue: Arc::new(catalogue),
        lists: lists.clone(),
        lists_query: lists,
    })
}

/// The `/api` scope wrapped in request tracing.
pub fn app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(api_scope())
}
