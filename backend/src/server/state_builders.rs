//! Builders wiring domain services and outbound adapters into HTTP state.

use std::sync::Arc;

use actix_web::web;

use cookbook::domain::{RecipeCatalogue, RecipeListsService};
use cookbook::inbound::http::state::{HttpState, HttpStatePorts};
use cookbook::outbound::InMemoryRecipeListRepository;

/// Build handler state around `catalogue` and a fresh in-memory list store.
pub(crate) fn build_http_state(
    catalogue: RecipeCatalogue,
    default_page_size: u64,
) -> web::Data<HttpState> {
    let lists = Arc::new(RecipeListsService::new(Arc::new(
        InMemoryRecipeListRepository::new(),
    )));
    let state = HttpState::new(HttpStatePorts {
        catalogue: Arc::new(catalogue),
        lists: lists.clone(),
        lists_query: lists,
    })
    .with_default_page_size(default_page_size);
    web::Data::new(state)
}
