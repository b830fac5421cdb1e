//! Cookbook entry-point: loads settings and the recipe catalogue, then serves
//! the REST API.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use cookbook::config::CookbookSettings;
use cookbook::domain::RecipeCatalogue;
use cookbook::inbound::http::health::HealthState;
use cookbook::outbound::JsonRecipeSource;
use server::{ServerConfig, create_server, drain};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = CookbookSettings::load_from_iter(std::env::args_os())
        .map_err(|e| io::Error::other(format!("failed to load settings: {e}")))?;

    let source = JsonRecipeSource::from_path(settings.recipes_path());
    let catalogue = RecipeCatalogue::from_source(&source)
        .map_err(|e| io::Error::other(format!("failed to load recipes: {e}")))?;
    info!(recipes = catalogue.len(), "recipe catalogue loaded");

    let config = ServerConfig::new((settings.host().to_owned(), settings.port()))
        .with_catalogue(catalogue)
        .with_default_page_size(settings.default_page_size());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let handle = server.handle();
    let mut server_task = actix_web::rt::spawn(server);

    tokio::select! {
        joined = &mut server_task => return joined.map_err(io::Error::other)?,
        signal = actix_web::rt::signal::ctrl_c() => match signal {
            Ok(()) => drain(health_state, handle).await,
            Err(e) => warn!(error = %e, "failed to listen for shutdown signal"),
        },
    }

    server_task.await.map_err(io::Error::other)?
}
