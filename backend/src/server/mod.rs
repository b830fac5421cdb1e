//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

pub(crate) use state_builders::build_http_state;

use actix_cors::Cors;
use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use tracing::{info, warn};

use cookbook::Trace;
#[cfg(debug_assertions)]
use cookbook::doc::ApiDoc;
use cookbook::inbound::http::api_scope;
use cookbook::inbound::http::health::{HealthState, live, ready};
use cookbook::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Any origin, method, and header may call the API.
fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

pub(crate) fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(cors())
        .wrap(Trace)
        .service(api_scope())
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Prometheus middleware serving `/metrics`.
///
/// # Errors
/// Returns [`std::io::Error`] when the registry rejects the collectors.
#[cfg(feature = "metrics")]
pub(crate) fn default_metrics() -> std::io::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new("cookbook")
        .endpoint("/metrics")
        .build()
        .map_err(|error| std::io::Error::other(format!("failed to build metrics: {error}")))
}

/// Construct the HTTP server and mark the service ready.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        catalogue,
        default_page_size,
        #[cfg(feature = "metrics")]
        prometheus,
    } = config;

    let recipe_count = catalogue.len();
    if catalogue.is_empty() {
        warn!("recipe catalogue is empty; /api/recipes/all will return 404");
    }
    let http_state = build_http_state(catalogue, default_page_size);
    #[cfg(feature = "metrics")]
    let prometheus = match prometheus {
        Some(prometheus) => prometheus,
        None => default_metrics()?,
    };
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        let app = build_app(server_health_state.clone(), http_state.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());

        app
    })
    .bind(bind_addr.clone())?
    .run();

    info!(host = %bind_addr.0, port = bind_addr.1, recipes = recipe_count, "server listening");
    health_state.mark_ready(recipe_count);
    Ok(server)
}

/// Fail liveness probes, then stop accepting work and let in-flight requests
/// finish.
pub(crate) async fn drain(health_state: web::Data<HealthState>, handle: ServerHandle) {
    health_state.mark_unhealthy();
    info!("draining: liveness probe now reports 503");
    handle.stop(true).await;
}
