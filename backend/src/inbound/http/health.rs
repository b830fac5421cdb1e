//! Health endpoints: liveness and readiness probes for orchestration.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde_json::json;

/// Shared health state for readiness and liveness checks.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
    recipes: AtomicUsize,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
            recipes: AtomicUsize::new(0),
        }
    }
}

impl HealthState {
    /// Start as live but not ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service ready once the catalogue holds `recipes` entries.
    pub fn mark_ready(&self, recipes: usize) {
        self.recipes.store(recipes, Ordering::Release);
        self.ready.store(true, Ordering::Release);
    }

    /// Fail liveness probes so the instance drains before shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool, body: serde_json::Value) -> HttpResponse {
        let mut response = if probe_ok {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .json(body)
    }
}

/// Readiness probe. 200 once the recipe catalogue is loaded, 503 before.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Catalogue loaded; serving traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    let is_ready = state.is_ready();
    let body = if is_ready {
        json!({ "status": "ready", "recipes": state.recipes.load(Ordering::Acquire) })
    } else {
        json!({ "status": "starting" })
    };
    HealthState::probe_response(is_ready, body)
}

/// Liveness probe. 200 while live, 503 once draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    let is_alive = state.is_alive();
    let status = if is_alive { "live" } else { "draining" };
    HealthState::probe_response(is_alive, json!({ "status": status }))
}
