//! Cookbook backend library: recipe catalogue and custom list service.
//!
//! Layout follows a hexagonal split: `domain` holds entities, services, and
//! ports; `inbound::http` adapts ports to Actix handlers; `outbound` holds
//! the JSON recipe source and the in-memory list store.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
