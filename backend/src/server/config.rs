//! HTTP server configuration object.

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;
use cookbook::domain::RecipeCatalogue;
use cookbook::inbound::http::state::DEFAULT_PAGE_SIZE;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) catalogue: RecipeCatalogue,
    pub(crate) default_page_size: u64,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Configuration with an empty catalogue and the default page size.
    #[must_use]
    pub fn new(bind_addr: (String, u16)) -> Self {
        Self {
            bind_addr,
            catalogue: RecipeCatalogue::default(),
            default_page_size: DEFAULT_PAGE_SIZE,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Serve `catalogue` from the recipe endpoints.
    #[must_use]
    pub fn with_catalogue(mut self, catalogue: RecipeCatalogue) -> Self {
        self.catalogue = catalogue;
        self
    }

    #[must_use]
    pub fn with_default_page_size(mut self, page_size: u64) -> Self {
        self.default_page_size = page_size;
        self
    }

    #[cfg(feature = "metrics")]
    /// Use `prometheus` instead of the default `/metrics` middleware.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: PrometheusMetrics) -> Self {
        self.prometheus = Some(prometheus);
        self
    }
}
