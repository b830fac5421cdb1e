//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on domain ports and stay testable without real adapters.

use std::sync::Arc;

use crate::domain::ports::{RecipeCatalogueQuery, RecipeListsCommand, RecipeListsQuery};

/// Page size used when a request names no limit.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub catalogue: Arc<dyn RecipeCatalogueQuery>,
    pub lists: Arc<dyn RecipeListsCommand>,
    pub lists_query: Arc<dyn RecipeListsQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub catalogue: Arc<dyn RecipeCatalogueQuery>,
    pub lists: Arc<dyn RecipeListsCommand>,
    pub lists_query: Arc<dyn RecipeListsQuery>,
    pub default_page_size: u64,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state with the default page size.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use cookbook::domain::{RecipeCatalogue, RecipeListsService};
    /// use cookbook::inbound::http::state::{HttpState, HttpStatePorts};
    /// use cookbook::outbound::InMemoryRecipeListRepository;
    ///
    /// let lists = Arc::new(RecipeListsService::new(Arc::new(
    ///     InMemoryRecipeListRepository::new(),
    /// )));
    /// let state = HttpState::new(HttpStatePorts {
    ///     catalogue: Arc::new(RecipeCatalogue::default()),
    ///     lists: lists.clone(),
    ///     lists_query: lists,
    /// });
    /// assert_eq!(state.default_page_size, 10);
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            catalogue,
            lists,
            lists_query,
        } = ports;
        Self {
            catalogue,
            lists,
            lists_query,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the page size used when a request omits `limit`.
    ///
    /// Zero is ignored so every request still resolves to a valid page.
    #[must_use]
    pub fn with_default_page_size(mut self, page_size: u64) -> Self {
        if page_size > 0 {
            self.default_page_size = page_size;
        }
        self
    }
}
