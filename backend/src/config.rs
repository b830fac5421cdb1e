//! Runtime settings loaded via OrthoConfig.
//!
//! Values come from `COOKBOOK_*` environment variables (and the matching
//! command-line flags), falling back to the defaults below.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::inbound::http::state::DEFAULT_PAGE_SIZE;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Settings controlling the HTTP listener and catalogue source.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "COOKBOOK")]
pub struct CookbookSettings {
    /// Address to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// JSON file of recipes; the bundled data set is used when unset.
    pub recipes_path: Option<PathBuf>,
    /// Page size for `/api/recipes/all` when no limit is given.
    pub default_page_size: Option<u64>,
}

impl CookbookSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn recipes_path(&self) -> Option<PathBuf> {
        self.recipes_path.clone()
    }

    /// Configured page size; zero falls back to the default.
    pub fn default_page_size(&self) -> u64 {
        self.default_page_size
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }
}
