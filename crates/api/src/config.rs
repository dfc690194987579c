//! Process configuration (environment driven).

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

use paintcalc_catalog::Catalog;

pub const BIND_ADDR_ENV: &str = "PAINTCALC_BIND_ADDR";
pub const CATALOG_PATH_ENV: &str = "PAINTCALC_CATALOG_PATH";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// JSON catalog to serve; the built-in catalog when `None`.
    pub catalog_path: Option<PathBuf>,
}

impl ApiConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup` (unset and blank values mean "default").
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = get(BIND_ADDR_ENV).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("{BIND_ADDR_ENV} is not a socket address: {bind_addr}"))?;

        let catalog_path = get(CATALOG_PATH_ENV).map(PathBuf::from);

        Ok(Self {
            bind_addr,
            catalog_path,
        })
    }

    /// Load and validate the configured catalog.
    ///
    /// Any integrity violation is returned as an error so startup fails fast.
    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        let Some(path) = &self.catalog_path else {
            return Ok(Catalog::builtin());
        };

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {}", path.display()))?;
        Catalog::from_json_str(&json)
            .with_context(|| format!("invalid catalog file {}", path.display()))
    }

    /// Human-readable description of where the catalog comes from.
    pub fn catalog_source(&self) -> String {
        match &self.catalog_path {
            Some(path) => path.display().to_string(),
            None => "built-in".to_string(),
        }
    }
}
