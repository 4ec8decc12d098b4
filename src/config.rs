use std::env;
use std::path::PathBuf;

const DEFAULT_ADDR: &str = "0.0.0.0:5000";

/// Server configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address, from `RECIPEDIA_ADDR`.
    pub addr: String,
    /// Recipe data file, from `RECIPEDIA_DATA`. Unset means the store
    /// is in-memory only.
    pub data_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            addr: env::var("RECIPEDIA_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string()),
            data_path: env::var("RECIPEDIA_DATA").ok().map(PathBuf::from),
        }
    }
}
