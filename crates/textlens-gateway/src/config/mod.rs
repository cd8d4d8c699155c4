//! Gateway config loader (strict YAML file + environment).
//!
//! The YAML file is optional: a missing file yields validated defaults.
//! Store credentials never live in the file; they come from the environment
//! (see [`StoreEnv`]).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use textlens_core::error::{Result, TextLensError};

pub use schema::{
    GatewayConfig, GatewaySection, HistorySection, StoreBackend, StoreEnv, StoreSection,
};

/// Env var naming the YAML config path.
pub const CONFIG_PATH_ENV: &str = "TEXTLENS_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "textlens.yaml";

/// Process environment lookup, the production `lookup` for env-driven settings.
pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(%path, "config file not found, using defaults");
            let cfg = GatewayConfig::default();
            cfg.validate()?;
            Ok(cfg)
        }
        Err(e) => Err(TextLensError::Config(format!("read config failed: {e}"))),
    }
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| TextLensError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
