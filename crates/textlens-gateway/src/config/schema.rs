use std::net::SocketAddr;

use serde::Deserialize;
use textlens_core::error::{Result, TextLensError};
use textlens_core::limit::{DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT};

/// Store connection string (MongoDB URI; Cosmos DB's MongoDB API works too).
pub const CONNECTION_STRING_ENV: &str = "COSMOS_DB_CONNECTION_STRING";
pub const DATABASE_ENV: &str = "COSMOS_DB_DATABASE";
pub const CONTAINER_ENV: &str = "COSMOS_DB_CONTAINER";
/// Port assigned by a serverless custom-handler host; overrides `gateway.listen`'s port.
pub const HOST_PORT_ENV: &str = "FUNCTIONS_CUSTOMHANDLER_PORT";

const HISTORY_LIMIT_CEILING: usize = 1000;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub history: HistorySection,

    #[serde(default)]
    pub store: StoreSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
            history: HistorySection::default(),
            store: StoreSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TextLensError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }
        self.gateway.validate()?;
        self.history.validate()?;
        Ok(())
    }

    /// Resolve the bind address, letting the host-assigned port win.
    pub fn listen_addr<F>(&self, lookup: F) -> Result<SocketAddr>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut addr: SocketAddr = self.gateway.listen.parse().map_err(|e| {
            TextLensError::Config(format!("gateway.listen must be a valid SocketAddr: {e}"))
        })?;
        if let Some(port) = lookup(HOST_PORT_ENV).filter(|p| !p.is_empty()) {
            let port: u16 = port
                .parse()
                .map_err(|e| TextLensError::Config(format!("{HOST_PORT_ENV} invalid: {e}")))?;
            addr.set_port(port);
        }
        Ok(addr)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Mount point for the API routes, e.g. `/api`. Empty mounts at the root.
    #[serde(default)]
    pub route_prefix: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            route_prefix: String::new(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        let p = &self.route_prefix;
        if !p.is_empty() && (!p.starts_with('/') || p.ends_with('/')) {
            return Err(TextLensError::Config(
                "gateway.route_prefix must start with '/' and must not end with '/'".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HistorySection {
    #[serde(default = "default_history_limit")]
    pub default_limit: usize,

    #[serde(default = "max_history_limit")]
    pub max_limit: usize,
}

impl Default for HistorySection {
    fn default() -> Self {
        Self {
            default_limit: default_history_limit(),
            max_limit: max_history_limit(),
        }
    }
}

impl HistorySection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=HISTORY_LIMIT_CEILING).contains(&self.max_limit) {
            return Err(TextLensError::Config(format!(
                "history.max_limit must be between 1 and {HISTORY_LIMIT_CEILING}"
            )));
        }
        if self.default_limit == 0 || self.default_limit > self.max_limit {
            return Err(TextLensError::Config(
                "history.default_limit must be between 1 and history.max_limit".into(),
            ));
        }
        Ok(())
    }
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}
fn max_history_limit() -> usize {
    MAX_HISTORY_LIMIT
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Mongo,
    Memory,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    #[serde(default)]
    pub backend: StoreBackend,
}

/// Store location read from the environment at startup.
#[derive(Debug, Clone)]
pub struct StoreEnv {
    pub connection_string: String,
    pub database: String,
    pub container: String,
}

impl StoreEnv {
    /// Every value is required and non-empty; a missing one is fatal at startup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| TextLensError::Config(format!("missing environment variable {key}")))
        };
        Ok(Self {
            connection_string: require(CONNECTION_STRING_ENV)?,
            database: require(DATABASE_ENV)?,
            container: require(CONTAINER_ENV)?,
        })
    }
}
