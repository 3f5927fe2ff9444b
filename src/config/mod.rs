//! Configuration management.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → RelayConfig::from_env (read once at startup)
//!     → RelayConfig (immutable)
//!     → shared via Arc to the HTTP server and handlers
//! ```
//!
//! # Design Decisions
//! - Config is read from the environment exactly once; handlers see an
//!   immutable snapshot through application state, never ambient globals
//! - Missing credentials are NOT a startup error; each functional request
//!   checks them and answers 500 until they are provided
//! - All sections have defaults so tests can build configs field by field

use serde::{Deserialize, Serialize};
use std::env;

/// Default listener port when `PORT` is unset.
const DEFAULT_PORT: u16 = 10_000;

/// Root configuration for the relay service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Shopify admin API credentials.
    pub credentials: CredentialsConfig,

    /// Outbound shop-info call settings.
    pub upstream: UpstreamConfig,

    /// Inbound request deadline.
    pub timeouts: TimeoutConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:10000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: format!("0.0.0.0:{}", DEFAULT_PORT),
        }
    }
}

/// Shopify credential pair.
///
/// Both values are optional here; the functional route requires both and
/// reports a fixed 500 when either is missing.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CredentialsConfig {
    /// Shopify API key (`SHOPIFY_API_KEY`). Held but never sent upstream.
    pub api_key: Option<String>,

    /// Shopify admin access token (`SHOPIFY_ACCESS_TOKEN`), sent in the
    /// `X-Shopify-Access-Token` header.
    pub access_token: Option<String>,
}

impl CredentialsConfig {
    /// Whether both credentials are present.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.access_token.is_some()
    }
}

/// Outbound shop-info call configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// URL scheme for the shop host ("https" in production; tests point
    /// this at plaintext mock upstreams).
    pub scheme: String,

    /// Outbound request timeout in seconds.
    pub timeout_secs: u64,

    /// Optional required domain suffix for the `site` parameter
    /// (e.g., ".myshopify.com"). Unset means any host shape is accepted.
    pub allowed_suffix: Option<String>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            scheme: "https".to_string(),
            timeout_secs: 10,
            allowed_suffix: None,
        }
    }
}

/// Inbound timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Total time allowed for an inbound request/response in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

impl RelayConfig {
    /// Build the configuration from the process environment.
    ///
    /// Called once at startup. Unset variables fall back to defaults;
    /// unparseable numeric values are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(port) = read_parsed::<u16>("PORT") {
            config.listener.bind_address = format!("0.0.0.0:{}", port);
        }

        config.credentials.api_key = read_nonempty("SHOPIFY_API_KEY");
        config.credentials.access_token = read_nonempty("SHOPIFY_ACCESS_TOKEN");

        if let Some(scheme) = read_nonempty("SHOPIFY_UPSTREAM_SCHEME") {
            config.upstream.scheme = scheme;
        }
        if let Some(secs) = read_parsed::<u64>("UPSTREAM_TIMEOUT_SECS") {
            config.upstream.timeout_secs = secs;
        }
        config.upstream.allowed_suffix = read_nonempty("SHOP_DOMAIN_SUFFIX");

        if let Some(secs) = read_parsed::<u64>("REQUEST_TIMEOUT_SECS") {
            config.timeouts.request_secs = secs;
        }

        config
    }
}

/// Read an environment variable, treating empty values as unset.
fn read_nonempty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

/// Read and parse an environment variable, logging values that fail to parse.
fn read_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = read_nonempty(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key = %key, value = %raw, "Ignoring unparseable environment variable");
            None
        }
    }
}
