//! Shopify admin API client with timeout and error handling.
//!
//! # Responsibilities
//! - Hold the single shared HTTP client, built once with a bounded timeout
//! - Build the shop-info URL from a validated site host
//! - Map transport failures and non-success statuses to typed errors

use std::time::Duration;
use url::Url;

use crate::config::UpstreamConfig;
use crate::upstream::types::{
    InvalidSite, Shop, ShopInfoBody, UpstreamError, UpstreamResult, ACCESS_TOKEN_HEADER,
    SHOP_INFO_PATH,
};

/// Client for the shop-info admin API.
///
/// Cheap to clone; the inner `reqwest::Client` is an `Arc` around its
/// connection pool.
#[derive(Clone)]
pub struct ShopifyClient {
    http: reqwest::Client,
    scheme: String,
}

impl ShopifyClient {
    /// Create a new client from the upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        tracing::info!(
            scheme = %config.scheme,
            timeout_secs = config.timeout_secs,
            "Shopify client initialized"
        );

        Ok(Self {
            http,
            scheme: config.scheme.clone(),
        })
    }

    /// Fetch the shop object from `{scheme}://{site}/admin/api/2023-10/shop.json`.
    ///
    /// `site` must already have passed [`validate_site`]. The call is bounded
    /// by the client timeout; a non-2xx answer has its body probed for the
    /// structured `errors` field Shopify returns on failures.
    pub async fn fetch_shop_info(&self, site: &str, access_token: &str) -> UpstreamResult<Shop> {
        let url = format!("{}://{}{}", self.scheme, site, SHOP_INFO_PATH);

        tracing::debug!(url = %url, "Fetching shop info");

        let response = self
            .http
            .get(&url)
            .header(ACCESS_TOKEN_HEADER, access_token)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let errors = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| body.get("errors").cloned());
            return Err(UpstreamError::Status { status, errors });
        }

        let body: ShopInfoBody = response.json().await?;
        Ok(body.shop)
    }
}

/// Validate the caller-supplied `site` before it is spliced into a URL.
///
/// Accepts a bare `host` or `host:port` authority only; anything carrying a
/// scheme, path, query, fragment, userinfo, or whitespace is rejected so a
/// caller cannot redirect the outbound call. When `allowed_suffix` is
/// configured the host must additionally end with that suffix.
pub fn validate_site(site: &str, allowed_suffix: Option<&str>) -> Result<(), InvalidSite> {
    if site.chars().any(char::is_whitespace) || site.contains(['/', '?', '#', '@', '\\']) {
        return Err(InvalidSite::new(
            "site must be a bare host, optionally with a port",
        ));
    }

    let parsed = Url::parse(&format!("http://{}", site))
        .map_err(|_| InvalidSite::new("site is not a valid host"))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| InvalidSite::new("site is not a valid host"))?;

    if let Some(suffix) = allowed_suffix {
        if !host.ends_with(suffix) {
            return Err(InvalidSite::new(format!(
                "site host must end with {}",
                suffix
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_hosts_and_ports() {
        assert!(validate_site("example.myshopify.com", None).is_ok());
        assert!(validate_site("127.0.0.1:8080", None).is_ok());
    }

    #[test]
    fn rejects_url_splicing_attempts() {
        assert!(validate_site("evil.com/admin", None).is_err());
        assert!(validate_site("shop.com?x=1", None).is_err());
        assert!(validate_site("user@shop.com", None).is_err());
        assert!(validate_site("shop.com #frag", None).is_err());
        assert!(validate_site("", None).is_err());
    }

    #[test]
    fn enforces_configured_suffix() {
        assert!(validate_site("demo.myshopify.com", Some(".myshopify.com")).is_ok());
        assert!(validate_site("evil.example.com", Some(".myshopify.com")).is_err());
    }
}
