//! Upstream wire types and error taxonomy.

use serde::Deserialize;
use thiserror::Error;

/// Fixed versioned admin API path probed on the shop host.
pub const SHOP_INFO_PATH: &str = "/admin/api/2023-10/shop.json";

/// Header carrying the admin access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Result alias for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Failure of the outbound shop-info call.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connect failure, timeout, or an undecodable success body.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("shop API returned status {status}")]
    Status {
        status: reqwest::StatusCode,
        /// The upstream's structured `errors` payload, when the body had one.
        errors: Option<serde_json::Value>,
    },
}

impl UpstreamError {
    /// Caller-facing detail: the structured upstream payload when present,
    /// else the raw failure text.
    pub fn detail(&self) -> serde_json::Value {
        match self {
            UpstreamError::Status {
                errors: Some(errors),
                ..
            } => errors.clone(),
            other => serde_json::Value::String(other.to_string()),
        }
    }
}

/// Wire shape of the shop-info response body.
#[derive(Debug, Deserialize)]
pub struct ShopInfoBody {
    pub shop: Shop,
}

/// The subset of the upstream shop object this service consumes.
#[derive(Debug, Clone, Deserialize)]
pub struct Shop {
    /// Shop display name.
    pub name: String,
}

/// Rejected `site` parameter (bad host shape or disallowed domain).
#[derive(Debug, Error)]
#[error("{reason}")]
pub struct InvalidSite {
    pub reason: String,
}

impl InvalidSite {
    pub(crate) fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_detail_prefers_structured_errors() {
        let err = UpstreamError::Status {
            status: reqwest::StatusCode::UNAUTHORIZED,
            errors: Some(serde_json::json!({"shop": "invalid token"})),
        };
        assert_eq!(err.detail(), serde_json::json!({"shop": "invalid token"}));
    }

    #[test]
    fn status_detail_falls_back_to_text() {
        let err = UpstreamError::Status {
            status: reqwest::StatusCode::BAD_GATEWAY,
            errors: None,
        };
        assert_eq!(
            err.detail(),
            serde_json::Value::String("shop API returned status 502 Bad Gateway".into())
        );
    }

    #[test]
    fn shop_info_body_extracts_nested_name() {
        let body: ShopInfoBody =
            serde_json::from_str(r#"{"shop":{"name":"Test Shop","id":42}}"#).unwrap();
        assert_eq!(body.shop.name, "Test Shop");
    }
}
