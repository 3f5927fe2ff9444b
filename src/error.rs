//! Service error taxonomy and HTTP translation.
//!
//! # Design Decisions
//! - The handler core returns a typed result; this boundary translates each
//!   variant to a status code and JSON envelope
//! - Upstream failures are logged here, once, at the translation point
//! - Client input errors carry fixed usage guidance and are not logged

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::http::envelope::ErrorEnvelope;
use crate::upstream::{InvalidSite, UpstreamError};

/// Usage guidance returned with parameter errors.
const USAGE: &str = "GET /?site={shop_url}&cc={card_info}";
const EXAMPLE: &str = "/?site=example.myshopify.com&cc=test123";

/// Failure of a functional request.
#[derive(Debug, Error)]
pub enum RelayError {
    /// `site` or `cc` missing or empty. No outbound call is made.
    #[error("missing required parameters")]
    MissingParameters,

    /// The query string itself could not be deserialized. No outbound call
    /// is made.
    #[error("malformed query string")]
    MalformedQuery,

    /// `site` failed host validation. No outbound call is made.
    #[error("rejected site parameter: {0}")]
    ForbiddenSite(#[from] InvalidSite),

    /// One or both credentials absent from configuration.
    #[error("Shopify API credentials not configured")]
    MissingCredentials,

    /// The outbound shop-info call failed.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, envelope) = match &self {
            RelayError::MissingParameters => (
                StatusCode::BAD_REQUEST,
                ErrorEnvelope::new("Missing required parameters").with_usage(USAGE, EXAMPLE),
            ),
            RelayError::MalformedQuery => (
                StatusCode::BAD_REQUEST,
                ErrorEnvelope::new("Invalid query string").with_usage(USAGE, EXAMPLE),
            ),
            RelayError::ForbiddenSite(invalid) => (
                StatusCode::BAD_REQUEST,
                ErrorEnvelope::new("Invalid site parameter")
                    .with_message(serde_json::Value::String(invalid.to_string())),
            ),
            RelayError::MissingCredentials => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorEnvelope::new("Shopify API credentials not configured"),
            ),
            RelayError::Upstream(err) => {
                tracing::error!(error = %err, "Shop info request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorEnvelope::new("Processing failed").with_message(err.detail()),
                )
            }
        };

        (status, Json(envelope)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameters_map_to_400_with_guidance() {
        let response = RelayError::MissingParameters.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn malformed_query_maps_to_400_with_guidance() {
        let response = RelayError::MalformedQuery.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_credentials_map_to_500() {
        let response = RelayError::MissingCredentials.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn upstream_failures_map_to_500() {
        let err = RelayError::Upstream(UpstreamError::Status {
            status: reqwest::StatusCode::UNAUTHORIZED,
            errors: None,
        });
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
