//! Route handlers.
//!
//! # Responsibilities
//! - `/health` liveness probe
//! - The functional shop-info route: validate → check credentials → call
//!   upstream → shape response, two early exits, no retries
//! - The 404 catch-all for unknown paths and unmatched methods

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::error::RelayError;
use crate::http::envelope::{ErrorEnvelope, HealthStatus, ResultEnvelope};
use crate::http::server::AppState;
use crate::upstream::validate_site;

/// Query parameters of the functional route.
///
/// Both are required; optional here so their absence maps to the guidance
/// envelope instead of an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct ShopInfoParams {
    pub site: Option<String>,
    pub cc: Option<String>,
}

/// `GET /health`. Always succeeds.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::now())
}

/// `GET /?site=&cc=`, the functional route.
///
/// A single linear sequence with the outbound call as its only suspension
/// point. Every failure returns through [`RelayError`]; nothing here panics
/// or leaves the request without a response.
pub async fn shop_info(
    State(state): State<AppState>,
    params: Result<Query<ShopInfoParams>, QueryRejection>,
) -> Result<Json<ResultEnvelope>, RelayError> {
    // An undeserializable query string (e.g. a duplicated parameter) still
    // gets the JSON guidance envelope, never the extractor's plain text.
    let Query(params) = params.map_err(|_| RelayError::MalformedQuery)?;

    let site = require_param(params.site.as_deref())?;
    let cc = require_param(params.cc.as_deref())?;

    validate_site(site, state.config.upstream.allowed_suffix.as_deref())?;

    // Credentials are checked per request: their absence is a 500 on the
    // functional route, never a startup abort.
    let credentials = &state.config.credentials;
    let access_token = match (&credentials.api_key, &credentials.access_token) {
        (Some(_), Some(token)) => token,
        _ => return Err(RelayError::MissingCredentials),
    };

    let shop = state.shopify.fetch_shop_info(site, access_token).await?;

    tracing::debug!(site = %site, shop = %shop.name, "Shop info request served");

    Ok(Json(ResultEnvelope::new(site, shop.name, cc)))
}

/// Catch-all: fixed not-found envelope.
pub async fn not_found() -> (StatusCode, Json<ErrorEnvelope>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorEnvelope::new("Endpoint not found")),
    )
}

/// Present-and-non-empty check for a required query parameter.
fn require_param(value: Option<&str>) -> Result<&str, RelayError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(RelayError::MissingParameters)
}
