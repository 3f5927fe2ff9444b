//! JSON envelopes shared by every route.
//!
//! # Design Decisions
//! - One success shape, one error shape; optional error fields are omitted
//!   from the wire instead of serialized as null
//! - Timestamps use millisecond-precision RFC-3339 with a `Z` suffix
//! - The redacted marker never echoes more than the last four characters
//!   of the caller-supplied token

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Fixed prefix of the redacted card marker.
const CARD_PREFIX: &str = "Card ending in ";

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
}

impl HealthStatus {
    pub fn now() -> Self {
        Self {
            status: "OK",
            timestamp: iso_timestamp(),
        }
    }
}

/// Success body of the functional route.
#[derive(Debug, Serialize)]
pub struct ResultEnvelope {
    pub message: &'static str,
    pub site: String,
    #[serde(rename = "shopInfo")]
    pub shop_info: String,
    #[serde(rename = "cardProcessed")]
    pub card_processed: String,
    pub timestamp: String,
}

impl ResultEnvelope {
    /// Assemble the success envelope from the echoed site, the upstream shop
    /// name, and the raw `cc` token (redacted here, never stored).
    pub fn new(site: impl Into<String>, shop_name: impl Into<String>, cc: &str) -> Self {
        Self {
            message: "API request successful",
            site: site.into(),
            shop_info: shop_name.into(),
            card_processed: redact_card(cc),
            timestamp: iso_timestamp(),
        }
    }
}

/// Failure body for every error category.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<&'static str>,
    pub timestamp: String,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: None,
            usage: None,
            example: None,
            timestamp: iso_timestamp(),
        }
    }

    /// Attach best-effort failure detail (raw text or structured payload).
    pub fn with_message(mut self, message: serde_json::Value) -> Self {
        self.message = Some(message);
        self
    }

    /// Attach usage guidance for client input errors.
    pub fn with_usage(mut self, usage: &'static str, example: &'static str) -> Self {
        self.usage = Some(usage);
        self.example = Some(example);
        self
    }
}

/// Redacted marker: fixed prefix plus the last four characters of `cc`.
///
/// Shorter input keeps the full string. Counted in characters, not bytes,
/// so multi-byte input cannot split a slice.
pub fn redact_card(cc: &str) -> String {
    let len = cc.chars().count();
    let tail: String = cc.chars().skip(len.saturating_sub(4)).collect();
    format!("{}{}", CARD_PREFIX, tail)
}

/// Millisecond-precision RFC-3339 timestamp (e.g. `2026-08-30T12:00:00.000Z`).
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
