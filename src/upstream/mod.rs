//! Upstream shop-info subsystem.
//!
//! # Data Flow
//! ```text
//! validated site + access token
//!     → client.rs (build URL, send GET with token header)
//!     → types.rs (decode shop body / classify failure)
//!     → Shop { name } or UpstreamError
//! ```
//!
//! # Design Decisions
//! - One shared client, built once at startup with a bounded timeout
//! - The site host is validated before URL construction, never after
//! - Non-2xx bodies are probed for the structured `errors` payload so the
//!   caller-facing envelope can carry it verbatim

pub mod client;
pub mod types;

pub use client::{validate_site, ShopifyClient};
pub use types::{InvalidSite, Shop, UpstreamError};
