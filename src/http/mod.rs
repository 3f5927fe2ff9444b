//! HTTP surface.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, middleware, routing)
//!     → handlers.rs (validate, call upstream, shape)
//!     → envelope.rs (success / error JSON shapes)
//!     → Send to client
//! ```

pub mod envelope;
pub mod handlers;
pub mod server;

pub use server::HttpServer;
