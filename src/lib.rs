//! Shop-info relay service library.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod upstream;

pub use config::RelayConfig;
pub use error::RelayError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
