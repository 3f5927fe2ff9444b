//! Process lifecycle.
//!
//! # Data Flow
//! ```text
//! SIGINT (Ctrl+C)
//!     → Shutdown::trigger
//!     → broadcast to the HTTP server
//!     → stop accepting, drain in-flight requests, exit
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
