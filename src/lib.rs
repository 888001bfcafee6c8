//! HR gateway library.
//!
//! A thin proxy in front of the Manager payroll API that forwards employee
//! list/create calls and strips financial fields from what comes back.

pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod sanitizer;
pub mod upstream;

pub use config::GatewayConfig;
pub use error::{ErrorResponse, GatewayError};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use sanitizer::sanitize;
