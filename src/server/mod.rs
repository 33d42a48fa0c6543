//! # Server Components
//!
//! The transport layer around the codec:
//!
//! - [`config`]: TOML-backed settings for the web server binary
//! - [`routes`]: axum router, JSON handlers, CORS, static frontend

pub mod config;
pub mod routes;

pub use config::ServerConfig;
pub use routes::router;
