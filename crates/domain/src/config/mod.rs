//! Configuration module for netbridge
//!
//! - `root`: Main configuration and CLI overrides
//! - `api_server`: Backing store API endpoint
//! - `handlers`: Handler behaviour knobs
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod api_server;
pub mod errors;
pub mod handlers;
pub mod logging;
pub mod root;

pub use api_server::ApiServerConfig;
pub use errors::ConfigError;
pub use handlers::HandlerConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
