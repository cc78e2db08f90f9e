//! netbridge application layer
//!
//! Ports the core calls through, the per-resource use cases, and the handler
//! façades the hosting framework invokes.
pub mod handlers;
pub mod ports;
pub mod use_cases;

pub use handlers::{NetworkHandler, PortHandler, SubnetHandler};
