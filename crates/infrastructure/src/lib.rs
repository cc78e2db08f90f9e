//! netbridge infrastructure layer
//!
//! Adapters behind the application ports: the REST client for the backing
//! store's API server and the in-process subnet registry.
pub mod api;
pub mod registry;

pub use api::ApiServerClient;
pub use registry::SubnetRegistry;
