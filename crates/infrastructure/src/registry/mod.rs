mod subnet_registry;

pub use subnet_registry::SubnetRegistry;
