//! netbridge domain layer
//!
//! Control-plane resource records, the backing store's object model, and the
//! translation rules shared by every handler.
pub mod backing;
pub mod config;
pub mod errors;
pub mod identifier;
pub mod ip_prefix;
pub mod network;
pub mod port;
pub mod status;
pub mod subnet;
pub mod validators;

pub use backing::{
    ApiObject, InstanceAddress, IpamSubnet, NetworkIpam, ObjectKind, ObjectRef, StoreObject,
    VirtualInterface, VirtualMachine, VirtualNetwork,
};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use identifier::{canonical_id, normalize, parse_identifier};
pub use ip_prefix::{split_cidr, IpPrefix, IpPrefixError};
pub use network::Network;
pub use port::{FixedIp, Port};
pub use status::Status;
pub use subnet::{AllocationPool, Subnet};
