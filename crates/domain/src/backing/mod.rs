//! Backing-store object model.
//!
//! These mirror the virtualization controller's REST schema closely enough to
//! be serialized straight onto the wire: every object travels wrapped in a
//! single-key envelope naming its type, e.g. `{"virtual-network": {...}}`.

mod instance_address;
mod network_ipam;
mod virtual_interface;
mod virtual_machine;
mod virtual_network;

pub use instance_address::InstanceAddress;
pub use network_ipam::{NetworkIpam, DEFAULT_IPAM_NAME};
pub use virtual_interface::{MacAddresses, VirtualInterface};
pub use virtual_machine::VirtualMachine;
pub use virtual_network::{IpamRef, IpamSubnet, SubnetType, VirtualNetwork, VnSubnets};

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_DOMAIN: &str = "default-domain";
pub const DEFAULT_PROJECT: &str = "default-project";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    VirtualNetwork,
    VirtualMachine,
    VirtualInterface,
    InstanceAddress,
    NetworkIpam,
}

impl ObjectKind {
    /// Type name used in URLs and envelopes.
    pub const fn type_name(self) -> &'static str {
        match self {
            ObjectKind::VirtualNetwork => "virtual-network",
            ObjectKind::VirtualMachine => "virtual-machine",
            ObjectKind::VirtualInterface => "virtual-machine-interface",
            ObjectKind::InstanceAddress => "instance-ip",
            ObjectKind::NetworkIpam => "network-ipam",
        }
    }

    /// Collection path segment, e.g. `virtual-networks`.
    pub fn collection(self) -> String {
        format!("{}s", self.type_name())
    }

    /// Default fully-qualified name for an object of this kind called `name`.
    pub fn default_fq_name(self, name: &str) -> Vec<String> {
        match self {
            ObjectKind::VirtualNetwork | ObjectKind::NetworkIpam => vec![
                DEFAULT_DOMAIN.to_string(),
                DEFAULT_PROJECT.to_string(),
                name.to_string(),
            ],
            _ => vec![name.to_string()],
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Plain reference to another object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRef {
    #[serde(default)]
    pub to: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

impl ObjectRef {
    pub fn new(to: Vec<String>, uuid: impl Into<String>) -> Self {
        Self {
            to,
            uuid: Some(uuid.into()),
        }
    }
}

/// Any object the backing store holds, tagged by type for the wire envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ApiObject {
    #[serde(rename = "virtual-network")]
    VirtualNetwork(VirtualNetwork),
    #[serde(rename = "virtual-machine")]
    VirtualMachine(VirtualMachine),
    #[serde(rename = "virtual-machine-interface")]
    VirtualInterface(VirtualInterface),
    #[serde(rename = "instance-ip")]
    InstanceAddress(InstanceAddress),
    #[serde(rename = "network-ipam")]
    NetworkIpam(NetworkIpam),
}

impl ApiObject {
    pub fn kind(&self) -> ObjectKind {
        match self {
            ApiObject::VirtualNetwork(_) => ObjectKind::VirtualNetwork,
            ApiObject::VirtualMachine(_) => ObjectKind::VirtualMachine,
            ApiObject::VirtualInterface(_) => ObjectKind::VirtualInterface,
            ApiObject::InstanceAddress(_) => ObjectKind::InstanceAddress,
            ApiObject::NetworkIpam(_) => ObjectKind::NetworkIpam,
        }
    }

    pub fn uuid(&self) -> &str {
        match self {
            ApiObject::VirtualNetwork(o) => &o.uuid,
            ApiObject::VirtualMachine(o) => &o.uuid,
            ApiObject::VirtualInterface(o) => &o.uuid,
            ApiObject::InstanceAddress(o) => &o.uuid,
            ApiObject::NetworkIpam(o) => &o.uuid,
        }
    }
}

/// Typed view over [`ApiObject`] so callers can ask the store for a concrete type.
pub trait StoreObject: Sized + Send {
    const KIND: ObjectKind;

    fn into_object(self) -> ApiObject;

    fn from_object(object: ApiObject) -> Option<Self>;
}

macro_rules! store_object {
    ($ty:ident, $kind:ident) => {
        impl StoreObject for $ty {
            const KIND: ObjectKind = ObjectKind::$kind;

            fn into_object(self) -> ApiObject {
                ApiObject::$kind(self)
            }

            fn from_object(object: ApiObject) -> Option<Self> {
                match object {
                    ApiObject::$kind(inner) => Some(inner),
                    _ => None,
                }
            }
        }

        impl From<$ty> for ApiObject {
            fn from(value: $ty) -> Self {
                ApiObject::$kind(value)
            }
        }
    };
}

store_object!(VirtualNetwork, VirtualNetwork);
store_object!(VirtualMachine, VirtualMachine);
store_object!(VirtualInterface, VirtualInterface);
store_object!(InstanceAddress, InstanceAddress);
store_object!(NetworkIpam, NetworkIpam);
