use super::{ObjectKind, ObjectRef, VirtualInterface};
use serde::{Deserialize, Serialize};

/// An IP address bound to a virtual interface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceAddress {
    pub uuid: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fq_name: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub virtual_machine_interface_refs: Vec<ObjectRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub virtual_network_refs: Vec<ObjectRef>,
}

impl InstanceAddress {
    /// Address named after its own identifier, hanging off `interface`.
    pub fn for_interface(
        uuid: impl Into<String>,
        address: impl Into<String>,
        interface: &VirtualInterface,
    ) -> Self {
        let uuid = uuid.into();
        Self {
            fq_name: ObjectKind::InstanceAddress.default_fq_name(&uuid),
            name: uuid.clone(),
            uuid,
            instance_ip_address: Some(address.into()),
            parent_uuid: Some(interface.uuid.clone()),
            virtual_machine_interface_refs: vec![interface.reference()],
            virtual_network_refs: interface.virtual_network_refs.clone(),
        }
    }
}
