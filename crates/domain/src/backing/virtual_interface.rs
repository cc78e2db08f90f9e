use super::{ObjectRef, VirtualMachine, VirtualNetwork};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacAddresses {
    #[serde(default)]
    pub mac_address: Vec<String>,
}

/// A port, as the backing store sees it: an interface on a device, plugged
/// into one network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualInterface {
    pub uuid: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fq_name: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub virtual_network_refs: Vec<ObjectRef>,
    #[serde(default)]
    pub virtual_machine_interface_mac_addresses: MacAddresses,
    /// Maintained by the store; never sent back.
    #[serde(default, skip_serializing)]
    pub instance_ip_back_refs: Vec<ObjectRef>,
}

impl VirtualInterface {
    pub fn new(
        uuid: impl Into<String>,
        name: impl Into<String>,
        device: &VirtualMachine,
        network: &VirtualNetwork,
        mac_address: Option<String>,
    ) -> Self {
        let name = name.into();
        let mut fq_name = device.fq_name.clone();
        fq_name.push(name.clone());

        Self {
            uuid: uuid.into(),
            name,
            fq_name,
            parent_type: Some("virtual-machine".to_string()),
            parent_uuid: Some(device.uuid.clone()),
            virtual_network_refs: vec![network.reference()],
            virtual_machine_interface_mac_addresses: MacAddresses {
                mac_address: mac_address.into_iter().collect(),
            },
            instance_ip_back_refs: Vec::new(),
        }
    }

    pub fn reference(&self) -> ObjectRef {
        ObjectRef::new(self.fq_name.clone(), self.uuid.clone())
    }

    pub fn network_uuid(&self) -> Option<&str> {
        self.virtual_network_refs
            .first()
            .and_then(|r| r.uuid.as_deref())
    }

    /// Identifiers of the addresses that reference this interface.
    pub fn address_ids(&self) -> impl Iterator<Item = &str> {
        self.instance_ip_back_refs
            .iter()
            .filter_map(|r| r.uuid.as_deref())
    }
}
