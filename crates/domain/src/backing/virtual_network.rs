use super::{NetworkIpam, ObjectKind, ObjectRef};
use crate::ip_prefix::IpPrefix;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubnetType {
    pub ip_prefix: String,
    pub ip_prefix_len: u8,
}

/// One subnet embedded in a network's IPAM reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpamSubnet {
    pub subnet: SubnetType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_gateway: Option<String>,
}

impl IpamSubnet {
    pub fn new(prefix: IpPrefix, gateway: Option<String>) -> Self {
        Self {
            subnet: SubnetType {
                ip_prefix: prefix.prefix,
                ip_prefix_len: prefix.length,
            },
            default_gateway: gateway,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VnSubnets {
    #[serde(default)]
    pub ipam_subnets: Vec<IpamSubnet>,
}

/// Reference from a network to an address manager, carrying the subnets
/// allocated under it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpamRef {
    #[serde(default)]
    pub to: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attr: Option<VnSubnets>,
}

impl IpamRef {
    fn points_at(&self, ipam: &NetworkIpam) -> bool {
        match self.uuid.as_deref() {
            Some(uuid) => uuid == ipam.uuid,
            None => self.to == ipam.fq_name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualNetwork {
    pub uuid: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fq_name: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub network_ipam_refs: Vec<IpamRef>,
    /// Maintained by the store; never sent back.
    #[serde(default, skip_serializing)]
    pub virtual_machine_interface_back_refs: Vec<ObjectRef>,
}

impl VirtualNetwork {
    pub fn new(uuid: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            uuid: uuid.into(),
            display_name: Some(name.clone()),
            fq_name: ObjectKind::VirtualNetwork.default_fq_name(&name),
            parent_type: Some("project".to_string()),
            name,
            network_ipam_refs: Vec::new(),
            virtual_machine_interface_back_refs: Vec::new(),
        }
    }

    pub fn rename(&mut self, name: &str) {
        self.name = name.to_string();
        self.display_name = Some(name.to_string());
    }

    pub fn reference(&self) -> ObjectRef {
        ObjectRef::new(self.fq_name.clone(), self.uuid.clone())
    }

    pub fn dependent_interfaces(&self) -> usize {
        self.virtual_machine_interface_back_refs.len()
    }

    /// Every subnet currently embedded under any address manager.
    pub fn subnets(&self) -> impl Iterator<Item = &IpamSubnet> {
        self.network_ipam_refs
            .iter()
            .filter_map(|r| r.attr.as_ref())
            .flat_map(|attr| attr.ipam_subnets.iter())
    }

    /// Whether a subnet with this textual prefix is already embedded.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.subnets().any(|s| s.subnet.ip_prefix == prefix)
    }

    /// Appends `subnet` under `ipam`, extending the existing list when the
    /// network already references that address manager.
    pub fn attach_subnet(&mut self, ipam: &NetworkIpam, subnet: IpamSubnet) {
        if let Some(existing) = self.network_ipam_refs.iter_mut().find(|r| r.points_at(ipam)) {
            existing
                .attr
                .get_or_insert_with(VnSubnets::default)
                .ipam_subnets
                .push(subnet);
            return;
        }

        self.network_ipam_refs.push(IpamRef {
            to: ipam.fq_name.clone(),
            uuid: Some(ipam.uuid.clone()),
            attr: Some(VnSubnets {
                ipam_subnets: vec![subnet],
            }),
        });
    }
}
