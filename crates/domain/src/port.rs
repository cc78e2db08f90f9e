use serde::{Deserialize, Serialize};

/// One requested address on a port: explicit, or "allocate from this subnet".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedIp {
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub subnet_id: Option<String>,
}

impl FixedIp {
    pub fn address(ip: impl Into<String>) -> Self {
        Self {
            ip_address: Some(ip.into()),
            subnet_id: None,
        }
    }

    pub fn from_subnet(subnet_id: impl Into<String>) -> Self {
        Self {
            ip_address: None,
            subnet_id: Some(subnet_id.into()),
        }
    }
}

/// Port record as delivered by the control plane.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub network_id: Option<String>,
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mac_address: Option<String>,
    /// `None` is an absent list and is distinct from an empty one.
    #[serde(default)]
    pub fixed_ips: Option<Vec<FixedIp>>,
}
