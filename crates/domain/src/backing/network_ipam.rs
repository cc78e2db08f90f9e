use super::{ObjectKind, ObjectRef};
use serde::{Deserialize, Serialize};

/// Name of the address manager every subnet is attached under.
pub const DEFAULT_IPAM_NAME: &str = "default-network-ipam";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkIpam {
    pub uuid: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fq_name: Vec<String>,
}

impl NetworkIpam {
    pub fn new(uuid: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            uuid: uuid.into(),
            fq_name: ObjectKind::NetworkIpam.default_fq_name(&name),
            name,
        }
    }

    pub fn reference(&self) -> ObjectRef {
        ObjectRef::new(self.fq_name.clone(), self.uuid.clone())
    }
}
