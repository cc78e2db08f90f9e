use super::ObjectKind;
use serde::{Deserialize, Serialize};

/// The device a port is attached to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualMachine {
    pub uuid: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fq_name: Vec<String>,
}

impl VirtualMachine {
    /// Devices are named after their identifier.
    pub fn new(device_id: impl Into<String>) -> Self {
        let uuid = device_id.into();
        Self {
            fq_name: ObjectKind::VirtualMachine.default_fq_name(&uuid),
            name: uuid.clone(),
            uuid,
        }
    }
}
