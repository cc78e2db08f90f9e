use crate::backing::DEFAULT_IPAM_NAME;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HandlerConfig {
    /// Undo already-committed steps when port creation fails part way
    #[serde(default)]
    pub rollback_on_port_failure: bool,

    /// Address manager that subnets are attached under
    #[serde(default = "default_ipam_name")]
    pub ipam_name: String,
}

fn default_ipam_name() -> String {
    DEFAULT_IPAM_NAME.to_string()
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            rollback_on_port_failure: false,
            ipam_name: default_ipam_name(),
        }
    }
}
