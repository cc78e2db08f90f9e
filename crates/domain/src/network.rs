use serde::{Deserialize, Serialize};

/// Network record as delivered by the control plane.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Tri-state: `None` means the request did not carry the attribute.
    #[serde(default)]
    pub shared: Option<bool>,
}

impl Network {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            shared: Some(false),
        }
    }

    pub fn with_shared(mut self, shared: Option<bool>) -> Self {
        self.shared = shared;
        self
    }
}
