use netbridge_domain::validators::{reject_empty, require_text};
use netbridge_domain::{canonical_id, DomainError, Network, VirtualNetwork};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{ensure_connected, fetch, update_object, BackingStore};

pub struct UpdateNetworkUseCase {
    store: Arc<dyn BackingStore>,
}

impl UpdateNetworkUseCase {
    pub fn new(store: Arc<dyn BackingStore>) -> Self {
        Self { store }
    }

    /// Applies `delta` to the virtual network identified by `original`.
    ///
    /// Only the name is mutable; a delta that turns sharing on is refused.
    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        delta: &Network,
        original: &Network,
    ) -> Result<VirtualNetwork, DomainError> {
        reject_empty(delta.name.as_deref(), "Network name").map_err(DomainError::InvalidInput)?;
        if delta.shared == Some(true) {
            return Err(DomainError::Unsupported(
                "Shared networks are not supported".to_string(),
            ));
        }

        let id = require_text(original.id.as_deref(), "Network ID")
            .map_err(DomainError::InvalidInput)?;
        let uuid = canonical_id(id)?;
        ensure_connected(self.store.as_ref()).await?;

        let mut virtual_network = fetch::<VirtualNetwork>(self.store.as_ref(), &uuid)
            .await?
            .ok_or_else(|| {
                DomainError::MissingReference(format!("Network {} does not exist", uuid))
            })?;

        if let Some(name) = delta.name.as_deref() {
            virtual_network.rename(name.trim());
        }

        update_object(self.store.as_ref(), virtual_network.clone().into()).await?;

        info!(
            network_id = %uuid,
            name = %virtual_network.name,
            "Network updated successfully"
        );

        Ok(virtual_network)
    }
}
