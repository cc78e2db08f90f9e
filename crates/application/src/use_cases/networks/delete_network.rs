use netbridge_domain::validators::require_text;
use netbridge_domain::{canonical_id, DomainError, Network, ObjectKind, VirtualNetwork};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{ensure_connected, fetch, BackingStore};

pub struct DeleteNetworkUseCase {
    store: Arc<dyn BackingStore>,
}

impl DeleteNetworkUseCase {
    pub fn new(store: Arc<dyn BackingStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, network: &Network) -> Result<(), DomainError> {
        let id = require_text(network.id.as_deref(), "Network ID")
            .map_err(DomainError::InvalidInput)?;
        let uuid = canonical_id(id)?;
        ensure_connected(self.store.as_ref()).await?;

        let virtual_network = fetch::<VirtualNetwork>(self.store.as_ref(), &uuid)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Network {} not found", uuid)))?;

        let count = virtual_network.dependent_interfaces();
        if count > 0 {
            return Err(DomainError::HasDependents {
                kind: "network",
                id: uuid,
                count,
            });
        }

        self.store
            .delete(ObjectKind::VirtualNetwork, &uuid)
            .await?;

        info!(
            network_id = %uuid,
            name = %virtual_network.name,
            "Network deleted successfully"
        );

        Ok(())
    }
}
