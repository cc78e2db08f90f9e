use netbridge_domain::{canonical_id, DomainError, Network, VirtualNetwork};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::ports::{fetch, BackingStore};

/// Re-reads a virtual network after a committed change and compares it with
/// what the caller asked for. Never writes.
pub struct VerifyNetworkUseCase {
    store: Arc<dyn BackingStore>,
}

impl VerifyNetworkUseCase {
    pub fn new(store: Arc<dyn BackingStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn created(&self, network: &Network) -> Result<bool, DomainError> {
        let Some(virtual_network) = self.lookup(network).await? else {
            warn!(network_id = ?network.id, "Network missing after create");
            return Ok(false);
        };
        debug!(network_id = %virtual_network.uuid, "Network present after create");
        Ok(true)
    }

    #[instrument(skip(self))]
    pub async fn updated(&self, network: &Network) -> Result<bool, DomainError> {
        let Some(virtual_network) = self.lookup(network).await? else {
            warn!(network_id = ?network.id, "Network missing after update");
            return Ok(false);
        };

        let Some(expected) = network.name.as_deref().map(str::trim) else {
            return Ok(true);
        };
        let actual = virtual_network
            .display_name
            .as_deref()
            .unwrap_or(&virtual_network.name);

        if actual.eq_ignore_ascii_case(expected) {
            debug!(network_id = %virtual_network.uuid, name = %actual, "Network name matches");
            Ok(true)
        } else {
            warn!(
                network_id = %virtual_network.uuid,
                expected = %expected,
                actual = %actual,
                "Network name mismatch after update"
            );
            Ok(false)
        }
    }

    #[instrument(skip(self))]
    pub async fn deleted(&self, network: &Network) -> Result<bool, DomainError> {
        match self.lookup(network).await? {
            None => Ok(true),
            Some(virtual_network) => {
                warn!(network_id = %virtual_network.uuid, "Network still present after delete");
                Ok(false)
            }
        }
    }

    async fn lookup(&self, network: &Network) -> Result<Option<VirtualNetwork>, DomainError> {
        let id = network
            .id
            .as_deref()
            .ok_or_else(|| DomainError::InvalidInput("Network ID is required".to_string()))?;
        let uuid = canonical_id(id)?;
        fetch::<VirtualNetwork>(self.store.as_ref(), &uuid).await
    }
}
