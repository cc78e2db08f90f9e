use netbridge_domain::{canonical_id, DomainError, IpPrefix, Subnet, VirtualNetwork};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::ports::{fetch, BackingStore};

pub struct VerifySubnetUseCase {
    store: Arc<dyn BackingStore>,
}

impl VerifySubnetUseCase {
    pub fn new(store: Arc<dyn BackingStore>) -> Self {
        Self { store }
    }

    /// Checks that the subnet's prefix is attached to its network.
    #[instrument(skip(self))]
    pub async fn created(&self, subnet: &Subnet) -> Result<bool, DomainError> {
        let (Some(network_id), Some(cidr)) = (subnet.network_id.as_deref(), subnet.cidr.as_deref())
        else {
            return Err(DomainError::InvalidInput(
                "Subnet network ID and CIDR are required".to_string(),
            ));
        };
        let network_uuid = canonical_id(network_id)?;
        let prefix = IpPrefix::parse(cidr.trim())?;

        let Some(virtual_network) = fetch::<VirtualNetwork>(self.store.as_ref(), &network_uuid).await?
        else {
            warn!(network_id = %network_uuid, "Network missing after subnet create");
            return Ok(false);
        };

        if virtual_network.has_prefix(&prefix.prefix) {
            debug!(network_id = %network_uuid, prefix = %prefix.prefix, "Subnet attached");
            Ok(true)
        } else {
            warn!(network_id = %network_uuid, prefix = %prefix.prefix, "Subnet not attached");
            Ok(false)
        }
    }
}
