use netbridge_domain::validators::require_text;
use netbridge_domain::{canonical_id, DomainError, Network, VirtualNetwork};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::{create_object, ensure_connected, fetch, BackingStore};

pub struct CreateNetworkUseCase {
    store: Arc<dyn BackingStore>,
}

impl CreateNetworkUseCase {
    pub fn new(store: Arc<dyn BackingStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, network: &Network) -> Result<VirtualNetwork, DomainError> {
        let id = require_text(network.id.as_deref(), "Network ID").map_err(DomainError::InvalidInput)?;
        let name =
            require_text(network.name.as_deref(), "Network name").map_err(DomainError::InvalidInput)?;

        match network.shared {
            None => {
                return Err(DomainError::InvalidInput(
                    "Network shared flag is required".to_string(),
                ))
            }
            Some(true) => {
                return Err(DomainError::Unsupported(
                    "Shared networks are not supported".to_string(),
                ))
            }
            Some(false) => {}
        }

        let uuid = canonical_id(id)?;
        ensure_connected(self.store.as_ref()).await?;

        if fetch::<VirtualNetwork>(self.store.as_ref(), &uuid)
            .await?
            .is_some()
        {
            return Err(DomainError::AlreadyExists(format!(
                "Network {} already exists",
                uuid
            )));
        }

        let virtual_network = VirtualNetwork::new(uuid.clone(), name);
        create_object(self.store.as_ref(), virtual_network.clone().into()).await?;

        info!(
            network_id = %uuid,
            name = %name,
            "Network created successfully"
        );

        Ok(virtual_network)
    }
}
