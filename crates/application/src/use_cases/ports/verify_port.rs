use netbridge_domain::{canonical_id, DomainError, Port, VirtualInterface};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::ports::{fetch, BackingStore};

pub struct VerifyPortUseCase {
    store: Arc<dyn BackingStore>,
}

impl VerifyPortUseCase {
    pub fn new(store: Arc<dyn BackingStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn created(&self, port: &Port) -> Result<bool, DomainError> {
        match self.lookup(port).await? {
            Some(interface) => {
                debug!(
                    port_id = %interface.uuid,
                    addresses = interface.address_ids().count(),
                    "Port present after create"
                );
                Ok(true)
            }
            None => {
                warn!(port_id = ?port.id, "Port missing after create");
                Ok(false)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn deleted(&self, port: &Port) -> Result<bool, DomainError> {
        match self.lookup(port).await? {
            None => Ok(true),
            Some(interface) => {
                warn!(port_id = %interface.uuid, "Port still present after delete");
                Ok(false)
            }
        }
    }

    async fn lookup(&self, port: &Port) -> Result<Option<VirtualInterface>, DomainError> {
        let id = port
            .id
            .as_deref()
            .ok_or_else(|| DomainError::InvalidInput("Port ID is required".to_string()))?;
        let uuid = canonical_id(id)?;
        fetch::<VirtualInterface>(self.store.as_ref(), &uuid).await
    }
}
