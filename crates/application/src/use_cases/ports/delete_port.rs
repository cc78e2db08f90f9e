use netbridge_domain::validators::require_text;
use netbridge_domain::{canonical_id, DomainError, ObjectKind, Port, VirtualInterface};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::{ensure_connected, fetch, BackingStore};

pub struct DeletePortUseCase {
    store: Arc<dyn BackingStore>,
}

impl DeletePortUseCase {
    pub fn new(store: Arc<dyn BackingStore>) -> Self {
        Self { store }
    }

    /// Deletes every address of the interface, then the interface itself.
    ///
    /// Returns the number of addresses removed.
    #[instrument(skip(self))]
    pub async fn execute(&self, port: &Port) -> Result<usize, DomainError> {
        let port_id =
            require_text(port.id.as_deref(), "Port ID").map_err(DomainError::InvalidInput)?;
        let port_uuid = canonical_id(port_id)?;
        ensure_connected(self.store.as_ref()).await?;

        let interface = fetch::<VirtualInterface>(self.store.as_ref(), &port_uuid)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Port {} not found", port_uuid)))?;

        let mut removed = 0;
        for address_id in interface.address_ids() {
            self.store
                .delete(ObjectKind::InstanceAddress, address_id)
                .await?;
            debug!(port_id = %port_uuid, address_id = %address_id, "Address released");
            removed += 1;
        }

        self.store
            .delete(ObjectKind::VirtualInterface, &port_uuid)
            .await?;

        info!(
            port_id = %port_uuid,
            addresses = removed,
            "Port deleted successfully"
        );

        Ok(removed)
    }
}
