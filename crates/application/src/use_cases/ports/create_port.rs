use netbridge_domain::validators::require_text;
use netbridge_domain::{
    canonical_id, DomainError, FixedIp, InstanceAddress, ObjectKind, Port, VirtualInterface,
    VirtualMachine, VirtualNetwork,
};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use crate::ports::{create_object, ensure_connected, fetch, BackingStore, SubnetLookup};

/// Result of a committed port creation.
#[derive(Debug, Clone)]
pub struct CreatedPort {
    pub interface: VirtualInterface,
    pub addresses: Vec<InstanceAddress>,
    pub device_created: bool,
}

/// Objects committed so far by one `execute` call, oldest first.
#[derive(Debug, Default)]
struct Journal {
    committed: Vec<(ObjectKind, String)>,
}

impl Journal {
    fn record(&mut self, kind: ObjectKind, id: &str) {
        self.committed.push((kind, id.to_string()));
    }
}

pub struct CreatePortUseCase {
    store: Arc<dyn BackingStore>,
    subnets: Arc<dyn SubnetLookup>,
    rollback_on_failure: bool,
}

impl CreatePortUseCase {
    pub fn new(
        store: Arc<dyn BackingStore>,
        subnets: Arc<dyn SubnetLookup>,
        rollback_on_failure: bool,
    ) -> Self {
        Self {
            store,
            subnets,
            rollback_on_failure,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, port: &Port) -> Result<CreatedPort, DomainError> {
        let device_id = require_text(port.device_id.as_deref(), "Port device ID")
            .map_err(DomainError::InvalidInput)?;
        let port_id =
            require_text(port.id.as_deref(), "Port ID").map_err(DomainError::InvalidInput)?;
        let name =
            require_text(port.name.as_deref(), "Port name").map_err(DomainError::InvalidInput)?;
        let fixed_ips = port.fixed_ips.as_deref().ok_or_else(|| {
            DomainError::PreconditionFailed("Port fixed IP list is required".to_string())
        })?;
        let network_id = require_text(port.network_id.as_deref(), "Port network ID")
            .map_err(DomainError::InvalidInput)?;

        let network_uuid = canonical_id(network_id)?;
        let port_uuid = canonical_id(port_id)?;
        let device_uuid = canonical_id(device_id)?;
        ensure_connected(self.store.as_ref()).await?;

        if fetch::<VirtualInterface>(self.store.as_ref(), &port_uuid)
            .await?
            .is_some()
        {
            return Err(DomainError::AlreadyExists(format!(
                "Port {} already exists",
                port_uuid
            )));
        }

        let mut journal = Journal::default();
        let result = self
            .commit(
                &mut journal,
                &port_uuid,
                name,
                &device_uuid,
                &network_uuid,
                port.mac_address.as_deref(),
                fixed_ips,
            )
            .await;

        match result {
            Ok(created) => {
                info!(
                    port_id = %port_uuid,
                    device_id = %device_uuid,
                    network_id = %network_uuid,
                    addresses = created.addresses.len(),
                    device_created = created.device_created,
                    "Port created successfully"
                );
                Ok(created)
            }
            Err(e) => {
                if self.rollback_on_failure {
                    self.compensate(journal).await;
                } else if !journal.committed.is_empty() {
                    warn!(
                        port_id = %port_uuid,
                        committed = journal.committed.len(),
                        "Port creation failed part way; committed objects left in place"
                    );
                }
                Err(e)
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    async fn commit(
        &self,
        journal: &mut Journal,
        port_uuid: &str,
        name: &str,
        device_uuid: &str,
        network_uuid: &str,
        mac_address: Option<&str>,
        fixed_ips: &[FixedIp],
    ) -> Result<CreatedPort, DomainError> {
        let store = self.store.as_ref();

        let (device, device_created) = match fetch::<VirtualMachine>(store, device_uuid).await? {
            Some(device) => (device, false),
            None => {
                let device = VirtualMachine::new(device_uuid);
                create_object(store, device.clone().into()).await?;
                journal.record(ObjectKind::VirtualMachine, device_uuid);
                debug!(device_id = %device_uuid, "Device created");
                (device, true)
            }
        };

        let network = fetch::<VirtualNetwork>(store, network_uuid)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Network {} not found", network_uuid)))?;

        let mac = mac_address
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string);
        let interface = VirtualInterface::new(port_uuid, name, &device, &network, mac);
        create_object(store, interface.clone().into()).await?;
        journal.record(ObjectKind::VirtualInterface, port_uuid);

        let mut addresses = Vec::with_capacity(fixed_ips.len());
        for fixed_ip in fixed_ips {
            let address = self.resolve_address(fixed_ip).await?;
            let instance_address =
                InstanceAddress::for_interface(Uuid::new_v4().to_string(), address.to_string(), &interface);
            create_object(store, instance_address.clone().into()).await?;
            journal.record(ObjectKind::InstanceAddress, &instance_address.uuid);
            debug!(
                port_id = %port_uuid,
                address = %address,
                address_id = %instance_address.uuid,
                "Address allocated"
            );
            addresses.push(instance_address);
        }

        Ok(CreatedPort {
            interface,
            addresses,
            device_created,
        })
    }

    async fn resolve_address(&self, fixed_ip: &FixedIp) -> Result<IpAddr, DomainError> {
        if let Some(ip) = fixed_ip.ip_address.as_deref().map(str::trim) {
            if !ip.is_empty() {
                return ip.parse::<IpAddr>().map_err(|_| {
                    DomainError::InvalidInput(format!("Invalid fixed IP address '{}'", ip))
                });
            }
        }

        let subnet_id = fixed_ip
            .subnet_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                DomainError::InvalidInput(
                    "Fixed IP needs an address or a subnet ID".to_string(),
                )
            })?;
        let subnet_uuid = canonical_id(subnet_id)?;

        let subnet = self
            .subnets
            .get_subnet(&subnet_uuid)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Subnet {} not found", subnet_uuid)))?;

        subnet.low_address().ok_or_else(|| {
            DomainError::InvalidInput(format!("Subnet {} has no usable address", subnet_uuid))
        })
    }

    async fn compensate(&self, journal: Journal) {
        for (kind, id) in journal.committed.into_iter().rev() {
            match self.store.delete(kind, &id).await {
                Ok(()) => debug!(kind = %kind, id = %id, "Rolled back"),
                Err(e) => error!(kind = %kind, id = %id, error = %e, "Rollback failed"),
            }
        }
    }
}
