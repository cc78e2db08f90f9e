use netbridge_domain::validators::require_text;
use netbridge_domain::{
    canonical_id, DomainError, IpPrefix, IpamSubnet, NetworkIpam, ObjectKind, Subnet,
    VirtualNetwork,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::{ensure_connected, fetch, update_object, BackingStore};

pub struct CreateSubnetUseCase {
    store: Arc<dyn BackingStore>,
    ipam_name: String,
}

impl CreateSubnetUseCase {
    pub fn new(store: Arc<dyn BackingStore>, ipam_name: impl Into<String>) -> Self {
        Self {
            store,
            ipam_name: ipam_name.into(),
        }
    }

    /// Attaches the subnet to its network under the configured address manager.
    ///
    /// A CIDR without exactly one `/` fails with `DomainError::InvalidPrefix`,
    /// which carries no status code.
    #[instrument(skip(self))]
    pub async fn execute(&self, subnet: &Subnet) -> Result<VirtualNetwork, DomainError> {
        let network_id = require_text(subnet.network_id.as_deref(), "Subnet network ID")
            .map_err(DomainError::InvalidInput)?;
        let cidr =
            require_text(subnet.cidr.as_deref(), "Subnet CIDR").map_err(DomainError::InvalidInput)?;
        let network_uuid = canonical_id(network_id)?;
        ensure_connected(self.store.as_ref()).await?;

        let mut virtual_network = fetch::<VirtualNetwork>(self.store.as_ref(), &network_uuid)
            .await?
            .ok_or_else(|| {
                DomainError::MissingReference(format!("Network {} does not exist", network_uuid))
            })?;

        let prefix = IpPrefix::parse(cidr)?;
        if virtual_network.has_prefix(&prefix.prefix) {
            return Err(DomainError::AlreadyExists(format!(
                "Prefix {} already attached to network {}",
                prefix.prefix, network_uuid
            )));
        }

        let ipam = self.resolve_ipam().await?;
        debug!(ipam_id = %ipam.uuid, ipam_name = %ipam.name, "Address manager resolved");

        let gateway = subnet
            .gateway_ip
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_string);
        virtual_network.attach_subnet(&ipam, IpamSubnet::new(prefix, gateway));

        update_object(self.store.as_ref(), virtual_network.clone().into()).await?;

        info!(
            network_id = %network_uuid,
            cidr = %cidr,
            "Subnet attached successfully"
        );

        Ok(virtual_network)
    }

    async fn resolve_ipam(&self) -> Result<NetworkIpam, DomainError> {
        let missing = || {
            DomainError::MissingReference(format!(
                "Address manager {} does not exist",
                self.ipam_name
            ))
        };

        let ipam_id = self
            .store
            .find_by_name(ObjectKind::NetworkIpam, None, &self.ipam_name)
            .await?
            .ok_or_else(missing)?;

        fetch::<NetworkIpam>(self.store.as_ref(), &ipam_id)
            .await?
            .ok_or_else(missing)
    }
}
