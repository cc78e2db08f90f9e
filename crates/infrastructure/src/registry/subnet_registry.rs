use async_trait::async_trait;
use dashmap::DashMap;
use netbridge_application::ports::SubnetLookup;
use netbridge_domain::{canonical_id, DomainError, Subnet};
use tracing::debug;

/// Subnets the caller has successfully created, keyed by canonical id.
#[derive(Default)]
pub struct SubnetRegistry {
    subnets: DashMap<String, Subnet>,
}

impl SubnetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, subnet: &Subnet) -> Result<(), DomainError> {
        let id = subnet
            .id
            .as_deref()
            .ok_or_else(|| DomainError::InvalidInput("Subnet ID is required".to_string()))?;
        let id = canonical_id(id)?;
        debug!(subnet_id = %id, cidr = ?subnet.cidr, "Subnet registered");
        self.subnets.insert(id, subnet.clone());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.subnets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subnets.is_empty()
    }
}

#[async_trait]
impl SubnetLookup for SubnetRegistry {
    async fn get_subnet(&self, subnet_id: &str) -> Result<Option<Subnet>, DomainError> {
        let id = canonical_id(subnet_id)?;
        Ok(self.subnets.get(&id).map(|entry| entry.value().clone()))
    }
}
