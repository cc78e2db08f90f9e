use async_trait::async_trait;
use netbridge_domain::{DomainError, Subnet};

/// The caller's view of subnets, used to allocate port addresses.
#[async_trait]
pub trait SubnetLookup: Send + Sync {
    /// Get subnet by its control-plane identifier
    async fn get_subnet(&self, subnet_id: &str) -> Result<Option<Subnet>, DomainError>;
}
