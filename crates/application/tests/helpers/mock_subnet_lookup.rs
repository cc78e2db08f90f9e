use async_trait::async_trait;
use netbridge_application::ports::SubnetLookup;
use netbridge_domain::{canonical_id, DomainError, Subnet};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock SubnetLookup
// ============================================================================

pub struct MockSubnetLookup {
    subnets: Arc<RwLock<HashMap<String, Subnet>>>,
    call_count: Arc<AtomicU64>,
}

impl MockSubnetLookup {
    pub fn new() -> Self {
        Self {
            subnets: Arc::new(RwLock::new(HashMap::new())),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn with_subnets(subnets: Vec<Subnet>) -> Self {
        let lookup = Self::new();
        for subnet in subnets {
            lookup.add(subnet).await;
        }
        lookup
    }

    pub async fn add(&self, subnet: Subnet) {
        let id = canonical_id(subnet.id.as_deref().unwrap()).unwrap();
        self.subnets.write().await.insert(id, subnet);
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl Default for MockSubnetLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubnetLookup for MockSubnetLookup {
    async fn get_subnet(&self, subnet_id: &str) -> Result<Option<Subnet>, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        Ok(self.subnets.read().await.get(subnet_id).cloned())
    }
}
