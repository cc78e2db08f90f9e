#![allow(dead_code)]

use async_trait::async_trait;
use netbridge_application::ports::BackingStore;
use netbridge_domain::{
    ApiObject, DomainError, NetworkIpam, ObjectKind, ObjectRef, StoreObject, VirtualNetwork,
};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock BackingStore
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Find(ObjectKind, String),
    FindByName(ObjectKind, String),
    Create(ObjectKind, String),
    Update(ObjectKind, String),
    Delete(ObjectKind, String),
}

/// In-memory backing store.
///
/// Back-references are derived on every `find_by_id`, the way the real API
/// server reports them.
#[derive(Clone)]
pub struct MockBackingStore {
    objects: Arc<RwLock<HashMap<(ObjectKind, String), ApiObject>>>,
    calls: Arc<RwLock<Vec<StoreCall>>>,
    connected: Arc<AtomicBool>,
    reachable: Arc<AtomicBool>,
    reconnect_attempts: Arc<AtomicU64>,
    find_fails: Arc<AtomicBool>,
    update_rejected: Arc<AtomicBool>,
    create_rejected: Arc<RwLock<HashSet<ObjectKind>>>,
}

impl MockBackingStore {
    pub fn new() -> Self {
        Self {
            objects: Arc::new(RwLock::new(HashMap::new())),
            calls: Arc::new(RwLock::new(Vec::new())),
            connected: Arc::new(AtomicBool::new(true)),
            reachable: Arc::new(AtomicBool::new(false)),
            reconnect_attempts: Arc::new(AtomicU64::new(0)),
            find_fails: Arc::new(AtomicBool::new(false)),
            update_rejected: Arc::new(AtomicBool::new(false)),
            create_rejected: Arc::new(RwLock::new(HashSet::new())),
        }
    }

    /// Store seeded with the default address manager.
    pub async fn with_default_ipam(ipam_id: &str) -> Self {
        let store = Self::new();
        store
            .insert(NetworkIpam::new(ipam_id, "default-network-ipam"))
            .await;
        store
    }

    pub async fn insert(&self, object: impl Into<ApiObject>) {
        let object = object.into();
        self.objects
            .write()
            .await
            .insert((object.kind(), object.uuid().to_string()), object);
    }

    pub async fn get<T: StoreObject>(&self, id: &str) -> Option<T> {
        self.objects
            .read()
            .await
            .get(&(T::KIND, id.to_string()))
            .cloned()
            .and_then(T::from_object)
    }

    pub async fn count(&self, kind: ObjectKind) -> usize {
        self.objects
            .read()
            .await
            .keys()
            .filter(|(k, _)| *k == kind)
            .count()
    }

    pub async fn calls(&self) -> Vec<StoreCall> {
        self.calls.read().await.clone()
    }

    pub async fn creates_of(&self, kind: ObjectKind) -> usize {
        self.calls
            .read()
            .await
            .iter()
            .filter(|c| matches!(c, StoreCall::Create(k, _) if *k == kind))
            .count()
    }

    pub async fn clear_calls(&self) {
        self.calls.write().await.clear();
    }

    pub fn set_connected(&self, connected: bool) {
        self.connected.store(connected, Ordering::Relaxed);
    }

    /// Whether a `reconnect` attempt succeeds while disconnected.
    pub fn set_reachable(&self, reachable: bool) {
        self.reachable.store(reachable, Ordering::Relaxed);
    }

    pub fn reconnect_attempts(&self) -> u64 {
        self.reconnect_attempts.load(Ordering::Relaxed)
    }

    pub fn set_find_fails(&self, fail: bool) {
        self.find_fails.store(fail, Ordering::Relaxed);
    }

    pub fn set_update_rejected(&self, rejected: bool) {
        self.update_rejected.store(rejected, Ordering::Relaxed);
    }

    pub async fn reject_create(&self, kind: ObjectKind) {
        self.create_rejected.write().await.insert(kind);
    }

    async fn record(&self, call: StoreCall) {
        self.calls.write().await.push(call);
    }
}

impl Default for MockBackingStore {
    fn default() -> Self {
        Self::new()
    }
}

fn fq_name(object: &ApiObject) -> &[String] {
    match object {
        ApiObject::VirtualNetwork(o) => &o.fq_name,
        ApiObject::VirtualMachine(o) => &o.fq_name,
        ApiObject::VirtualInterface(o) => &o.fq_name,
        ApiObject::InstanceAddress(o) => &o.fq_name,
        ApiObject::NetworkIpam(o) => &o.fq_name,
    }
}

fn points_to(refs: &[ObjectRef], id: &str) -> bool {
    refs.iter().any(|r| r.uuid.as_deref() == Some(id))
}

fn with_back_refs(
    object: ApiObject,
    all: &HashMap<(ObjectKind, String), ApiObject>,
) -> ApiObject {
    match object {
        ApiObject::VirtualNetwork(mut vn) => {
            vn.virtual_machine_interface_back_refs = all
                .values()
                .filter_map(|o| match o {
                    ApiObject::VirtualInterface(vmi)
                        if points_to(&vmi.virtual_network_refs, &vn.uuid) =>
                    {
                        Some(vmi.reference())
                    }
                    _ => None,
                })
                .collect();
            ApiObject::VirtualNetwork(vn)
        }
        ApiObject::VirtualInterface(mut vmi) => {
            vmi.instance_ip_back_refs = all
                .values()
                .filter_map(|o| match o {
                    ApiObject::InstanceAddress(ip)
                        if points_to(&ip.virtual_machine_interface_refs, &vmi.uuid) =>
                    {
                        Some(ObjectRef::new(ip.fq_name.clone(), ip.uuid.clone()))
                    }
                    _ => None,
                })
                .collect();
            ApiObject::VirtualInterface(vmi)
        }
        other => other,
    }
}

#[async_trait]
impl BackingStore for MockBackingStore {
    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Relaxed)
    }

    async fn reconnect(&self) -> bool {
        self.reconnect_attempts.fetch_add(1, Ordering::Relaxed);
        if self.reachable.load(Ordering::Relaxed) {
            self.connected.store(true, Ordering::Relaxed);
        }
        self.is_connected()
    }

    async fn find_by_id(
        &self,
        kind: ObjectKind,
        id: &str,
    ) -> Result<Option<ApiObject>, DomainError> {
        self.record(StoreCall::Find(kind, id.to_string())).await;
        if self.find_fails.load(Ordering::Relaxed) {
            return Err(DomainError::StoreFailure("Mock lookup failed".to_string()));
        }

        let objects = self.objects.read().await;
        Ok(objects
            .get(&(kind, id.to_string()))
            .cloned()
            .map(|o| with_back_refs(o, &objects)))
    }

    async fn find_by_name(
        &self,
        kind: ObjectKind,
        parent: Option<&[String]>,
        name: &str,
    ) -> Result<Option<String>, DomainError> {
        self.record(StoreCall::FindByName(kind, name.to_string()))
            .await;
        let wanted = match parent {
            Some(parent) => {
                let mut fq = parent.to_vec();
                fq.push(name.to_string());
                fq
            }
            None => kind.default_fq_name(name),
        };

        Ok(self
            .objects
            .read()
            .await
            .values()
            .find(|o| o.kind() == kind && fq_name(o) == wanted.as_slice())
            .map(|o| o.uuid().to_string()))
    }

    async fn create(&self, object: &ApiObject) -> Result<bool, DomainError> {
        self.record(StoreCall::Create(object.kind(), object.uuid().to_string()))
            .await;
        if self.create_rejected.read().await.contains(&object.kind()) {
            return Ok(false);
        }

        let key = (object.kind(), object.uuid().to_string());
        let mut objects = self.objects.write().await;
        if objects.contains_key(&key) {
            return Ok(false);
        }
        objects.insert(key, object.clone());
        Ok(true)
    }

    async fn update(&self, object: &ApiObject) -> Result<bool, DomainError> {
        self.record(StoreCall::Update(object.kind(), object.uuid().to_string()))
            .await;
        if self.update_rejected.load(Ordering::Relaxed) {
            return Ok(false);
        }

        let key = (object.kind(), object.uuid().to_string());
        let mut objects = self.objects.write().await;
        if !objects.contains_key(&key) {
            return Ok(false);
        }
        objects.insert(key, object.clone());
        Ok(true)
    }

    async fn delete(&self, kind: ObjectKind, id: &str) -> Result<(), DomainError> {
        self.record(StoreCall::Delete(kind, id.to_string())).await;
        self.objects
            .write()
            .await
            .remove(&(kind, id.to_string()))
            .map(|_| ())
            .ok_or_else(|| DomainError::StoreFailure(format!("{} {} not found", kind, id)))
    }
}

/// Seeds a virtual network as the network handler would have created it.
pub async fn seed_network(store: &MockBackingStore, id: &str, name: &str) -> VirtualNetwork {
    let vn = VirtualNetwork::new(id, name);
    store.insert(vn.clone()).await;
    vn
}
