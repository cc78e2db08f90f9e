use async_trait::async_trait;
use netbridge_domain::{ApiObject, DomainError, ObjectKind, StoreObject};
use tracing::debug;

/// Client for the network-virtualization backing store.
///
/// Every object the bridge manages lives in the store; handlers never cache
/// what they read across calls. Implementations map transport failures to
/// `DomainError::StoreUnavailable` when the connection itself is gone and to
/// `DomainError::StoreFailure` otherwise.
#[async_trait]
pub trait BackingStore: Send + Sync {
    /// Whether the connection to the store is currently usable.
    fn is_connected(&self) -> bool;

    /// Tries to bring a dropped connection back and reports the outcome.
    ///
    /// Called only when `is_connected` is false. Stores without a way to
    /// reconnect keep the default, which reports the current state.
    async fn reconnect(&self) -> bool {
        self.is_connected()
    }

    /// Fetches an object by identifier.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(ApiObject))` - If the object exists
    /// * `Ok(None)` - If the store has no such object
    /// * `Err(DomainError)` - If the lookup itself fails
    async fn find_by_id(&self, kind: ObjectKind, id: &str)
        -> Result<Option<ApiObject>, DomainError>;

    /// Resolves a name to an identifier.
    ///
    /// # Arguments
    ///
    /// * `kind` - Type of the object being looked up
    /// * `parent` - Fully-qualified name of the parent; `None` uses the
    ///   default parent for `kind`
    /// * `name` - Object name
    async fn find_by_name(
        &self,
        kind: ObjectKind,
        parent: Option<&[String]>,
        name: &str,
    ) -> Result<Option<String>, DomainError>;

    /// Creates an object. `Ok(false)` means the store refused it.
    async fn create(&self, object: &ApiObject) -> Result<bool, DomainError>;

    /// Replaces an object. `Ok(false)` means the store refused it.
    async fn update(&self, object: &ApiObject) -> Result<bool, DomainError>;

    /// Deletes an object by identifier.
    async fn delete(&self, kind: ObjectKind, id: &str) -> Result<(), DomainError>;
}

/// Typed `find_by_id`.
pub async fn fetch<T: StoreObject>(
    store: &dyn BackingStore,
    id: &str,
) -> Result<Option<T>, DomainError> {
    match store.find_by_id(T::KIND, id).await? {
        None => Ok(None),
        Some(object) => {
            let kind = object.kind();
            T::from_object(object).map(Some).ok_or_else(|| {
                DomainError::StoreFailure(format!(
                    "Store returned a {} for {} {}",
                    kind,
                    T::KIND,
                    id
                ))
            })
        }
    }
}

/// Fails with `StoreUnavailable` unless the store is connected or can
/// reconnect right now.
pub async fn ensure_connected(store: &dyn BackingStore) -> Result<(), DomainError> {
    if store.is_connected() || store.reconnect().await {
        Ok(())
    } else {
        Err(DomainError::StoreUnavailable(
            "Connection lost with backing store API server".to_string(),
        ))
    }
}

/// Creates `object`, turning a refusal into `StoreFailure`.
pub async fn create_object(store: &dyn BackingStore, object: ApiObject) -> Result<(), DomainError> {
    let created = store.create(&object).await?;
    debug!(kind = %object.kind(), uuid = object.uuid(), created, "create");
    if !created {
        return Err(DomainError::StoreFailure(format!(
            "{} {} creation failed",
            object.kind(),
            object.uuid()
        )));
    }
    Ok(())
}

/// Updates `object`, turning a refusal into `StoreFailure`.
pub async fn update_object(store: &dyn BackingStore, object: ApiObject) -> Result<(), DomainError> {
    let updated = store.update(&object).await?;
    debug!(kind = %object.kind(), uuid = object.uuid(), updated, "update");
    if !updated {
        return Err(DomainError::StoreFailure(format!(
            "{} {} update failed",
            object.kind(),
            object.uuid()
        )));
    }
    Ok(())
}
