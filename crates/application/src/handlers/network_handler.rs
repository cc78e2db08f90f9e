use netbridge_domain::{Network, Status};
use std::sync::Arc;

use super::{log_verification, missing_record, report};
use crate::ports::BackingStore;
use crate::use_cases::networks::{
    CreateNetworkUseCase, DeleteNetworkUseCase, UpdateNetworkUseCase, VerifyNetworkUseCase,
};

pub struct NetworkHandler {
    create: CreateNetworkUseCase,
    update: UpdateNetworkUseCase,
    delete: DeleteNetworkUseCase,
    verify: VerifyNetworkUseCase,
}

impl NetworkHandler {
    pub fn new(store: Arc<dyn BackingStore>) -> Self {
        Self {
            create: CreateNetworkUseCase::new(store.clone()),
            update: UpdateNetworkUseCase::new(store.clone()),
            delete: DeleteNetworkUseCase::new(store.clone()),
            verify: VerifyNetworkUseCase::new(store),
        }
    }

    pub async fn can_create_network(&self, network: Option<&Network>) -> Status {
        const OP: &str = "create_network";
        match network {
            None => missing_record(OP, "Network"),
            Some(network) => report(OP, self.create.execute(network).await),
        }
    }

    pub async fn network_created(&self, network: &Network) {
        log_verification("network_created", self.verify.created(network).await);
    }

    pub async fn can_update_network(
        &self,
        delta: Option<&Network>,
        original: Option<&Network>,
    ) -> Status {
        const OP: &str = "update_network";
        match (delta, original) {
            (Some(delta), Some(original)) => report(OP, self.update.execute(delta, original).await),
            _ => missing_record(OP, "Network"),
        }
    }

    pub async fn network_updated(&self, network: &Network) {
        log_verification("network_updated", self.verify.updated(network).await);
    }

    pub async fn can_delete_network(&self, network: Option<&Network>) -> Status {
        const OP: &str = "delete_network";
        match network {
            None => missing_record(OP, "Network"),
            Some(network) => report(OP, self.delete.execute(network).await),
        }
    }

    pub async fn network_deleted(&self, network: &Network) {
        log_verification("network_deleted", self.verify.deleted(network).await);
    }
}
