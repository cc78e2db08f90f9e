use netbridge_domain::{Port, Status};
use std::sync::Arc;

use super::{log_verification, missing_record, not_implemented, report};
use crate::ports::{BackingStore, SubnetLookup};
use crate::use_cases::ports::{CreatePortUseCase, DeletePortUseCase, VerifyPortUseCase};

pub struct PortHandler {
    create: CreatePortUseCase,
    delete: DeletePortUseCase,
    verify: VerifyPortUseCase,
}

impl PortHandler {
    pub fn new(
        store: Arc<dyn BackingStore>,
        subnets: Arc<dyn SubnetLookup>,
        rollback_on_failure: bool,
    ) -> Self {
        Self {
            create: CreatePortUseCase::new(store.clone(), subnets, rollback_on_failure),
            delete: DeletePortUseCase::new(store.clone()),
            verify: VerifyPortUseCase::new(store),
        }
    }

    pub async fn can_create_port(&self, port: Option<&Port>) -> Status {
        const OP: &str = "create_port";
        match port {
            None => missing_record(OP, "Port"),
            Some(port) => report(OP, self.create.execute(port).await),
        }
    }

    pub async fn port_created(&self, port: &Port) {
        log_verification("port_created", self.verify.created(port).await);
    }

    pub async fn can_update_port(&self, _delta: Option<&Port>, _original: Option<&Port>) -> Status {
        not_implemented("update_port")
    }

    pub async fn port_updated(&self, _port: &Port) {}

    pub async fn can_delete_port(&self, port: Option<&Port>) -> Status {
        const OP: &str = "delete_port";
        match port {
            None => missing_record(OP, "Port"),
            Some(port) => report(OP, self.delete.execute(port).await),
        }
    }

    pub async fn port_deleted(&self, port: &Port) {
        log_verification("port_deleted", self.verify.deleted(port).await);
    }
}
