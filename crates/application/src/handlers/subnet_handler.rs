use netbridge_domain::{DomainError, IpPrefixError, Status, Subnet};
use std::sync::Arc;
use tracing::error;

use super::{log_verification, missing_record, not_implemented, report};
use crate::ports::BackingStore;
use crate::use_cases::subnets::{CreateSubnetUseCase, VerifySubnetUseCase};

pub struct SubnetHandler {
    create: CreateSubnetUseCase,
    verify: VerifySubnetUseCase,
}

impl SubnetHandler {
    pub fn new(store: Arc<dyn BackingStore>, ipam_name: impl Into<String>) -> Self {
        Self {
            create: CreateSubnetUseCase::new(store.clone(), ipam_name),
            verify: VerifySubnetUseCase::new(store),
        }
    }

    /// Validates and commits a new subnet.
    ///
    /// A CIDR that is not `prefix/length` is a caller bug and comes back as
    /// `Err` instead of a status.
    pub async fn can_create_subnet(&self, subnet: Option<&Subnet>) -> Result<Status, IpPrefixError> {
        const OP: &str = "create_subnet";
        let Some(subnet) = subnet else {
            return Ok(missing_record(OP, "Subnet"));
        };

        match self.create.execute(subnet).await {
            Err(DomainError::InvalidPrefix(e)) => {
                error!(operation = OP, error = %e, "Malformed CIDR");
                Err(e)
            }
            result => Ok(report(OP, result)),
        }
    }

    pub async fn subnet_created(&self, subnet: &Subnet) {
        log_verification("subnet_created", self.verify.created(subnet).await);
    }

    pub async fn can_update_subnet(&self, _delta: Option<&Subnet>, _original: Option<&Subnet>) -> Status {
        not_implemented("update_subnet")
    }

    pub async fn subnet_updated(&self, _subnet: &Subnet) {}

    pub async fn can_delete_subnet(&self, _subnet: Option<&Subnet>) -> Status {
        not_implemented("delete_subnet")
    }

    pub async fn subnet_deleted(&self, _subnet: &Subnet) {}
}
