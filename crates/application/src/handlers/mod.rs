//! Callback surface invoked by the hosting framework.
//!
//! Each `can_*` call runs a use case and folds its outcome into a `Status`;
//! the matching `*_created`/`*_updated`/`*_deleted` call re-reads the backing
//! store and only logs what it finds.
mod network_handler;
mod port_handler;
mod subnet_handler;

pub use network_handler::NetworkHandler;
pub use port_handler::PortHandler;
pub use subnet_handler::SubnetHandler;

use netbridge_domain::{DomainError, Status};
use tracing::{error, info, warn};

fn report<T>(operation: &'static str, result: Result<T, DomainError>) -> Status {
    match result {
        Ok(_) => {
            info!(operation, status = Status::Ok.code(), "Request committed");
            Status::Ok
        }
        Err(e) => {
            let status = e.status().unwrap_or(Status::InternalError);
            if status.code() >= 500 {
                error!(operation, status = status.code(), error = %e, "Request failed");
            } else {
                warn!(operation, status = status.code(), error = %e, "Request rejected");
            }
            status
        }
    }
}

fn missing_record(operation: &'static str, resource: &str) -> Status {
    report::<()>(
        operation,
        Err(DomainError::InvalidInput(format!("{} record is required", resource))),
    )
}

fn not_implemented(operation: &'static str) -> Status {
    report::<()>(
        operation,
        Err(DomainError::NotImplemented(format!(
            "{} is not supported by this bridge",
            operation
        ))),
    )
}

fn log_verification(operation: &'static str, result: Result<bool, DomainError>) {
    match result {
        Ok(true) => info!(operation, "Backing store matches request"),
        Ok(false) => warn!(operation, "Backing store does not match request"),
        Err(e) => warn!(operation, error = %e, "Verification could not run"),
    }
}
