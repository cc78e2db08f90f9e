use crate::ip_prefix::IpPrefixError;
use crate::status::Status;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Unsupported feature: {0}")]
    Unsupported(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Missing reference: {0}")]
    MissingReference(String),

    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),

    #[error("Cannot delete {kind} {id}: {count} dependent interface(s)")]
    HasDependents {
        kind: &'static str,
        id: String,
        count: usize,
    },

    #[error("Operation not implemented: {0}")]
    NotImplemented(String),

    #[error("Backing store operation failed: {0}")]
    StoreFailure(String),

    #[error("Backing store unavailable: {0}")]
    StoreUnavailable(String),

    #[error(transparent)]
    InvalidPrefix(#[from] IpPrefixError),
}

impl DomainError {
    /// Status code reported to the caller for this error.
    ///
    /// Returns `None` for contract violations (an unparsable CIDR) which are
    /// handed back to the caller as errors instead of being folded into a
    /// status code.
    pub fn status(&self) -> Option<Status> {
        let status = match self {
            DomainError::InvalidInput(_)
            | DomainError::InvalidIdentifier(_)
            | DomainError::NotFound(_) => Status::BadRequest,
            DomainError::Unsupported(_) => Status::NotAcceptable,
            DomainError::AlreadyExists(_)
            | DomainError::MissingReference(_)
            | DomainError::PreconditionFailed(_)
            | DomainError::HasDependents { .. } => Status::Forbidden,
            DomainError::NotImplemented(_) => Status::NotImplemented,
            DomainError::StoreFailure(_) => Status::InternalError,
            DomainError::StoreUnavailable(_) => Status::Unavailable,
            DomainError::InvalidPrefix(_) => return None,
        };
        Some(status)
    }
}
