use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a lifecycle callback, reported to the caller as an HTTP-style code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum Status {
    Ok,
    BadRequest,
    Forbidden,
    NotAcceptable,
    InternalError,
    NotImplemented,
    Unavailable,
}

impl Status {
    pub const fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::BadRequest => 400,
            Status::Forbidden => 403,
            Status::NotAcceptable => 406,
            Status::InternalError => 500,
            Status::NotImplemented => 501,
            Status::Unavailable => 503,
        }
    }

    pub const fn reason(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::BadRequest => "Bad Request",
            Status::Forbidden => "Forbidden",
            Status::NotAcceptable => "Not Acceptable",
            Status::InternalError => "Internal Server Error",
            Status::NotImplemented => "Not Implemented",
            Status::Unavailable => "Service Unavailable",
        }
    }

    pub fn is_success(self) -> bool {
        self == Status::Ok
    }
}

impl From<Status> for u16 {
    fn from(status: Status) -> Self {
        status.code()
    }
}

impl TryFrom<u16> for Status {
    type Error = String;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            200 => Ok(Status::Ok),
            400 => Ok(Status::BadRequest),
            403 => Ok(Status::Forbidden),
            406 => Ok(Status::NotAcceptable),
            500 => Ok(Status::InternalError),
            501 => Ok(Status::NotImplemented),
            503 => Ok(Status::Unavailable),
            other => Err(format!("Unknown status code {other}")),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}
