use netbridge_domain::Status;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Network,
    Subnet,
    Port,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Update,
    Delete,
}

/// One lifecycle event read from the input stream.
///
/// `record` and `original` stay untyped until the resource is known.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub resource: Resource,
    pub action: Action,
    #[serde(default)]
    pub record: Option<Value>,
    #[serde(default)]
    pub original: Option<Value>,
}

/// One line of output per input line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventOutcome {
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EventOutcome {
    pub fn status(line: usize, event: &Event, status: Status) -> Self {
        Self {
            line,
            resource: Some(event.resource),
            action: Some(event.action),
            status: Some(status),
            error: None,
        }
    }

    pub fn failed(line: usize, event: Option<&Event>, error: impl ToString) -> Self {
        Self {
            line,
            resource: event.map(|e| e.resource),
            action: event.map(|e| e.action),
            status: None,
            error: Some(error.to_string()),
        }
    }
}
