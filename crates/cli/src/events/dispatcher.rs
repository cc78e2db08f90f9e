use netbridge_domain::{Network, Port, Status, Subnet};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::event::{Action, Event, EventOutcome, Resource};
use crate::di::Handlers;

/// Runs the validate/commit call for an event and, on success, the
/// matching verification call.
pub struct Dispatcher {
    handlers: Handlers,
}

fn decode<T: DeserializeOwned>(value: Option<Value>) -> Result<Option<T>, serde_json::Error> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(value) => serde_json::from_value(value).map(Some),
    }
}

impl Dispatcher {
    pub fn new(handlers: Handlers) -> Self {
        Self { handlers }
    }

    pub fn handlers(&self) -> &Handlers {
        &self.handlers
    }

    /// Parses and dispatches one input line.
    pub async fn dispatch_line(&self, line_no: usize, line: &str) -> EventOutcome {
        match serde_json::from_str::<Event>(line) {
            Ok(event) => self.dispatch(line_no, event).await,
            Err(e) => {
                warn!(line = line_no, error = %e, "Unreadable event");
                EventOutcome::failed(line_no, None, format!("invalid event: {}", e))
            }
        }
    }

    pub async fn dispatch(&self, line_no: usize, event: Event) -> EventOutcome {
        debug!(line = line_no, resource = ?event.resource, action = ?event.action, "Dispatching");
        let result = match event.resource {
            Resource::Network => self.network(&event).await,
            Resource::Subnet => self.subnet(&event).await,
            Resource::Port => self.port(&event).await,
        };

        match result {
            Ok(status) => EventOutcome::status(line_no, &event, status),
            Err(error) => EventOutcome::failed(line_no, Some(&event), error),
        }
    }

    async fn network(&self, event: &Event) -> Result<Status, String> {
        let handler = &self.handlers.networks;
        let record: Option<Network> = decode(event.record.clone()).map_err(|e| e.to_string())?;

        let status = match event.action {
            Action::Create => {
                let status = handler.can_create_network(record.as_ref()).await;
                if let (true, Some(network)) = (status.is_success(), &record) {
                    handler.network_created(network).await;
                }
                status
            }
            Action::Update => {
                let original: Option<Network> =
                    decode(event.original.clone()).map_err(|e| e.to_string())?;
                let status = handler
                    .can_update_network(record.as_ref(), original.as_ref())
                    .await;
                if let (true, Some(delta), Some(original)) =
                    (status.is_success(), &record, &original)
                {
                    let expected = Network {
                        id: original.id.clone(),
                        name: delta.name.clone().or_else(|| original.name.clone()),
                        shared: original.shared,
                    };
                    handler.network_updated(&expected).await;
                }
                status
            }
            Action::Delete => {
                let status = handler.can_delete_network(record.as_ref()).await;
                if let (true, Some(network)) = (status.is_success(), &record) {
                    handler.network_deleted(network).await;
                }
                status
            }
        };
        Ok(status)
    }

    async fn subnet(&self, event: &Event) -> Result<Status, String> {
        let handler = &self.handlers.subnets;
        let record: Option<Subnet> = decode(event.record.clone()).map_err(|e| e.to_string())?;

        let status = match event.action {
            Action::Create => {
                let status = handler
                    .can_create_subnet(record.as_ref())
                    .await
                    .map_err(|e| e.to_string())?;
                if let (true, Some(subnet)) = (status.is_success(), &record) {
                    handler.subnet_created(subnet).await;
                    if let Err(e) = self.handlers.registry.register(subnet) {
                        warn!(error = %e, "Subnet not registered for address allocation");
                    }
                }
                status
            }
            Action::Update => {
                let original: Option<Subnet> =
                    decode(event.original.clone()).map_err(|e| e.to_string())?;
                let status = handler
                    .can_update_subnet(record.as_ref(), original.as_ref())
                    .await;
                if let (true, Some(subnet)) = (status.is_success(), &record) {
                    handler.subnet_updated(subnet).await;
                }
                status
            }
            Action::Delete => {
                let status = handler.can_delete_subnet(record.as_ref()).await;
                if let (true, Some(subnet)) = (status.is_success(), &record) {
                    handler.subnet_deleted(subnet).await;
                }
                status
            }
        };
        Ok(status)
    }

    async fn port(&self, event: &Event) -> Result<Status, String> {
        let handler = &self.handlers.ports;
        let record: Option<Port> = decode(event.record.clone()).map_err(|e| e.to_string())?;

        let status = match event.action {
            Action::Create => {
                let status = handler.can_create_port(record.as_ref()).await;
                if let (true, Some(port)) = (status.is_success(), &record) {
                    handler.port_created(port).await;
                }
                status
            }
            Action::Update => {
                let original: Option<Port> =
                    decode(event.original.clone()).map_err(|e| e.to_string())?;
                let status = handler
                    .can_update_port(record.as_ref(), original.as_ref())
                    .await;
                if let (true, Some(port)) = (status.is_success(), &record) {
                    handler.port_updated(port).await;
                }
                status
            }
            Action::Delete => {
                let status = handler.can_delete_port(record.as_ref()).await;
                if let (true, Some(port)) = (status.is_success(), &record) {
                    handler.port_deleted(port).await;
                }
                status
            }
        };
        Ok(status)
    }
}
