use netbridge_application::ports::BackingStore;
use netbridge_application::{NetworkHandler, PortHandler, SubnetHandler};
use netbridge_domain::Config;
use netbridge_infrastructure::{ApiServerClient, SubnetRegistry};
use std::sync::Arc;
use tracing::info;

/// The three resource handlers wired to one backing-store connection.
pub struct Handlers {
    pub networks: NetworkHandler,
    pub subnets: SubnetHandler,
    pub ports: PortHandler,
    pub registry: Arc<SubnetRegistry>,
}

impl Handlers {
    pub fn new(store: Arc<dyn BackingStore>, config: &Config) -> Self {
        let registry = Arc::new(SubnetRegistry::new());
        Self {
            networks: NetworkHandler::new(store.clone()),
            subnets: SubnetHandler::new(store.clone(), config.handlers.ipam_name.clone()),
            ports: PortHandler::new(
                store,
                registry.clone(),
                config.handlers.rollback_on_port_failure,
            ),
            registry,
        }
    }
}

/// Connects to the configured API server and builds the handlers on it.
pub async fn connect(config: &Config) -> anyhow::Result<Handlers> {
    let client = Arc::new(ApiServerClient::new(&config.api_server)?);
    let reachable = client.ping().await;

    info!(
        url = %client.base_url(),
        reachable,
        rollback = config.handlers.rollback_on_port_failure,
        ipam = %config.handlers.ipam_name,
        "Backing store client ready"
    );

    Ok(Handlers::new(client, config))
}
