#![allow(dead_code)]

mod mock_backing_store;
mod mock_subnet_lookup;

pub use mock_backing_store::{seed_network, MockBackingStore, StoreCall};
pub use mock_subnet_lookup::MockSubnetLookup;

use netbridge_domain::{FixedIp, Network, Port, Subnet};

pub const NETWORK_ID: &str = "6f1c2a3b-4d5e-4f60-8a7b-9c0d1e2f3a4b";
pub const OTHER_NETWORK_ID: &str = "0a1b2c3d-4e5f-4a6b-8c7d-9e0f1a2b3c4d";
pub const SUBNET_ID: &str = "5b6c7d8e-9f0a-4b1c-8d2e-3f4a5b6c7d8e";
pub const PORT_ID: &str = "9e8d7c6b-5a4f-4e3d-8c2b-1a0f9e8d7c6b";
pub const DEVICE_ID: &str = "1d2c3b4a-5f6e-4d7c-8b9a-0f1e2d3c4b5a";
pub const IPAM_ID: &str = "3c4d5e6f-7a8b-4c9d-8e0f-1a2b3c4d5e6f";

pub fn make_network(id: &str, name: &str) -> Network {
    Network::new(id, name)
}

pub fn make_subnet(cidr: &str) -> Subnet {
    Subnet::new(SUBNET_ID, NETWORK_ID, cidr, Some("10.0.0.1".to_string()))
}

pub fn make_port(fixed_ips: Option<Vec<FixedIp>>) -> Port {
    Port {
        id: Some(PORT_ID.to_string()),
        network_id: Some(NETWORK_ID.to_string()),
        device_id: Some(DEVICE_ID.to_string()),
        name: Some("port-a".to_string()),
        mac_address: Some("fa:16:3e:00:00:01".to_string()),
        fixed_ips,
    }
}
