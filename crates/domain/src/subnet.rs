use ipnetwork::IpNetwork;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationPool {
    pub start: String,
    pub end: String,
}

/// Subnet record as delivered by the control plane.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subnet {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub network_id: Option<String>,
    #[serde(default)]
    pub cidr: Option<String>,
    #[serde(default)]
    pub gateway_ip: Option<String>,
    #[serde(default)]
    pub allocation_pools: Vec<AllocationPool>,
}

impl Subnet {
    pub fn new(
        id: impl Into<String>,
        network_id: impl Into<String>,
        cidr: impl Into<String>,
        gateway_ip: Option<String>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            network_id: Some(network_id.into()),
            cidr: Some(cidr.into()),
            gateway_ip,
            allocation_pools: Vec::new(),
        }
    }

    /// Lowest address a port may be given from this subnet.
    ///
    /// The smallest allocation-pool start wins. Without pools it is the first
    /// host of the CIDR, stepping past the gateway when the two coincide.
    pub fn low_address(&self) -> Option<IpAddr> {
        let pool_start = self
            .allocation_pools
            .iter()
            .filter_map(|pool| pool.start.trim().parse::<IpAddr>().ok())
            .min();
        if pool_start.is_some() {
            return pool_start;
        }

        let network: IpNetwork = self.cidr.as_deref()?.trim().parse().ok()?;
        let first = first_host(network);
        let gateway = self
            .gateway_ip
            .as_deref()
            .and_then(|g| g.trim().parse::<IpAddr>().ok());

        if gateway == Some(first) {
            next_address(first).filter(|next| network.contains(*next))
        } else {
            Some(first)
        }
    }
}

fn next_address(address: IpAddr) -> Option<IpAddr> {
    match address {
        IpAddr::V4(v4) => u32::from(v4)
            .checked_add(1)
            .map(|n| IpAddr::V4(Ipv4Addr::from(n))),
        IpAddr::V6(v6) => u128::from(v6)
            .checked_add(1)
            .map(|n| IpAddr::V6(Ipv6Addr::from(n))),
    }
}

fn first_host(network: IpNetwork) -> IpAddr {
    match network {
        IpNetwork::V4(net) => {
            let base = net.network();
            if net.prefix() >= 31 {
                IpAddr::V4(base)
            } else {
                IpAddr::V4(Ipv4Addr::from(u32::from(base) + 1))
            }
        }
        IpNetwork::V6(net) => {
            let base = net.network();
            if net.prefix() >= 127 {
                IpAddr::V6(base)
            } else {
                IpAddr::V6(Ipv6Addr::from(u128::from(base) + 1))
            }
        }
    }
}
