use netbridge_domain::{AllocationPool, Subnet};
use std::net::IpAddr;

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

#[test]
fn test_low_address_is_first_host_without_pools() {
    let subnet = Subnet::new("s-1", "n-1", "10.1.2.0/24", None);

    assert_eq!(subnet.low_address(), Some(ip("10.1.2.1")));
}

#[test]
fn test_low_address_masks_host_bits() {
    let subnet = Subnet::new("s-1", "n-1", "10.1.2.77/24", None);

    assert_eq!(subnet.low_address(), Some(ip("10.1.2.1")));
}

#[test]
fn test_low_address_prefers_smallest_pool_start() {
    let mut subnet = Subnet::new("s-1", "n-1", "10.1.2.0/24", None);
    subnet.allocation_pools = vec![
        AllocationPool {
            start: "10.1.2.100".to_string(),
            end: "10.1.2.150".to_string(),
        },
        AllocationPool {
            start: "10.1.2.20".to_string(),
            end: "10.1.2.50".to_string(),
        },
    ];

    assert_eq!(subnet.low_address(), Some(ip("10.1.2.20")));
}

#[test]
fn test_low_address_point_to_point_uses_network_address() {
    let subnet = Subnet::new("s-1", "n-1", "192.0.2.8/31", None);

    assert_eq!(subnet.low_address(), Some(ip("192.0.2.8")));
}

#[test]
fn test_low_address_ipv6() {
    let subnet = Subnet::new("s-1", "n-1", "2001:db8:1::/64", None);

    assert_eq!(subnet.low_address(), Some(ip("2001:db8:1::1")));
}

#[test]
fn test_low_address_unparsable_cidr_is_none() {
    let subnet = Subnet::new("s-1", "n-1", "not-a-cidr", None);

    assert_eq!(subnet.low_address(), None);
}

#[test]
fn test_subnet_deserializes_from_control_plane_json() {
    let json = r#"{
        "id": "s-1",
        "network_id": "n-1",
        "cidr": "10.0.0.0/24",
        "gateway_ip": "10.0.0.1",
        "allocation_pools": [{"start": "10.0.0.2", "end": "10.0.0.254"}]
    }"#;

    let subnet: Subnet = serde_json::from_str(json).unwrap();

    assert_eq!(subnet.gateway_ip.as_deref(), Some("10.0.0.1"));
    assert_eq!(subnet.low_address(), Some(ip("10.0.0.2")));
}

#[test]
fn test_low_address_skips_gateway_on_first_host() {
    let subnet = Subnet::new("s-1", "n-1", "10.0.0.0/24", Some("10.0.0.1".to_string()));

    assert_eq!(subnet.low_address(), Some(ip("10.0.0.2")));
}

#[test]
fn test_low_address_keeps_first_host_when_gateway_elsewhere() {
    let subnet = Subnet::new("s-1", "n-1", "10.0.0.0/24", Some("10.0.0.254".to_string()));

    assert_eq!(subnet.low_address(), Some(ip("10.0.0.1")));
}

#[test]
fn test_low_address_ipv6_skips_gateway() {
    let subnet = Subnet::new("s-1", "n-1", "2001:db8:1::/64", Some("2001:db8:1::1".to_string()));

    assert_eq!(subnet.low_address(), Some(ip("2001:db8:1::2")));
}

#[test]
fn test_low_address_host_route_equal_to_gateway_is_none() {
    let subnet = Subnet::new("s-1", "n-1", "192.0.2.7/32", Some("192.0.2.7".to_string()));

    assert_eq!(subnet.low_address(), None);
}
