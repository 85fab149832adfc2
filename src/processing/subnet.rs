//! Subnet resolution: boundaries, masks and usable host range.

use crate::models::{Ipv4, SubnetInfo, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Number of usable host addresses for a prefix length.
///
/// /31 is treated as a point-to-point link (RFC 3021) with both addresses
/// usable, /32 has none.
pub fn usable_host_count(len: u8) -> u64 {
    match len {
        32.. => 0,
        31 => 2,
        _ => (1u64 << (MAX_LENGTH - len)) - 2,
    }
}

/// RFC 1918 private ranges: 10/8, 172.16/12, 192.168/16.
pub fn is_private(addr: Ipv4Addr) -> bool {
    match addr.octets() {
        [10, _, _, _] => true,
        [172, b, _, _] if (16..=31).contains(&b) => true,
        [192, 168, _, _] => true,
        _ => false,
    }
}

/// Resolve the network an address belongs to.
pub fn resolve(cidr: Ipv4) -> SubnetInfo {
    let network = cidr.lo();
    let broadcast = cidr.hi();
    let netmask = cidr.netmask();

    let (first_usable, last_usable) = match cidr.mask() {
        32 => (None, None),
        31 => (Some(network), Some(broadcast)),
        _ => (
            Some(Ipv4Addr::from(u32::from(network) + 1)),
            Some(Ipv4Addr::from(u32::from(broadcast) - 1)),
        ),
    };

    let info = SubnetInfo {
        cidr,
        network_address: network,
        broadcast_address: broadcast,
        netmask,
        wildcard_mask: Ipv4Addr::from(!u32::from(netmask)),
        first_usable,
        last_usable,
        usable_count: usable_host_count(cidr.mask()),
        is_private: is_private(cidr.addr()),
    };
    log::debug!(
        "resolve({cidr}) network={} broadcast={} usable={}",
        info.network_address,
        info.broadcast_address,
        info.usable_count
    );
    info
}
