//! Resolved subnet data model.

use super::Ipv4;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Everything the subnet resolver derives from an address and prefix.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetInfo {
    /// The input address and prefix, host bits kept.
    pub cidr: Ipv4,
    pub network_address: Ipv4Addr,
    pub broadcast_address: Ipv4Addr,
    pub netmask: Ipv4Addr,
    pub wildcard_mask: Ipv4Addr,
    /// First usable host (None for /32).
    pub first_usable: Option<Ipv4Addr>,
    /// Last usable host (None for /32).
    pub last_usable: Option<Ipv4Addr>,
    pub usable_count: u64,
    /// Input address is in 10/8, 172.16/12 or 192.168/16.
    pub is_private: bool,
}

impl SubnetInfo {
    pub fn address(&self) -> Ipv4Addr {
        self.cidr.addr()
    }

    pub fn prefix(&self) -> u8 {
        self.cidr.mask()
    }

    /// Lazily walk every usable host address in order.
    pub fn usable_hosts(&self) -> impl Iterator<Item = Ipv4Addr> {
        let range = match (self.first_usable, self.last_usable) {
            (Some(first), Some(last)) => u32::from(first)..=u32::from(last),
            // empty: start > end
            _ => 1..=0,
        };
        range.map(Ipv4Addr::from)
    }

    pub fn privacy_label(&self) -> &'static str {
        if self.is_private {
            "Private"
        } else {
            "Public"
        }
    }
}
