//! Well-known multicast groups.
//!
//! Exact addresses are looked up in a static table, anything else falls
//! back to the block the address belongs to.

use crate::models::network_addr;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::net::Ipv4Addr;

pub const UNKNOWN_GROUP: &str = "Multicast address (unassigned or unknown group)";

/// Checked in order after a table miss.
const MULTICAST_BLOCKS: [(Ipv4Addr, u8, &str); 4] = [
    (Ipv4Addr::new(224, 0, 0, 0), 24, "Local Network Control Block"),
    (Ipv4Addr::new(224, 0, 1, 0), 24, "Internetwork Control Block"),
    (
        Ipv4Addr::new(233, 0, 0, 0),
        8,
        "GLOP addressing (for AS-based multicast)",
    ),
    (
        Ipv4Addr::new(239, 0, 0, 0),
        8,
        "Administratively Scoped Multicast",
    ),
];

lazy_static! {
    static ref MULTICAST_GROUPS: HashMap<&'static str, &'static str> = HashMap::from([
        ("224.0.0.1", "All hosts on the local subnet"),
        ("224.0.0.2", "All routers on the local subnet"),
        ("224.0.0.3", "Unassigned"),
        ("224.0.0.4", "DVMRP routers"),
        ("224.0.0.5", "OSPF routers"),
        ("224.0.0.6", "OSPF designated routers"),
        ("224.0.0.7", "ST Routers"),
        ("224.0.0.8", "ST Hosts"),
        ("224.0.0.9", "RIP version 2 routers"),
        ("224.0.0.10", "EIGRP Routers"),
        ("224.0.0.11", "Mobile-Agents"),
        ("224.0.0.12", "DHCP Server / Relay Agent"),
        ("224.0.0.13", "All PIM Routers"),
        ("224.0.0.14", "RSVP-ENCAPSULATION"),
        ("224.0.0.15", "all-cbt-routers"),
        ("224.0.0.16", "designated-sbm"),
        ("224.0.0.17", "all-sbms"),
        ("224.0.0.18", "VRRP (Virtual Router Redundancy Protocol)"),
        ("224.0.0.19", "IPAllL1ISs"),
        ("224.0.0.20", "IPAllL2ISs"),
        ("224.0.0.21", "IPAllIntermediate Systems"),
        ("224.0.0.22", "IGMP version 3"),
        ("224.0.0.23", "GLOBECAST-ID"),
        ("224.0.0.24", "OSPFIGP-TE"),
        ("224.0.0.25", "router-to-switch"),
        ("224.0.0.26", "Unassigned"),
        ("224.0.0.27", "Al MPP Hello"),
        ("224.0.0.28", "ETC Control"),
        ("224.0.0.29", "GE-FANUC"),
        ("224.0.0.30", "indigo-vhdp"),
        ("224.0.0.31", "shinbroadband"),
        ("224.0.0.32", "digistar"),
        ("224.0.0.33", "ff-system-management"),
        ("224.0.0.34", "pt2-discover"),
        ("224.0.0.35", "DXCLUSTER"),
        ("224.0.0.36", "DTCP Announcement"),
        ("224.0.0.37", "zeroconfaddr"),
        ("224.0.0.101", "cisco-nhap"),
        ("224.0.0.102", "HSRP"),
        ("224.0.0.103", "MDAP"),
        ("224.0.0.104", "Nokia MC CH"),
        ("224.0.0.105", "ff-lr-address"),
        ("224.0.0.106", "All-Snoopers"),
        ("224.0.0.107", "PTP-pdelay"),
        ("224.0.0.108", "Saratoga"),
        ("224.0.0.109", "LL-MANET-Routers"),
        ("224.0.0.110", "IGRS"),
        ("224.0.0.111", "Babel"),
        ("224.0.0.112", "MMA Device Discovery"),
        ("224.0.0.113", "AllJoyn"),
        ("224.0.0.114", "Inter RFID Reader Protocol"),
        ("224.0.0.115", "JSDP"),
        ("224.0.0.116", "Device discovery/config"),
        ("224.0.0.117", "DLEP Discovery"),
        ("224.0.0.118", "MAAS"),
        ("224.0.0.119", "ALL_GRASP_NEIGHBORS"),
        ("224.0.0.120", "3GPP MBMS SACH"),
        ("224.0.0.121", "ALL_V4_RIFT_ROUTERS"),
        ("224.0.0.122", "Network Virtualization Overlay (NVO) BUM Traffic"),
        ("224.0.0.150", "Ramp AltitudeCDN MulticastPlus"),
        ("224.0.0.151", "Unassigned"),
        ("224.0.0.152", "WiseHome"),
        ("224.0.0.153", "Unassigned"),
        ("224.0.0.251", "mDNS (Multicast DNS)"),
        ("224.0.0.252", "Link-local Discovery Protocol (LLDP)"),
        ("224.0.0.253", "Teredo"),
        ("224.0.0.254", "RFC3692-style Experiment"),
        ("224.0.0.255", "Reserved"),
        ("239.255.255.250", "SSDP (Simple Service Discovery Protocol)"),
    ]);
}

/// Describe the multicast group of `addr`.
pub fn describe(addr: Ipv4Addr) -> String {
    if let Some(group) = MULTICAST_GROUPS.get(addr.to_string().as_str()) {
        return group.to_string();
    }
    MULTICAST_BLOCKS
        .iter()
        .find(|(net, len, _)| network_addr(addr, *len).is_ok_and(|n| n == *net))
        .map(|(_, _, block)| block.to_string())
        .unwrap_or_else(|| UNKNOWN_GROUP.to_string())
}

/// AS number encoded in a GLOP address (233.X.Y.0/24, RFC 3180).
pub fn glop_asn(addr: Ipv4Addr) -> Option<u16> {
    match addr.octets() {
        [233, hi, lo, _] => Some(u16::from_be_bytes([hi, lo])),
        _ => None,
    }
}

/// Number of entries in the well-known table.
pub fn known_group_count() -> usize {
    MULTICAST_GROUPS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_matches() {
        assert_eq!(describe(Ipv4Addr::new(224, 0, 0, 5)), "OSPF routers");
        assert_eq!(describe(Ipv4Addr::new(224, 0, 0, 251)), "mDNS (Multicast DNS)");
        assert_eq!(
            describe(Ipv4Addr::new(239, 255, 255, 250)),
            "SSDP (Simple Service Discovery Protocol)"
        );
        assert_eq!(known_group_count(), 69);
    }

    #[test]
    fn test_block_fallbacks() {
        assert_eq!(
            describe(Ipv4Addr::new(224, 0, 0, 77)),
            "Local Network Control Block"
        );
        assert_eq!(
            describe(Ipv4Addr::new(224, 0, 1, 1)),
            "Internetwork Control Block"
        );
        assert_eq!(
            describe(Ipv4Addr::new(233, 252, 0, 1)),
            "GLOP addressing (for AS-based multicast)"
        );
        assert_eq!(
            describe(Ipv4Addr::new(239, 1, 2, 3)),
            "Administratively Scoped Multicast"
        );
    }

    #[test]
    fn test_outside_any_block_is_unknown() {
        assert_eq!(describe(Ipv4Addr::new(224, 1, 2, 3)), UNKNOWN_GROUP);
        assert_eq!(describe(Ipv4Addr::new(232, 0, 0, 1)), UNKNOWN_GROUP);
    }

    #[test]
    fn test_glop_asn() {
        assert_eq!(glop_asn(Ipv4Addr::new(233, 1, 2, 0)), Some(258));
        assert_eq!(glop_asn(Ipv4Addr::new(233, 0, 0, 9)), Some(0));
        assert_eq!(glop_asn(Ipv4Addr::new(239, 1, 2, 0)), None);
    }
}
