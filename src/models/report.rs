//! Evaluation report model.

use super::SubnetInfo;
use crate::processing::{to_binary, AddressClass};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Rendered for absent values.
pub const NOT_AVAILABLE: &str = "N/A";
/// Rendered when reverse DNS gave no answer.
pub const NOT_FOUND: &str = "Not found";

/// Geolocation / ownership data. Every field is optional.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GeoInfo {
    pub asn: Option<String>,
    pub owner: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    /// "lat,long"
    pub location: Option<String>,
}

impl GeoInfo {
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        [
            ("Asn", &self.asn),
            ("Owner", &self.owner),
            ("Country", &self.country),
            ("Region", &self.region),
            ("City", &self.city),
            ("Location", &self.location),
        ]
        .into_iter()
        .map(|(label, value)| (label, or_not_available(value.as_deref())))
        .collect()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MulticastReport {
    pub address: Ipv4Addr,
    pub group: String,
    pub class: AddressClass,
    /// AS number embedded in a GLOP (233/8) address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glop_asn: Option<u16>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UnicastReport {
    pub subnet: SubnetInfo,
    pub class: AddressClass,
    pub hostname: Option<String>,
    /// None when the geo lookup failed.
    pub geo: Option<GeoInfo>,
}

/// Result of one evaluation.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Report {
    Multicast(MulticastReport),
    Unicast(UnicastReport),
}

impl Report {
    /// Ordered `(label, value)` pairs, one per output line.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Report::Multicast(m) => {
                let mut fields = vec![
                    ("IP Address", m.address.to_string()),
                    ("Multicast Group", m.group.clone()),
                    ("Class", m.class.to_string()),
                ];
                if let Some(asn) = m.glop_asn {
                    fields.push(("GLOP AS", asn.to_string()));
                }
                fields
            }
            Report::Unicast(u) => {
                let s = &u.subnet;
                let mut fields = vec![
                    ("IP Address", s.address().to_string()),
                    ("Network Address", with_binary(s.network_address)),
                    ("First Usable IP", optional_with_binary(s.first_usable)),
                    ("Last Usable IP", optional_with_binary(s.last_usable)),
                    ("Broadcast Address", with_binary(s.broadcast_address)),
                    ("Subnet Mask", with_binary(s.netmask)),
                    ("Wildcard Mask", s.wildcard_mask.to_string()),
                    ("Total Usable Hosts", s.usable_count.to_string()),
                    ("Class", u.class.to_string()),
                    ("Private/Public", s.privacy_label().to_string()),
                    (
                        "Hostname",
                        u.hostname.clone().unwrap_or_else(|| NOT_FOUND.to_string()),
                    ),
                ];
                if let Some(geo) = &u.geo {
                    fields.extend(geo.fields());
                }
                fields
            }
        }
    }

    pub fn address(&self) -> Ipv4Addr {
        match self {
            Report::Multicast(m) => m.address,
            Report::Unicast(u) => u.subnet.address(),
        }
    }
}

fn with_binary(addr: Ipv4Addr) -> String {
    format!("{addr}  (Binary: {})", to_binary(addr))
}

fn optional_with_binary(addr: Option<Ipv4Addr>) -> String {
    addr.map(with_binary)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn or_not_available(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}
