//! Historical (classful) address classification.

use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressClass {
    A,
    B,
    C,
    /// Multicast
    D,
    /// Experimental
    E,
    Unknown,
}

impl AddressClass {
    pub fn is_multicast(&self) -> bool {
        *self == AddressClass::D
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::D => "D (Multicast)",
            AddressClass::E => "E (Experimental)",
            AddressClass::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

impl Serialize for AddressClass {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Classify by first octet. 0, 127 and 255 are `Unknown`.
pub fn classify(addr: Ipv4Addr) -> AddressClass {
    match addr.octets()[0] {
        1..=126 => AddressClass::A,
        128..=191 => AddressClass::B,
        192..=223 => AddressClass::C,
        224..=239 => AddressClass::D,
        240..=254 => AddressClass::E,
        _ => AddressClass::Unknown,
    }
}
