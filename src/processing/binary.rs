//! Dotted-octet binary rendering.

use crate::error::ParseError;
use itertools::Itertools;
use std::net::Ipv4Addr;

/// Render as four zero-padded 8-bit groups, e.g. `11000000.10101000.00000001.00000000`.
pub fn to_binary(addr: Ipv4Addr) -> String {
    addr.octets()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .join(".")
}

/// Inverse of [`to_binary`]. Each group must be exactly 8 binary digits.
pub fn parse_binary(input: &str) -> Result<Ipv4Addr, ParseError> {
    let invalid = || ParseError::InvalidBinary(input.to_string());
    let groups: Vec<&str> = input.trim().split('.').collect();
    if groups.len() != 4 {
        return Err(invalid());
    }
    let mut octets = [0u8; 4];
    for (octet, group) in octets.iter_mut().zip(groups) {
        if group.len() != 8 || !group.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(invalid());
        }
        *octet = u8::from_str_radix(group, 2).map_err(|_| invalid())?;
    }
    Ok(Ipv4Addr::from(octets))
}
