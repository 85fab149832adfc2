//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for representing an IPv4 address together with a
//! prefix length, along with the mask arithmetic used by the subnet resolver.

use crate::error::ParseError;
use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, ParseError> {
    if len > MAX_LENGTH {
        Err(ParseError::InvalidPrefix(len.to_string()))
    } else {
        Ok(prefix_mask(len))
    }
}

// Callers guarantee len <= MAX_LENGTH.
fn prefix_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len.min(MAX_LENGTH);
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

/// Get the network address for a given IP and prefix length.
pub fn network_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, ParseError> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, ParseError> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Prefix length of a dotted netmask, `None` when the one-bits are not contiguous.
pub fn netmask_to_prefix(mask: Ipv4Addr) -> Option<u8> {
    let bits = u32::from(mask);
    let len = bits.leading_ones() as u8;
    (prefix_mask(len) == bits).then_some(len)
}

/// IPv4 address with CIDR notation support.
///
/// Host bits may be set (`192.168.1.10/24` is valid), the network is derived
/// with [`Ipv4::lo`] and [`Ipv4::hi`].
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    addr: Ipv4Addr,
    mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl Ipv4 {
    /// Build from an address and a prefix length (0-32).
    pub fn new(addr: Ipv4Addr, mask: u8) -> Result<Ipv4, ParseError> {
        if mask > MAX_LENGTH {
            return Err(ParseError::InvalidPrefix(mask.to_string()));
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Parse one line of user input.
    ///
    /// Accepts `a.b.c.d` (implicit `/32`), `a.b.c.d/len` and
    /// `a.b.c.d/m.m.m.m` where the mask is either a netmask or a hostmask.
    pub fn parse_input(input: &str) -> Result<Ipv4, ParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseError::Empty);
        }
        let (addr_part, mask_part) = match input.split_once('/') {
            Some((addr, mask)) => (addr.trim(), Some(mask.trim())),
            None => (input, None),
        };
        let addr: Ipv4Addr = addr_part
            .parse()
            .map_err(|_| ParseError::InvalidAddress(addr_part.to_string()))?;
        let mask = match mask_part {
            None => MAX_LENGTH,
            Some(mask) => parse_mask(mask)?,
        };
        Ipv4::new(addr, mask)
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn mask(&self) -> u8 {
        self.mask
    }

    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(prefix_mask(self.mask))
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & prefix_mask(self.mask))
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.lo()) | !prefix_mask(self.mask))
    }
}

fn parse_mask(mask: &str) -> Result<u8, ParseError> {
    if !mask.is_empty() && mask.bytes().all(|b| b.is_ascii_digit()) {
        let len: u8 = mask
            .parse()
            .map_err(|_| ParseError::InvalidPrefix(mask.to_string()))?;
        if len > MAX_LENGTH {
            return Err(ParseError::InvalidPrefix(mask.to_string()));
        }
        Ok(len)
    } else if mask.contains('.') {
        let dotted: Ipv4Addr = mask
            .parse()
            .map_err(|_| ParseError::InvalidNetmask(mask.to_string()))?;
        // netmask first, then hostmask (0.0.0.255 == /24)
        netmask_to_prefix(dotted)
            .or_else(|| netmask_to_prefix(Ipv4Addr::from(!u32::from(dotted))))
            .ok_or_else(|| ParseError::InvalidNetmask(mask.to_string()))
    } else {
        Err(ParseError::InvalidPrefix(mask.to_string()))
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}
