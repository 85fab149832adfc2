//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4`] - IPv4 address with CIDR notation support
//! - [`SubnetInfo`] - resolved network boundaries of an [`Ipv4`]
//! - [`Report`] - the result of one evaluation, multicast or unicast

mod ipv4;
mod report;
mod subnet;

// Re-export public types
pub use ipv4::{
    broadcast_addr, get_cidr_mask, netmask_to_prefix, network_addr, Ipv4, MAX_LENGTH,
};
pub use report::{GeoInfo, MulticastReport, Report, UnicastReport, NOT_AVAILABLE, NOT_FOUND};
pub use subnet::SubnetInfo;
