//! Best-effort enrichment lookups.
//!
//! This module defines the seams to the two external collaborators:
//! - [`dns`] - reverse DNS through the system resolver
//! - [`geo`] - ASN / owner / location from an ipinfo-style HTTP service
//!
//! Both return `Result<_, LookupError>`; the calculator collapses errors to
//! sentinel values so they never abort an evaluation.

mod dns;
mod geo;

use crate::error::LookupError;
use crate::models::GeoInfo;
use std::future::Future;
use std::net::Ipv4Addr;

pub use dns::SystemResolver;
pub use geo::{parse_geo_response, parse_org, IpInfoClient};

/// Hostname-by-address resolution.
pub trait HostResolver {
    fn reverse_lookup(
        &self,
        addr: Ipv4Addr,
    ) -> impl Future<Output = Result<String, LookupError>> + Send;
}

/// Geolocation / ownership lookup.
pub trait GeoLocator {
    fn lookup(&self, addr: Ipv4Addr) -> impl Future<Output = Result<GeoInfo, LookupError>> + Send;
}
