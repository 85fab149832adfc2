//! Reverse DNS lookup through the system resolver.

use super::HostResolver;
use crate::error::LookupError;
use dns_lookup::lookup_addr;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

/// Resolves with `getnameinfo` on a blocking thread, bounded by a timeout.
#[derive(Debug, Clone)]
pub struct SystemResolver {
    timeout: Duration,
}

impl SystemResolver {
    pub fn new(timeout: Duration) -> Self {
        SystemResolver { timeout }
    }
}

impl HostResolver for SystemResolver {
    async fn reverse_lookup(&self, addr: Ipv4Addr) -> Result<String, LookupError> {
        log::debug!("reverse_lookup({addr}) timeout={:?}", self.timeout);
        let lookup = tokio::task::spawn_blocking(move || lookup_addr(&IpAddr::V4(addr)));

        match tokio::time::timeout(self.timeout, lookup).await {
            Err(_) => Err(LookupError::Timeout),
            Ok(Err(e)) => Err(LookupError::Resolver(format!("worker join failed: {e}"))),
            Ok(Ok(Err(e))) => Err(LookupError::Resolver(e.to_string())),
            // The resolver echoes the numeric form when no PTR record exists
            Ok(Ok(Ok(hostname))) if hostname == addr.to_string() => Err(LookupError::NotFound),
            Ok(Ok(Ok(hostname))) => Ok(hostname),
        }
    }
}
