//! Evaluation of one user input into a [`Report`].

use crate::error::ParseError;
use crate::lookup::{GeoLocator, HostResolver};
use crate::models::{GeoInfo, Ipv4, MulticastReport, Report, UnicastReport};
use crate::processing::{classify, describe_multicast, glop_asn, resolve};
use std::net::Ipv4Addr;

/// Ties the classifier, the multicast registry, the subnet resolver and the
/// two lookup collaborators together.
pub struct Calculator<H, G> {
    resolver: H,
    locator: G,
}

impl<H, G> Calculator<H, G>
where
    H: HostResolver,
    G: GeoLocator,
{
    pub fn new(resolver: H, locator: G) -> Self {
        Calculator { resolver, locator }
    }

    /// Evaluate one line of input (`a.b.c.d` or `a.b.c.d/len`).
    ///
    /// Only malformed input is an error. Failed lookups leave the hostname
    /// or the geo section empty.
    pub async fn evaluate(&self, input: &str) -> Result<Report, ParseError> {
        let cidr = Ipv4::parse_input(input)?;
        let addr = cidr.addr();
        let class = classify(addr);
        log::info!("evaluate({cidr}) class={class}");

        if class.is_multicast() {
            return Ok(Report::Multicast(MulticastReport {
                address: addr,
                group: describe_multicast(addr),
                class,
                glop_asn: glop_asn(addr),
            }));
        }

        let subnet = resolve(cidr);
        let (hostname, geo) = futures::join!(self.hostname(addr), self.geo(addr));

        Ok(Report::Unicast(UnicastReport {
            subnet,
            class,
            hostname,
            geo,
        }))
    }

    async fn hostname(&self, addr: Ipv4Addr) -> Option<String> {
        match self.resolver.reverse_lookup(addr).await {
            Ok(hostname) => Some(hostname),
            Err(e) => {
                log::debug!("{addr:15}: reverse lookup failed: {e}");
                None
            }
        }
    }

    async fn geo(&self, addr: Ipv4Addr) -> Option<GeoInfo> {
        match self.locator.lookup(addr).await {
            Ok(geo) => Some(geo),
            Err(e) => {
                log::warn!("{addr:15}: geo lookup failed: {e}");
                None
            }
        }
    }
}
