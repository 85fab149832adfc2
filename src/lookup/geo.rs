//! Geolocation / ownership lookup against an ipinfo-style service
//! (`GET https://ipinfo.io/{address}/json`).

use super::GeoLocator;
use crate::error::LookupError;
use crate::models::GeoInfo;
use regex::Regex;
use serde::Deserialize;
use std::net::Ipv4Addr;
use std::sync::OnceLock;
use std::time::Duration;

/// Placeholder replaced by the queried address in the URL template.
pub const ADDRESS_PLACEHOLDER: &str = "{address}";

/// Regex for splitting `org` into ASN and owner, e.g. "AS15169 Google LLC".
static ORG_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_org_regex() -> &'static Regex {
    ORG_REGEX.get_or_init(|| Regex::new(r"^AS(\d+)(?:\s+(.*))?$").expect("Invalid Regex"))
}

/// Serde-compatible response schema, unknown keys are ignored.
#[derive(Deserialize, Debug, Default)]
struct IpInfoResponse {
    org: Option<String>,
    country: Option<String>,
    region: Option<String>,
    city: Option<String>,
    loc: Option<String>,
    bogon: Option<bool>,
}

/// HTTP client for the geo service.
#[derive(Debug, Clone)]
pub struct IpInfoClient {
    client: reqwest::Client,
    url_template: String,
}

impl IpInfoClient {
    pub fn new(url_template: &str, timeout: Duration) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(IpInfoClient {
            client,
            url_template: url_template.to_string(),
        })
    }

    pub fn url_for(&self, addr: Ipv4Addr) -> String {
        self.url_template
            .replace(ADDRESS_PLACEHOLDER, &addr.to_string())
    }
}

impl GeoLocator for IpInfoClient {
    async fn lookup(&self, addr: Ipv4Addr) -> Result<GeoInfo, LookupError> {
        let url = self.url_for(addr);
        log::info!("{addr:15}: Issuing geo query to {url}");

        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        log::debug!("{addr:15}: status={status} body.len()={}", body.len());

        parse_geo_response(status, &body)
    }
}

/// Turn a raw service response into [`GeoInfo`].
///
/// Anything but a 200 with a JSON object body whose known keys are strings
/// is an error.
pub fn parse_geo_response(status: u16, body: &str) -> Result<GeoInfo, LookupError> {
    if status != 200 {
        return Err(LookupError::Status(status));
    }
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| LookupError::Shape(e.to_string()))?;
    if !value.is_object() {
        return Err(LookupError::Shape("expected a JSON object".to_string()));
    }
    let response: IpInfoResponse = serde_path_to_error::deserialize(value).map_err(|e| {
        LookupError::Shape(format!("path={} error={}", e.path(), e.inner()))
    })?;

    if response.bogon == Some(true) {
        log::debug!("geo service reports a bogon address");
    }

    let (asn, owner) = match response.org.as_deref() {
        Some(org) => parse_org(org),
        None => (None, None),
    };
    Ok(GeoInfo {
        asn,
        owner,
        country: non_empty(response.country),
        region: non_empty(response.region),
        city: non_empty(response.city),
        location: non_empty(response.loc),
    })
}

/// Split an `org` value into `(asn, owner)`.
///
/// "AS15169 Google LLC" gives `("15169", "Google LLC")`; values without an
/// `AS<digits>` prefix are taken whole as the owner.
pub fn parse_org(org: &str) -> (Option<String>, Option<String>) {
    let org = org.trim();
    match get_org_regex().captures(org) {
        Some(caps) => (
            caps.get(1).map(|m| m.as_str().to_string()),
            caps.get(2)
                .map(|m| m.as_str().trim().to_string())
                .filter(|s| !s.is_empty()),
        ),
        None => (None, non_empty(Some(org.to_string()))),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
