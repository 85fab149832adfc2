//! Integration tests for subnet-calc
//!
//! These tests drive the calculator and the interactive session end to end
//! with stand-in lookup collaborators.

use std::io::Cursor;
use std::net::Ipv4Addr;
use std::time::Duration;
use subnet_calc::lookup::{GeoLocator, HostResolver, IpInfoClient};
use subnet_calc::models::{GeoInfo, Report};
use subnet_calc::session::{run_interactive, run_once, SessionOptions};
use subnet_calc::{Calculator, LookupError, ParseError};

/// Simulates a network where every lookup fails.
struct OfflineResolver;

impl HostResolver for OfflineResolver {
    async fn reverse_lookup(&self, _addr: Ipv4Addr) -> Result<String, LookupError> {
        Err(LookupError::Transport("network unreachable".to_string()))
    }
}

struct OfflineLocator;

impl GeoLocator for OfflineLocator {
    async fn lookup(&self, _addr: Ipv4Addr) -> Result<GeoInfo, LookupError> {
        Err(LookupError::Timeout)
    }
}

struct FixedResolver(&'static str);

impl HostResolver for FixedResolver {
    async fn reverse_lookup(&self, _addr: Ipv4Addr) -> Result<String, LookupError> {
        Ok(self.0.to_string())
    }
}

struct FixedLocator(GeoInfo);

impl GeoLocator for FixedLocator {
    async fn lookup(&self, _addr: Ipv4Addr) -> Result<GeoInfo, LookupError> {
        Ok(self.0.clone())
    }
}

fn offline() -> Calculator<OfflineResolver, OfflineLocator> {
    Calculator::new(OfflineResolver, OfflineLocator)
}

fn field<'a>(fields: &'a [(&'static str, String)], label: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, v)| v.as_str())
}

#[tokio::test]
async fn test_multicast_report() {
    let report = offline().evaluate("224.0.0.5/32").await.unwrap();
    assert!(matches!(report, Report::Multicast(_)));
    assert_eq!(
        report.fields(),
        vec![
            ("IP Address", "224.0.0.5".to_string()),
            ("Multicast Group", "OSPF routers".to_string()),
            ("Class", "D (Multicast)".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_multicast_outside_control_block_is_generic() {
    let report = offline().evaluate("224.1.2.3").await.unwrap();
    let fields = report.fields();
    assert_eq!(
        field(&fields, "Multicast Group"),
        Some("Multicast address (unassigned or unknown group)")
    );
}

#[tokio::test]
async fn test_private_24_report() {
    let report = offline().evaluate("192.168.1.10/24").await.unwrap();
    let fields = report.fields();
    assert_eq!(
        field(&fields, "Network Address"),
        Some("192.168.1.0  (Binary: 11000000.10101000.00000001.00000000)")
    );
    assert_eq!(
        field(&fields, "First Usable IP"),
        Some("192.168.1.1  (Binary: 11000000.10101000.00000001.00000001)")
    );
    assert_eq!(
        field(&fields, "Last Usable IP"),
        Some("192.168.1.254  (Binary: 11000000.10101000.00000001.11111110)")
    );
    assert_eq!(
        field(&fields, "Broadcast Address"),
        Some("192.168.1.255  (Binary: 11000000.10101000.00000001.11111111)")
    );
    assert_eq!(
        field(&fields, "Subnet Mask"),
        Some("255.255.255.0  (Binary: 11111111.11111111.11111111.00000000)")
    );
    assert_eq!(field(&fields, "Wildcard Mask"), Some("0.0.0.255"));
    assert_eq!(field(&fields, "Total Usable Hosts"), Some("254"));
    assert_eq!(field(&fields, "Class"), Some("C"));
    assert_eq!(field(&fields, "Private/Public"), Some("Private"));
}

#[tokio::test]
async fn test_lookup_failures_degrade_to_sentinels() {
    let report = offline().evaluate("8.8.8.8/32").await.unwrap();
    let fields = report.fields();
    assert_eq!(field(&fields, "Total Usable Hosts"), Some("0"));
    assert_eq!(field(&fields, "First Usable IP"), Some("N/A"));
    assert_eq!(field(&fields, "Last Usable IP"), Some("N/A"));
    assert_eq!(field(&fields, "Private/Public"), Some("Public"));
    assert_eq!(field(&fields, "Hostname"), Some("Not found"));
    assert_eq!(field(&fields, "Asn"), None);
    assert_eq!(field(&fields, "Location"), None);
    assert_eq!(fields.last().map(|(l, _)| *l), Some("Hostname"));
}

#[tokio::test]
async fn test_enriched_report() {
    let geo = GeoInfo {
        asn: Some("15169".to_string()),
        owner: Some("Google LLC".to_string()),
        country: Some("US".to_string()),
        location: Some("37.4056,-122.0775".to_string()),
        ..Default::default()
    };
    let calc = Calculator::new(FixedResolver("dns.google"), FixedLocator(geo));
    let report = calc.evaluate("8.8.8.8").await.unwrap();
    let fields = report.fields();
    assert_eq!(field(&fields, "Hostname"), Some("dns.google"));
    assert_eq!(field(&fields, "Asn"), Some("15169"));
    assert_eq!(field(&fields, "Owner"), Some("Google LLC"));
    assert_eq!(field(&fields, "Region"), Some("N/A"));
    assert_eq!(field(&fields, "City"), Some("N/A"));
    assert_eq!(field(&fields, "Location"), Some("37.4056,-122.0775"));
}

#[tokio::test]
async fn test_unreachable_geo_service_does_not_fail_evaluation() {
    let locator =
        IpInfoClient::new("http://127.0.0.1:9/{address}/json", Duration::from_secs(2)).unwrap();
    let calc = Calculator::new(OfflineResolver, locator);
    match calc.evaluate("1.1.1.1").await.unwrap() {
        Report::Unicast(u) => {
            assert_eq!(u.geo, None);
            assert_eq!(u.hostname, None);
        }
        other => panic!("expected unicast report, got {other:?}"),
    }
}

#[tokio::test]
async fn test_parse_errors() {
    let calc = offline();
    assert_eq!(calc.evaluate("").await, Err(ParseError::Empty));
    assert!(matches!(
        calc.evaluate("not-an-ip").await,
        Err(ParseError::InvalidAddress(_))
    ));
    assert!(matches!(
        calc.evaluate("10.0.0.1/40").await,
        Err(ParseError::InvalidPrefix(_))
    ));
}

#[tokio::test]
async fn test_run_once_reports_parse_error_line() {
    let mut out = Vec::new();
    let ok = run_once(&offline(), "10.0.0.1/abc", &mut out, &SessionOptions::default())
        .await
        .unwrap();
    assert!(!ok);
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(text.contains("Error: 'abc' is not a valid prefix length (0-32)"));
}

#[tokio::test]
async fn test_run_once_json() {
    let mut out = Vec::new();
    let options = SessionOptions {
        json: true,
        ..Default::default()
    };
    assert!(run_once(&offline(), "172.16.4.1/12", &mut out, &options)
        .await
        .unwrap());
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["kind"], "unicast");
    assert_eq!(value["subnet"]["network_address"], "172.16.0.0");
    assert_eq!(value["subnet"]["broadcast_address"], "172.31.255.255");
    assert_eq!(value["subnet"]["is_private"], true);
}

#[tokio::test]
async fn test_interactive_session_repeats_until_declined() {
    let input = Cursor::new("224.0.0.251\ny\nbogus/8\nY\n10.0.0.1/30\nn\n");
    let mut out = Vec::new();
    let rounds = run_interactive(&offline(), input, &mut out, &SessionOptions::default())
        .await
        .unwrap();
    assert_eq!(rounds, 3);

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("=== Subnet Calculator ===").count(), 3);
    assert!(text.contains("mDNS (Multicast DNS)"));
    assert!(text.contains("Error: 'bogus' does not appear to be an IPv4 address"));
    assert!(text.contains("Total Usable Hosts:"));
    assert!(text.contains("Goodbye!"));
}

#[tokio::test]
async fn test_interactive_session_ends_on_eof() {
    let input = Cursor::new("10.1.1.1/24\n");
    let mut out = Vec::new();
    let rounds = run_interactive(&offline(), input, &mut out, &SessionOptions::default())
        .await
        .unwrap();
    assert_eq!(rounds, 1);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Goodbye!"));
}
