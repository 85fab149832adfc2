//! Runtime configuration.
//!
//! Command-line flags win, then `SUBNET_CALC_*` environment variables
//! (a `.env` file is loaded first), then the defaults below.

use clap::Parser;
use std::time::Duration;

/// Default geo service endpoint, `{address}` is replaced per query.
pub const DEFAULT_GEO_URL: &str = "https://ipinfo.io/{address}/json";

/// Default geo HTTP timeout in seconds.
pub const DEFAULT_GEO_TIMEOUT_SECS: u64 = 5;

/// Default reverse DNS timeout in milliseconds.
pub const DEFAULT_DNS_TIMEOUT_MSEC: u64 = 5000;

/// Log4rs configuration file looked up in the working directory.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

#[derive(Parser, Debug, Clone)]
#[command(version, about = "IPv4 subnet calculator", long_about = None)]
pub struct Config {
    /// Address or CIDR to evaluate once, e.g. 192.168.1.10/24. Omit for the interactive loop.
    pub input: Option<String>,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Disable ANSI colors.
    #[arg(long)]
    pub no_color: bool,

    /// Do not clear the screen between interactive rounds.
    #[arg(long)]
    pub no_clear: bool,

    /// Geo service URL template.
    #[arg(long, env = "SUBNET_CALC_GEO_URL", default_value = DEFAULT_GEO_URL)]
    pub geo_url: String,

    /// Geo service timeout in seconds.
    #[arg(long, env = "SUBNET_CALC_GEO_TIMEOUT", default_value_t = DEFAULT_GEO_TIMEOUT_SECS)]
    pub geo_timeout: u64,

    /// Reverse DNS timeout in milliseconds.
    #[arg(long, env = "SUBNET_CALC_DNS_TIMEOUT_MS", default_value_t = DEFAULT_DNS_TIMEOUT_MSEC)]
    pub dns_timeout: u64,
}

impl Config {
    pub fn geo_timeout(&self) -> Duration {
        Duration::from_secs(self.geo_timeout)
    }

    pub fn dns_timeout(&self) -> Duration {
        Duration::from_millis(self.dns_timeout)
    }
}
