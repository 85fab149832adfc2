//! IPv4 subnet calculator.
//!
//! [`Calculator::evaluate`] turns one line of input into a [`Report`]:
//! multicast addresses get their group description, everything else gets
//! subnet boundaries plus best-effort reverse DNS and geo enrichment.

pub mod calculator;
pub mod config;
pub mod error;
pub mod lookup;
pub mod models;
pub mod output;
pub mod processing;
pub mod session;

pub use calculator::Calculator;
pub use error::{LookupError, ParseError};
pub use models::Report;
