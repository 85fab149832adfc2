//! Error types for the calculator.
//!
//! [`ParseError`] is returned to the caller and aborts one evaluation.
//! [`LookupError`] never reaches the caller of [`crate::Calculator::evaluate`],
//! the orchestrator collapses it to a sentinel value.

use std::fmt;

/// Malformed address / CIDR input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    InvalidAddress(String),
    InvalidPrefix(String),
    InvalidNetmask(String),
    InvalidBinary(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "No address given"),
            ParseError::InvalidAddress(s) => {
                write!(f, "'{s}' does not appear to be an IPv4 address")
            }
            ParseError::InvalidPrefix(s) => {
                write!(f, "'{s}' is not a valid prefix length (0-32)")
            }
            ParseError::InvalidNetmask(s) => write!(f, "'{s}' is not a valid netmask"),
            ParseError::InvalidBinary(s) => {
                write!(f, "'{s}' is not a dotted 8-bit binary address")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Failure of a best-effort enrichment lookup (reverse DNS, geo service).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    Timeout,
    NotFound,
    Transport(String),
    Status(u16),
    Shape(String),
    Resolver(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Timeout => write!(f, "Lookup timed out"),
            LookupError::NotFound => write!(f, "No record found"),
            LookupError::Transport(msg) => write!(f, "Transport error: {msg}"),
            LookupError::Status(code) => write!(f, "Unexpected HTTP status {code}"),
            LookupError::Shape(msg) => write!(f, "Unexpected response shape: {msg}"),
            LookupError::Resolver(msg) => write!(f, "Resolver error: {msg}"),
        }
    }
}

impl std::error::Error for LookupError {}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LookupError::Timeout
        } else {
            LookupError::Transport(err.to_string())
        }
    }
}
