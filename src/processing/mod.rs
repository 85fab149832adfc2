//! Address processing logic.
//!
//! This module contains the pure calculator logic:
//! - [`binary`] - dotted-octet binary rendering
//! - [`class`] - classful address classification
//! - [`multicast`] - well-known multicast group registry
//! - [`subnet`] - subnet boundaries and usable hosts

mod binary;
mod class;
mod multicast;
mod subnet;

// Re-export public functions
pub use binary::{parse_binary, to_binary};
pub use class::{classify, AddressClass};
pub use multicast::{describe as describe_multicast, glop_asn, known_group_count, UNKNOWN_GROUP};
pub use subnet::{is_private, resolve, usable_host_count};
