//! Value types for the subnet engines.
//!
//! - [`Octets`], [`UsableIp`], [`IpClass`] - IPv4 addresses and masks
//! - [`Segments`], [`Prefix`] - IPv6 addresses, masks and prefix lengths
//! - [`Ipv4Subnet`], [`Ipv6Subnet`], [`SubnetResult`] - calculation results

mod ipv4;
mod ipv6;
mod result;

// Re-export public types
pub use ipv4::{IpClass, Octets, UsableIp, MAX_LENGTH};
pub use ipv6::{expand_shorthand, hex_to_decimal, Prefix, Segments, MAX_PREFIX, SEGMENT_COUNT};
pub use result::{AddressCount, Ipv4Subnet, Ipv6Subnet, SubnetResult};
