//! Read-only subnet results, serialized with the JSON key names callers expect.

use super::{IpClass, Octets, Prefix, Segments, UsableIp};
use crate::error::DomainLimitation;
use itertools::Itertools;
use num_bigint::BigUint;
use serde::{Serialize, Serializer};
use std::fmt;

/// Exact address count, displayed with comma grouping.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct AddressCount(pub BigUint);

impl fmt::Display for AddressCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let digits: Vec<char> = self.0.to_string().chars().collect();
        let grouped = digits
            .rchunks(3)
            .rev()
            .map(|chunk| chunk.iter().collect::<String>())
            .join(",");
        f.write_str(&grouped)
    }
}

impl Serialize for AddressCount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Derived values for one IPv4 address and mask.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Ipv4Subnet {
    #[serde(rename = "Network Address")]
    pub network: Octets,
    #[serde(rename = "Broadcast Address")]
    pub broadcast: Octets,
    #[serde(rename = "First Usable IP")]
    pub first_usable: UsableIp,
    #[serde(rename = "Last Usable IP")]
    pub last_usable: UsableIp,
    #[serde(rename = "Total Hosts")]
    pub total_hosts: i64,
    #[serde(rename = "CIDR Notation")]
    pub cidr: String,
    #[serde(skip)]
    pub address: Octets,
    #[serde(skip)]
    pub mask: Octets,
    #[serde(skip)]
    pub class: IpClass,
    #[serde(skip)]
    pub limitations: Vec<DomainLimitation>,
}

/// Derived values for one IPv6 address and prefix.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Ipv6Subnet {
    #[serde(rename = "IP Address")]
    pub address: Segments,
    #[serde(rename = "Network")]
    pub network: Segments,
    #[serde(rename = "Address Range Start")]
    pub range_start: Segments,
    #[serde(rename = "Address Range End")]
    pub range_end: Segments,
    #[serde(rename = "Total Hosts")]
    pub total_hosts: AddressCount,
    #[serde(skip)]
    pub prefix: Prefix,
    #[serde(skip)]
    pub mask: Segments,
    #[serde(skip)]
    pub limitations: Vec<DomainLimitation>,
}

/// Result of either engine.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum SubnetResult {
    V4(Ipv4Subnet),
    V6(Ipv6Subnet),
}

impl SubnetResult {
    pub fn limitations(&self) -> &[DomainLimitation] {
        match self {
            SubnetResult::V4(subnet) => &subnet.limitations,
            SubnetResult::V6(subnet) => &subnet.limitations,
        }
    }
}

impl From<Ipv4Subnet> for SubnetResult {
    fn from(subnet: Ipv4Subnet) -> Self {
        SubnetResult::V4(subnet)
    }
}

impl From<Ipv6Subnet> for SubnetResult {
    fn from(subnet: Ipv6Subnet) -> Self {
        SubnetResult::V6(subnet)
    }
}
