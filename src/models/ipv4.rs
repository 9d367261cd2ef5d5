//! IPv4 octet sequences.
//!
//! Provides [`Octets`] for addresses and masks, [`UsableIp`] for the
//! octet-local usable range, and [`IpClass`] for classful detection.

use crate::error::SubnetError;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::OnceLock;

/// Number of bits in an IPv4 address.
pub const MAX_LENGTH: u8 = 32;

static OCTET_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_octet_regex() -> &'static Regex {
    OCTET_REGEX.get_or_init(|| Regex::new(r"^[0-9]+$").expect("Invalid Regex"))
}

/// Four octets, used for both addresses and masks.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash, Default)]
pub struct Octets(pub [u8; 4]);

impl Octets {
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Octets {
        Octets([a, b, c, d])
    }

    /// Each octet as an 8 character, zero padded binary string.
    ///
    /// # Examples
    /// ```
    /// use subnet_calc::models::Octets;
    /// let mask = Octets::new(255, 255, 255, 0);
    /// assert_eq!(mask.to_binary()[3], "00000000");
    /// ```
    pub fn to_binary(&self) -> [String; 4] {
        self.0.map(|octet| format!("{octet:08b}"))
    }

    /// Number of set bits across all four octets.
    pub fn count_ones(&self) -> u32 {
        self.0.iter().map(|octet| octet.count_ones()).sum()
    }

    /// `255 - octet` for every position.
    pub fn invert(&self) -> Octets {
        Octets(self.0.map(|octet| 255 - octet))
    }

    /// True when the set bits form a single leading run.
    pub fn is_contiguous(&self) -> bool {
        let bits = u32::from(*self);
        bits.leading_ones() + bits.trailing_zeros() == u32::from(MAX_LENGTH)
    }
}

impl FromStr for Octets {
    type Err = SubnetError;

    /// Validate a dotted-decimal string into four octets.
    fn from_str(input: &str) -> Result<Octets, SubnetError> {
        let input = input.trim();
        let parts: Vec<&str> = input.split('.').collect();
        if parts.len() != 4 {
            return Err(SubnetError::OctetCount {
                input: input.to_string(),
                count: parts.len(),
            });
        }

        let mut octets = [0u8; 4];
        for (slot, part) in octets.iter_mut().zip(parts) {
            if !get_octet_regex().is_match(part) {
                return Err(SubnetError::InvalidOctet {
                    octet: part.to_string(),
                });
            }
            *slot = part.parse().map_err(|_| SubnetError::OctetOutOfRange {
                octet: part.to_string(),
            })?;
        }
        Ok(Octets(octets))
    }
}

impl fmt::Display for Octets {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl Serialize for Octets {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<Octets> for u32 {
    fn from(octets: Octets) -> u32 {
        u32::from_be_bytes(octets.0)
    }
}

impl From<u32> for Octets {
    fn from(bits: u32) -> Octets {
        Octets(bits.to_be_bytes())
    }
}

impl From<Ipv4Addr> for Octets {
    fn from(addr: Ipv4Addr) -> Octets {
        Octets(addr.octets())
    }
}

impl From<Octets> for Ipv4Addr {
    fn from(octets: Octets) -> Ipv4Addr {
        Ipv4Addr::from(octets.0)
    }
}

/// Address produced by the usable range step.
///
/// Slots are signed so a last octet of `256` or `-1` survives unchanged.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct UsableIp(pub [i16; 4]);

impl UsableIp {
    /// True when every slot is a real octet.
    pub fn is_valid(&self) -> bool {
        self.0.iter().all(|slot| (0..=255).contains(slot))
    }
}

impl From<Octets> for UsableIp {
    fn from(octets: Octets) -> UsableIp {
        UsableIp(octets.0.map(i16::from))
    }
}

impl fmt::Display for UsableIp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl Serialize for UsableIp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Classful network of an address, from its first octet.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum IpClass {
    A,
    B,
    C,
    D,
    E,
    Invalid,
}

impl IpClass {
    pub fn of(address: &Octets) -> IpClass {
        match address.0[0] {
            1..=126 => IpClass::A,
            128..=191 => IpClass::B,
            192..=223 => IpClass::C,
            224..=239 => IpClass::D,
            240..=255 => IpClass::E,
            _ => IpClass::Invalid,
        }
    }
}

impl fmt::Display for IpClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            IpClass::A => "Class A",
            IpClass::B => "Class B",
            IpClass::C => "Class C",
            IpClass::D => "Class D (Multicast)",
            IpClass::E => "Class E (Experimental)",
            IpClass::Invalid => "Invalid IP Address",
        };
        f.write_str(name)
    }
}
