//! IPv6 segment sequences and prefix lengths.

use crate::error::SubnetError;
use itertools::Itertools;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Number of bits in an IPv6 address.
pub const MAX_PREFIX: u8 = 128;
/// Number of 16-bit groups in a full IPv6 address.
pub const SEGMENT_COUNT: usize = 8;

static HEX_GROUP_REGEX: OnceLock<Regex> = OnceLock::new();
static TYPED_GROUP_REGEX: OnceLock<Regex> = OnceLock::new();
static DIGITS_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_hex_group_regex() -> &'static Regex {
    HEX_GROUP_REGEX.get_or_init(|| Regex::new(r"^[0-9a-fA-F]{4}$").expect("Invalid Regex"))
}

fn get_typed_group_regex() -> &'static Regex {
    TYPED_GROUP_REGEX.get_or_init(|| Regex::new(r"^[0-9a-fA-F]{1,4}$").expect("Invalid Regex"))
}

fn get_digits_regex() -> &'static Regex {
    DIGITS_REGEX.get_or_init(|| Regex::new(r"^[0-9]+$").expect("Invalid Regex"))
}

/// Expand `::` shorthand into 4-digit groups.
///
/// Empty positions produced by splitting on `:` are special cased: the first
/// one receives all the missing zero groups, any later one receives none.
/// Explicit groups are left padded with zeros to 4 characters. Nothing is
/// validated here, so the result may hold more or fewer than 8 groups.
///
/// # Examples
/// ```
/// use subnet_calc::models::expand_shorthand;
/// assert_eq!(
///     expand_shorthand("2001:db8::1").join(":"),
///     "2001:0db8:0000:0000:0000:0000:0000:0001"
/// );
/// ```
pub fn expand_shorthand(shortened: &str) -> Vec<String> {
    let groups: Vec<&str> = shortened.split(':').collect();
    let explicit = groups.iter().filter(|group| !group.is_empty()).count();
    let mut missing = SEGMENT_COUNT.saturating_sub(explicit);

    let mut expanded = Vec::with_capacity(SEGMENT_COUNT);
    for group in groups {
        if group.is_empty() {
            expanded.resize(expanded.len() + missing, "0000".to_string());
            missing = 0;
        } else {
            expanded.push(format!("{group:0>4}"));
        }
    }
    expanded
}

/// Convert 8 expanded hex groups into segments.
pub fn hex_to_decimal(groups: &[String]) -> Result<Segments, SubnetError> {
    if groups.len() != SEGMENT_COUNT {
        return Err(SubnetError::SegmentCount {
            input: groups.join(":"),
            count: groups.len(),
        });
    }

    let mut segments = [0u16; SEGMENT_COUNT];
    for (slot, group) in segments.iter_mut().zip(groups) {
        let invalid = || SubnetError::InvalidHexGroup {
            group: group.clone(),
        };
        if !get_hex_group_regex().is_match(group) {
            return Err(invalid());
        }
        *slot = u16::from_str_radix(group, 16).map_err(|_| invalid())?;
    }
    Ok(Segments(segments))
}

/// Eight 16-bit groups of an IPv6 address or mask.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash, Default)]
pub struct Segments(pub [u16; SEGMENT_COUNT]);

impl Segments {
    /// Each segment as a 16 character, zero padded binary string.
    pub fn to_binary(&self) -> [String; SEGMENT_COUNT] {
        self.0.map(|segment| format!("{segment:016b}"))
    }

    /// Each segment as a 4 digit lowercase hex group.
    pub fn to_hex(&self) -> [String; SEGMENT_COUNT] {
        self.0.map(|segment| format!("{segment:04x}"))
    }
}

impl FromStr for Segments {
    type Err = SubnetError;

    /// Expand and validate a colon-hex address.
    fn from_str(input: &str) -> Result<Segments, SubnetError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SubnetError::SegmentCount {
                input: input.to_string(),
                count: 0,
            });
        }
        let groups = expand_shorthand(input);
        // Report bad groups as typed, before expansion padded them.
        if groups.len() == SEGMENT_COUNT {
            let mut typed = input.split(':').filter(|group| !group.is_empty());
            if let Some(group) = typed.find(|group| !get_typed_group_regex().is_match(group)) {
                return Err(SubnetError::InvalidHexGroup {
                    group: group.to_string(),
                });
            }
        }
        hex_to_decimal(&groups).map_err(|e| match e {
            SubnetError::SegmentCount { count, .. } => SubnetError::SegmentCount {
                input: input.to_string(),
                count,
            },
            other => other,
        })
    }
}

/// Always lowercase, whatever case the address was typed in.
impl fmt::Display for Segments {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex().iter().join(":"))
    }
}

impl Serialize for Segments {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<Segments> for u128 {
    fn from(segments: Segments) -> u128 {
        segments
            .0
            .iter()
            .fold(0u128, |bits, segment| (bits << 16) | u128::from(*segment))
    }
}

impl From<u128> for Segments {
    fn from(bits: u128) -> Segments {
        let mut segments = [0u16; SEGMENT_COUNT];
        for (i, slot) in segments.iter_mut().enumerate() {
            let shift = 16 * (SEGMENT_COUNT - 1 - i);
            *slot = (bits >> shift) as u16;
        }
        Segments(segments)
    }
}

/// IPv6 prefix length, 0-128.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Prefix(u8);

impl Prefix {
    pub fn new(len: u8) -> Result<Prefix, SubnetError> {
        if len > MAX_PREFIX {
            return Err(SubnetError::PrefixOutOfRange {
                prefix: len.to_string(),
                max: MAX_PREFIX,
            });
        }
        Ok(Prefix(len))
    }

    pub fn length(&self) -> u8 {
        self.0
    }

    /// Bits left for hosts, `128 - prefix`.
    pub fn host_bits(&self) -> u8 {
        MAX_PREFIX - self.0
    }
}

impl FromStr for Prefix {
    type Err = SubnetError;

    /// Accepts `64` or `/64`.
    fn from_str(input: &str) -> Result<Prefix, SubnetError> {
        let input = input.trim();
        let digits = input.strip_prefix('/').unwrap_or(input);
        if !get_digits_regex().is_match(digits) {
            return Err(SubnetError::InvalidPrefix {
                prefix: input.to_string(),
            });
        }
        match digits.parse::<u8>() {
            Ok(len) => Prefix::new(len),
            Err(_) => Err(SubnetError::PrefixOutOfRange {
                prefix: digits.to_string(),
                max: MAX_PREFIX,
            }),
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "/{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_expand_shorthand() {
        assert_eq!(
            expand_shorthand("2001:db8::1"),
            vec!["2001", "0db8", "0000", "0000", "0000", "0000", "0000", "0001"]
        );
        assert_eq!(expand_shorthand("::1").join(":"), "0000:0000:0000:0000:0000:0000:0000:0001");
        assert_eq!(expand_shorthand("fe80::").join(":"), "fe80:0000:0000:0000:0000:0000:0000:0000");
        assert_eq!(expand_shorthand("::").len(), 8);
    }

    #[test]
    fn test_expand_shorthand_idempotent() {
        let full = "2001:0db8:85a3:0000:0000:8a2e:0370:7334";
        let once = expand_shorthand(full).join(":");
        assert_eq!(once, full);
        assert_eq!(expand_shorthand(&once).join(":"), full);
    }

    #[test]
    fn test_expand_shorthand_double_gap() {
        // Only the first gap is filled, the output is still 8 groups.
        assert_eq!(
            expand_shorthand("1::2::3").join(":"),
            "0001:0000:0000:0000:0000:0000:0002:0003"
        );
    }

    #[test]
    fn test_parse_segments() {
        let addr: Segments = "2001:db8::1".parse().unwrap();
        assert_eq!(addr.0, [0x2001, 0x0db8, 0, 0, 0, 0, 0, 1]);
        assert_eq!(addr.to_string(), "2001:0db8:0000:0000:0000:0000:0000:0001");
    }

    #[test]
    fn test_display_is_lowercase() {
        let upper: Segments = "2001:DB8:ABCD::A".parse().unwrap();
        let lower: Segments = "2001:db8:abcd::a".parse().unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.to_string(), "2001:0db8:abcd:0000:0000:0000:0000:000a");
    }

    #[test]
    fn test_parse_segments_errors() {
        let err = "2001:db8:1".parse::<Segments>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(
            err,
            SubnetError::SegmentCount {
                input: "2001:db8:1".to_string(),
                count: 3
            }
        );
        let err = "2001:zz8::1".parse::<Segments>().unwrap_err();
        assert_eq!(
            err,
            SubnetError::InvalidHexGroup {
                group: "zz8".to_string()
            }
        );
        let err = "2001:00g::1".parse::<Segments>().unwrap_err();
        assert_eq!(
            err,
            SubnetError::InvalidHexGroup {
                group: "00g".to_string()
            }
        );
        let err = "12345::1".parse::<Segments>().unwrap_err();
        assert_eq!(
            err,
            SubnetError::InvalidHexGroup {
                group: "12345".to_string()
            }
        );
        assert!("".parse::<Segments>().is_err());
        assert!("1:2:3:4:5:6:7:8:9".parse::<Segments>().is_err());
    }

    #[test]
    fn test_hex_round_trip() {
        for s in ["0000:0000:0000:0000:0000:0000:0000:0000", "ffff:0001:abcd:0000:1234:5678:9abc:def0"] {
            assert_eq!(s.parse::<Segments>().unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_u128_conversion() {
        let addr: Segments = "2001:db8::1".parse().unwrap();
        let bits = u128::from(addr);
        assert_eq!(bits, 0x2001_0db8_0000_0000_0000_0000_0000_0001);
        assert_eq!(Segments::from(bits), addr);
        assert_eq!(addr.to_binary()[1], "0000110110111000");
    }

    #[test]
    fn test_parse_prefix() {
        assert_eq!("64".parse::<Prefix>().unwrap().length(), 64);
        assert_eq!("/64".parse::<Prefix>().unwrap().length(), 64);
        assert_eq!("/0".parse::<Prefix>().unwrap().host_bits(), 128);
        assert_eq!("128".parse::<Prefix>().unwrap().to_string(), "/128");

        assert_eq!("/129".parse::<Prefix>().unwrap_err().kind(), ErrorKind::Range);
        assert_eq!("300".parse::<Prefix>().unwrap_err().kind(), ErrorKind::Range);
        assert_eq!("/abc".parse::<Prefix>().unwrap_err().kind(), ErrorKind::Parse);
        assert_eq!("-1".parse::<Prefix>().unwrap_err().kind(), ErrorKind::Parse);
        assert!(Prefix::new(129).is_err());
    }
}
