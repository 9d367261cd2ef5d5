//! Error and limitation types for the subnet engines.
//!
//! Input validation produces a [`SubnetError`], tagged with an [`ErrorKind`].
//! Known behavioural boundaries of the arithmetic are reported as
//! [`DomainLimitation`]s instead; they never stop a calculation.

use std::fmt;
use thiserror::Error;

/// Broad classification of a [`SubnetError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input could not be read as an address, group or number.
    Parse,
    /// Input was readable but outside the bounds of its family.
    Range,
}

/// Validation failure raised before any arithmetic runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubnetError {
    #[error("expected 4 dotted-decimal octets in '{input}', found {count}")]
    OctetCount { input: String, count: usize },

    #[error("octet '{octet}' is not a decimal number")]
    InvalidOctet { octet: String },

    #[error("octet {octet} is outside 0-255")]
    OctetOutOfRange { octet: String },

    #[error("group '{group}' is not a 1-4 digit hexadecimal value")]
    InvalidHexGroup { group: String },

    #[error("expected 8 groups after expanding '{input}', found {count}")]
    SegmentCount { input: String, count: usize },

    #[error("prefix '{prefix}' is not a number")]
    InvalidPrefix { prefix: String },

    #[error("prefix /{prefix} is outside 0-{max}")]
    PrefixOutOfRange { prefix: String, max: u8 },

    #[error("expected '<address> <mask|prefix>' in '{input}', found {count} fields")]
    FieldCount { input: String, count: usize },
}

impl SubnetError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SubnetError::OctetCount { .. }
            | SubnetError::InvalidOctet { .. }
            | SubnetError::InvalidHexGroup { .. }
            | SubnetError::SegmentCount { .. }
            | SubnetError::InvalidPrefix { .. }
            | SubnetError::FieldCount { .. } => ErrorKind::Parse,
            SubnetError::OctetOutOfRange { .. } | SubnetError::PrefixOutOfRange { .. } => {
                ErrorKind::Range
            }
        }
    }
}

/// A result the engines return unchanged, but that has no well defined
/// meaning for the input that produced it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DomainLimitation {
    /// Mask bits are not a run of ones followed by zeros.
    NonContiguousMask,
    /// /31 or /32 mask, the host count formula yields 0 or -1.
    HostCountUnderflow { prefix: u8 },
    /// Octet-local usable range stepped outside 0-255 in the last octet.
    UsableRangeOverflow,
    /// Legacy IPv6 network keeps the first 48 bits of the address unmasked.
    PartialNetworkMask { prefix: u8 },
}

impl fmt::Display for DomainLimitation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DomainLimitation::NonContiguousMask => {
                write!(f, "mask is not contiguous, broadcast and range are undefined")
            }
            DomainLimitation::HostCountUnderflow { prefix } => {
                write!(f, "/{prefix} leaves no usable hosts, host count is below 1")
            }
            DomainLimitation::UsableRangeOverflow => {
                write!(f, "usable range left the 0-255 octet range without carry")
            }
            DomainLimitation::PartialNetworkMask { prefix } => write!(
                f,
                "/{prefix} is shorter than /48, network keeps unmasked bits in the first 3 groups"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind() {
        let err = SubnetError::InvalidOctet {
            octet: "x".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Parse);
        let err = SubnetError::PrefixOutOfRange {
            prefix: "129".to_string(),
            max: 128,
        };
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.to_string(), "prefix /129 is outside 0-128");
    }

    #[test]
    fn test_limitation_display() {
        let lim = DomainLimitation::HostCountUnderflow { prefix: 32 };
        assert_eq!(
            lim.to_string(),
            "/32 leaves no usable hosts, host count is below 1"
        );
    }
}
