//! Subnet calculation logic.
//!
//! - [`ipv4`] - IPv4 engine (address + dotted-decimal mask)
//! - [`ipv6`] - IPv6 engine (address + prefix length)
//! - [`batch`] - many independent requests evaluated concurrently

pub mod batch;
pub mod ipv4;
pub mod ipv6;

use crate::config::CalcOptions;
use crate::error::SubnetError;
use crate::models::SubnetResult;

// Re-export public functions
pub use batch::{parse_batch, read_batch_file, run_batch, BatchOutcome, BatchRequest};

/// Address family of a request, picked from the address text.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    pub fn detect(address: &str) -> Family {
        if address.contains(':') {
            Family::V6
        } else {
            Family::V4
        }
    }
}

/// Calculate a subnet for either family.
///
/// `mask_or_prefix` is a dotted-decimal mask for IPv4 and a prefix length
/// (`64` or `/64`) for IPv6.
pub fn calculate(
    address: &str,
    mask_or_prefix: &str,
    options: &CalcOptions,
) -> Result<SubnetResult, SubnetError> {
    match Family::detect(address) {
        Family::V4 => ipv4::calculate_str(address, mask_or_prefix, options).map(SubnetResult::from),
        Family::V6 => ipv6::calculate_str(address, mask_or_prefix, options).map(SubnetResult::from),
    }
}
