//! IPv6 engine.
//!
//! Pipeline: shorthand expansion, hex groups to integers, prefix to mask,
//! network AND, range slicing and an exact address count.

use crate::config::{CalcOptions, Ipv6NetworkMode};
use crate::error::{DomainLimitation, SubnetError};
use crate::models::{AddressCount, Ipv6Subnet, Prefix, Segments};
use num_bigint::BigUint;

pub use crate::models::{expand_shorthand, hex_to_decimal};

/// Groups copied verbatim by [`legacy_partial_and`].
pub const LEGACY_COPIED_GROUPS: usize = 3;

/// `prefix` ones followed by `128 - prefix` zeros.
pub fn prefix_to_mask(prefix: Prefix) -> Segments {
    let bits = u128::MAX
        .checked_shl(u32::from(prefix.host_bits()))
        .unwrap_or(0);
    Segments::from(bits)
}

/// Network with the first three groups taken from `address` unmasked and
/// the AND applied to the remaining five.
///
/// Equal to [`full_mask_and`] for prefixes of 48 and longer.
pub fn legacy_partial_and(address: &Segments, mask: &Segments) -> Segments {
    let mut network = address.0;
    for (slot, m) in network
        .iter_mut()
        .zip(mask.0.iter())
        .skip(LEGACY_COPIED_GROUPS)
    {
        *slot &= m;
    }
    Segments(network)
}

/// Network with the AND applied to all 128 bits.
pub fn full_mask_and(address: &Segments, mask: &Segments) -> Segments {
    Segments::from(u128::from(*address) & u128::from(*mask))
}

/// First and last address of the block: the first `prefix` bits of
/// `network`, followed by all zeros or all ones.
pub fn address_range(network: &Segments, prefix: Prefix) -> (Segments, Segments) {
    let mask = u128::from(prefix_to_mask(prefix));
    let start = u128::from(*network) & mask;
    let end = start | !mask;
    (Segments::from(start), Segments::from(end))
}

/// `2^(128 - prefix)`, exact.
pub fn total_assignable(prefix: Prefix) -> BigUint {
    BigUint::from(1u8) << prefix.host_bits()
}

/// Run the full IPv6 pipeline on validated input.
pub fn calculate(address: &Segments, prefix: Prefix, options: &CalcOptions) -> Ipv6Subnet {
    log::debug!("ipv6 calculate({address}, {prefix}) mode={}", options.ipv6_network);

    let mask = prefix_to_mask(prefix);
    let network = match options.ipv6_network {
        Ipv6NetworkMode::LegacyPartialAnd => legacy_partial_and(address, &mask),
        Ipv6NetworkMode::FullMask => full_mask_and(address, &mask),
    };
    let (range_start, range_end) = address_range(&network, prefix);

    let mut limitations = Vec::new();
    if options.ipv6_network == Ipv6NetworkMode::LegacyPartialAnd
        && network != full_mask_and(address, &mask)
    {
        limitations.push(DomainLimitation::PartialNetworkMask {
            prefix: prefix.length(),
        });
    }
    log::trace!("ipv6 mask={mask} network={network} limitations={limitations:?}");

    Ipv6Subnet {
        address: *address,
        network,
        range_start,
        range_end,
        total_hosts: AddressCount(total_assignable(prefix)),
        prefix,
        mask,
        limitations,
    }
}

/// Validate colon-hex address and prefix strings, then calculate.
pub fn calculate_str(
    address: &str,
    prefix: &str,
    options: &CalcOptions,
) -> Result<Ipv6Subnet, SubnetError> {
    let address: Segments = address.parse()?;
    let prefix: Prefix = prefix.parse()?;
    Ok(calculate(&address, prefix, options))
}
