//! IPv4 engine.
//!
//! Pipeline: network AND, mask inversion + OR for broadcast, usable range
//! adjustment, host count and CIDR from the mask population count.

use crate::config::{CalcOptions, UsableRangeMode};
use crate::error::{DomainLimitation, SubnetError};
use crate::models::{IpClass, Ipv4Subnet, Octets, UsableIp, MAX_LENGTH};

/// Per-octet AND of address and mask.
pub fn network_address(address: &Octets, mask: &Octets) -> Octets {
    let mut network = [0u8; 4];
    for (slot, (a, m)) in network.iter_mut().zip(address.0.iter().zip(mask.0.iter())) {
        *slot = a & m;
    }
    Octets(network)
}

/// `255 - octet` for each mask octet.
pub fn invert_mask(mask: &Octets) -> Octets {
    mask.invert()
}

/// Network OR inverted mask.
///
/// Only meaningful for contiguous masks, any other mask still produces a value.
pub fn broadcast_address(network: &Octets, mask: &Octets) -> Octets {
    let inverted = invert_mask(mask);
    let mut broadcast = [0u8; 4];
    for (slot, (n, i)) in broadcast.iter_mut().zip(network.0.iter().zip(inverted.0.iter())) {
        *slot = n | i;
    }
    Octets(broadcast)
}

/// First and last usable address.
///
/// [`UsableRangeMode::OctetLocal`] changes only the last octet, so `x.x.x.255`
/// becomes `x.x.x.256` and `x.x.x.0` becomes `x.x.x.-1`.
/// [`UsableRangeMode::Carry`] works on the full 32-bit value and wraps at
/// both ends of the address space.
pub fn usable_range(
    network: &Octets,
    broadcast: &Octets,
    mode: UsableRangeMode,
) -> (UsableIp, UsableIp) {
    match mode {
        UsableRangeMode::OctetLocal => {
            let mut first = UsableIp::from(*network);
            let mut last = UsableIp::from(*broadcast);
            first.0[3] += 1;
            last.0[3] -= 1;
            (first, last)
        }
        UsableRangeMode::Carry => {
            let first = Octets::from(u32::from(*network).wrapping_add(1));
            let last = Octets::from(u32::from(*broadcast).wrapping_sub(1));
            (first.into(), last.into())
        }
    }
}

/// `2^(32 - ones) - 2`, so /31 gives 0 and /32 gives -1.
pub fn total_hosts(mask: &Octets) -> i64 {
    let host_bits = u32::from(MAX_LENGTH) - mask.count_ones();
    (1i64 << host_bits) - 2
}

/// Mask population count as `/n`.
pub fn cidr_notation(mask: &Octets) -> String {
    format!("/{}", mask.count_ones())
}

pub fn to_dotted_decimal(octets: &Octets) -> String {
    octets.to_string()
}

/// Run the full IPv4 pipeline on validated input.
pub fn calculate(address: &Octets, mask: &Octets, options: &CalcOptions) -> Ipv4Subnet {
    log::debug!("ipv4 calculate({address}, {mask}) mode={}", options.usable_range);

    let network = network_address(address, mask);
    let broadcast = broadcast_address(&network, mask);
    let (first_usable, last_usable) = usable_range(&network, &broadcast, options.usable_range);
    let total_hosts = total_hosts(mask);
    let prefix = mask.count_ones();

    let mut limitations = Vec::new();
    if !mask.is_contiguous() {
        limitations.push(DomainLimitation::NonContiguousMask);
    }
    if prefix >= u32::from(MAX_LENGTH) - 1 {
        limitations.push(DomainLimitation::HostCountUnderflow {
            prefix: prefix as u8,
        });
    }
    if !first_usable.is_valid() || !last_usable.is_valid() {
        limitations.push(DomainLimitation::UsableRangeOverflow);
    }
    log::trace!("ipv4 network={network} broadcast={broadcast} limitations={limitations:?}");

    Ipv4Subnet {
        network,
        broadcast,
        first_usable,
        last_usable,
        total_hosts,
        cidr: cidr_notation(mask),
        address: *address,
        mask: *mask,
        class: IpClass::of(address),
        limitations,
    }
}

/// Validate dotted-decimal address and mask strings, then calculate.
pub fn calculate_str(
    address: &str,
    mask: &str,
    options: &CalcOptions,
) -> Result<Ipv4Subnet, SubnetError> {
    let address: Octets = address.parse()?;
    let mask: Octets = mask.parse()?;
    Ok(calculate(&address, &mask, options))
}
