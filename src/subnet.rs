//! Subnet boundary arithmetic.

use crate::common::AddressError;
use crate::config::{MAX_PREFIX, MIN_PREFIX};
use core::net::Ipv4Addr;

/// Shape of a subnet, which decides which boundaries are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum SubnetKind {
    /// /1 through /30: network, broadcast and a usable host range.
    Subnet,
    /// /31 point-to-point link: two usable addresses, no network or broadcast.
    PointToPoint,
    /// /32 single host interface.
    Host,
}

impl SubnetKind {
    pub fn for_prefix(prefix: u8) -> Self {
        match prefix {
            32 => SubnetKind::Host,
            31 => SubnetKind::PointToPoint,
            _ => SubnetKind::Subnet,
        }
    }
}

/// The four canonical addresses of a subnet.
///
/// For [`SubnetKind::PointToPoint`] the usable pair is the network and
/// broadcast address of the block. For [`SubnetKind::Host`] every field is the
/// host address itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SubnetBoundaries {
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub first_usable: Ipv4Addr,
    pub last_usable: Ipv4Addr,
    pub kind: SubnetKind,
}

impl SubnetBoundaries {
    /// Inclusive range of addresses a host may be assigned.
    pub fn usable_range(&self) -> (Ipv4Addr, Ipv4Addr) {
        (self.first_usable, self.last_usable)
    }

    /// Number of usable host addresses.
    pub fn usable_hosts(&self) -> u32 {
        u32::from(self.last_usable) - u32::from(self.first_usable) + 1
    }

    /// Whether network and broadcast addresses exist for this subnet.
    pub fn has_network_and_broadcast(&self) -> bool {
        self.kind == SubnetKind::Subnet
    }
}

/// Netmask with the top `prefix` bits set. Prefixes above 32 saturate.
pub fn netmask(prefix: u8) -> u32 {
    u32::MAX
        .checked_shl(u32::from(MAX_PREFIX.saturating_sub(prefix)))
        .unwrap_or(0)
}

/// Compute subnet boundaries of `addr` under a `/prefix` mask.
pub fn compute_boundaries(addr: Ipv4Addr, prefix: u8) -> Result<SubnetBoundaries, AddressError> {
    if !(MIN_PREFIX..=MAX_PREFIX).contains(&prefix) {
        return Err(AddressError::InvalidPrefix(prefix));
    }
    let mask = netmask(prefix);
    let network = u32::from(addr) & mask;
    let broadcast = network | !mask;
    let kind = SubnetKind::for_prefix(prefix);
    let (first, last) = match kind {
        // network < broadcast - 1 here, so neither step can wrap
        SubnetKind::Subnet => (network + 1, broadcast - 1),
        SubnetKind::PointToPoint => (network, broadcast),
        SubnetKind::Host => (network, network),
    };
    Ok(SubnetBoundaries {
        network: Ipv4Addr::from(network),
        broadcast: Ipv4Addr::from(broadcast),
        first_usable: Ipv4Addr::from(first),
        last_usable: Ipv4Addr::from(last),
        kind,
    })
}
