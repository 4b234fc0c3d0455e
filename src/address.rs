//! Address generation, parsing and special-use classification.

use crate::common::{AddressError, Classification};
use crate::config::{MAX_PREFIX, MIN_PREFIX};
use crate::ranges;
use core::net::Ipv4Addr;
use rand::Rng;

/// Draw a uniformly random address, each octet independent in `0..=255`.
pub fn generate_random_address<R: Rng>(rng: &mut R) -> Ipv4Addr {
    let octets: [u8; 4] = rng.random();
    Ipv4Addr::from(octets)
}

/// Classify `addr` against the special-use table.
///
/// Returns `None` for ordinary unicast addresses, which are the ones played in
/// the calculation phase.
pub fn classify(addr: Ipv4Addr) -> Option<Classification> {
    ranges::lookup_range(addr).map(Classification::from)
}

/// Smallest prefix length offered for `addr`: the natural prefix of its
/// special-use block, or `MIN_PREFIX` for ordinary addresses.
pub fn minimum_prefix_for(addr: Ipv4Addr) -> u8 {
    ranges::lookup_range(addr)
        .map(|(_, range)| range.prefix())
        .unwrap_or(MIN_PREFIX)
}

/// Parse strict dotted-quad text.
///
/// Exactly four tokens of ASCII digits, each at most 255. Signs, spaces and
/// any trailing characters are rejected.
pub fn parse_address(text: &str) -> Result<Ipv4Addr, AddressError> {
    let count = text.split('.').count();
    if count != 4 {
        return Err(AddressError::OctetCount(count));
    }
    let mut octets = [0u8; 4];
    for (index, token) in text.split('.').enumerate() {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AddressError::NotNumeric { index });
        }
        // Leading zeros are allowed, so fold digits instead of bounding length.
        let value = token
            .bytes()
            .try_fold(0u32, |acc, b| {
                let next = acc * 10 + u32::from(b - b'0');
                (next <= 255).then_some(next)
            })
            .ok_or(AddressError::OctetOutOfRange { index })?;
        octets[index] = value as u8;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Whether `text` is a syntactically valid dotted-quad address.
pub fn is_syntactically_valid(text: &str) -> bool {
    parse_address(text).is_ok()
}

/// Parse `a.b.c.d/prefix` notation.
pub fn parse_cidr(text: &str) -> Result<(Ipv4Addr, u8), AddressError> {
    let (addr, prefix) = text.trim().split_once('/').ok_or(AddressError::MissingPrefix)?;
    let addr = parse_address(addr)?;
    let prefix = match prefix.parse::<u8>() {
        Ok(p) if (MIN_PREFIX..=MAX_PREFIX).contains(&p) => p,
        Ok(p) => return Err(AddressError::InvalidPrefix(p)),
        Err(_) => return Err(AddressError::MissingPrefix),
    };
    Ok((addr, prefix))
}

pub fn ip_to_number(addr: Ipv4Addr) -> u32 {
    u32::from(addr)
}

pub fn number_to_ip(n: u32) -> Ipv4Addr {
    Ipv4Addr::from(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_leading_zeros() {
        assert_eq!(parse_address("010.001.000.255"), Ok(Ipv4Addr::new(10, 1, 0, 255)));
    }

    #[test]
    fn cidr_requires_a_prefix() {
        assert_eq!(parse_cidr("10.0.0.1/8"), Ok((Ipv4Addr::new(10, 0, 0, 1), 8)));
        assert_eq!(parse_cidr("10.0.0.1"), Err(AddressError::MissingPrefix));
        assert_eq!(parse_cidr("10.0.0.1/x"), Err(AddressError::MissingPrefix));
        assert_eq!(parse_cidr("10.0.0.1/0"), Err(AddressError::InvalidPrefix(0)));
        assert_eq!(parse_cidr("10.0.0.1/33"), Err(AddressError::InvalidPrefix(33)));
    }

    #[test]
    fn parse_reports_offending_octet() {
        assert_eq!(parse_address("1.2.3"), Err(AddressError::OctetCount(3)));
        assert_eq!(parse_address("1.2.x.4"), Err(AddressError::NotNumeric { index: 2 }));
        assert_eq!(parse_address("1.2.3.256"), Err(AddressError::OctetOutOfRange { index: 3 }));
        assert_eq!(
            parse_address("1.99999999999.3.4"),
            Err(AddressError::OctetOutOfRange { index: 1 })
        );
    }
}
