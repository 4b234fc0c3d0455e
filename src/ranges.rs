//! Static table of special-use IPv4 blocks.

use crate::common::{Category, Classification};
use core::net::Ipv4Addr;

/// One contiguous special-use block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressRange {
    start: Ipv4Addr,
    end: Ipv4Addr,
    prefix: u8,
    description: &'static str,
}

impl AddressRange {
    pub const fn new(start: [u8; 4], end: [u8; 4], prefix: u8, description: &'static str) -> Self {
        Self {
            start: Ipv4Addr::new(start[0], start[1], start[2], start[3]),
            end: Ipv4Addr::new(end[0], end[1], end[2], end[3]),
            prefix,
            description,
        }
    }

    pub fn start(&self) -> Ipv4Addr {
        self.start
    }

    pub fn end(&self) -> Ipv4Addr {
        self.end
    }

    /// Natural prefix length of the block (e.g. 8 for 10.0.0.0/8).
    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Every octet of `addr` lies within the matching octets of start and end.
    ///
    /// For the experimental block this leaves out any address ending in 255.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        let (start, end) = (self.start.octets(), self.end.octets());
        addr.octets()
            .iter()
            .zip(start.iter().zip(end.iter()))
            .all(|(o, (lo, hi))| lo <= o && o <= hi)
    }
}

pub const PRIVATE_RANGES: [AddressRange; 3] = [
    AddressRange::new([10, 0, 0, 0], [10, 255, 255, 255], 8, "Private Class A (10.0.0.0/8)"),
    AddressRange::new([172, 16, 0, 0], [172, 31, 255, 255], 12, "Private Class B (172.16.0.0/12)"),
    AddressRange::new([192, 168, 0, 0], [192, 168, 255, 255], 16, "Private Class C (192.168.0.0/16)"),
];

pub const RESERVED_RANGES: [AddressRange; 3] = [
    AddressRange::new([0, 0, 0, 0], [0, 255, 255, 255], 8, "Reserved for self-identification"),
    AddressRange::new([127, 0, 0, 0], [127, 255, 255, 255], 8, "Loopback addresses"),
    AddressRange::new([169, 254, 0, 0], [169, 254, 255, 255], 16, "Link-local addresses"),
];

pub const MULTICAST_RANGES: [AddressRange; 1] = [AddressRange::new(
    [224, 0, 0, 0],
    [239, 255, 255, 255],
    4,
    "Multicast addresses",
)];

pub const EXPERIMENTAL_RANGES: [AddressRange; 1] = [AddressRange::new(
    [240, 0, 0, 0],
    [255, 255, 255, 254],
    4,
    "Experimental addresses",
)];

/// Categories in lookup priority order. The first containing block wins.
pub static RANGE_TABLE: [(Category, &[AddressRange]); 4] = [
    (Category::Private, &PRIVATE_RANGES),
    (Category::Reserved, &RESERVED_RANGES),
    (Category::Multicast, &MULTICAST_RANGES),
    (Category::Experimental, &EXPERIMENTAL_RANGES),
];

/// Find the first block containing `addr`, in priority order.
pub fn lookup_range(addr: Ipv4Addr) -> Option<(Category, &'static AddressRange)> {
    RANGE_TABLE.iter().find_map(|&(category, ranges)| {
        ranges
            .iter()
            .find(|range| range.contains(addr))
            .map(|range| (category, range))
    })
}

impl From<(Category, &AddressRange)> for Classification {
    fn from((category, range): (Category, &AddressRange)) -> Self {
        Classification {
            category,
            description: range.description(),
        }
    }
}
