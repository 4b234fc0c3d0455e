//! Grading of player answers against canonical results.
//!
//! The session never grades answers itself: front ends call these functions
//! and report the boolean to [`Session::register_outcome`](crate::Session::register_outcome).

use crate::address::parse_address;
use crate::common::{AnswerError, Classification, PlayerSelection};
use crate::subnet::{compute_boundaries, SubnetKind};
use core::net::Ipv4Addr;

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Raw text of a submitted calculation.
///
/// For a /32 round the host interface address goes in `network`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculationAnswer {
    pub network: String,
    pub broadcast: String,
    pub first_usable: String,
    pub last_usable: String,
}

/// A field of the calculation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerField {
    Host,
    Network,
    Broadcast,
    FirstUsable,
    LastUsable,
}

impl AnswerField {
    pub const fn label(self) -> &'static str {
        match self {
            AnswerField::Host => "host interface address",
            AnswerField::Network => "network address",
            AnswerField::Broadcast => "broadcast address",
            AnswerField::FirstUsable => "first usable address",
            AnswerField::LastUsable => "last usable address",
        }
    }
}

impl CalculationAnswer {
    /// Fields a player has to fill in for a `/prefix` round.
    pub fn required_fields(prefix: u8) -> &'static [AnswerField] {
        match SubnetKind::for_prefix(prefix) {
            SubnetKind::Host => &[AnswerField::Host],
            SubnetKind::PointToPoint => &[AnswerField::FirstUsable, AnswerField::LastUsable],
            SubnetKind::Subnet => &[
                AnswerField::Network,
                AnswerField::Broadcast,
                AnswerField::FirstUsable,
                AnswerField::LastUsable,
            ],
        }
    }

    pub fn field_mut(&mut self, field: AnswerField) -> &mut String {
        match field {
            AnswerField::Host | AnswerField::Network => &mut self.network,
            AnswerField::Broadcast => &mut self.broadcast,
            AnswerField::FirstUsable => &mut self.first_usable,
            AnswerField::LastUsable => &mut self.last_usable,
        }
    }

    fn field(&self, field: AnswerField) -> &str {
        match field {
            AnswerField::Host | AnswerField::Network => &self.network,
            AnswerField::Broadcast => &self.broadcast,
            AnswerField::FirstUsable => &self.first_usable,
            AnswerField::LastUsable => &self.last_usable,
        }
    }

    fn parsed(&self, field: AnswerField) -> Result<Ipv4Addr, AnswerError> {
        let text = self.field(field);
        if text.is_empty() {
            return Err(AnswerError::Missing(field.label()));
        }
        parse_address(text).map_err(|source| AnswerError::Malformed {
            field: field.label(),
            source,
        })
    }

    /// Whether `field` matches `want` exactly as dotted-quad text.
    fn matches(&self, field: AnswerField, want: Ipv4Addr) -> Result<bool, AnswerError> {
        let got = self.parsed(field)?;
        Ok(got == want && is_canonical(self.field(field)))
    }
}

/// No octet carries a leading zero, so the text is how `Ipv4Addr` prints.
fn is_canonical(text: &str) -> bool {
    text.split('.').all(|token| token.len() == 1 || !token.starts_with('0'))
}

/// Grade a calculation for `addr/prefix`.
///
/// Only the fields returned by [`CalculationAnswer::required_fields`] are
/// looked at. A field must be strict dotted-quad text, as checked by
/// [`is_syntactically_valid`](crate::is_syntactically_valid), and equal the
/// canonical address character for character. `Err` means the submission was
/// unusable and counts as wrong.
pub fn grade_calculation(
    answer: &CalculationAnswer,
    addr: Ipv4Addr,
    prefix: u8,
) -> Result<bool, AnswerError> {
    let expected = compute_boundaries(addr, prefix)?;
    let mut correct = true;
    for &field in CalculationAnswer::required_fields(prefix) {
        let want = match field {
            AnswerField::Host => addr,
            AnswerField::Network => expected.network,
            AnswerField::Broadcast => expected.broadcast,
            AnswerField::FirstUsable => expected.first_usable,
            AnswerField::LastUsable => expected.last_usable,
        };
        // every field is parsed so malformed input is reported even after a miss
        correct &= answer.matches(field, want)?;
    }
    Ok(correct)
}

/// Grade a special-address answer. `None` classification can never be right.
pub fn grade_special(selection: PlayerSelection, classification: Option<&Classification>) -> bool {
    classification.is_some_and(|c| selection.matches(c.category))
}
