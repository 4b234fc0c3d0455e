//! Common types for the quiz: address categories, player selections and errors.

use core::fmt;

/// Special-use category an address can fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Category {
    Private,
    Reserved,
    Multicast,
    Experimental,
}

impl Category {
    /// Lowercase name as shown to the player.
    pub const fn name(self) -> &'static str {
        match self {
            Category::Private => "private",
            Category::Reserved => "reserved",
            Category::Multicast => "multicast",
            Category::Experimental => "experimental",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of classifying an address against the special-use table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Classification {
    pub category: Category,
    pub description: &'static str,
}

/// Answer a player gives for a special address.
///
/// Private and reserved blocks share the `Reserved` answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSelection {
    Reserved,
    Multicast,
    Experimental,
}

impl PlayerSelection {
    /// Map a key press (`r`, `m`, `e`, any case) to a selection.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'r' => Some(PlayerSelection::Reserved),
            'm' => Some(PlayerSelection::Multicast),
            'e' => Some(PlayerSelection::Experimental),
            _ => None,
        }
    }

    /// Whether this selection names the given category.
    pub fn matches(self, category: Category) -> bool {
        match (self, category) {
            (PlayerSelection::Reserved, Category::Private | Category::Reserved) => true,
            (PlayerSelection::Multicast, Category::Multicast) => true,
            (PlayerSelection::Experimental, Category::Experimental) => true,
            _ => false,
        }
    }
}

/// Errors returned by the address engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// Text did not split into exactly four dot-separated tokens.
    #[error("expected 4 octets, found {0}")]
    OctetCount(usize),
    /// A token was empty or held something other than decimal digits.
    #[error("octet {index} is not a decimal number")]
    NotNumeric { index: usize },
    /// A token parsed but exceeds 255.
    #[error("octet {index} is out of range")]
    OctetOutOfRange { index: usize },
    /// CIDR text without a numeric `/prefix` part.
    #[error("missing or non-numeric /prefix")]
    MissingPrefix,
    /// Prefix length outside `1..=32`.
    #[error("invalid prefix length /{0}")]
    InvalidPrefix(u8),
}

/// Errors returned while grading a submitted calculation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    /// A required field was left blank.
    #[error("the {0} field is empty")]
    Missing(&'static str),
    /// A required field is not a dotted-quad address.
    #[error("the {field} field is malformed: {source}")]
    Malformed {
        field: &'static str,
        #[source]
        source: AddressError,
    },
    /// The round's prefix length cannot be graded.
    #[error(transparent)]
    Address(#[from] AddressError),
}
