#![forbid(unsafe_code)]

//! Stable item identifiers.

use core::fmt;

/// Identity key of a navigation item.
///
/// Unlike an item's position, the id survives menu rebuilds, so badges and
/// persisted state are keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ItemId(pub u32);

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
