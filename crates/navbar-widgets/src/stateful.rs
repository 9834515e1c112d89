#![forbid(unsafe_code)]

//! Persistable widget state.
//!
//! # Invariants
//!
//! 1. `restore_state(save_state())` reproduces the selected index and every
//!    badge (number or dot) whose item still exists.
//! 2. Restored values are clamped to the current menu rather than trusted.
//! 3. A [`VersionedState`] whose version differs from
//!    [`Stateful::state_version`] is rejected, never reinterpreted.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Result |
//! |---------|-------|--------|
//! | Malformed JSON | Corrupt blob | [`PersistError::Malformed`] |
//! | Version mismatch | Schema changed | [`PersistError::VersionMismatch`] |
//! | Unknown item id | Menu changed | Badge skipped |

use core::fmt;
use std::collections::BTreeMap;

use navbar_core::id::ItemId;

/// Identifies one widget instance's stored state.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct StateKey {
    /// The widget type name, e.g. `"BottomNavigationBar"`.
    pub widget_type: &'static str,
    /// Instance-unique identifier.
    pub instance_id: String,
}

impl StateKey {
    #[must_use]
    pub fn new(widget_type: &'static str, id: impl Into<String>) -> Self {
        Self {
            widget_type,
            instance_id: id.into(),
        }
    }

    /// Canonical string representation: `"widget_type::instance_id"`.
    #[must_use]
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.widget_type, self.instance_id)
    }
}

/// Widgets whose user-facing state survives a save/restore cycle.
pub trait Stateful: Sized {
    /// The persisted state. `Default` is the state of a fresh widget.
    type State: Default;

    fn state_key(&self) -> StateKey;

    /// Extract the current state. A pure read.
    fn save_state(&self) -> Self::State;

    /// Restore from a saved state, clamping values to the current widget.
    fn restore_state(&mut self, state: Self::State);

    /// Schema version; bump when `State`'s serialized form changes.
    fn state_version() -> u32 {
        1
    }
}

/// Version-tagged state envelope.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct VersionedState<S> {
    pub version: u32,
    pub data: S,
}

impl<S> VersionedState<S> {
    #[must_use]
    pub fn new(version: u32, data: S) -> Self {
        Self { version, data }
    }

    /// Pack a widget's state with its current version.
    pub fn pack<W: Stateful<State = S>>(widget: &W) -> Self {
        Self {
            version: W::state_version(),
            data: widget.save_state(),
        }
    }

    /// The payload, or `None` if the version does not match `W`.
    pub fn unpack<W: Stateful<State = S>>(self) -> Option<S> {
        (self.version == W::state_version()).then_some(self.data)
    }

    /// The payload, or `S::default()` on a version mismatch.
    pub fn unpack_or_default<W: Stateful<State = S>>(self) -> S
    where
        S: Default,
    {
        self.unpack::<W>().unwrap_or_default()
    }
}

impl<S: Default> Default for VersionedState<S> {
    fn default() -> Self {
        Self {
            version: 1,
            data: S::default(),
        }
    }
}

/// Saved state of a [`BottomNavigationBar`](crate::bar::BottomNavigationBar).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct BarState {
    pub selected_index: usize,
    /// Badges by item id; `None` is a dot badge.
    pub badges: BTreeMap<ItemId, Option<u32>>,
}

/// Decode failure for persisted state.
#[cfg(feature = "state-persistence")]
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("stored state has version {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },
    #[error("malformed state: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[cfg(feature = "state-persistence")]
impl<S: serde::Serialize> VersionedState<S> {
    /// Encode as JSON.
    ///
    /// # Errors
    ///
    /// [`PersistError::Malformed`] if `S` refuses to serialize.
    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(feature = "state-persistence")]
impl<S: serde::de::DeserializeOwned> VersionedState<S> {
    /// Decode from JSON.
    ///
    /// # Errors
    ///
    /// [`PersistError::Malformed`] for anything that is not a valid envelope.
    pub fn from_json(json: &str) -> Result<Self, PersistError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode and check the version against `W`.
    ///
    /// # Errors
    ///
    /// [`PersistError::Malformed`] or [`PersistError::VersionMismatch`].
    pub fn decode<W: Stateful<State = S>>(json: &str) -> Result<S, PersistError> {
        let envelope = Self::from_json(json)?;
        let expected = W::state_version();
        if envelope.version != expected {
            return Err(PersistError::VersionMismatch {
                found: envelope.version,
                expected,
            });
        }
        Ok(envelope.data)
    }
}
