#![forbid(unsafe_code)]

//! Error taxonomy.
//!
//! Every error is raised synchronously by the mutating call that caused it,
//! before any state is committed. Geometry is total and never errors.

use crate::id::ItemId;

/// The bar (or one of its inputs) was configured in a way it cannot render.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// More slots than the bar supports (action slot included).
    #[error("maximum number of items supported is {max}, got {count}")]
    TooManyItems { count: usize, max: usize },
    /// Fewer slots than the bar supports (action slot included).
    #[error("minimum number of items supported is {min}, got {count}")]
    TooFewItems { count: usize, min: usize },
    /// A menu entry carries a submenu.
    #[error("item {id} has a submenu; submenus are not supported")]
    SubmenuNotSupported { id: ItemId },
    /// Two menu entries share an id.
    #[error("item id {id} appears more than once")]
    DuplicateItemId { id: ItemId },
    /// A child component with an unrecognized role was added to the bar.
    #[error("unknown child component `{role}`")]
    UnknownChild { role: &'static str },
    /// A dimension that must be non-negative was negative.
    #[error("`{name}` must not be negative, got {value}")]
    NegativeDimension { name: &'static str, value: i32 },
}

/// An operation referenced an item that is not part of the current menu.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidIdError {
    /// No item with this id.
    #[error("{0} is not an item of the current menu")]
    UnknownItem(ItemId),
    /// Position past the end of the menu.
    #[error("position {position} is out of range for {count} items")]
    PositionOutOfRange { position: usize, count: usize },
}

/// Top-level error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    InvalidId(#[from] InvalidIdError),
}

impl Error {
    /// Whether this is a configuration failure.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Whether this is an unknown-id failure.
    pub fn is_invalid_id(&self) -> bool {
        matches!(self, Self::InvalidId(_))
    }
}

/// Standard result type for navbar APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Reject negative dimensions with [`ConfigurationError::NegativeDimension`].
pub fn non_negative(name: &'static str, value: i32) -> Result<i32> {
    if value < 0 {
        Err(ConfigurationError::NegativeDimension { name, value }.into())
    } else {
        Ok(value)
    }
}
