#![forbid(unsafe_code)]

//! Selection state machine.
//!
//! # Invariants
//!
//! 1. Exactly one index is selected once the menu is non-empty; it starts
//!    at 0 and is reset to 0 on every menu rebuild.
//! 2. Activating the selected item emits "selected" then "reselected"; the
//!    index does not change.
//! 3. Activating another item emits "selected" with the new item, then
//!    moves the selection.
//! 4. Disabled or hidden items ignore activation.
//! 5. Programmatic [`select`](SelectionController::select) and
//!    [`restore`](SelectionController::restore) never emit.

use core::fmt;

use navbar_core::error::{InvalidIdError, Result};

use crate::menu::{Item, MenuModel};

type Listener = Box<dyn FnMut(&Item)>;

/// Outcome of an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// The selection moved.
    Selected { previous: usize, current: usize },
    /// The selected item was activated again.
    Reselected(usize),
    /// The item does not accept activation.
    Ignored,
}

/// Owns the selected index and the two listener slots.
#[derive(Default)]
pub struct SelectionController {
    selected: usize,
    on_selected: Option<Listener>,
    on_reselected: Option<Listener>,
}

impl SelectionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Replace the "selected" listener.
    pub fn set_on_selected(&mut self, listener: impl FnMut(&Item) + 'static) {
        self.on_selected = Some(Box::new(listener));
    }

    /// Replace the "reselected" listener.
    pub fn set_on_reselected(&mut self, listener: impl FnMut(&Item) + 'static) {
        self.on_reselected = Some(Box::new(listener));
    }

    pub fn clear_listeners(&mut self) {
        self.on_selected = None;
        self.on_reselected = None;
    }

    /// Activate the item at `position`.
    ///
    /// # Errors
    ///
    /// [`InvalidIdError::PositionOutOfRange`] when `position` is past the end
    /// of `menu`.
    pub fn activate(&mut self, menu: &MenuModel, position: usize) -> Result<Transition> {
        let item = menu
            .get(position)
            .ok_or(InvalidIdError::PositionOutOfRange {
                position,
                count: menu.len(),
            })?;

        if !item.is_enabled() || !item.is_visible() {
            navbar_core::debug!(position, "activation ignored");
            return Ok(Transition::Ignored);
        }

        if let Some(listener) = self.on_selected.as_mut() {
            listener(item);
        }

        if position == self.selected {
            if let Some(listener) = self.on_reselected.as_mut() {
                listener(item);
            }
            return Ok(Transition::Reselected(position));
        }

        let previous = self.selected;
        self.selected = position;
        Ok(Transition::Selected {
            previous,
            current: position,
        })
    }

    /// Move the selection without notifying listeners.
    ///
    /// # Errors
    ///
    /// [`InvalidIdError::PositionOutOfRange`] when `position` is past the end
    /// of `menu`.
    pub fn select(&mut self, menu: &MenuModel, position: usize) -> Result<usize> {
        if position >= menu.len() {
            return Err(InvalidIdError::PositionOutOfRange {
                position,
                count: menu.len(),
            }
            .into());
        }
        let previous = self.selected;
        self.selected = position;
        Ok(previous)
    }

    /// Restore a saved index, clamped to the last valid position.
    pub fn restore(&mut self, index: usize, item_count: usize) {
        self.selected = index.min(item_count.saturating_sub(1));
    }

    /// Back to the first item.
    pub fn reset(&mut self) {
        self.selected = 0;
    }
}

impl fmt::Debug for SelectionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionController")
            .field("selected", &self.selected)
            .field("on_selected", &self.on_selected.is_some())
            .field("on_reselected", &self.on_reselected.is_some())
            .finish()
    }
}
