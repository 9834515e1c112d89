#![forbid(unsafe_code)]

//! Arrangement of items, the action slot and the balancing placeholder.
//!
//! With an action slot, items are split around the center: the left side
//! gets `slots / 2` items, the right side the rest. The right side is never
//! longer than the left; when it is shorter, a placeholder is appended so
//! the action slot stays centered.
//!
//! | Items | Slots                          |
//! |-------|--------------------------------|
//! | 2     | `0 A 1`                        |
//! | 3     | `0 1 A 2 _`                    |
//! | 4     | `0 1 A 2 3`                    |

/// One entry of a [`SlotPlan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// The menu item at this position.
    Item(usize),
    /// The action slot.
    Action,
    /// Zero-content balancing slot.
    Placeholder,
}

/// Left-to-right order of the bar's children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlotPlan {
    slots: Vec<SlotKind>,
}

impl SlotPlan {
    /// Plan the row for `item_count` items, with or without an action slot.
    #[must_use]
    pub fn new(item_count: usize, has_action: bool) -> Self {
        if !has_action {
            return Self {
                slots: (0..item_count).map(SlotKind::Item).collect(),
            };
        }

        let total = item_count + 1;
        let center = total / 2;
        let left_count = center;
        let right_count = total - center - 1;

        let mut slots = Vec::with_capacity(total + 1);
        slots.extend((0..left_count).map(SlotKind::Item));
        slots.push(SlotKind::Action);
        slots.extend((left_count..item_count).map(SlotKind::Item));
        if right_count != left_count {
            slots.push(SlotKind::Placeholder);
        }
        Self { slots }
    }

    /// Slots in left-to-right order.
    #[inline]
    pub fn slots(&self) -> &[SlotKind] {
        &self.slots
    }

    /// Number of slots, placeholder included.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Index of the action slot, if any.
    pub fn action_index(&self) -> Option<usize> {
        self.slots.iter().position(|s| *s == SlotKind::Action)
    }

    /// Index of the slot holding the item at `position`.
    pub fn index_of_item(&self, position: usize) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| *s == SlotKind::Item(position))
    }
}
