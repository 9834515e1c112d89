#![forbid(unsafe_code)]

//! The menu: an ordered, size-bounded list of navigable items.

use std::collections::BTreeSet;

use navbar_core::config::NavBarConfig;
use navbar_core::error::{ConfigurationError, InvalidIdError, Result};
use navbar_core::id::ItemId;

/// Host-resolved icon reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconRef(pub String);

impl From<&str> for IconRef {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

/// Description of one menu entry, as supplied by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemSpec {
    pub id: ItemId,
    pub title: String,
    pub icon: Option<IconRef>,
    pub enabled: bool,
    pub visible: bool,
    pub checkable: bool,
    pub submenu: Vec<MenuItemSpec>,
}

impl MenuItemSpec {
    /// An enabled, visible, checkable entry without icon.
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: None,
            enabled: true,
            visible: true,
            checkable: true,
            submenu: Vec::new(),
        }
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<IconRef>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn checkable(mut self, checkable: bool) -> Self {
        self.checkable = checkable;
        self
    }

    #[must_use]
    pub fn submenu(mut self, entries: Vec<MenuItemSpec>) -> Self {
        self.submenu = entries;
        self
    }
}

/// A built menu item.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: ItemId,
    title: String,
    icon: Option<IconRef>,
    enabled: bool,
    visible: bool,
    checkable: bool,
    position: usize,
}

impl Item {
    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn icon(&self) -> Option<&IconRef> {
        self.icon.as_ref()
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn is_checkable(&self) -> bool {
        self.checkable
    }

    /// Index assigned when the menu was built.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Ordered items of the bar.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuModel {
    items: Vec<Item>,
}

impl MenuModel {
    /// Build a menu from host entries.
    ///
    /// # Errors
    ///
    /// Fails without building anything when the slot count (entries plus the
    /// action slot) is outside the supported range, an entry has a submenu,
    /// or two entries share an id.
    pub fn build(specs: Vec<MenuItemSpec>, has_action: bool) -> Result<Self> {
        check_item_count(specs.len(), has_action)?;

        let mut seen = BTreeSet::new();
        for spec in &specs {
            if !spec.submenu.is_empty() {
                return Err(ConfigurationError::SubmenuNotSupported { id: spec.id }.into());
            }
            if !seen.insert(spec.id) {
                return Err(ConfigurationError::DuplicateItemId { id: spec.id }.into());
            }
        }

        let items = specs
            .into_iter()
            .enumerate()
            .map(|(position, spec)| Item {
                id: spec.id,
                title: spec.title,
                icon: spec.icon,
                enabled: spec.enabled,
                visible: spec.visible,
                checkable: spec.checkable,
                position,
            })
            .collect();
        Ok(Self { items })
    }

    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, position: usize) -> Option<&Item> {
        self.items.get(position)
    }

    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Position of `id`, or [`InvalidIdError::UnknownItem`].
    pub fn require(&self, id: ItemId) -> Result<usize> {
        self.position_of(id)
            .ok_or_else(|| InvalidIdError::UnknownItem(id).into())
    }

    pub fn has_visible_items(&self) -> bool {
        self.items.iter().any(Item::is_visible)
    }

    pub(crate) fn get_mut(&mut self, position: usize) -> Option<&mut Item> {
        self.items.get_mut(position)
    }
}

/// Validate a slot count against the supported range.
///
/// # Errors
///
/// [`ConfigurationError::TooManyItems`] or [`ConfigurationError::TooFewItems`].
pub fn check_item_count(items: usize, has_action: bool) -> Result<()> {
    let count = items + usize::from(has_action);
    if count > NavBarConfig::MAX_ITEM_COUNT {
        return Err(ConfigurationError::TooManyItems {
            count,
            max: NavBarConfig::MAX_ITEM_COUNT,
        }
        .into());
    }
    if count < NavBarConfig::MIN_ITEM_COUNT {
        return Err(ConfigurationError::TooFewItems {
            count,
            min: NavBarConfig::MIN_ITEM_COUNT,
        }
        .into());
    }
    Ok(())
}
