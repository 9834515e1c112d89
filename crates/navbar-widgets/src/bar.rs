#![forbid(unsafe_code)]

//! The bottom navigation bar.
//!
//! [`BottomNavigationBar`] ties the pieces together: it owns the
//! [`MenuModel`], the [`SelectionController`], one [`ItemComponent`] per
//! menu item, the optional action slot and every badge. A measurement pass
//! runs the [`LayoutEngine`], re-anchors badges to the placed icons and
//! composes the outline.
//!
//! # Lifecycle
//!
//! - Changing the menu or the action slot rebuilds every child and resets
//!   the selection to the first item. Hosted children are dropped.
//! - Selection changes only refresh the two affected items, unless the item
//!   children no longer match the menu, in which case the bar rebuilds.
//! - Badges outlive rebuilds; a badge goes away with its item.

use std::collections::BTreeMap;
use std::rc::Rc;

use navbar_core::config::NavBarConfig;
use navbar_core::error::{ConfigurationError, Result};
use navbar_core::geometry::{Point, Rect, Size};
use navbar_core::id::ItemId;
use navbar_layout::{
    ActionSlot, ActionSlotComponent, AttachMode, Component, LayoutDirection, LayoutEngine,
    LayoutResult, MeasureSpec, Placeholder, SlotKind, SlotPlan, SlotRole,
};
use navbar_render::{Outline, ShapeComposer, Silhouette};

use crate::badge::Badge;
use crate::drawable::Surface;
use crate::item::ItemComponent;
use crate::menu::{Item, MenuItemSpec, MenuModel, check_item_count};
use crate::selection::{SelectionController, Transition};
use crate::stateful::{BarState, StateKey, Stateful};
use crate::style::{BarStyle, ItemBackground, LabelVisibility, TintList};
use crate::text::{CellTextMeasurer, TextMeasurer};

/// One child of the bar, in row order.
enum BarChild {
    Item(ItemComponent),
    Action(ActionSlotComponent),
    Placeholder(Placeholder),
    Hosted(Box<dyn Component>),
}

impl BarChild {
    fn as_component(&self) -> &dyn Component {
        match self {
            Self::Item(c) => c,
            Self::Action(c) => c,
            Self::Placeholder(c) => c,
            Self::Hosted(c) => c.as_ref(),
        }
    }

    fn as_component_mut(&mut self) -> &mut dyn Component {
        match self {
            Self::Item(c) => c,
            Self::Action(c) => c,
            Self::Placeholder(c) => c,
            Self::Hosted(c) => c.as_mut(),
        }
    }
}

impl Component for BarChild {
    fn role(&self) -> SlotRole {
        self.as_component().role()
    }

    fn is_visible(&self) -> bool {
        self.as_component().is_visible()
    }

    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        self.as_component_mut().measure(width, height)
    }

    fn measured_size(&self) -> Size {
        self.as_component().measured_size()
    }

    fn layout(&mut self, rect: Rect) {
        self.as_component_mut().layout(rect)
    }
}

/// A bottom navigation bar with an optional center action slot.
pub struct BottomNavigationBar {
    config: NavBarConfig,
    style: BarStyle,
    direction: LayoutDirection,
    instance_id: String,
    measurer: Rc<dyn TextMeasurer>,
    menu: MenuModel,
    selection: SelectionController,
    children: Vec<BarChild>,
    badges: BTreeMap<ItemId, Badge>,
    layout: Option<LayoutResult>,
    outline: Option<Outline>,
}

impl BottomNavigationBar {
    /// An empty bar; call [`set_menu`](Self::set_menu) before measuring.
    #[must_use]
    pub fn new(config: NavBarConfig) -> Self {
        Self {
            style: BarStyle::from_config(&config),
            config,
            direction: LayoutDirection::Ltr,
            instance_id: "default".to_owned(),
            measurer: Rc::new(CellTextMeasurer::default()),
            menu: MenuModel::default(),
            selection: SelectionController::new(),
            children: Vec::new(),
            badges: BTreeMap::new(),
            layout: None,
            outline: None,
        }
    }

    /// Replace the text measurer used for labels and badges.
    #[must_use]
    pub fn with_measurer(mut self, measurer: Rc<dyn TextMeasurer>) -> Self {
        self.measurer = measurer;
        self
    }

    /// Set the id this bar persists its state under.
    #[must_use]
    pub fn with_instance_id(mut self, id: impl Into<String>) -> Self {
        self.instance_id = id.into();
        self
    }

    /// Apply a whole style bundle.
    #[must_use]
    pub fn with_style(mut self, style: BarStyle) -> Self {
        self.set_style(style);
        self
    }

    /// Most slots the bar supports, action slot included.
    pub const fn max_item_count() -> usize {
        NavBarConfig::MAX_ITEM_COUNT
    }

    /// Fewest slots the bar supports, action slot included.
    pub const fn min_item_count() -> usize {
        NavBarConfig::MIN_ITEM_COUNT
    }

    #[inline]
    pub fn config(&self) -> &NavBarConfig {
        &self.config
    }

    #[inline]
    pub fn style(&self) -> &BarStyle {
        &self.style
    }

    #[inline]
    pub fn menu(&self) -> &MenuModel {
        &self.menu
    }

    #[inline]
    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    // -- configuration -----------------------------------------------------

    /// Replace the menu and rebuild.
    ///
    /// # Errors
    ///
    /// Any [`MenuModel::build`] failure; the bar is left untouched.
    pub fn set_menu(&mut self, specs: Vec<MenuItemSpec>) -> Result<()> {
        let menu = MenuModel::build(specs, self.has_action_slot())?;
        self.menu = menu;
        self.selection.reset();
        let action = self.take_action();
        self.rebuild(action);
        Ok(())
    }

    /// Install or remove the center action slot and rebuild.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::TooManyItems`] or
    /// [`ConfigurationError::TooFewItems`] if the current menu would no
    /// longer fit; the bar is left untouched.
    pub fn set_action_slot(&mut self, action: Option<ActionSlotComponent>) -> Result<()> {
        if !self.menu.is_empty() {
            check_item_count(self.menu.len(), action.is_some())?;
        }
        self.take_action();
        self.selection.reset();
        self.rebuild(action);
        Ok(())
    }

    #[inline]
    pub fn has_action_slot(&self) -> bool {
        self.children
            .iter()
            .any(|child| matches!(child, BarChild::Action(_)))
    }

    pub fn action_slot(&self) -> Option<&ActionSlotComponent> {
        self.children.iter().find_map(|child| match child {
            BarChild::Action(action) => Some(action),
            _ => None,
        })
    }

    /// Mutable access, e.g. to hide the slot. Call
    /// [`measure`](Self::measure) afterwards.
    pub fn action_slot_mut(&mut self) -> Option<&mut ActionSlotComponent> {
        self.invalidate();
        self.children.iter_mut().find_map(|child| match child {
            BarChild::Action(action) => Some(action),
            _ => None,
        })
    }

    /// Add a host-supplied child.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::UnknownChild`] unless the child is an item,
    /// action slot or placeholder.
    pub fn add_child(&mut self, child: Box<dyn Component>) -> Result<()> {
        let role = child.role();
        if !role.is_recognized() {
            return Err(ConfigurationError::UnknownChild { role: role.name() }.into());
        }
        self.children.push(BarChild::Hosted(child));
        self.invalidate();
        Ok(())
    }

    pub fn set_style(&mut self, style: BarStyle) {
        self.style = style;
        for item in self.items_mut() {
            item.apply_style(&style);
        }
        self.invalidate();
    }

    pub fn set_direction(&mut self, direction: LayoutDirection) {
        self.direction = direction;
        self.invalidate();
    }

    pub fn set_attach_mode(&mut self, mode: AttachMode) {
        self.set_style(self.style.attach_mode(mode));
    }

    /// # Errors
    ///
    /// Rejects negative padding.
    pub fn set_hump_padding(&mut self, px: i32) -> Result<()> {
        let style = self.style.hump_padding(px)?;
        self.set_style(style);
        Ok(())
    }

    /// # Errors
    ///
    /// Rejects a negative size.
    pub fn set_icon_size(&mut self, px: i32) -> Result<()> {
        let style = self.style.icon_size(px)?;
        self.set_style(style);
        Ok(())
    }

    /// # Errors
    ///
    /// Rejects negative spacing.
    pub fn set_content_spacing(&mut self, px: i32) -> Result<()> {
        let style = self.style.content_spacing(px)?;
        self.set_style(style);
        Ok(())
    }

    pub fn set_icon_tint(&mut self, tint: TintList) {
        self.set_style(self.style.icon_tint(tint));
    }

    pub fn set_label_tint(&mut self, tint: TintList) {
        self.set_style(self.style.label_tint(tint));
    }

    pub fn set_item_background(&mut self, background: Option<ItemBackground>) {
        self.set_style(self.style.item_background(background));
    }

    pub fn set_label_visibility(&mut self, visibility: LabelVisibility) {
        self.set_style(self.style.label_visibility(visibility));
    }

    pub fn set_elevation(&mut self, elevation: f32) {
        self.style = self.style.elevation(elevation);
    }

    /// Enable or disable an item.
    ///
    /// # Errors
    ///
    /// `InvalidIdError::UnknownItem` for an id outside the menu.
    pub fn set_item_enabled(&mut self, id: ItemId, enabled: bool) -> Result<()> {
        let position = self.menu.require(id)?;
        if let Some(item) = self.menu.get_mut(position) {
            item.set_enabled(enabled);
        }
        let selected = self.selection.selected_index() == position;
        if let Some(component) = self.item_component_mut(position) {
            component.item_mut().set_enabled(enabled);
            component.sync_state(selected);
        }
        Ok(())
    }

    /// Show or hide an item. Call [`measure`](Self::measure) afterwards.
    ///
    /// # Errors
    ///
    /// `InvalidIdError::UnknownItem` for an id outside the menu.
    pub fn set_item_visible(&mut self, id: ItemId, visible: bool) -> Result<()> {
        let position = self.menu.require(id)?;
        if let Some(item) = self.menu.get_mut(position) {
            item.set_visible(visible);
        }
        if let Some(component) = self.item_component_mut(position) {
            component.item_mut().set_visible(visible);
        }
        self.invalidate();
        Ok(())
    }

    // -- layout ------------------------------------------------------------

    /// Run a measurement pass for `available_width`.
    ///
    /// # Errors
    ///
    /// A negative width or hump padding is a configuration error.
    pub fn measure(&mut self, available_width: i32) -> Result<&LayoutResult> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "bar_measure",
            available_width,
            items = self.menu.len()
        )
        .entered();

        let action = ActionSlot::new(self.style.attach_mode, self.style.hump_padding)?;
        let engine = LayoutEngine::new(self.config)
            .with_action_slot(action)
            .with_direction(self.direction);
        let result = engine.measure(available_width, &mut self.children)?;

        for child in &self.children {
            if let BarChild::Item(item) = child
                && let Some(badge) = self.badges.get_mut(&item.item().id())
            {
                badge.set_anchor(item.icon_bounds(), item.rect());
            }
        }

        self.outline = Some(ShapeComposer::new().compose(&result));
        Ok(&*self.layout.insert(result))
    }

    /// Result of the last measurement pass, if still current.
    #[inline]
    pub fn layout(&self) -> Option<&LayoutResult> {
        self.layout.as_ref()
    }

    /// Outline of the last measurement pass.
    #[inline]
    pub fn outline(&self) -> Option<&Outline> {
        self.outline.as_ref()
    }

    /// Shadow silhouette for a backend.
    pub fn silhouette(&self, supports_concave: bool) -> Option<Silhouette> {
        self.outline
            .as_ref()
            .map(|outline| Silhouette::new(outline, self.style.elevation, supports_concave))
    }

    /// Item children in menu order.
    pub fn item_components(&self) -> impl Iterator<Item = &ItemComponent> {
        self.children.iter().filter_map(|child| match child {
            BarChild::Item(item) => Some(item),
            _ => None,
        })
    }

    /// Row order of the children.
    pub fn slot_kinds(&self) -> Vec<SlotKind> {
        self.children
            .iter()
            .filter_map(|child| match child {
                BarChild::Item(item) => Some(SlotKind::Item(item.item().position())),
                BarChild::Action(_) => Some(SlotKind::Action),
                BarChild::Placeholder(_) => Some(SlotKind::Placeholder),
                BarChild::Hosted(_) => None,
            })
            .collect()
    }

    /// Position of the item under `point`, if it is inside the outline.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        let outline = self.outline.as_ref()?;
        if !outline.contains(point) {
            return None;
        }
        self.item_components()
            .find(|item| item.is_visible() && item.rect().to_f32().contains(point))
            .map(|item| item.item().position())
    }

    // -- selection ---------------------------------------------------------

    #[inline]
    pub fn selected_index(&self) -> usize {
        self.selection.selected_index()
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.menu.get(self.selection.selected_index())
    }

    pub fn set_on_selected(&mut self, listener: impl FnMut(&Item) + 'static) {
        self.selection.set_on_selected(listener);
    }

    pub fn set_on_reselected(&mut self, listener: impl FnMut(&Item) + 'static) {
        self.selection.set_on_reselected(listener);
    }

    /// Activate the item at `position`, as a tap would.
    ///
    /// # Errors
    ///
    /// `InvalidIdError::PositionOutOfRange` past the end of the menu.
    pub fn activate(&mut self, position: usize) -> Result<Transition> {
        let transition = self.selection.activate(&self.menu, position)?;
        if let Transition::Selected { previous, current } = transition {
            self.refresh_selection(previous, current);
        }
        Ok(transition)
    }

    /// Activate the item with `id`.
    ///
    /// # Errors
    ///
    /// `InvalidIdError::UnknownItem` for an id outside the menu.
    pub fn activate_item(&mut self, id: ItemId) -> Result<Transition> {
        let position = self.menu.require(id)?;
        self.activate(position)
    }

    /// Select the item with `id` without notifying listeners.
    ///
    /// # Errors
    ///
    /// `InvalidIdError::UnknownItem` for an id outside the menu.
    pub fn select_item(&mut self, id: ItemId) -> Result<()> {
        let position = self.menu.require(id)?;
        let previous = self.selection.select(&self.menu, position)?;
        self.refresh_selection(previous, position);
        Ok(())
    }

    // -- badges ------------------------------------------------------------

    /// The badge of `id`, created as a dot badge if missing.
    ///
    /// # Errors
    ///
    /// `InvalidIdError::UnknownItem` for an id outside the menu.
    pub fn get_or_create_badge(&mut self, id: ItemId) -> Result<&mut Badge> {
        let position = self.menu.require(id)?;
        let anchor = self
            .item_components()
            .find(|item| item.item().position() == position)
            .map(|item| (item.icon_bounds(), item.rect()));
        let (metrics, measurer) = (*self.config.badge(), Rc::clone(&self.measurer));

        Ok(self.badges.entry(id).or_insert_with(|| {
            navbar_core::debug!(id = id.0, "badge created");
            let mut badge = Badge::new(metrics, measurer);
            if let Some((icon, rect)) = anchor {
                badge.set_anchor(icon, rect);
            }
            badge
        }))
    }

    pub fn badge(&self, id: ItemId) -> Option<&Badge> {
        self.badges.get(&id)
    }

    pub fn badge_mut(&mut self, id: ItemId) -> Option<&mut Badge> {
        self.badges.get_mut(&id)
    }

    /// Remove the badge of `id`, returning it if there was one.
    ///
    /// # Errors
    ///
    /// `InvalidIdError::UnknownItem` for an id outside the menu.
    pub fn remove_badge(&mut self, id: ItemId) -> Result<Option<Badge>> {
        self.menu.require(id)?;
        Ok(self.badges.remove(&id))
    }

    // -- drawing -----------------------------------------------------------

    /// Draw the bar: background clipped to the outline, items, then badges.
    ///
    /// Does nothing before the first measurement pass.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let Some(outline) = self.outline.as_ref() else {
            return;
        };

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("bar_draw", items = self.menu.len()).entered();

        let path = outline.to_path();
        surface.save();
        if outline.needs_clip() {
            surface.clip_path(&path);
        }
        surface.fill_path(&path, self.style.background);
        for item in self.item_components() {
            item.draw(surface);
        }
        surface.restore();

        for item in self.item_components() {
            if !item.is_visible() {
                continue;
            }
            if let Some(badge) = self.badges.get(&item.item().id()) {
                badge.draw(surface);
            }
        }
    }

    // -- persistence -------------------------------------------------------

    /// Encode the saved state as versioned JSON.
    ///
    /// # Errors
    ///
    /// [`PersistError::Malformed`](crate::stateful::PersistError::Malformed)
    /// if encoding fails.
    #[cfg(feature = "state-persistence")]
    pub fn save_json(&self) -> std::result::Result<String, crate::stateful::PersistError> {
        crate::stateful::VersionedState::pack(self).to_json()
    }

    /// Restore from versioned JSON.
    ///
    /// # Errors
    ///
    /// [`PersistError`](crate::stateful::PersistError) for malformed input or
    /// a version mismatch; the bar is left untouched.
    #[cfg(feature = "state-persistence")]
    pub fn restore_json(
        &mut self,
        json: &str,
    ) -> std::result::Result<(), crate::stateful::PersistError> {
        let state = crate::stateful::VersionedState::<BarState>::decode::<Self>(json)?;
        self.restore_state(state);
        Ok(())
    }

    // -- internals ---------------------------------------------------------

    fn items_mut(&mut self) -> impl Iterator<Item = &mut ItemComponent> {
        self.children.iter_mut().filter_map(|child| match child {
            BarChild::Item(item) => Some(item),
            _ => None,
        })
    }

    fn item_component_mut(&mut self, position: usize) -> Option<&mut ItemComponent> {
        self.items_mut()
            .find(|item| item.item().position() == position)
    }

    fn take_action(&mut self) -> Option<ActionSlotComponent> {
        let index = self
            .children
            .iter()
            .position(|child| matches!(child, BarChild::Action(_)))?;
        match self.children.remove(index) {
            BarChild::Action(action) => Some(action),
            _ => None,
        }
    }

    fn invalidate(&mut self) {
        self.layout = None;
        self.outline = None;
    }

    fn rebuild(&mut self, mut action: Option<ActionSlotComponent>) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "bar_rebuild",
            items = self.menu.len(),
            action = action.is_some()
        )
        .entered();

        let plan = SlotPlan::new(self.menu.len(), action.is_some());
        let selected = self.selection.selected_index();
        let mut children = Vec::with_capacity(plan.len());
        for slot in plan.slots() {
            let child = match *slot {
                SlotKind::Item(position) => self.menu.get(position).map(|item| {
                    BarChild::Item(ItemComponent::new(
                        item.clone(),
                        &self.style,
                        self.config.label_text_size(),
                        Rc::clone(&self.measurer),
                        position == selected,
                    ))
                }),
                SlotKind::Action => action.take().map(BarChild::Action),
                SlotKind::Placeholder => Some(BarChild::Placeholder(Placeholder::new())),
            };
            children.extend(child);
        }
        self.children = children;

        let menu = &self.menu;
        self.badges.retain(|id, _| menu.find(*id).is_some());
        self.invalidate();
        navbar_core::debug!(slots = plan.len(), "bar rebuilt");
    }

    fn refresh_selection(&mut self, previous: usize, current: usize) {
        if self.item_components().count() != self.menu.len() {
            let action = self.take_action();
            self.rebuild(action);
            return;
        }
        for item in self.items_mut() {
            let position = item.item().position();
            if position == previous || position == current {
                item.set_selected(position == current);
            }
        }
    }
}

impl Stateful for BottomNavigationBar {
    type State = BarState;

    fn state_key(&self) -> StateKey {
        StateKey::new("BottomNavigationBar", self.instance_id.clone())
    }

    fn save_state(&self) -> BarState {
        BarState {
            selected_index: self.selection.selected_index(),
            badges: self
                .badges
                .iter()
                .map(|(id, badge)| (*id, badge.number()))
                .collect(),
        }
    }

    fn restore_state(&mut self, state: BarState) {
        let previous = self.selection.selected_index();
        self.selection
            .restore(state.selected_index, self.menu.len());
        let current = self.selection.selected_index();
        self.refresh_selection(previous, current);

        self.badges.retain(|id, _| state.badges.contains_key(id));
        for (id, number) in state.badges {
            let Ok(badge) = self.get_or_create_badge(id) else {
                navbar_core::debug!(id = id.0, "skipping badge for unknown item");
                continue;
            };
            match number {
                Some(n) => badge.set_number(i64::from(n)),
                None => badge.clear_number(),
            }
        }
    }
}

impl core::fmt::Debug for BottomNavigationBar {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BottomNavigationBar")
            .field("instance_id", &self.instance_id)
            .field("menu", &self.menu)
            .field("selection", &self.selection)
            .field("slots", &self.slot_kinds())
            .field("badges", &self.badges)
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawable::{DrawOp, RecordingSurface};
    use navbar_core::error::Error;

    fn specs(n: u32) -> Vec<MenuItemSpec> {
        (1..=n)
            .map(|i| MenuItemSpec::new(i, format!("Tab {i}")).icon("ic"))
            .collect()
    }

    fn bar(n: u32) -> BottomNavigationBar {
        let mut bar = BottomNavigationBar::new(NavBarConfig::default());
        bar.set_menu(specs(n)).unwrap();
        bar
    }

    fn action(height: i32) -> ActionSlotComponent {
        ActionSlotComponent::with_natural_size(Size::new(56, height))
    }

    #[test]
    fn item_count_bounds_exposed() {
        assert_eq!(BottomNavigationBar::max_item_count(), 5);
        assert_eq!(BottomNavigationBar::min_item_count(), 3);
    }

    #[test]
    fn menu_builds_one_child_per_item() {
        let bar = bar(4);
        assert_eq!(bar.item_components().count(), 4);
        assert_eq!(
            bar.slot_kinds(),
            vec![
                SlotKind::Item(0),
                SlotKind::Item(1),
                SlotKind::Item(2),
                SlotKind::Item(3)
            ]
        );
        assert_eq!(bar.selected_index(), 0);
        assert!(bar.item_components().next().unwrap().is_selected());
    }

    #[test]
    fn rejected_menu_leaves_bar_untouched() {
        let mut bar = bar(3);
        let err = bar.set_menu(specs(6)).unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(bar.menu().len(), 3);
        assert_eq!(bar.item_components().count(), 3);
    }

    #[test]
    fn action_slot_is_centered_with_placeholder() {
        let mut bar = bar(3);
        bar.set_action_slot(Some(action(56))).unwrap();
        assert_eq!(
            bar.slot_kinds(),
            vec![
                SlotKind::Item(0),
                SlotKind::Item(1),
                SlotKind::Action,
                SlotKind::Item(2),
                SlotKind::Placeholder
            ]
        );
        bar.set_action_slot(None).unwrap();
        assert_eq!(bar.slot_kinds().len(), 3);
    }

    #[test]
    fn action_slot_rejected_when_menu_is_full() {
        let mut bar = bar(5);
        let err = bar.set_action_slot(Some(action(56))).unwrap_err();
        assert_eq!(
            err,
            Error::Configuration(ConfigurationError::TooManyItems { count: 6, max: 5 })
        );
        assert!(!bar.has_action_slot());
    }

    #[test]
    fn menu_respects_existing_action_slot() {
        let mut bar = BottomNavigationBar::new(NavBarConfig::default());
        bar.set_action_slot(Some(action(56))).unwrap();
        assert!(bar.set_menu(specs(5)).is_err());
        bar.set_menu(specs(2)).unwrap();
        assert_eq!(
            bar.slot_kinds(),
            vec![SlotKind::Item(0), SlotKind::Action, SlotKind::Item(1)]
        );
    }

    #[test]
    fn unknown_child_rejected() {
        struct Overlay;
        impl Component for Overlay {
            fn role(&self) -> SlotRole {
                SlotRole::Other("Overlay")
            }
            fn measure(&mut self, _: MeasureSpec, _: MeasureSpec) -> Size {
                Size::ZERO
            }
            fn measured_size(&self) -> Size {
                Size::ZERO
            }
            fn layout(&mut self, _: Rect) {}
        }

        let mut bar = bar(3);
        let err = bar.add_child(Box::new(Overlay)).unwrap_err();
        assert_eq!(
            err,
            Error::Configuration(ConfigurationError::UnknownChild { role: "Overlay" })
        );
        bar.add_child(Box::new(Placeholder::new())).unwrap();
        let result = bar.measure(400).unwrap();
        assert_eq!(result.child_rects.len(), 4);
        assert_eq!(result.item_width, 100);

        // Hosted children do not survive a rebuild.
        bar.set_menu(specs(3)).unwrap();
        assert_eq!(bar.measure(400).unwrap().child_rects.len(), 3);
    }

    #[test]
    fn measure_places_items_and_anchors_badges() {
        let mut bar = bar(4);
        bar.get_or_create_badge(ItemId(2)).unwrap().set_number(5);
        let result = bar.measure(400).unwrap().clone();
        assert_eq!(result.bar_width, 400);
        assert_eq!(result.child_rects[1], Rect::new(100, 0, 100, 56));

        let item = bar.item_components().nth(1).unwrap();
        let badge = bar.badge(ItemId(2)).unwrap();
        assert_eq!(badge.anchor(), item.icon_bounds());
        assert_eq!(badge.container(), item.rect());
        assert!(badge.should_draw());
        assert_eq!(bar.outline(), Some(&Outline::Full(Rect::new(0, 0, 400, 56))));
    }

    #[test]
    fn hump_mode_composes_hump_outline() {
        let mut bar = bar(4);
        bar.set_action_slot(Some(action(72))).unwrap();
        bar.set_attach_mode(AttachMode::Hump);
        let result = bar.measure(500).unwrap();
        assert!(result.hump_enabled);
        // 72 - 56 + 8, capped at 20
        assert_eq!(result.hump_height, 20.0);
        assert!(matches!(bar.outline(), Some(Outline::Hump(_))));
        assert!(bar.silhouette(false).unwrap().is_degraded());
        assert!(!bar.silhouette(true).unwrap().is_degraded());
    }

    #[test]
    fn style_change_invalidates_layout() {
        let mut bar = bar(3);
        bar.measure(300).unwrap();
        assert!(bar.layout().is_some());
        bar.set_icon_size(32).unwrap();
        assert!(bar.layout().is_none());
        assert!(bar.set_icon_size(-1).is_err());
        assert!(bar.set_hump_padding(-1).is_err());
        assert!(bar.set_content_spacing(-1).is_err());
        assert_eq!(bar.style().icon_size_px(), 32);
    }

    #[test]
    fn activation_refreshes_item_states() {
        let mut bar = bar(3);
        let transition = bar.activate_item(ItemId(3)).unwrap();
        assert_eq!(
            transition,
            Transition::Selected {
                previous: 0,
                current: 2
            }
        );
        let selected: Vec<bool> = bar.item_components().map(|c| c.is_selected()).collect();
        assert_eq!(selected, vec![false, false, true]);
        assert_eq!(bar.selected_item().map(Item::id), Some(ItemId(3)));
        assert!(bar.activate_item(ItemId(99)).unwrap_err().is_invalid_id());
    }

    #[test]
    fn select_item_is_silent_but_refreshes() {
        let mut bar = bar(3);
        let fired = Rc::new(std::cell::Cell::new(false));
        let flag = Rc::clone(&fired);
        bar.set_on_selected(move |_| flag.set(true));
        bar.select_item(ItemId(2)).unwrap();
        assert!(!fired.get());
        assert_eq!(bar.selected_index(), 1);
        assert!(bar.item_components().nth(1).unwrap().is_selected());
    }

    #[test]
    fn disabled_item_cannot_be_activated() {
        let mut bar = bar(3);
        bar.set_item_enabled(ItemId(2), false).unwrap();
        assert_eq!(bar.activate(1).unwrap(), Transition::Ignored);
        assert!(!bar.menu().get(1).unwrap().is_enabled());
    }

    #[test]
    fn hidden_item_leaves_layout() {
        let mut bar = bar(4);
        bar.set_item_visible(ItemId(4), false).unwrap();
        let result = bar.measure(300).unwrap();
        assert_eq!(result.item_width, 100);
        assert!(result.child_rects[3].is_empty());
    }

    #[test]
    fn badges_keyed_by_id() {
        let mut bar = bar(3);
        assert!(bar.get_or_create_badge(ItemId(9)).unwrap_err().is_invalid_id());
        bar.get_or_create_badge(ItemId(1)).unwrap().set_number(3);
        // Existing badge returned, not replaced.
        assert_eq!(bar.get_or_create_badge(ItemId(1)).unwrap().number(), Some(3));
        assert!(bar.remove_badge(ItemId(1)).unwrap().is_some());
        assert!(bar.remove_badge(ItemId(1)).unwrap().is_none());
        assert!(bar.remove_badge(ItemId(9)).is_err());
    }

    #[test]
    fn badges_die_with_their_items() {
        let mut bar = bar(4);
        bar.get_or_create_badge(ItemId(4)).unwrap();
        bar.get_or_create_badge(ItemId(1)).unwrap();
        bar.set_menu(specs(3)).unwrap();
        assert!(bar.badge(ItemId(4)).is_none());
        assert!(bar.badge(ItemId(1)).is_some());
    }

    #[test]
    fn draw_clips_then_paints_items_and_badges() {
        let mut bar = bar(3);
        bar.set_action_slot(None).unwrap();
        bar.get_or_create_badge(ItemId(1)).unwrap().set_number(12);
        bar.measure(300).unwrap();

        let mut surface = RecordingSurface::default();
        bar.draw(&mut surface);
        assert_eq!(surface.ops[0], DrawOp::Save);
        assert!(matches!(surface.ops[1], DrawOp::FillPath { .. }));
        assert_eq!(surface.icons().count(), 3);
        assert_eq!(
            surface.texts().collect::<Vec<_>>(),
            vec!["Tab 1", "Tab 2", "Tab 3", "12"]
        );
        let restore = surface.ops.iter().position(|op| *op == DrawOp::Restore).unwrap();
        let badge = surface
            .ops
            .iter()
            .position(|op| matches!(op, DrawOp::FillRoundRect { .. }))
            .unwrap();
        assert!(badge > restore);
    }

    #[test]
    fn draw_before_measure_is_noop() {
        let bar = bar(3);
        let mut surface = RecordingSurface::default();
        bar.draw(&mut surface);
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn hit_test_respects_outline() {
        let mut bar = bar(4);
        bar.set_action_slot(Some(action(90))).unwrap();
        bar.set_attach_mode(AttachMode::Overlap);
        bar.measure(500).unwrap();
        // Band starts at 90 - 56 = 34.
        assert_eq!(bar.hit_test(Point::new(50.0, 60.0)), Some(0));
        assert_eq!(bar.hit_test(Point::new(50.0, 10.0)), None);
        assert_eq!(bar.hit_test(Point::new(450.0, 60.0)), Some(3));
    }

    #[test]
    fn save_and_restore_round_trip() {
        let mut bar = bar(4);
        bar.activate(2).unwrap();
        bar.get_or_create_badge(ItemId(1)).unwrap().set_number(1500);
        bar.get_or_create_badge(ItemId(3)).unwrap();
        let saved = bar.save_state();

        let mut fresh = self::bar(4);
        fresh.get_or_create_badge(ItemId(2)).unwrap();
        fresh.restore_state(saved.clone());
        assert_eq!(fresh.selected_index(), 2);
        assert_eq!(fresh.badge(ItemId(1)).unwrap().label(), "999+");
        assert!(!fresh.badge(ItemId(3)).unwrap().has_number());
        assert!(fresh.badge(ItemId(2)).is_none());
        assert_eq!(fresh.save_state(), saved);
    }

    #[test]
    fn restore_clamps_index_and_skips_unknown_badges() {
        let mut bar = bar(3);
        bar.restore_state(BarState {
            selected_index: 8,
            badges: BTreeMap::from([(ItemId(77), Some(1))]),
        });
        assert_eq!(bar.selected_index(), 2);
        assert!(bar.badge(ItemId(77)).is_none());
        assert!(bar.item_components().nth(2).unwrap().is_selected());
    }

    #[test]
    fn state_key_uses_instance_id() {
        let bar = BottomNavigationBar::new(NavBarConfig::default()).with_instance_id("main");
        assert_eq!(bar.state_key().canonical(), "BottomNavigationBar::main");
    }
}
