#![forbid(unsafe_code)]

//! Immutable engine configuration.
//!
//! [`NavBarConfig`] holds every fixed dimension the layout, shape and badge
//! computations depend on. It is built once through [`NavBarConfigBuilder`],
//! which rejects negative dimensions, and then passed by reference.
//!
//! Default values are pixel sizes at a 1x density.

use crate::color::Color;
use crate::error::{Result, non_negative};

/// Fixed dimensions for badge geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeMetrics {
    /// Radius of a badge without a number (a dot).
    pub without_text_radius: i32,
    /// Radius of a numbered badge; also the half height of a pill.
    pub with_text_radius: i32,
    /// Padding added on each side of a pill's label.
    pub text_horizontal_padding: i32,
    /// How far a numbered badge is pulled back over the anchor's right edge.
    pub with_text_offset: i32,
    /// How far a dot badge is pulled back over the anchor's right edge.
    pub without_text_offset: i32,
    /// Label text size.
    pub text_size: f32,
    /// Fill color of the badge background.
    pub background: Color,
    /// Label color.
    pub text_color: Color,
}

impl Default for BadgeMetrics {
    fn default() -> Self {
        Self {
            without_text_radius: 4,
            with_text_radius: 8,
            text_horizontal_padding: 4,
            with_text_offset: 6,
            without_text_offset: 3,
            text_size: 10.0,
            background: Color::RED,
            text_color: Color::WHITE,
        }
    }
}

/// Fixed dimensions for the bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavBarConfig {
    item_height: i32,
    max_hump_height: i32,
    hump_padding: i32,
    icon_size: i32,
    content_spacing: i32,
    label_text_size: f32,
    badge: BadgeMetrics,
}

impl NavBarConfig {
    /// Maximum number of slots (action slot included).
    pub const MAX_ITEM_COUNT: usize = 5;
    /// Minimum number of slots (action slot included).
    pub const MIN_ITEM_COUNT: usize = 3;

    /// Start a builder seeded with the default dimensions.
    #[must_use]
    pub fn builder() -> NavBarConfigBuilder {
        NavBarConfigBuilder::default()
    }

    /// Height every regular item is measured at.
    #[inline]
    pub const fn item_height(&self) -> i32 {
        self.item_height
    }

    /// Upper bound for the hump height.
    #[inline]
    pub const fn max_hump_height(&self) -> i32 {
        self.max_hump_height
    }

    /// Default padding between the hump and a tall action slot.
    #[inline]
    pub const fn hump_padding(&self) -> i32 {
        self.hump_padding
    }

    /// Default icon size.
    #[inline]
    pub const fn icon_size(&self) -> i32 {
        self.icon_size
    }

    /// Default spacing between icon and label.
    #[inline]
    pub const fn content_spacing(&self) -> i32 {
        self.content_spacing
    }

    /// Label text size.
    #[inline]
    pub const fn label_text_size(&self) -> f32 {
        self.label_text_size
    }

    /// Badge dimensions.
    #[inline]
    pub const fn badge(&self) -> &BadgeMetrics {
        &self.badge
    }
}

impl Default for NavBarConfig {
    fn default() -> Self {
        let b = NavBarConfigBuilder::default();
        Self {
            item_height: b.item_height,
            max_hump_height: b.max_hump_height,
            hump_padding: b.hump_padding,
            icon_size: b.icon_size,
            content_spacing: b.content_spacing,
            label_text_size: b.label_text_size,
            badge: b.badge,
        }
    }
}

/// Builder for [`NavBarConfig`].
#[derive(Debug, Clone, Copy)]
pub struct NavBarConfigBuilder {
    item_height: i32,
    max_hump_height: i32,
    hump_padding: i32,
    icon_size: i32,
    content_spacing: i32,
    label_text_size: f32,
    badge: BadgeMetrics,
}

impl Default for NavBarConfigBuilder {
    fn default() -> Self {
        Self {
            item_height: 56,
            max_hump_height: 20,
            hump_padding: 8,
            icon_size: 24,
            content_spacing: 4,
            label_text_size: 12.0,
            badge: BadgeMetrics::default(),
        }
    }
}

impl NavBarConfigBuilder {
    #[must_use]
    pub fn item_height(mut self, px: i32) -> Self {
        self.item_height = px;
        self
    }

    #[must_use]
    pub fn max_hump_height(mut self, px: i32) -> Self {
        self.max_hump_height = px;
        self
    }

    #[must_use]
    pub fn hump_padding(mut self, px: i32) -> Self {
        self.hump_padding = px;
        self
    }

    #[must_use]
    pub fn icon_size(mut self, px: i32) -> Self {
        self.icon_size = px;
        self
    }

    #[must_use]
    pub fn content_spacing(mut self, px: i32) -> Self {
        self.content_spacing = px;
        self
    }

    #[must_use]
    pub fn label_text_size(mut self, size: f32) -> Self {
        self.label_text_size = size;
        self
    }

    #[must_use]
    pub fn badge(mut self, badge: BadgeMetrics) -> Self {
        self.badge = badge;
        self
    }

    /// Validate and freeze the configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::NegativeDimension`](crate::ConfigurationError::NegativeDimension)
    /// naming the first negative dimension.
    pub fn build(self) -> Result<NavBarConfig> {
        Ok(NavBarConfig {
            item_height: non_negative("item_height", self.item_height)?,
            max_hump_height: non_negative("max_hump_height", self.max_hump_height)?,
            hump_padding: non_negative("hump_padding", self.hump_padding)?,
            icon_size: non_negative("icon_size", self.icon_size)?,
            content_spacing: non_negative("content_spacing", self.content_spacing)?,
            label_text_size: self.label_text_size.max(0.0),
            badge: BadgeMetrics {
                without_text_radius: non_negative(
                    "badge.without_text_radius",
                    self.badge.without_text_radius,
                )?,
                with_text_radius: non_negative(
                    "badge.with_text_radius",
                    self.badge.with_text_radius,
                )?,
                text_horizontal_padding: non_negative(
                    "badge.text_horizontal_padding",
                    self.badge.text_horizontal_padding,
                )?,
                text_size: self.badge.text_size.max(0.0),
                ..self.badge
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigurationError, Error};

    #[test]
    fn default_matches_builder_default() {
        let built = NavBarConfig::builder().build().unwrap();
        assert_eq!(built, NavBarConfig::default());
        assert_eq!(built.item_height(), 56);
        assert_eq!(built.max_hump_height(), 20);
    }

    #[test]
    fn builder_overrides() {
        let config = NavBarConfig::builder()
            .item_height(48)
            .max_hump_height(12)
            .hump_padding(2)
            .build()
            .unwrap();
        assert_eq!(config.item_height(), 48);
        assert_eq!(config.max_hump_height(), 12);
        assert_eq!(config.hump_padding(), 2);
    }

    #[test]
    fn negative_item_height_rejected() {
        let err = NavBarConfig::builder().item_height(-1).build().unwrap_err();
        assert_eq!(
            err,
            Error::Configuration(ConfigurationError::NegativeDimension {
                name: "item_height",
                value: -1,
            })
        );
    }

    #[test]
    fn negative_badge_radius_rejected() {
        let badge = BadgeMetrics {
            with_text_radius: -8,
            ..BadgeMetrics::default()
        };
        assert!(NavBarConfig::builder().badge(badge).build().is_err());
    }

    #[test]
    fn item_count_bounds() {
        assert_eq!(NavBarConfig::MIN_ITEM_COUNT, 3);
        assert_eq!(NavBarConfig::MAX_ITEM_COUNT, 5);
    }
}
