#![forbid(unsafe_code)]

//! Numeric and dot badges anchored to an item's icon.
//!
//! | Number      | Shape    | Label        | Half extent                        |
//! |-------------|----------|--------------|------------------------------------|
//! | none        | `Circle` | empty        | without-text radius                |
//! | `0..=9`     | `Circle` | the digit    | with-text radius                   |
//! | `10..=999`  | `Pill`   | the number   | text width / 2 + padding, radius   |
//! | `> 999`     | `Pill`   | `"999+"`     | text width / 2 + padding, radius   |
//!
//! The badge center sits on the anchor's top edge, pulled back over the
//! anchor's right edge by a per-shape offset. Placement does not depend on
//! layout direction. Geometry is recomputed on
//! every change to the number, anchor or container; the draw gates (empty
//! container, zero alpha, hidden) never touch it.

use std::rc::Rc;

use navbar_core::color::Color;
use navbar_core::config::BadgeMetrics;
use navbar_core::geometry::{Point, Rect, RectF};

use crate::drawable::Surface;
use crate::text::TextMeasurer;

/// Largest number shown verbatim.
pub const MAX_BADGE_NUMBER: u32 = 999;

/// Label shown above [`MAX_BADGE_NUMBER`].
pub const OVERFLOW_LABEL: &str = "999+";

/// Outline of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BadgeShape {
    #[default]
    Circle,
    /// Rounded rectangle with fully rounded ends.
    Pill,
}

/// Computed badge shape and position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BadgeGeometry {
    pub shape: BadgeShape,
    pub label: String,
    pub center: Point,
    pub half_width: f32,
    pub half_height: f32,
    pub bounds: RectF,
    pub corner_radius: f32,
}

impl BadgeGeometry {
    /// Compute the geometry for `number` anchored to `anchor`.
    pub fn compute(
        number: Option<u32>,
        anchor: Rect,
        metrics: &BadgeMetrics,
        measurer: &dyn TextMeasurer,
    ) -> Self {
        let label = match number {
            None => String::new(),
            Some(n) if n > MAX_BADGE_NUMBER => OVERFLOW_LABEL.to_owned(),
            Some(n) => n.to_string(),
        };

        let (shape, half_width, half_height, offset) = match number {
            None => {
                let r = metrics.without_text_radius as f32;
                (BadgeShape::Circle, r, r, metrics.without_text_offset)
            }
            Some(0..=9) => {
                let r = metrics.with_text_radius as f32;
                (BadgeShape::Circle, r, r, metrics.with_text_offset)
            }
            Some(_) => {
                let text_width = measurer.measure(&label, metrics.text_size).width;
                (
                    BadgeShape::Pill,
                    text_width / 2.0 + metrics.text_horizontal_padding as f32,
                    metrics.with_text_radius as f32,
                    metrics.with_text_offset,
                )
            }
        };

        let center = Point::new(
            anchor.right() as f32 + half_width - offset as f32,
            anchor.top() as f32,
        );

        Self {
            shape,
            label,
            center,
            half_width,
            half_height,
            bounds: RectF::from_center(center, half_width, half_height),
            corner_radius: half_height,
        }
    }
}

/// A badge owned by one navigation item.
#[derive(Clone)]
pub struct Badge {
    number: Option<u32>,
    anchor: Rect,
    container: Rect,
    alpha: u8,
    visible: bool,
    metrics: BadgeMetrics,
    measurer: Rc<dyn TextMeasurer>,
    geometry: BadgeGeometry,
}

impl Badge {
    /// A dot badge with no anchor yet.
    pub fn new(metrics: BadgeMetrics, measurer: Rc<dyn TextMeasurer>) -> Self {
        let mut badge = Self {
            number: None,
            anchor: Rect::default(),
            container: Rect::default(),
            alpha: 255,
            visible: true,
            metrics,
            measurer,
            geometry: BadgeGeometry::default(),
        };
        badge.recompute();
        badge
    }

    #[inline]
    pub fn number(&self) -> Option<u32> {
        self.number
    }

    #[inline]
    pub fn has_number(&self) -> bool {
        self.number.is_some()
    }

    /// Set the number; negative values clamp to zero.
    pub fn set_number(&mut self, number: i64) {
        let clamped = u32::try_from(number.max(0)).unwrap_or(u32::MAX);
        if self.number != Some(clamped) {
            self.number = Some(clamped);
            self.recompute();
        }
    }

    /// Back to a dot badge.
    pub fn clear_number(&mut self) {
        if self.number.take().is_some() {
            self.recompute();
        }
    }

    /// Anchor to an icon inside its container.
    pub fn set_anchor(&mut self, anchor: Rect, container: Rect) {
        if self.anchor != anchor || self.container != container {
            self.anchor = anchor;
            self.container = container;
            self.recompute();
        }
    }

    #[inline]
    pub fn anchor(&self) -> Rect {
        self.anchor
    }

    #[inline]
    pub fn container(&self) -> Rect {
        self.container
    }

    #[inline]
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    pub fn set_alpha(&mut self, alpha: u8) {
        self.alpha = alpha;
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[inline]
    pub fn geometry(&self) -> &BadgeGeometry {
        &self.geometry
    }

    #[inline]
    pub fn shape(&self) -> BadgeShape {
        self.geometry.shape
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.geometry.label
    }

    #[inline]
    pub fn bounds(&self) -> RectF {
        self.geometry.bounds
    }

    /// Whether [`draw`](Self::draw) will paint anything.
    pub fn should_draw(&self) -> bool {
        !self.container.is_empty() && self.alpha > 0 && self.visible
    }

    /// Paint the badge. Returns `false` when a draw gate suppressed it.
    pub fn draw(&self, surface: &mut dyn Surface) -> bool {
        if !self.should_draw() {
            return false;
        }

        let g = &self.geometry;
        surface.fill_round_rect(g.bounds, g.corner_radius, self.tinted(self.metrics.background));
        if !g.label.is_empty() {
            let text = self.measurer.measure(&g.label, self.metrics.text_size);
            let baseline = g.center.y + (text.ascent - text.descent) / 2.0;
            surface.draw_text(
                &g.label,
                Point::new(g.center.x, baseline),
                self.metrics.text_size,
                self.tinted(self.metrics.text_color),
            );
        }
        true
    }

    fn tinted(&self, color: Color) -> Color {
        let alpha = u16::from(color.alpha()) * u16::from(self.alpha) / 255;
        color.with_alpha(alpha as u8)
    }

    fn recompute(&mut self) {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("badge_recompute", number = ?self.number).entered();

        self.geometry = BadgeGeometry::compute(
            self.number,
            self.anchor,
            &self.metrics,
            self.measurer.as_ref(),
        );
    }
}

impl core::fmt::Debug for Badge {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Badge")
            .field("number", &self.number)
            .field("anchor", &self.anchor)
            .field("container", &self.container)
            .field("alpha", &self.alpha)
            .field("visible", &self.visible)
            .field("geometry", &self.geometry)
            .finish_non_exhaustive()
    }
}
