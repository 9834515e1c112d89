#![forbid(unsafe_code)]

//! Drawing capabilities implemented by the host.
//!
//! The bar never rasterizes anything itself. It issues commands against a
//! [`Surface`]; icons and backgrounds are [`Drawable`]s.

use navbar_core::color::Color;
use navbar_core::geometry::{Point, Rect, RectF, Size};
use navbar_render::Path;

use crate::menu::IconRef;
use crate::style::ItemState;

/// A drawing target.
pub trait Surface {
    /// Push the current clip.
    fn save(&mut self);

    /// Pop back to the last saved clip.
    fn restore(&mut self);

    /// Intersect the clip with `path`.
    fn clip_path(&mut self, path: &Path);

    fn fill_path(&mut self, path: &Path, color: Color);

    fn fill_rect(&mut self, rect: RectF, color: Color);

    fn fill_round_rect(&mut self, rect: RectF, radius: f32, color: Color);

    /// Draw `text` horizontally centered on `origin.x` with its baseline at
    /// `origin.y`.
    fn draw_text(&mut self, text: &str, origin: Point, size: f32, color: Color);

    fn draw_icon(&mut self, icon: &IconRef, bounds: Rect, tint: Color);

    /// Press feedback. Hosts without ripples may ignore this.
    fn draw_ripple(&mut self, bounds: Rect, color: Color, unbounded: bool) {
        let _ = (bounds, color, unbounded);
    }
}

/// Something that draws itself into a rectangle.
pub trait Drawable {
    fn draw(&self, surface: &mut dyn Surface, bounds: Rect);

    /// Update the drawable state. Returns `true` if the appearance changed.
    fn set_state(&mut self, state: ItemState) -> bool {
        let _ = state;
        false
    }

    /// Preferred size, if the drawable has one.
    fn intrinsic_size(&self) -> Option<Size> {
        None
    }
}

/// One recorded [`Surface`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Save,
    Restore,
    Clip(Path),
    FillPath { path: Path, color: Color },
    FillRect { rect: RectF, color: Color },
    FillRoundRect { rect: RectF, radius: f32, color: Color },
    Text { text: String, origin: Point, size: f32, color: Color },
    Icon { icon: IconRef, bounds: Rect, tint: Color },
    Ripple { bounds: Rect, color: Color, unbounded: bool },
}

/// A [`Surface`] that records every call, for snapshot-style tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn icons(&self) -> impl Iterator<Item = (&IconRef, Rect, Color)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Icon { icon, bounds, tint } => Some((icon, *bounds, *tint)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }

    fn clip_path(&mut self, path: &Path) {
        self.ops.push(DrawOp::Clip(path.clone()));
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        self.ops.push(DrawOp::FillPath {
            path: path.clone(),
            color,
        });
    }

    fn fill_rect(&mut self, rect: RectF, color: Color) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn fill_round_rect(&mut self, rect: RectF, radius: f32, color: Color) {
        self.ops.push(DrawOp::FillRoundRect {
            rect,
            radius,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, size: f32, color: Color) {
        self.ops.push(DrawOp::Text {
            text: text.to_owned(),
            origin,
            size,
            color,
        });
    }

    fn draw_icon(&mut self, icon: &IconRef, bounds: Rect, tint: Color) {
        self.ops.push(DrawOp::Icon {
            icon: icon.clone(),
            bounds,
            tint,
        });
    }

    fn draw_ripple(&mut self, bounds: Rect, color: Color, unbounded: bool) {
        self.ops.push(DrawOp::Ripple {
            bounds,
            color,
            unbounded,
        });
    }
}
