#![forbid(unsafe_code)]

//! Bar outline composition.
//!
//! | Layout                 | Outline                                  |
//! |------------------------|------------------------------------------|
//! | hump enabled           | band with a cubic bulge around the center |
//! | overlap, no hump       | bottom `item_height` band                |
//! | anything else          | the full bar rectangle                   |

use crate::path::Path;
use navbar_core::geometry::{Point, Rect, RectF};
use navbar_layout::{AttachMode, LayoutResult};

/// Clip and shadow shape of the bar.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// The whole bar; no clipping needed.
    Full(Rect),
    /// The bottom band the items occupy, for an overlapping action slot.
    Band(Rect),
    /// Band plus hump.
    Hump(Path),
}

impl Outline {
    /// Whether drawing must be clipped to this outline.
    #[inline]
    pub fn needs_clip(&self) -> bool {
        !matches!(self, Self::Full(_))
    }

    pub fn bounds(&self) -> RectF {
        match self {
            Self::Full(rect) | Self::Band(rect) => rect.to_f32(),
            Self::Hump(path) => path.bounds(),
        }
    }

    pub fn is_convex(&self) -> bool {
        match self {
            Self::Full(_) | Self::Band(_) => true,
            Self::Hump(path) => path.is_convex(),
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        match self {
            Self::Full(rect) | Self::Band(rect) => rect.to_f32().contains(point),
            Self::Hump(path) => path.contains(point),
        }
    }

    /// The outline as a path.
    pub fn to_path(&self) -> Path {
        match self {
            Self::Full(rect) | Self::Band(rect) => Path::from_rect(rect.to_f32()),
            Self::Hump(path) => path.clone(),
        }
    }
}

/// Builds the [`Outline`] for a layout pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeComposer;

impl ShapeComposer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    pub fn compose(&self, layout: &LayoutResult) -> Outline {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "outline_compose",
            bar_width = layout.bar_width,
            bar_height = layout.bar_height,
            hump = layout.hump_enabled
        )
        .entered();

        if layout.hump_enabled {
            return Outline::Hump(hump_path(layout));
        }
        if layout.attach_mode == Some(AttachMode::Overlap) {
            return Outline::Band(Rect::from_ltrb(
                0,
                layout.bar_height - layout.item_height,
                layout.bar_width,
                layout.bar_height,
            ));
        }
        Outline::Full(layout.bar_rect())
    }
}

/// Top edge at `hump_height`, bulging up to `y = 0` over `hump_width`.
fn hump_path(layout: &LayoutResult) -> Path {
    let width = layout.bar_width as f32;
    let height = layout.bar_height as f32;
    let hump_w = layout.hump_width;
    let hump_h = layout.hump_height;

    let start = (width - hump_w) / 2.0;
    let quarter = hump_w / 4.0;
    let apex = start + hump_w / 2.0;
    let end = start + hump_w;

    let mut path = Path::new();
    path.move_to(0.0, hump_h)
        .line_to(start, hump_h)
        .cubic_to(
            Point::new(start + quarter, hump_h),
            Point::new(start + quarter, 0.0),
            Point::new(apex, 0.0),
        )
        .cubic_to(
            Point::new(end - quarter, 0.0),
            Point::new(end - quarter, hump_h),
            Point::new(end, hump_h),
        )
        .line_to(width, hump_h)
        .line_to(width, height)
        .line_to(0.0, height)
        .close();
    path
}

/// What a shadow backend is handed.
#[derive(Debug, Clone, PartialEq)]
pub enum SilhouetteShape {
    Path(Path),
    Rect(RectF),
}

/// The outline as an elevation shadow caster.
#[derive(Debug, Clone, PartialEq)]
pub struct Silhouette {
    shape: SilhouetteShape,
    elevation: f32,
}

impl Silhouette {
    /// Build the silhouette for a backend.
    ///
    /// Concave outlines fall back to their bounding rectangle when
    /// `supports_concave` is false.
    pub fn new(outline: &Outline, elevation: f32, supports_concave: bool) -> Self {
        let shape = if supports_concave || outline.is_convex() {
            SilhouetteShape::Path(outline.to_path())
        } else {
            SilhouetteShape::Rect(outline.bounds())
        };
        Self {
            shape,
            elevation: elevation.max(0.0),
        }
    }

    #[inline]
    pub fn shape(&self) -> &SilhouetteShape {
        &self.shape
    }

    #[inline]
    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    /// Whether the silhouette was reduced to its bounds.
    #[inline]
    pub fn is_degraded(&self) -> bool {
        matches!(self.shape, SilhouetteShape::Rect(_))
    }
}
