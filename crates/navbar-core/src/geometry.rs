#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Integer [`Rect`]s describe pixel-aligned layout slots; [`RectF`] and
//! [`Point`] carry the fractional values produced by hump and badge
//! geometry.

/// Measured width and height of a component, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// A pixel rectangle for layout slots, anchors and hit testing.
///
/// Origin at top-left; `x`/`y` may be negative when a mirrored placement or
/// an anchor computation reaches past the container edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: i32,
    /// Top edge (inclusive).
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from its four edges.
    #[inline]
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Left edge (inclusive). Alias for `self.x`.
    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// Top edge (inclusive). Alias for `self.y`.
    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Horizontal center, rounded toward the left edge.
    #[inline]
    pub const fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    /// Check if the rectangle has zero (or negative) area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Translate the rectangle by the given offset.
    #[inline]
    pub const fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Convert to a fractional rectangle.
    #[inline]
    pub fn to_f32(&self) -> RectF {
        RectF::new(
            self.left() as f32,
            self.top() as f32,
            self.right() as f32,
            self.bottom() as f32,
        )
    }
}

/// A point with fractional coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle with fractional edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    /// Create a rectangle from its four edges.
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle extending `half_width`/`half_height` around a center.
    #[inline]
    pub fn from_center(center: Point, half_width: f32, half_height: f32) -> Self {
        Self::new(
            center.x - half_width,
            center.y - half_height,
            center.x + half_width,
            center.y + half_height,
        )
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Check if a point is inside the rectangle (right/bottom exclusive).
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }

    /// Grow the rectangle so it includes `point`.
    pub fn include(&mut self, point: Point) {
        self.left = self.left.min(point.x);
        self.top = self.top.min(point.y);
        self.right = self.right.max(point.x);
        self.bottom = self.bottom.max(point.y);
    }
}
