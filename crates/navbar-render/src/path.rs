#![forbid(unsafe_code)]

//! Vector paths.
//!
//! A [`Path`] is a list of drawing commands. Queries run over a flattened
//! copy where each cubic is replaced by [`CURVE_SEGMENTS`] line segments.

use navbar_core::geometry::{Point, RectF};
use smallvec::SmallVec;

/// Line segments per cubic when flattening.
pub const CURVE_SEGMENTS: usize = 16;

/// A single drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath.
    MoveTo(Point),
    /// Straight line from the current point.
    LineTo(Point),
    /// Cubic bezier from the current point.
    CubicTo {
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    /// Close the current subpath.
    Close,
}

/// A sequence of subpaths.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: SmallVec<[PathCommand; 12]>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A closed rectangle, clockwise from the top-left corner.
    #[must_use]
    pub fn from_rect(rect: RectF) -> Self {
        let mut path = Self::new();
        path.add_rect(rect);
        path
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    pub fn cubic_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) -> &mut Self {
        self.commands.push(PathCommand::CubicTo { ctrl1, ctrl2, to });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Append a closed rectangle subpath.
    pub fn add_rect(&mut self, rect: RectF) -> &mut Self {
        self.move_to(rect.left, rect.top)
            .line_to(rect.right, rect.top)
            .line_to(rect.right, rect.bottom)
            .line_to(rect.left, rect.bottom)
            .close()
    }

    #[inline]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Flatten into polygons, one per subpath.
    ///
    /// Drawing commands before the first `MoveTo` start at the origin.
    pub fn flatten(&self) -> Vec<Vec<Point>> {
        let mut polygons = Vec::new();
        let mut current: Vec<Point> = Vec::new();
        let mut pen = Point::default();

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    if current.len() > 1 {
                        polygons.push(std::mem::take(&mut current));
                    }
                    current.clear();
                    current.push(p);
                    pen = p;
                }
                PathCommand::LineTo(p) => {
                    if current.is_empty() {
                        current.push(pen);
                    }
                    current.push(p);
                    pen = p;
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    if current.is_empty() {
                        current.push(pen);
                    }
                    let from = pen;
                    current.extend((1..=CURVE_SEGMENTS).map(|i| {
                        cubic_point(from, ctrl1, ctrl2, to, i as f32 / CURVE_SEGMENTS as f32)
                    }));
                    pen = to;
                }
                PathCommand::Close => {
                    if current.len() > 1 {
                        pen = current[0];
                        polygons.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if current.len() > 1 {
            polygons.push(current);
        }
        polygons
    }

    /// Bounding box of the flattened path; empty for an empty path.
    pub fn bounds(&self) -> RectF {
        let mut points = self.flatten().into_iter().flatten();
        let Some(first) = points.next() else {
            return RectF::default();
        };
        let mut bounds = RectF::new(first.x, first.y, first.x, first.y);
        for p in points {
            bounds.include(p);
        }
        bounds
    }

    /// Whether the path is a single convex polygon.
    ///
    /// Collinear runs are allowed; more than one subpath is never convex.
    pub fn is_convex(&self) -> bool {
        let polygons = self.flatten();
        let [polygon] = polygons.as_slice() else {
            return false;
        };

        let mut points: Vec<Point> = Vec::with_capacity(polygon.len());
        for &p in polygon {
            if points.last() != Some(&p) {
                points.push(p);
            }
        }
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        if points.len() < 3 {
            return false;
        }

        let n = points.len();
        let mut sign = 0.0f32;
        for i in 0..n {
            let cross = cross(points[i], points[(i + 1) % n], points[(i + 2) % n]);
            if cross.abs() <= f32::EPSILON {
                continue;
            }
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }
        sign != 0.0
    }

    /// Point containment using the non-zero winding rule.
    pub fn contains(&self, point: Point) -> bool {
        self.flatten()
            .iter()
            .map(|polygon| winding_number(polygon, point))
            .sum::<i32>()
            != 0
    }
}

/// Evaluate a cubic bezier at `t`.
pub fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f32) -> Point {
    let u = 1.0 - t;
    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;
    Point::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

/// Z component of `(b - a) x (c - b)`.
#[inline]
fn cross(a: Point, b: Point, c: Point) -> f32 {
    (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x)
}

/// Signed side of `p` relative to the directed edge `a -> b`.
#[inline]
fn side(a: Point, b: Point, p: Point) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)
}

fn winding_number(polygon: &[Point], p: Point) -> i32 {
    let n = polygon.len();
    let mut winding = 0;
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        if a.y <= p.y {
            if b.y > p.y && side(a, b, p) > 0.0 {
                winding += 1;
            }
        } else if b.y <= p.y && side(a, b, p) < 0.0 {
            winding -= 1;
        }
    }
    winding
}
