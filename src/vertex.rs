//! Points and Polygons

use crate::color::Rgb8;

/// Position in image space
///
/// Coordinates are single precision; the fill boundaries depend on
/// `f32` rounding of the scanline and intercept arithmetic.
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point at (`x`,`y`)
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
    /// Nearest pixel, rounding half-way cases away from zero
    ///
    ///     use polyraster::Point;
    ///     assert_eq!(Point::new(2.5, -2.5).round(), (3, -3));
    ///     assert_eq!(Point::new(2.49, 0.0).round(), (2, 0));
    ///
    pub fn round(&self) -> (i64, i64) {
        (self.x.round() as i64, self.y.round() as i64)
    }
}

impl From<(f32,f32)> for Point {
    fn from((x,y): (f32,f32)) -> Self {
        Point::new(x, y)
    }
}
impl From<(f64,f64)> for Point {
    fn from((x,y): (f64,f64)) -> Self {
        Point::new(x as f32, y as f32)
    }
}

/// Axis aligned bounds of a set of points
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Bounds {
    /// Bounds of `points`, None if there are no points
    pub fn of(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let init = Bounds { min_x: first.x, max_x: first.x,
                            min_y: first.y, max_y: first.y };
        Some(points[1..].iter().fold(init, |b, p| {
            Bounds { min_x: b.min_x.min(p.x), max_x: b.max_x.max(p.x),
                     min_y: b.min_y.min(p.y), max_y: b.max_y.max(p.y) }
        }))
    }
}

/// Closed polygon with an outline and a fill color
///
/// The last point is implicitly connected to the first.
#[derive(Debug,Clone,PartialEq)]
pub struct Polygon {
    pub points: Vec<Point>,
    pub line_color: Rgb8,
    pub fill_color: Rgb8,
}

impl Polygon {
    /// Create a new polygon from `points`
    pub fn new<P: Into<Point>>(points: Vec<P>, line_color: Rgb8, fill_color: Rgb8) -> Self {
        let points = points.into_iter().map(|p| p.into()).collect();
        Self { points, line_color, fill_color }
    }
    /// Number of vertices
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
