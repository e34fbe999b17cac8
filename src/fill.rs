//! Polygon Filler
//!
//! Scanline fill using the even-odd rule. Rows are visited with a
//! single precision `y` starting at the top of the bounding box and
//! stepping by exactly 1.0 while `y <= max_y`, so a polygon whose top
//! lies between pixel rows is sampled at fractional heights. Crossing
//! tests and intercepts are computed in `f32` as well.

use crate::buffer::Framebuffer;
use crate::color::Rgb8;
use crate::scan::Scanline;
use crate::vertex::{Bounds, Point};

use log::{debug, trace};

/// Does the edge from `a` to `b` cross the horizontal line at `y`
///
/// Half open in y, so a vertex shared by two edges is counted once.
/// Horizontal edges never cross.
fn crosses(a: &Point, b: &Point, y: f32) -> bool {
    ((a.y <= y && y < b.y) || (b.y <= y && y < a.y)) && a.y != b.y
}

/// x position where the edge from `a` to `b` crosses the line at `y`
fn intercept(a: &Point, b: &Point, y: f32) -> f32 {
    (b.x - a.x) * (y - a.y) / (b.y - a.y) + a.x
}

/// Sorted x positions of all edges crossing the line at `y`
///
/// Edges are visited as (i, j) where j is the previous vertex
pub fn intercepts(points: &[Point], y: f32) -> Vec<f32> {
    let n = points.len();
    let mut xs : Vec<_> = (0 .. n)
        .map(|i| (&points[i], &points[(i + n - 1) % n]))
        .filter(|(a, b)| crosses(a, b, y))
        .map(|(a, b)| intercept(a, b, y))
        .collect();
    xs.sort_by(|a, b| a.total_cmp(b));
    xs
}

/// Scanline heights from the top of a polygon to its bottom
///
/// Ends early if adding 1.0 no longer changes `y`, which happens
/// beyond 2^24 in single precision.
#[derive(Debug,Clone)]
pub struct Sweep {
    y: f32,
    max_y: f32,
    done: bool,
}

impl Sweep {
    /// Heights covering `points`, empty for fewer than 3 points
    pub fn of(points: &[Point]) -> Self {
        match Bounds::of(points) {
            Some(b) if points.len() >= 3 => Self { y: b.min_y, max_y: b.max_y, done: false },
            _ => Self { y: 0.0, max_y: 0.0, done: true },
        }
    }
}

impl Iterator for Sweep {
    type Item = f32;
    fn next(&mut self) -> Option<f32> {
        if self.done || !(self.y <= self.max_y) {
            return None;
        }
        let y = self.y;
        self.y = y + 1.0;
        if self.y == y {
            self.done = true;
        }
        Some(y)
    }
}

/// Rows of a closed polygon, computed one at a time
#[derive(Debug,Clone)]
pub struct Scanlines<'a> {
    points: &'a [Point],
    sweep: Sweep,
}

impl<'a> Iterator for Scanlines<'a> {
    type Item = Scanline;
    fn next(&mut self) -> Option<Scanline> {
        let y = self.sweep.next()?;
        Some(Scanline::new(y as i64, intercepts(self.points, y)))
    }
}

/// Compute the spans of every row of a closed polygon
///
/// Yields nothing for fewer than 3 points. Spans are not clipped.
///
///     use polyraster::{Point,scanlines,Span};
///     let square = [Point::new(2.,2.), Point::new(2.,6.),
///                   Point::new(6.,6.), Point::new(6.,2.)];
///     let rows : Vec<_> = scanlines(&square).collect();
///     assert_eq!(rows.len(), 5);
///     assert_eq!(rows[0].y, 2);
///     assert_eq!(rows[0].spans, vec![Span { x1: 2, x2: 6 }]);
///     assert!(rows[4].spans.is_empty());
///
pub fn scanlines(points: &[Point]) -> Scanlines<'_> {
    Scanlines { points, sweep: Sweep::of(points) }
}

/// Fill the interior of a closed polygon with color `c`
///
/// Uses the even-odd rule. No-op for fewer than 3 points.
/// Rows above the framebuffer are stepped over without computing
/// crossings, the sweep stops at the first row below it.
///
///     use polyraster::{Framebuffer,Point,Rgb8,fill_polygon};
///
///     let mut fb = Framebuffer::new(10,10);
///     let red = Rgb8::new(255,0,0);
///     let tri = [Point::new(1.,1.), Point::new(8.,1.), Point::new(1.,8.)];
///     fill_polygon(&mut fb, &tri, red);
///     assert_eq!(fb.get(1,1), Some(red));
///     assert_eq!(fb.get(8,1), Some(red));
///     assert_eq!(fb.get(1,8), Some(Rgb8::black()));
///
pub fn fill_polygon(fb: &mut Framebuffer, points: &[Point], c: Rgb8) {
    if points.len() < 3 {
        return;
    }
    debug!("FILL: {} points {:?}", points.len(), c);
    let height = fb.height() as i64;
    for y in Sweep::of(points) {
        let row = y as i64;
        if row < 0 {
            continue;
        }
        if row >= height {
            break;
        }
        let sl = Scanline::new(row, intercepts(points, y));
        trace!("SCANLINE: y {} ({}) crossings {:?}", sl.y, y, sl.intercepts);
        for span in &sl.spans {
            fb.copy_hline(span.x1, sl.y, span.x2, c);
        }
    }
}
