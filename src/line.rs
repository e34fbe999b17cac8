//! Line Rasterizer

use crate::buffer::Framebuffer;
use crate::color::Rgb8;
use crate::vertex::Point;

use log::trace;

/// Integer error accumulation line stepper
///
/// Yields every pixel from the first to the last point, inclusive of
/// both. Consecutive pixels differ by at most one in each direction.
///
///     use polyraster::Bresenham;
///     let pix : Vec<_> = Bresenham::new((0,0), (3,1)).collect();
///     assert_eq!(pix, vec![(0,0),(1,0),(2,1),(3,1)]);
///
#[derive(Debug,Clone)]
pub struct Bresenham {
    /// Current x position
    x: i64,
    /// Current y position
    y: i64,
    /// Last point, x position
    x1: i64,
    /// Last point, y position
    y1: i64,
    dx: i128,
    dy: i128,
    sx: i64,
    sy: i64,
    err: i128,
    done: bool,
}

impl Bresenham {
    /// Step from (`x0`,`y0`) to (`x1`,`y1`)
    pub fn new((x0, y0): (i64, i64), (x1, y1): (i64, i64)) -> Self {
        let dx = (i128::from(x1) - i128::from(x0)).abs();
        let dy = (i128::from(y1) - i128::from(y0)).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        Self { x: x0, y: y0, x1, y1, dx, dy, sx, sy, err: dx - dy, done: false }
    }
    /// Step between two points after rounding them to the nearest pixel
    pub fn from_points(p0: &Point, p1: &Point) -> Self {
        Self::new(p0.round(), p1.round())
    }
}

impl Iterator for Bresenham {
    type Item = (i64, i64);
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let cur = (self.x, self.y);
        if self.x == self.x1 && self.y == self.y1 {
            self.done = true;
            return Some(cur);
        }
        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(cur)
    }
}

/// Endpoints further out than this are clipped before stepping
const MAX_COORD: f64 = 16_777_216.0;

fn far(p: &Point) -> bool {
    f64::from(p.x).abs() > MAX_COORD || f64::from(p.y).abs() > MAX_COORD
}

/// Cohen-Sutherland clip of the segment to one pixel around a
/// `w` x `h` region, None if it misses the region
fn clip_segment(p0: &Point, p1: &Point, w: f64, h: f64) -> Option<(Point, Point)> {
    const LEFT: u8 = 1;
    const RIGHT: u8 = 2;
    const TOP: u8 = 4;
    const BOTTOM: u8 = 8;
    let (xmin, xmax, ymin, ymax) = (-1.0, w, -1.0, h);
    let outcode = |x: f64, y: f64| {
        let mut code = 0;
        if x < xmin {
            code |= LEFT;
        } else if x > xmax {
            code |= RIGHT;
        }
        if y < ymin {
            code |= TOP;
        } else if y > ymax {
            code |= BOTTOM;
        }
        code
    };
    let (mut x0, mut y0) = (f64::from(p0.x), f64::from(p0.y));
    let (mut x1, mut y1) = (f64::from(p1.x), f64::from(p1.y));
    let mut code0 = outcode(x0, y0);
    let mut code1 = outcode(x1, y1);
    // Converges in at most 4 passes; NaN input gives up
    for _ in 0 .. 8 {
        if (code0 | code1) == 0 {
            return Some((Point::new(x0 as f32, y0 as f32), Point::new(x1 as f32, y1 as f32)));
        }
        if (code0 & code1) != 0 {
            return None;
        }
        let code_out = if code0 != 0 { code0 } else { code1 };
        let (dx, dy) = (x1 - x0, y1 - y0);
        let (x, y) = if (code_out & BOTTOM) != 0 {
            (x0 + dx * (ymax - y0) / dy, ymax)
        } else if (code_out & TOP) != 0 {
            (x0 + dx * (ymin - y0) / dy, ymin)
        } else if (code_out & RIGHT) != 0 {
            (xmax, y0 + dy * (xmax - x0) / dx)
        } else {
            (xmin, y0 + dy * (xmin - x0) / dx)
        };
        if code_out == code0 {
            x0 = x;
            y0 = y;
            code0 = outcode(x0, y0);
        } else {
            x1 = x;
            y1 = y;
            code1 = outcode(x1, y1);
        }
    }
    None
}

/// Draw a line from `p0` to `p1` of color `c`
///
/// End points are rounded to the nearest pixel, both are drawn.
/// Pixels outside of the framebuffer are clipped. Segments with an
/// endpoint beyond the exact integer range of `f32` are first cut down
/// to the framebuffer so the stepping stays short.
///
///     use polyraster::{Framebuffer,Point,Rgb8,draw_line};
///
///     let mut fb = Framebuffer::new(5,5);
///     let p = Point::new(2.2, 1.7);
///     draw_line(&mut fb, &p, &p, Rgb8::white());
///     assert_eq!(fb.count_not(Rgb8::black()), 1);
///     assert_eq!(fb.get(2,2), Some(Rgb8::white()));
///
pub fn draw_line(fb: &mut Framebuffer, p0: &Point, p1: &Point, c: Rgb8) {
    let line = if far(p0) || far(p1) {
        match clip_segment(p0, p1, fb.width() as f64, fb.height() as f64) {
            Some((a, b)) => Bresenham::from_points(&a, &b),
            None => return,
        }
    } else {
        Bresenham::from_points(p0, p1)
    };
    trace!("LINE: ({},{}) -> ({},{})", line.x, line.y, line.x1, line.y1);
    for (x, y) in line {
        fb.set_pixel(x, y, c);
    }
}
