//! Polygon Outliner

use crate::buffer::Framebuffer;
use crate::color::Rgb8;
use crate::line::draw_line;
use crate::vertex::Point;

use log::debug;

/// Edges of a closed polygon
///
/// Each consecutive pair of points, then the closing edge from the last
/// point back to the first. Fewer than 2 points produce no edges.
///
///     use polyraster::{Point,edges};
///     let tri = [Point::new(0.,0.), Point::new(4.,0.), Point::new(0.,4.)];
///     assert_eq!(edges(&tri).count(), 3);
///     assert_eq!(edges(&tri[..1]).count(), 0);
///
pub fn edges(points: &[Point]) -> impl Iterator<Item = (&Point, &Point)> {
    let n = if points.len() < 2 { 0 } else { points.len() };
    points.iter()
        .zip(points.iter().cycle().skip(1))
        .take(n)
}

/// Draw the boundary of a closed polygon with color `c`
///
/// No-op for fewer than 2 points
pub fn draw_polygon(fb: &mut Framebuffer, points: &[Point], c: Rgb8) {
    if points.len() < 2 {
        return;
    }
    debug!("OUTLINE: {} edges {:?}", points.len(), c);
    for (p0, p1) in edges(points) {
        draw_line(fb, p0, p1, c);
    }
}
