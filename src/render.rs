//! Renderer

use crate::buffer::Framebuffer;
use crate::color::Rgb8;
use crate::fill::fill_polygon;
use crate::outline::draw_polygon;
use crate::vertex::{Point, Polygon};
use crate::PixelData;

use log::debug;

/// Draws primitives into a borrowed framebuffer with the current colors
///
///     use polyraster::{Framebuffer,Renderer,Rgb8,Point};
///
///     let mut fb = Framebuffer::new(20,20);
///     let mut ren = Renderer::with_base(&mut fb);
///     ren.fill_color(Rgb8::new(255,255,0));
///     ren.line_color(Rgb8::white());
///     let sq = [Point::new(2.,2.), Point::new(2.,9.),
///               Point::new(9.,9.), Point::new(9.,2.)];
///     ren.fill(&sq);
///     ren.outline(&sq);
///     assert_eq!(fb.get(5,5), Some(Rgb8::new(255,255,0)));
///     assert_eq!(fb.get(2,5), Some(Rgb8::white()));
///
#[derive(Debug)]
pub struct Renderer<'a> {
    pub base: &'a mut Framebuffer,
    pub fill_color: Rgb8,
    pub line_color: Rgb8,
}

impl<'a> Renderer<'a> {
    /// Create a new Renderer drawing in black
    pub fn with_base(base: &'a mut Framebuffer) -> Self {
        let fill_color = Rgb8::black();
        let line_color = Rgb8::black();
        Self { base, fill_color, line_color }
    }
    /// Set the outline color
    pub fn line_color(&mut self, line_color: Rgb8) {
        self.line_color = line_color;
    }
    /// Set the fill color
    pub fn fill_color(&mut self, fill_color: Rgb8) {
        self.fill_color = fill_color;
    }
    /// Draw a closed boundary in the outline color
    pub fn outline(&mut self, points: &[Point]) {
        draw_polygon(self.base, points, self.line_color);
    }
    /// Fill an interior in the fill color
    pub fn fill(&mut self, points: &[Point]) {
        fill_polygon(self.base, points, self.fill_color);
    }
    /// Fill then outline a polygon using its own colors
    pub fn polygon(&mut self, poly: &Polygon) {
        self.fill_color(poly.fill_color);
        self.line_color(poly.line_color);
        self.fill(&poly.points);
        self.outline(&poly.points);
    }
}

impl<'a> PixelData<'a> for Renderer<'a> {
    fn pixeldata(&'a self) -> &'a [Rgb8] {
        self.base.pixeldata()
    }
}

/// Render polygons in order, later polygons drawn over earlier ones
///
/// Each polygon is filled, then outlined
pub fn render_all_polygons(fb: &mut Framebuffer, polygons: &[Polygon]) {
    debug!("RENDER: {} polygons into {}x{}", polygons.len(), fb.width(), fb.height());
    let mut ren = Renderer::with_base(fb);
    for poly in polygons {
        ren.polygon(poly);
    }
}
