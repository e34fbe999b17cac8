//! Built-in scene

use crate::buffer::Framebuffer;
use crate::color::Rgb8;
use crate::config::RasterConfig;
use crate::error::Result;
use crate::render::render_all_polygons;
use crate::vertex::Polygon;

/// Ordered list of polygons, drawn first to last
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Scene {
    pub polygons: Vec<Polygon>,
}

impl Scene {
    pub fn new() -> Self {
        Self { polygons: vec![] }
    }
    /// Append a polygon, drawn over everything before it
    pub fn push(&mut self, poly: Polygon) -> &mut Self {
        self.polygons.push(poly);
        self
    }
    /// Ten point star, yellow with a white outline
    pub fn star() -> Self {
        let points = vec![
            (165.0, 380.0), (185.0, 360.0), (180.0, 330.0), (207.0, 345.0),
            (233.0, 330.0), (230.0, 360.0), (250.0, 380.0), (220.0, 385.0),
            (205.0, 410.0), (193.0, 383.0),
        ];
        let mut scene = Scene::new();
        scene.push(Polygon::new(points, Rgb8::white(), Rgb8::new(255, 255, 0)));
        scene
    }
    /// Draw into an existing framebuffer
    pub fn render_into(&self, fb: &mut Framebuffer) {
        render_all_polygons(fb, &self.polygons);
    }
    /// Draw into a new black framebuffer sized by `config`
    pub fn render(&self, config: &RasterConfig) -> Result<Framebuffer> {
        let mut fb = Framebuffer::with_config(config)?;
        self.render_into(&mut fb);
        Ok(fb)
    }
}
