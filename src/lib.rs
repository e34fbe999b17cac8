//! Scanline polygon rasterizer writing 24-bit BMP images
//!
//! How does this work
//!
//! ```text
//!    fb  = Framebuffer::new(width, height)
//!    ren = Renderer::with_base(&mut fb)
//!  Polygon Operations (painter's order, one polygon at a time)
//!    fill_polygon()
//!      scanlines()            -- bounding box, y += 1.0 while y <= max_y
//!        intercepts()         -- even-odd crossings, sorted
//!        Span pairs           -- ceil(left) ..= floor(right)
//!      copy_hline()           -- clipped to [0,width)
//!    draw_polygon()
//!      edges()                -- consecutive pairs + closing edge
//!        draw_line()
//!          Bresenham          -- err = dx - dy
//!          set_pixel()        -- clipped to [0,width) x [0,height)
//!  Output
//!    bmp::encode(fb)          -- 54 byte header + BGR rows, top row first
//!    bmp::write_file(fb, path)
//! ```

pub mod error;
pub mod config;
pub mod color;
pub mod vertex;
pub mod buffer;
pub mod line;
pub mod outline;
pub mod scan;
pub mod fill;
pub mod render;
pub mod scene;
pub mod bmp;

pub use error::*;
pub use config::*;
pub use color::*;
pub use vertex::*;
pub use buffer::*;
pub use line::*;
pub use outline::*;
pub use scan::*;
pub use fill::*;
pub use render::*;
pub use scene::*;

/// Access to the raw pixels of a drawing surface
pub trait PixelData<'a> {
    fn pixeldata(&'a self) -> &'a [Rgb8];
}
