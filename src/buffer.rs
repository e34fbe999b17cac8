//! Framebuffer

use crate::color::Rgb8;
use crate::config::RasterConfig;
use crate::error::Result;
use crate::PixelData;

use std::cmp::max;
use std::cmp::min;
use std::ops::Index;
use std::ops::IndexMut;

/// Framebuffer
///
/// Data is stored as row-major order (C-format), index = y * width + x.
/// The dimensions are fixed when the buffer is created.
#[derive(Debug,Clone,PartialEq)]
pub struct Framebuffer {
    data: Vec<Rgb8>,
    width: usize,
    height: usize,
}

impl Framebuffer {
    /// Create a new buffer of width and height, all pixels black
    pub fn new(width: usize, height: usize) -> Self {
        Framebuffer {
            width, height, data: vec![Rgb8::default(); width * height]
        }
    }
    /// Create a new buffer from a validated configuration
    pub fn with_config(config: &RasterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.width, config.height))
    }
    /// Image Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }
    /// Image Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }
    /// Number of pixels; width * height
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Pixels in row-major order
    pub fn pixels(&self) -> &[Rgb8] {
        &self.data
    }
    /// Pixels of row `y`
    pub fn row(&self, y: usize) -> &[Rgb8] {
        debug_assert!(y < self.height);
        let i = y * self.width;
        &self.data[i .. i + self.width]
    }
    /// Set all pixels to `color`
    pub fn clear(&mut self, color: Rgb8) {
        self.data.iter_mut().for_each(|v| *v = color);
    }
    fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as u64) < self.width as u64 && (y as u64) < self.height as u64
    }
    /// Copies `color` to pixel at (`x`,`y`)
    ///
    /// Locations outside of the region are ignored
    ///
    ///     use polyraster::{Framebuffer,Rgb8};
    ///
    ///     let mut fb = Framebuffer::new(1,2);
    ///     let white = Rgb8::white();
    ///     fb.set_pixel(0,1, white);
    ///     assert_eq!(fb.get(0,0), Some(Rgb8::black()));
    ///     assert_eq!(fb.get(0,1), Some(white));
    ///
    ///     fb.set_pixel(10,10, white); // Ignored, outside of range
    ///     fb.set_pixel(-1,0, white);  // Ignored, outside of range
    ///
    pub fn set_pixel(&mut self, x: i64, y: i64, color: Rgb8) {
        if self.in_bounds(x, y) {
            let i = y as usize * self.width + x as usize;
            self.data[i] = color;
        }
    }
    /// Color at (`x`,`y`), None outside of the region
    pub fn get(&self, x: i64, y: i64) -> Option<Rgb8> {
        if self.in_bounds(x, y) {
            Some(self.data[y as usize * self.width + x as usize])
        } else {
            None
        }
    }
    /// Copies `color` to pixels from (`x1`,`y`) to (`x2`,`y`) inclusive
    ///
    /// The span is clipped to the region; an empty span (`x2 < x1`)
    /// draws nothing
    ///
    ///     use polyraster::{Framebuffer,Rgb8};
    ///
    ///     let mut fb = Framebuffer::new(10,1);
    ///     let white = Rgb8::white();
    ///     fb.copy_hline(-5, 0, 3, white);
    ///     assert_eq!(fb.get(0,0), Some(white));
    ///     assert_eq!(fb.get(3,0), Some(white));
    ///     assert_eq!(fb.get(4,0), Some(Rgb8::black()));
    ///
    pub fn copy_hline(&mut self, x1: i64, y: i64, x2: i64, color: Rgb8) {
        if self.is_empty() || y < 0 || y as u64 >= self.height as u64 {
            return;
        }
        let xmax = self.width as i64 - 1;
        let x1 = max(x1, 0);
        let x2 = min(x2, xmax);
        if x2 < x1 {
            return;
        }
        let row = y as usize * self.width;
        self.data[row + x1 as usize ..= row + x2 as usize]
            .iter_mut()
            .for_each(|v| *v = color);
    }
    /// Number of pixels not equal to `color`
    pub fn count_not(&self, color: Rgb8) -> usize {
        self.data.iter().filter(|&&c| c != color).count()
    }
}

impl<'a> PixelData<'a> for Framebuffer {
    fn pixeldata(&'a self) -> &'a [Rgb8] {
        &self.data
    }
}

impl Index<(usize,usize)> for Framebuffer {
    type Output = Rgb8;
    fn index(&self, index: (usize, usize)) -> &Rgb8 {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        &self.data[index.1 * self.width + index.0]
    }
}
impl IndexMut<(usize,usize)> for Framebuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Rgb8 {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        &mut self.data[index.1 * self.width + index.0]
    }
}
