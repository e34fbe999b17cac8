//! Framebuffer configuration

use crate::error::{Error, Result};

/// Size of the framebuffer, fixed for the duration of a render
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct RasterConfig {
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self { width: 500, height: 500 }
    }
}

impl RasterConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
    /// Check the dimensions can back a framebuffer and a bitmap header
    ///
    ///     use polyraster::RasterConfig;
    ///     assert!(RasterConfig::new(10, 10).validate().is_ok());
    ///     assert!(RasterConfig::new(0, 10).validate().is_err());
    ///
    pub fn validate(&self) -> Result<()> {
        let (width, height) = (self.width, self.height);
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let row = (width.checked_mul(3).ok_or(Error::TooLarge { width, height })? + 3) & !3;
        let bytes = row.checked_mul(height).and_then(|n| n.checked_add(54));
        match bytes {
            Some(n) if n <= u32::MAX as usize && width <= i32::MAX as usize
                && height <= i32::MAX as usize => Ok(()),
            _ => Err(Error::TooLarge { width, height }),
        }
    }
}
