//! Errors

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("framebuffer dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("image too large for a bitmap header: {width}x{height}")]
    TooLarge { width: usize, height: usize },
    #[error("not a 24-bit bitmap: {0}")]
    BadHeader(&'static str),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
}
