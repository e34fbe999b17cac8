//! Writing of BMP (Windows Bitmap) files
//!
//! Uncompressed, 24 bits per pixel. Rows are written starting from the
//! top row of the framebuffer, in the order they are stored; no bottom
//! up flip is performed.
//!
//! See <https://en.wikipedia.org/wiki/BMP_file_format>
//!
use crate::buffer::Framebuffer;
use crate::color::Rgb8;
use crate::error::{Error, Result};
use crate::PixelData;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

/// Size of the file header
pub const FILE_HEADER_SIZE: usize = 14;
/// Size of the BITMAPINFOHEADER
pub const INFO_HEADER_SIZE: usize = 40;
/// Offset of the pixel data from the start of the file
pub const HEADER_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// Bytes in a row of pixels, padded to a multiple of 4
///
///     use polyraster::bmp::row_stride;
///     assert_eq!(row_stride(4), 12);
///     assert_eq!(row_stride(5), 16);
///     assert_eq!(row_stride(1), 4);
///
pub fn row_stride(width: usize) -> usize {
    (width * 3 + 3) & !3
}

/// Fields of a bitmap header
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct BmpHeader {
    /// Total size of the file in bytes
    pub file_size: u32,
    /// Offset of the pixel data
    pub offset: u32,
    pub width: i32,
    pub height: i32,
    pub bits_per_pixel: u16,
    /// Size of the pixel data in bytes, including row padding
    pub image_size: u32,
}

impl BmpHeader {
    /// Header describing a `width` x `height` 24-bit image
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(Error::TooLarge { width, height });
        }
        let image_size = row_stride(width).checked_mul(height)
            .filter(|&n| n <= u32::MAX as usize - HEADER_SIZE)
            .ok_or(Error::TooLarge { width, height })?;
        Ok(Self {
            file_size: (image_size + HEADER_SIZE) as u32,
            offset: HEADER_SIZE as u32,
            width: width as i32,
            height: height as i32,
            bits_per_pixel: 24,
            image_size: image_size as u32,
        })
    }
    /// Serialize to the 54 header bytes
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut h = [0u8; HEADER_SIZE];
        h[0..2].copy_from_slice(b"BM");
        h[2..6].copy_from_slice(&self.file_size.to_le_bytes());
        // 6..10 reserved
        h[10..14].copy_from_slice(&self.offset.to_le_bytes());
        h[14..18].copy_from_slice(&(INFO_HEADER_SIZE as u32).to_le_bytes());
        h[18..22].copy_from_slice(&self.width.to_le_bytes());
        h[22..26].copy_from_slice(&self.height.to_le_bytes());
        h[26..28].copy_from_slice(&1u16.to_le_bytes());
        h[28..30].copy_from_slice(&self.bits_per_pixel.to_le_bytes());
        // 30..34 compression, none
        h[34..38].copy_from_slice(&self.image_size.to_le_bytes());
        // 38..54 resolution and palette, unused
        h
    }
    /// Read the header at the start of `bytes`
    ///
    ///     use polyraster::bmp::BmpHeader;
    ///     let h = BmpHeader::new(8, 2).unwrap();
    ///     assert_eq!(BmpHeader::parse(&h.to_bytes()).unwrap(), h);
    ///
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(Error::BadHeader("truncated header"));
        }
        if &bytes[0..2] != b"BM" {
            return Err(Error::BadHeader("missing BM magic"));
        }
        let u32_at = |i: usize| u32::from_le_bytes([bytes[i], bytes[i+1], bytes[i+2], bytes[i+3]]);
        let i32_at = |i: usize| i32::from_le_bytes([bytes[i], bytes[i+1], bytes[i+2], bytes[i+3]]);
        let u16_at = |i: usize| u16::from_le_bytes([bytes[i], bytes[i+1]]);
        if u32_at(14) != INFO_HEADER_SIZE as u32 {
            return Err(Error::BadHeader("unsupported info header"));
        }
        if u16_at(26) != 1 {
            return Err(Error::BadHeader("color planes must be 1"));
        }
        let bits_per_pixel = u16_at(28);
        if bits_per_pixel != 24 {
            return Err(Error::BadHeader("bits per pixel must be 24"));
        }
        if u32_at(30) != 0 {
            return Err(Error::BadHeader("compressed data"));
        }
        Ok(Self {
            file_size: u32_at(2),
            offset: u32_at(10),
            width: i32_at(18),
            height: i32_at(22),
            bits_per_pixel,
            image_size: u32_at(34),
        })
    }
}

/// Write the bitmap of `fb` to `w`
pub fn write_to<W: Write>(fb: &Framebuffer, w: &mut W) -> Result<()> {
    let header = BmpHeader::new(fb.width(), fb.height())?;
    w.write_all(&header.to_bytes())?;
    let pad = row_stride(fb.width()) - fb.width() * 3;
    let zeros = [0u8; 3];
    let mut row = Vec::with_capacity(row_stride(fb.width()));
    if fb.width() > 0 {
        for pixels in fb.pixeldata().chunks(fb.width()) {
            row.clear();
            pixels.iter().for_each(|c| row.extend_from_slice(&c.bgr()));
            row.extend_from_slice(&zeros[..pad]);
            w.write_all(&row)?;
        }
    }
    debug!("BMP: {}x{} {} bytes", fb.width(), fb.height(), header.file_size);
    Ok(())
}

/// Serialize `fb` to the bytes of a bitmap file
///
///     use polyraster::{Framebuffer,bmp};
///     let fb = Framebuffer::new(4, 3);
///     let bytes = bmp::encode(&fb).unwrap();
///     assert_eq!(bytes.len(), 54 + 4 * 3 * 3);
///     assert_eq!(&bytes[0..2], b"BM");
///
pub fn encode(fb: &Framebuffer) -> Result<Vec<u8>> {
    let size = BmpHeader::new(fb.width(), fb.height())?.file_size as usize;
    let mut out = Vec::with_capacity(size);
    write_to(fb, &mut out)?;
    Ok(out)
}

/// Write `fb` as a bitmap file at `filename`
pub fn write_file<P: AsRef<Path>>(fb: &Framebuffer, filename: P) -> Result<()> {
    let mut w = BufWriter::new(File::create(filename)?);
    write_to(fb, &mut w)?;
    w.flush()?;
    Ok(())
}

/// Decode bitmap bytes back into a framebuffer
///
/// Rows are taken to be stored top row first, as `encode` writes them.
///
///     use polyraster::{Framebuffer,Rgb8,bmp};
///     let mut fb = Framebuffer::new(3, 2);
///     fb.set_pixel(2, 0, Rgb8::new(1, 2, 3));
///     let back = bmp::decode(&bmp::encode(&fb).unwrap()).unwrap();
///     assert_eq!(back, fb);
///
pub fn decode(bytes: &[u8]) -> Result<Framebuffer> {
    BmpHeader::parse(bytes)?;
    let img = image::load_from_memory_with_format(bytes, image::ImageFormat::BMP)?.to_rgb();
    let (w, h) = img.dimensions();
    let (w, h) = (w as usize, h as usize);
    let mut fb = Framebuffer::new(w, h);
    // The decoder assumes bottom-up rows
    for (i, px) in img.into_raw().chunks(3).enumerate() {
        let (x, y) = (i % w, h - 1 - i / w);
        fb[(x, y)] = Rgb8::new(px[0], px[1], px[2]);
    }
    debug!("BMP: decoded {}x{}", w, h);
    Ok(fb)
}

/// Read a bitmap file written by `write_file`
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<Framebuffer> {
    decode(&std::fs::read(filename)?)
}
