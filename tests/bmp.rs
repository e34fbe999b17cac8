extern crate polyraster;

use polyraster::bmp::{self, BmpHeader, HEADER_SIZE};
use polyraster::{Framebuffer, Rgb8};

use std::path::PathBuf;

fn tmp_file(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("polyraster-{}-{}", std::process::id(), name));
    p
}

fn u32_at(b: &[u8], i: usize) -> u32 {
    u32::from_le_bytes([b[i], b[i+1], b[i+2], b[i+3]])
}

#[test]
fn header_layout() {
    let fb = Framebuffer::new(8, 6);
    let bytes = bmp::encode(&fb).unwrap();
    let data = 8 * 6 * 3;
    assert_eq!(bytes.len(), 54 + data);
    assert_eq!(&bytes[0..2], b"BM");
    assert_eq!(u32_at(&bytes, 2), (54 + data) as u32);
    assert_eq!(u32_at(&bytes, 6), 0);
    assert_eq!(u32_at(&bytes, 10), 54);
    assert_eq!(u32_at(&bytes, 14), 40);
    assert_eq!(u32_at(&bytes, 18), 8);
    assert_eq!(u32_at(&bytes, 22), 6);
    assert_eq!(&bytes[26..30], &[1, 0, 24, 0]);
    assert_eq!(u32_at(&bytes, 30), 0);
    assert_eq!(u32_at(&bytes, 34), data as u32);
    assert!(bytes[38..54].iter().all(|&b| b == 0));
}

#[test]
fn header_round_trip() {
    let fb = Framebuffer::new(12, 7);
    let bytes = bmp::encode(&fb).unwrap();
    let h = BmpHeader::parse(&bytes).unwrap();
    assert_eq!(h.width, 12);
    assert_eq!(h.height, 7);
    assert_eq!(h.offset as usize, HEADER_SIZE);
    assert_eq!(h.image_size as usize, 12 * 7 * 3);
    assert_eq!(h.file_size as usize, bytes.len());
    assert_eq!(bytes.len() - h.offset as usize, h.image_size as usize);
}

#[test]
fn parse_rejects_other_data() {
    assert!(BmpHeader::parse(b"BM").is_err());
    let mut bytes = bmp::encode(&Framebuffer::new(4, 4)).unwrap();
    bytes[0] = b'X';
    assert!(BmpHeader::parse(&bytes).is_err());
    let mut bytes = bmp::encode(&Framebuffer::new(4, 4)).unwrap();
    bytes[28] = 32;
    assert!(BmpHeader::parse(&bytes).is_err());
}

#[test]
fn pixels_are_bgr_top_row_first() {
    let mut fb = Framebuffer::new(4, 2);
    fb.set_pixel(0, 0, Rgb8::new(10, 20, 30));
    fb.set_pixel(3, 1, Rgb8::new(40, 50, 60));
    let bytes = bmp::encode(&fb).unwrap();
    let px = &bytes[HEADER_SIZE..];
    assert_eq!(&px[0..3], &[30, 20, 10]);
    assert_eq!(&px[(4 + 3) * 3 .. (4 + 3) * 3 + 3], &[60, 50, 40]);
    assert_eq!(px.iter().filter(|&&b| b != 0).count(), 6);
}

#[test]
fn rows_are_padded_to_four_bytes() {
    let mut fb = Framebuffer::new(3, 2);
    fb.clear(Rgb8::white());
    let bytes = bmp::encode(&fb).unwrap();
    // 9 bytes of pixels + 3 bytes of padding per row
    assert_eq!(bytes.len(), 54 + 12 * 2);
    let h = BmpHeader::parse(&bytes).unwrap();
    assert_eq!(h.image_size, 24);
    let px = &bytes[HEADER_SIZE..];
    assert!(px[0..9].iter().all(|&b| b == 255));
    assert_eq!(&px[9..12], &[0, 0, 0]);
    assert!(px[12..21].iter().all(|&b| b == 255));
    assert_eq!(&px[21..24], &[0, 0, 0]);
}

#[test]
fn decodes_with_image_crate() {
    let mut fb = Framebuffer::new(4, 3);
    fb.set_pixel(1, 0, Rgb8::new(255, 0, 0));
    fb.set_pixel(2, 2, Rgb8::new(0, 0, 255));
    let bytes = bmp::encode(&fb).unwrap();
    let img = image::load_from_memory(&bytes).unwrap().to_rgb();
    assert_eq!(img.dimensions(), (4, 3));
    let raw = img.into_raw();
    // Rows are stored top first, so a reader expecting bottom-up
    // sees them flipped
    let at = |x: usize, y: usize| &raw[(y * 4 + x) * 3 .. (y * 4 + x) * 3 + 3];
    assert_eq!(at(1, 2), &[255, 0, 0]);
    assert_eq!(at(2, 0), &[0, 0, 255]);
    assert_eq!(at(0, 0), &[0, 0, 0]);
}

#[test]
fn write_file_and_read_back() {
    let mut fb = Framebuffer::new(8, 8);
    fb.set_pixel(3, 3, Rgb8::white());
    fb.set_pixel(0, 7, Rgb8::new(1, 2, 3));
    let a = tmp_file("a.bmp");
    bmp::write_file(&fb, &a).unwrap();
    assert_eq!(std::fs::read(&a).unwrap(), bmp::encode(&fb).unwrap());

    let back = bmp::read_file(&a).unwrap();
    assert_eq!((back.width(), back.height()), (8, 8));
    assert_eq!(back, fb);

    fb.set_pixel(4, 4, Rgb8::white());
    assert_ne!(back, fb);
    let _ = std::fs::remove_file(&a);
}

#[test]
fn decode_handles_padded_rows() {
    let mut fb = Framebuffer::new(5, 3);
    for x in 0 .. 5 {
        fb.set_pixel(x, x % 3, Rgb8::new(x as u8 * 50, 7, 255 - x as u8));
    }
    let back = bmp::decode(&bmp::encode(&fb).unwrap()).unwrap();
    assert_eq!(back, fb);
}

#[test]
fn decode_rejects_other_data() {
    assert!(bmp::decode(b"not a bitmap").is_err());
    let p = tmp_file("missing.bmp");
    match bmp::read_file(&p) {
        Err(polyraster::Error::Io(_)) => {}
        other => panic!("expected io error, got {:?}", other),
    }
}

#[test]
fn write_file_reports_io_errors() {
    let fb = Framebuffer::new(2, 2);
    let mut p = tmp_file("missing-dir");
    p.push("out.bmp");
    match bmp::write_file(&fb, &p) {
        Err(polyraster::Error::Io(_)) => {}
        other => panic!("expected io error, got {:?}", other),
    }
}
