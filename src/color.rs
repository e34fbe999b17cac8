//! Colors

/// Color as Red, Green, Blue
///
/// Default is black
///
///     use polyraster::Rgb8;
///     assert_eq!(Rgb8::default(), Rgb8::black());
///     assert_eq!(Rgb8::gray(7), Rgb8::new(7,7,7));
///
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Rgb8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Rgb8 {
    /// White Color (255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255)
    }
    /// Black Color (0,0,0)
    pub fn black() -> Self {
        Self::new(0,0,0)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    /// Gray scale color with all components set to `g`
    pub fn gray(g: u8) -> Self {
        Self::new(g,g,g)
    }
    /// Components in the order they are stored in a bitmap file
    pub fn bgr(&self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }
}
