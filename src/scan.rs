//! Scanline spans

/// Inclusive run of pixels on a single row
///
/// `x2 < x1` is an empty span; it happens when both crossings fall
/// within the same pixel.
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct Span {
    pub x1: i64,
    pub x2: i64,
}

impl Span {
    /// Pixels from the first crossing rounded up to the second rounded down
    pub fn between(left: f32, right: f32) -> Self {
        Self { x1: left.ceil() as i64, x2: right.floor() as i64 }
    }
    /// Number of pixels covered, 0 if empty
    pub fn len(&self) -> i64 {
        (self.x2 - self.x1 + 1).max(0)
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn contains(&self, x: i64) -> bool {
        x >= self.x1 && x <= self.x2
    }
}

/// Spans of a single row
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Scanline {
    /// Row the spans are drawn on
    pub y: i64,
    /// Sorted edge crossings for this row
    pub intercepts: Vec<f32>,
    pub spans: Vec<Span>,
}

impl Scanline {
    /// Pair sorted crossings (0,1), (2,3), ... into spans
    ///
    /// An odd crossing left over at the end is dropped
    ///
    ///     use polyraster::{Scanline,Span};
    ///     let sl = Scanline::new(4, vec![1.5, 3.0, 6.2, 9.9, 12.0]);
    ///     assert_eq!(sl.spans, vec![Span{x1: 2, x2: 3}, Span{x1: 7, x2: 9}]);
    ///
    pub fn new(y: i64, intercepts: Vec<f32>) -> Self {
        let spans = intercepts.chunks_exact(2)
            .map(|pair| Span::between(pair[0], pair[1]))
            .collect();
        Self { y, intercepts, spans }
    }
    pub fn num_spans(&self) -> usize {
        self.spans.len()
    }
    /// Is pixel `x` within any span
    pub fn covers(&self, x: i64) -> bool {
        self.spans.iter().any(|s| s.contains(x))
    }
}
