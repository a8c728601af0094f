//! Layout boxes.
//!
//! All coordinates are viewport-relative pixels, except for children of a
//! scrolling node, whose boxes are in that node's content coordinates.

/// An axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    /// One past the last covered row.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}
