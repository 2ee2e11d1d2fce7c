// Value types shared by the controller, the surface and the window.

use std::fmt::{self, Display};

/// Canvas background behind the picture (the window is cleared to this).
pub const WHITE: u32 = 0x00_FF_FF_FF;
/// Highlight colour for the annotation strokes.
pub const GREEN: u32 = 0x00_00_FF_00;

/// One clicked location in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Bounding box of an oval: top-left corner plus size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Pen used for lines and ovals.
/// Visual: `width` is how thick the green trail looks, `color` is 0x00RRGGBB.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stroke {
    pub width: i32,
    pub color: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A frame of `width * height` pixels, all set to `color`.
    pub fn new(width: usize, height: usize, color: u32) -> Self {
        Self { width, height, pixels: vec![color; width * height] }
    }

    /// Overwrite every pixel with `color`.
    /// Visual: wipes the previous annotation before a repaint.
    pub fn fill(&mut self, color: u32) {
        for p in &mut self.pixels {
            *p = color;
        }
    }

    /// Pixel at (x,y), or None outside the frame.
    #[cfg(test)]
    pub fn get(&self, x: i32, y: i32) -> Option<u32> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_displays_as_pair() {
        assert_eq!(Point::new(3, -7).to_string(), "(3, -7)");
    }

    #[test]
    fn fill_and_get() {
        let mut fb = FrameBuffer::new(4, 3, 0);
        fb.fill(WHITE);
        assert!(fb.pixels.iter().all(|&p| p == WHITE));
        assert_eq!(fb.get(3, 2), Some(WHITE));
        assert_eq!(fb.get(4, 0), None);
        assert_eq!(fb.get(-1, 0), None);
    }
}
