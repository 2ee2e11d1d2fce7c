// The drawing target handed to the canvas during a repaint.
// minifb only shows a pixel buffer, so the primitives the canvas needs
// (picture blit, thick line, stroked oval) are software-drawn here.

use crate::background::BackgroundImage;
use crate::types::{FrameBuffer, Point, Rect, Stroke};

/// Everything the canvas needs from whatever it paints on.
pub trait Surface {
    /// Copy `image` with its top-left corner at (x,y).
    fn draw_image(&mut self, image: &BackgroundImage, x: i32, y: i32);

    /// Straight segment from `from` to `to`, `stroke.width` pixels thick.
    fn draw_line(&mut self, from: Point, to: Point, stroke: Stroke);

    /// Outline of the ellipse inscribed in `bounds`.
    fn draw_oval(&mut self, bounds: Rect, stroke: Stroke);
}

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) changes color.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Solid disc of `radius` centred on (cx,cy). Radius 0 is a single pixel.
fn fill_disc(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: i32, color: u32) {
    let r2 = radius * radius;
    for y in (cy - radius)..=(cy + radius) {
        for x in (cx - radius)..=(cx + radius) {
            let dx = x - cx;
            let dy = y - cy;
            if dx * dx + dy * dy <= r2 {
                put_pixel(fb, x, y, color);
            }
        }
    }
}

impl Surface for FrameBuffer {
    fn draw_image(&mut self, image: &BackgroundImage, x: i32, y: i32) {
        let src = image.frame();
        for sy in 0..src.height {
            let dy = y + sy as i32;
            if dy < 0 || dy as usize >= self.height {
                continue;
            }
            // Clip the row horizontally, then copy the visible run in one go.
            let first = (-x).max(0) as usize;
            let last = (self.width as i32 - x).clamp(0, src.width as i32) as usize;
            if first >= last {
                continue;
            }
            let src_row = sy * src.width;
            let dst_row = dy as usize * self.width;
            let dst_start = dst_row + (x + first as i32) as usize;
            self.pixels[dst_start..dst_start + (last - first)]
                .copy_from_slice(&src.pixels[src_row + first..src_row + last]);
        }
    }

    // Bresenham walk with a round brush stamped at every step, so the
    // segment is `width` wide with rounded ends.
    fn draw_line(&mut self, from: Point, to: Point, stroke: Stroke) {
        let radius = (stroke.width / 2).max(0);
        let (mut x0, mut y0, x1, y1) = (from.x, from.y, to.x, to.y);
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            fill_disc(self, x0, y0, radius, stroke.color);
            if x0 == x1 && y0 == y1 { break; }
            let e2 = 2 * err;
            if e2 >= dy { err += dy; x0 += sx; }
            if e2 <= dx { err += dx; y0 += sy; }
        }
    }

    fn draw_oval(&mut self, bounds: Rect, stroke: Stroke) {
        let rx = bounds.width as f32 / 2.0;
        let ry = bounds.height as f32 / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            // Flat box: the ellipse collapses onto its diagonal.
            let a = Point::new(bounds.x, bounds.y);
            let b = Point::new(bounds.x + bounds.width, bounds.y + bounds.height);
            self.draw_line(a, b, stroke);
            return;
        }
        let cx = bounds.x as f32 + rx;
        let cy = bounds.y as f32 + ry;
        let half = stroke.width as f32 / 2.0;
        let pad = stroke.width / 2 + 1;

        for y in (bounds.y - pad)..=(bounds.y + bounds.height + pad) {
            for x in (bounds.x - pad)..=(bounds.x + bounds.width + pad) {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                let len = (dx * dx + dy * dy).sqrt();
                // Distance from the outline, measured along the ray from the centre.
                let n = ((dx / rx).powi(2) + (dy / ry).powi(2)).sqrt();
                let dist = if n == 0.0 { -rx.min(ry) } else { len - len / n };
                if dist.abs() <= half {
                    put_pixel(self, x, y, stroke.color);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GREEN, WHITE};

    const PEN: Stroke = Stroke { width: 4, color: GREEN };

    #[test]
    fn line_covers_both_endpoints_and_its_width() {
        let mut fb = FrameBuffer::new(30, 12, WHITE);
        fb.draw_line(Point::new(2, 5), Point::new(20, 5), PEN);
        assert_eq!(fb.get(2, 5), Some(GREEN));
        assert_eq!(fb.get(20, 5), Some(GREEN));
        assert_eq!(fb.get(11, 7), Some(GREEN)); // half the width below the centre line
        assert_eq!(fb.get(11, 8), Some(WHITE));
        assert_eq!(fb.get(25, 5), Some(WHITE));
    }

    #[test]
    fn line_leaving_the_frame_is_clipped() {
        let mut fb = FrameBuffer::new(10, 10, WHITE);
        fb.draw_line(Point::new(-20, -20), Point::new(30, 30), PEN);
        assert_eq!(fb.get(0, 0), Some(GREEN));
        assert_eq!(fb.get(9, 9), Some(GREEN));
    }

    #[test]
    fn image_blit_is_clipped_at_edges() {
        let src = FrameBuffer { width: 3, height: 3, pixels: (1..=9).collect() };
        let image = BackgroundImage::from_frame(src, "blit-test");
        let mut fb = FrameBuffer::new(4, 4, 0);

        fb.draw_image(&image, -1, -1);
        assert_eq!(fb.get(0, 0), Some(5));
        assert_eq!(fb.get(1, 1), Some(9));
        assert_eq!(fb.get(2, 2), Some(0));

        fb.fill(0);
        fb.draw_image(&image, 2, 3);
        assert_eq!(fb.get(2, 3), Some(1));
        assert_eq!(fb.get(3, 3), Some(2));
    }

    #[test]
    fn large_oval_is_a_ring() {
        let mut fb = FrameBuffer::new(60, 60, WHITE);
        fb.draw_oval(Rect { x: 10, y: 10, width: 40, height: 40 }, PEN);
        assert_eq!(fb.get(30, 10), Some(GREEN)); // top of the outline
        assert_eq!(fb.get(50, 30), Some(GREEN)); // right of the outline
        assert_eq!(fb.get(30, 30), Some(WHITE)); // centre stays clear
        assert_eq!(fb.get(0, 0), Some(WHITE));
    }

    #[test]
    fn flat_oval_collapses_to_a_line() {
        let mut fb = FrameBuffer::new(30, 12, WHITE);
        fb.draw_oval(Rect { x: 4, y: 6, width: 16, height: 0 }, PEN);
        assert_eq!(fb.get(4, 6), Some(GREEN));
        assert_eq!(fb.get(12, 6), Some(GREEN));
        assert_eq!(fb.get(20, 6), Some(GREEN));
        assert_eq!(fb.get(12, 10), Some(WHITE));
    }

    #[test]
    fn tiny_oval_marks_its_centre() {
        let mut fb = FrameBuffer::new(20, 20, WHITE);
        fb.draw_oval(Rect { x: 8, y: 8, width: 4, height: 4 }, PEN);
        assert_eq!(fb.get(10, 10), Some(GREEN));
        assert_eq!(fb.get(12, 10), Some(GREEN));
        assert_eq!(fb.get(16, 10), Some(WHITE));
    }
}
