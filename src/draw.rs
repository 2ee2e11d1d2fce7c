// Window + mouse input.
// Visual effects provided here:
// 1) A window that shows the canvas frame.
// 2) Mouse presses turned into one click each (holding a button does not repeat).

use crate::canvas::{Click, ClickButton};
use crate::error::Error;
use crate::types::FrameBuffer;
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

/// Remembers which buttons were down at the previous poll, so a press is
/// reported once, on the frame it starts.
#[derive(Default)]
pub struct ButtonLatch {
    left: bool,
    right: bool,
    middle: bool,
}

impl ButtonLatch {
    /// Feed the current button state; returns the buttons that just went down.
    /// Left maps to Primary, right and middle to Secondary.
    pub fn update(&mut self, left: bool, right: bool, middle: bool) -> Vec<ClickButton> {
        let mut pressed = Vec::new();
        if left && !self.left { pressed.push(ClickButton::Primary); }
        if right && !self.right { pressed.push(ClickButton::Secondary); }
        if middle && !self.middle { pressed.push(ClickButton::Secondary); }
        self.left = left;
        self.right = right;
        self.middle = middle;
        pressed
    }
}

pub struct Drawer {
    window: Window, // the on-screen window you see
    buttons: ButtonLatch,
}

impl Drawer {
    /// Create a fixed-size window.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, fps: usize) -> Result<Self, Error> {
        let options = WindowOptions { resize: false, ..WindowOptions::default() };
        let mut window = Window::new(title, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(fps);
        Ok(Self { window, buttons: ButtonLatch::default() })
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new canvas.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    pub fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    /// Clicks that started since the last poll, at the current mouse position.
    /// Presses outside the canvas are dropped.
    pub fn poll_clicks(&mut self) -> Vec<Click> {
        let pressed = self.buttons.update(
            self.window.get_mouse_down(MouseButton::Left),
            self.window.get_mouse_down(MouseButton::Right),
            self.window.get_mouse_down(MouseButton::Middle),
        );
        if pressed.is_empty() {
            return Vec::new();
        }
        let Some((mx, my)) = self.window.get_mouse_pos(MouseMode::Discard) else {
            return Vec::new();
        };
        let (x, y) = (mx.floor() as i32, my.floor() as i32);
        pressed.into_iter().map(|button| Click { button, x, y }).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_button_reports_one_click() {
        let mut latch = ButtonLatch::default();
        assert_eq!(latch.update(true, false, false), vec![ClickButton::Primary]);
        assert!(latch.update(true, false, false).is_empty());
        assert!(latch.update(true, false, false).is_empty());
    }

    #[test]
    fn release_then_press_clicks_again() {
        let mut latch = ButtonLatch::default();
        latch.update(true, false, false);
        assert!(latch.update(false, false, false).is_empty());
        assert_eq!(latch.update(true, false, false), vec![ClickButton::Primary]);
    }

    #[test]
    fn right_and_middle_are_secondary() {
        let mut latch = ButtonLatch::default();
        assert_eq!(latch.update(false, true, false), vec![ClickButton::Secondary]);
        assert_eq!(
            latch.update(false, true, true),
            vec![ClickButton::Secondary] // only middle is new
        );
        latch.update(false, false, false);
        assert_eq!(
            latch.update(true, true, false),
            vec![ClickButton::Primary, ClickButton::Secondary]
        );
    }
}
