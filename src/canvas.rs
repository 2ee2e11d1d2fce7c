// The annotated canvas: a picture with a trail of clicked points on top.
// Visual:
// • Left click drops a point; the points are joined by thick green lines.
// • A single point shows as a small green dot.
// • Any other click takes the newest point back off.

use crate::background::BackgroundImage;
use crate::surface::Surface;
use crate::types::{FrameBuffer, Point, Rect, Stroke};
use tracing::{debug, info};

/// Which kind of press reached the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickButton {
    Primary,   // left button: add a point
    Secondary, // right or middle button: remove the newest point
}

/// A button press at a canvas position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Click {
    pub button: ClickButton,
    pub x: i32,
    pub y: i32,
}

/// Owns the picture and the clicked points, and paints both.
pub struct CanvasController {
    background: BackgroundImage,
    points: Vec<Point>,
    stroke: Stroke,
    redraw_requested: bool,
}

impl CanvasController {
    /// Starts with no points and a pending redraw, so the first frame shows
    /// the picture.
    pub fn new(background: BackgroundImage, stroke: Stroke) -> Self {
        Self { background, points: Vec::new(), stroke, redraw_requested: true }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn on_click(&mut self, click: Click) {
        match click.button {
            ClickButton::Primary => self.on_primary_click(click.x, click.y),
            ClickButton::Secondary => self.on_secondary_click(click.x, click.y),
        }
    }

    /// Append (x,y) to the trail.
    pub fn on_primary_click(&mut self, x: i32, y: i32) {
        let p = Point::new(x, y);
        self.points.push(p);
        info!("Added point: {p}");
        self.request_redraw();
    }

    /// Drop the newest point. Nothing happens on an empty trail.
    pub fn on_secondary_click(&mut self, _x: i32, _y: i32) {
        if let Some(p) = self.points.pop() {
            info!("Removed point: {p}");
            self.request_redraw();
        }
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// True once per redraw request; clears the request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Repaint `screen` if a redraw was requested; otherwise leave the last
    /// frame untouched so it can be presented again. Returns whether it repainted.
    pub fn refresh(&mut self, screen: &mut FrameBuffer, canvas_color: u32) -> bool {
        if !self.take_redraw() {
            return false;
        }
        screen.fill(canvas_color);
        self.render(screen);
        true
    }

    /// Paint the picture at the origin, then the trail on top of it.
    pub fn render<S: Surface>(&self, surface: &mut S) {
        surface.draw_image(&self.background, 0, 0);

        let width = self.stroke.width;
        match self.points.as_slice() {
            [] => {}
            [only] => {
                // A lone point gets a dot centred on it.
                let offset = width / 2;
                let bounds = Rect { x: only.x - offset, y: only.y - offset, width, height: width };
                surface.draw_oval(bounds, self.stroke);
            }
            many => {
                for pair in many.windows(2) {
                    surface.draw_line(pair[0], pair[1], self.stroke);
                }
            }
        }
        debug!(points = self.points.len(), "rendered canvas");
    }
}
