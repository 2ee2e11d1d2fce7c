// What you SEE:
// • A window with the turtle picture in the top-left corner.
// • Left click: a point is added; all points are joined by thick green lines
//   (a single point shows as a green dot).
// • Right or middle click: the newest point disappears.
// • ESC or closing the window quits.

mod background;
mod canvas;
mod config;
mod draw;
mod error;
mod logging;
mod surface;
mod types;

use background::BackgroundImage;
use canvas::CanvasController;
use config::Config;
use draw::Drawer;
use error::Error;
use tracing::{debug, info};
use types::FrameBuffer;

fn main() -> Result<(), Error> {
    let cfg = Config::from_env();
    logging::init(cfg.debug);

    /* --- Picture first ---
       A missing or broken picture ends the program before any window opens. */
    let background = BackgroundImage::load(&cfg.background)?;
    let (w, h) = cfg.window_size(background.width(), background.height());

    /* --- Window + reusable screen buffer --- */
    let mut drawer = Drawer::new(&cfg.title, w, h, cfg.target_fps)?;
    let mut screen = FrameBuffer::new(w, h, cfg.canvas_color);

    let mut canvas = CanvasController::new(background, cfg.stroke);
    info!(width = w, height = h, "canvas ready");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        // 1) Route new presses to the canvas; each one may request a redraw.
        for click in drawer.poll_clicks() {
            debug!(?click, "mouse press");
            canvas.on_click(click);
        }

        // 2) Repaint only when asked, but hand the frame to the window every
        //    time so an uncovered window never shows a stale or blank buffer.
        if canvas.refresh(&mut screen, cfg.canvas_color) {
            drawer.set_title(&format!("{} | points: {}", cfg.title, canvas.points().len()));
        }
        drawer.present(&screen)?;
    }

    /* --- Shutdown: the picture goes with the canvas, then the window --- */
    drop(canvas);
    drop(drawer);
    info!("window closed");
    Ok(())
}
