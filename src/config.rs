// Fixed settings for the demo, with two environment overrides:
//   CANVAS_BACKGROUND  path to a different picture
//   CANVAS_DEBUG       1/true turns on debug logging (RUST_LOG then applies)

use crate::types::{Stroke, GREEN, WHITE};
use std::path::PathBuf;

pub const WINDOW_TITLE: &str = "Annotated Canvas";
pub const DEFAULT_BACKGROUND: &str = "assets/turtle.png";
pub const STROKE_WIDTH: i32 = 4; // visual: thickness of the green trail in pixels

pub struct Config {
    pub title: String,
    pub background: PathBuf,
    pub min_width: usize,  // window is at least this wide, wider if the picture is
    pub min_height: usize,
    pub stroke: Stroke,
    pub canvas_color: u32, // shows around the picture when the window is larger
    pub target_fps: usize,
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: WINDOW_TITLE.to_string(),
            background: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_BACKGROUND),
            min_width: 800,
            min_height: 600,
            stroke: Stroke { width: STROKE_WIDTH, color: GREEN },
            canvas_color: WHITE,
            target_fps: 60,
            debug: false,
        }
    }
}

impl Config {
    /// Defaults plus whatever the process environment overrides.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        if let Some(path) = lookup("CANVAS_BACKGROUND").filter(|p| !p.trim().is_empty()) {
            cfg.background = PathBuf::from(path);
        }
        if let Some(flag) = lookup("CANVAS_DEBUG") {
            cfg.debug = matches!(flag.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
        cfg
    }

    /// Window size that fits both the minimum and a picture of `image_w` x `image_h`.
    pub fn window_size(&self, image_w: usize, image_h: usize) -> (usize, usize) {
        (self.min_width.max(image_w), self.min_height.max(image_h))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_point_at_bundled_picture() {
        let cfg = Config::from_lookup(lookup(&[]));
        assert!(cfg.background.ends_with(DEFAULT_BACKGROUND));
        assert_eq!(cfg.stroke, Stroke { width: 4, color: GREEN });
        assert!(!cfg.debug);
        assert_eq!(cfg.title, "Annotated Canvas");
    }

    #[test]
    fn environment_overrides_picture_and_debug() {
        let cfg = Config::from_lookup(lookup(&[
            ("CANVAS_BACKGROUND", "/tmp/other.png"),
            ("CANVAS_DEBUG", "True"),
        ]));
        assert_eq!(cfg.background, PathBuf::from("/tmp/other.png"));
        assert!(cfg.debug);
    }

    #[test]
    fn blank_override_keeps_default_picture() {
        let cfg = Config::from_lookup(lookup(&[("CANVAS_BACKGROUND", "  "), ("CANVAS_DEBUG", "0")]));
        assert!(cfg.background.ends_with(DEFAULT_BACKGROUND));
        assert!(!cfg.debug);
    }

    #[test]
    fn window_grows_to_fit_picture() {
        let cfg = Config::default();
        assert_eq!(cfg.window_size(320, 240), (800, 600));
        assert_eq!(cfg.window_size(1024, 500), (1024, 600));
    }
}
