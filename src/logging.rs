// Console logging for the canvas: point adds/removes at info, repaints and
// resource release at debug.
use tracing_subscriber::EnvFilter;

/// Install the console logger. `info` by default; with `debug` on, the level
/// starts at `debug` and `RUST_LOG` may override it.
pub fn init(debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    };

    // A second init (tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
