//! Resolved environment configuration.
//!
//! The web layer reads `location.search` and hands the raw string here; the
//! rest of the program only ever sees the resolved values.

/// Viewer configuration resolved from the page's query string.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewConfig {
    /// Device pixel ratio override; otherwise the device value, capped.
    pub dpr: Option<f32>,
    /// Forced canvas CSS width/height in px.
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Orbit camera instead of mouse parallax.
    pub orbit_controls: bool,
    /// Throttle rendering to the 20 fps gate.
    pub skip_frames: bool,
    /// Render a single frame and stop the loop.
    pub render_once: bool,
    /// Seed for the thickness RNG.
    pub seed: u64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            dpr: None,
            width: None,
            height: None,
            orbit_controls: false,
            skip_frames: false,
            render_once: false,
            seed: 2,
        }
    }
}

impl ViewConfig {
    /// Parse a query string (`?a=1&b` or `a=1&b`). Unknown keys are ignored;
    /// a bare key counts as an enabled flag.
    pub fn from_query(query: &str) -> Self {
        let mut cfg = Self::default();
        for pair in query.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "dpr" => cfg.dpr = value.parse().ok(),
                "width" => cfg.width = value.parse().ok(),
                "height" => cfg.height = value.parse().ok(),
                "orbitControls" => cfg.orbit_controls = flag(value),
                "skipFrames" => cfg.skip_frames = flag(value),
                "renderOnce" => cfg.render_once = flag(value),
                "seed" => {
                    if let Ok(seed) = value.parse() {
                        cfg.seed = seed;
                    }
                }
                _ => {}
            }
        }
        cfg
    }
}

#[inline]
fn flag(value: &str) -> bool {
    !matches!(value, "0" | "false")
}
