//! Color palette handling: hex parsing and the ordered cycle advanced by
//! each tap. The cycle cursor is ordinary owned state, not a global.

use thiserror::Error;

/// Hand-picked palette, applied in order with wraparound.
pub const PALETTES: [&str; 21] = [
    "#f7803c", "#b3204d", "#cbe86b", "#2b4e72", "#d4ee5e", "#ff003c", "#e6ac27", "#d95b43",
    "#a3a948", "#838689", "#556270", "#292c37", "#fa6900", "#eb7b59", "#ff4e50", "#9d9d93",
    "#00a8c6", "#2b4e72", "#e4844a", "#9cc4e4", "#515151",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("expected #rrggbb hex color, got {0:?}")]
    Malformed(String),
    #[error("palette needs at least one color")]
    Empty,
}

/// Parse `#rrggbb` into linear-ish [0, 1] RGB components.
pub fn parse_hex_color(s: &str) -> Result<[f32; 3], PaletteError> {
    let malformed = || PaletteError::Malformed(s.to_string());
    let hex = s.strip_prefix('#').ok_or_else(malformed)?;
    // from_str_radix tolerates a sign, so require plain hex digits up front
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(malformed());
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map(|b| b as f32 / 255.0)
            .map_err(|_| malformed())
    };
    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// Ordered color list with a wrapping cursor.
#[derive(Clone, Debug)]
pub struct PaletteCycle {
    colors: Vec<[f32; 3]>,
    cursor: usize,
}

impl PaletteCycle {
    pub fn from_hex(hex: &[&str]) -> Result<Self, PaletteError> {
        if hex.is_empty() {
            return Err(PaletteError::Empty);
        }
        let colors = hex
            .iter()
            .map(|h| parse_hex_color(h))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { colors, cursor: 0 })
    }

    /// Next color in order, wrapping at the end.
    pub fn next(&mut self) -> [f32; 3] {
        let color = self.colors[self.cursor];
        self.cursor = (self.cursor + 1) % self.colors.len();
        color
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
