use std::fmt;

use serde::{Deserialize, Serialize};

/// Saturation of every cluster color, in percent.
pub const SATURATION: u8 = 70;
/// Lightness of every cluster color, in percent.
pub const LIGHTNESS: u8 = 50;

/// An HSL color. Displays as CSS, e.g. `hsl(90, 70%, 50%)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)`.
    pub hue: f64,
    /// Saturation in percent.
    pub saturation: u8,
    /// Lightness in percent.
    pub lightness: u8,
}

impl Hsl {
    /// Convert to 8-bit sRGB.
    pub fn to_rgb(&self) -> [u8; 3] {
        let s = f64::from(self.saturation.min(100)) / 100.0;
        let l = f64::from(self.lightness.min(100)) / 100.0;
        let h = self.hue.rem_euclid(360.0) / 60.0;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        [channel(r), channel(g), channel(b)]
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// Color of cluster `index` out of `n`: evenly spaced hues starting at 0.
///
/// Depends only on `(index, n)`, so a re-render with the same cluster count
/// keeps every cluster's color. `n = 0` is treated as `n = 1`.
pub fn color(index: usize, n: usize) -> Hsl {
    let n = n.max(1);
    Hsl {
        hue: (index as f64 * 360.0) / n as f64,
        saturation: SATURATION,
        lightness: LIGHTNESS,
    }
}

/// Colors for all `n` clusters.
pub fn palette(n: usize) -> Vec<Hsl> {
    (0..n).map(|i| color(i, n)).collect()
}
