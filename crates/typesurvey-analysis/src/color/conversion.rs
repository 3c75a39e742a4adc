//! RGB → HSL conversion with integer truncation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Difference between the largest and smallest raw channel.
    pub fn spread(self) -> u8 {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        max - min
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Integer HSL triple.
///
/// - `hue`: degrees in `[0, 360)`
/// - `saturation`: percent in `[0, 100]`
/// - `lightness`: percent in `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    pub const fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Zero hue and zero saturation after truncation.
    pub fn is_achromatic(self) -> bool {
        self.hue == 0 && self.saturation == 0
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// Convert RGB to HSL. A missing color is treated as white.
///
/// The final components are truncated toward zero, not rounded. This loses
/// precision: a color whose hue lands below one degree reports hue 0, so a
/// faintly tinted red with low saturation can look achromatic downstream.
/// Report ordering depends on this exact behavior.
pub fn rgb_to_hsl(rgb: Option<Rgb>) -> Hsl {
    let Rgb { r, g, b } = rgb.unwrap_or(Rgb::WHITE);
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (sector / 6.0, s)
    };

    Hsl {
        hue: ((h * 360.0) as u16).min(359),
        saturation: (s * 100.0) as u8,
        lightness: (l * 100.0) as u8,
    }
}
