//! RGBA colours, HSL adjustments and the named palette.

use crate::error::{InkboardError, InkboardResult};
use std::fmt;
use std::str::FromStr;

/// A straight-alpha RGBA colour with channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Colour {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Colour {
    pub const fn rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub const fn greyscale(value: f32) -> Self {
        Self::rgb(value, value, value)
    }

    /// Build from hue (turns, `[0, 1)`), saturation and lightness.
    pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        if saturation == 0.0 {
            return Self::greyscale(lightness);
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        Self::rgb(
            hue_to_channel(p, q, hue + 1.0 / 3.0),
            hue_to_channel(p, q, hue),
            hue_to_channel(p, q, hue - 1.0 / 3.0),
        )
    }

    /// Hue (turns), saturation and lightness of this colour. Alpha is dropped.
    pub fn to_hsl(&self) -> (f32, f32, f32) {
        let (r, g, b) = (self.red, self.green, self.blue);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        if max == min {
            return (0.0, 0.0, lightness);
        }

        let d = max - min;
        let saturation = if lightness > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let hue = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        (hue / 6.0, saturation, lightness)
    }

    /// Raise HSL lightness by `amount`, clamped to white.
    pub fn lighten(&self, amount: f32) -> Self {
        self.adjust_lightness(amount)
    }

    /// Lower HSL lightness by `amount`, clamped to black.
    pub fn darken(&self, amount: f32) -> Self {
        self.adjust_lightness(-amount)
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self { alpha, ..*self }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (the `#` is optional).
    pub fn from_hex(hex: &str) -> InkboardResult<Self> {
        let invalid = || InkboardError::InvalidColour(hex.to_string());
        let digits = hex.trim().trim_start_matches('#');
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |i: usize| -> InkboardResult<f32> {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|v| f32::from(v) / 255.0)
                .map_err(|_| invalid())
        };

        let alpha = if digits.len() == 8 { channel(6)? } else { 1.0 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    /// `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        let rgb = format!(
            "#{:02x}{:02x}{:02x}",
            byte(self.red),
            byte(self.green),
            byte(self.blue)
        );
        if self.alpha < 1.0 {
            format!("{rgb}{:02x}", byte(self.alpha))
        } else {
            rgb
        }
    }

    fn adjust_lightness(&self, amount: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::hsl(h, s, (l + amount).clamp(0.0, 1.0)).with_alpha(self.alpha)
    }
}

fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl Default for Colour {
    fn default() -> Self {
        palette::CYAN
    }
}

impl FromStr for Colour {
    type Err = InkboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Named colours used by the default adapter and renderer.
pub mod palette {
    use super::Colour;

    pub const RED: Colour = Colour::rgb(0.8, 0.3, 0.3);
    pub const GREEN: Colour = Colour::rgb(0.2, 0.8, 0.4);
    pub const BLUE: Colour = Colour::rgb(0.1, 0.5, 0.9);
    pub const YELLOW: Colour = Colour::rgb(0.9, 0.85, 0.3);
    pub const ORANGE: Colour = Colour::rgb(0.9, 0.5, 0.3);
    pub const PINK: Colour = Colour::rgb(0.9, 0.4, 0.6);
    pub const PURPLE: Colour = Colour::rgb(0.7, 0.1, 1.0);
    pub const CYAN: Colour = Colour::rgb(0.2, 0.7, 0.7);

    pub const WHITE: Colour = Colour::greyscale(0.95);
    pub const ULTRA_LIGHT_GREY: Colour = Colour::greyscale(0.85);
    pub const LIGHT_GREY: Colour = Colour::greyscale(0.75);
    pub const LIGHTER_GREY: Colour = Colour::rgb(0.59, 0.58, 0.6);
    pub const GREY: Colour = Colour::rgb(0.33, 0.33, 0.35);
    pub const DARK_GREY: Colour = Colour::rgb(0.19, 0.19, 0.2);
    pub const CHARCOAL: Colour = Colour::rgb(0.13, 0.13, 0.14);
    pub const BLACK: Colour = Colour::greyscale(0.1);
}
