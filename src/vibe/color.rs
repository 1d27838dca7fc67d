//! RGB samples and their HSL representation.

use serde::{Deserialize, Serialize};

/// One representative color from an image palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorSample {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSample {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert this sample to HSL
    pub fn to_hsl(self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for ColorSample {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<(u8, u8, u8)> for ColorSample {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// HSL color representation
/// - h (hue): whole degrees in 0.0..360.0, fixed to 0 for achromatic colors
/// - s (saturation): 0.0-1.0, two decimals
/// - l (lightness): 0.0-1.0, two decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// True when the color carries no hue (a shade of gray)
    pub fn is_achromatic(&self) -> bool {
        self.s == 0.0
    }
}

/// Convert 8-bit RGB channels to HSL.
///
/// Hue is rounded to whole degrees and wrapped so that 360 becomes 0.
/// Saturation and lightness are rounded to two decimals, which keeps band
/// boundaries reproducible (e.g. `(128, 128, 128)` has lightness exactly 0.5).
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    // Achromatic case
    if max == min {
        return Hsl::new(0.0, 0.0, round2(l));
    }

    let delta = max - min;
    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    // Sector position in 0..6, offset by the dominant channel
    let sector = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    let h = (sector / 6.0 * 360.0).round() % 360.0;

    Hsl::new(h, round2(s), round2(l))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black() {
        assert_eq!(rgb_to_hsl(0, 0, 0), Hsl::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_white() {
        let hsl = rgb_to_hsl(255, 255, 255);
        assert_eq!(hsl.s, 0.0);
        assert_eq!(hsl.l, 1.0);
    }

    #[test]
    fn test_grays_are_achromatic() {
        for v in [1u8, 17, 64, 128, 200, 254] {
            let hsl = rgb_to_hsl(v, v, v);
            assert_eq!(hsl.h, 0.0, "gray {v} has hue");
            assert_eq!(hsl.s, 0.0, "gray {v} has saturation");
            assert!(hsl.is_achromatic());
        }
    }

    #[test]
    fn test_mid_gray_lightness_rounds_to_half() {
        assert_eq!(rgb_to_hsl(128, 128, 128).l, 0.5);
    }

    #[test]
    fn test_primaries() {
        assert_eq!(rgb_to_hsl(255, 0, 0), Hsl::new(0.0, 1.0, 0.5));
        assert_eq!(rgb_to_hsl(0, 255, 0), Hsl::new(120.0, 1.0, 0.5));
        assert_eq!(rgb_to_hsl(0, 0, 255), Hsl::new(240.0, 1.0, 0.5));
    }

    #[test]
    fn test_red_wraps_when_blue_exceeds_green() {
        // Magenta-leaning red sits near the top of the circle
        let hsl = rgb_to_hsl(255, 0, 30);
        assert_eq!(hsl.h, 353.0);
    }

    #[test]
    fn test_hue_never_reaches_360() {
        // (255, 0, 1) rounds to 359.76 -> 360 -> wraps to 0
        let hsl = rgb_to_hsl(255, 0, 1);
        assert_eq!(hsl.h, 0.0);
    }

    #[test]
    fn test_saturation_formula_above_half_lightness() {
        let hsl = rgb_to_hsl(250, 250, 240);
        assert_eq!(hsl.h, 60.0);
        assert_eq!(hsl.s, 0.5);
        assert_eq!(hsl.l, 0.96);
    }

    #[test]
    fn test_sample_conversions() {
        let sample = ColorSample::from([230, 130, 20]);
        assert_eq!(sample, ColorSample::new(230, 130, 20));
        assert_eq!(sample.to_hsl(), Hsl::new(31.0, 0.84, 0.49));
    }
}
