//! Qualitative bands for a single HSL sample.
//!
//! Every band is lower-inclusive and upper-exclusive, except the topmost band
//! of each axis which is closed above.

use serde::{Deserialize, Serialize};

use super::color::Hsl;

/// Angular hue sector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HueSector {
    /// [330, 360) and [0, 30)
    Red,
    /// [30, 60)
    Orange,
    /// [60, 90)
    Yellow,
    /// [90, 170)
    Green,
    /// [170, 200)
    Cyan,
    /// [200, 260)
    Blue,
    /// [260, 330)
    Purple,
}

impl HueSector {
    pub fn from_hue(hue: f64) -> Self {
        match hue {
            h if h < 30.0 => Self::Red,
            h if h < 60.0 => Self::Orange,
            h if h < 90.0 => Self::Yellow,
            h if h < 170.0 => Self::Green,
            h if h < 200.0 => Self::Cyan,
            h if h < 260.0 => Self::Blue,
            h if h < 330.0 => Self::Purple,
            _ => Self::Red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaturationBand {
    /// < 0.25
    Low,
    /// [0.25, 0.5)
    Mid,
    /// [0.5, 0.7)
    High,
    /// >= 0.7
    VeryHigh,
}

impl SaturationBand {
    pub fn from_saturation(s: f64) -> Self {
        if s >= 0.7 {
            Self::VeryHigh
        } else if s >= 0.5 {
            Self::High
        } else if s >= 0.25 {
            Self::Mid
        } else {
            Self::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightnessBand {
    /// < 0.2
    VeryDark,
    /// [0.2, 0.35)
    Dark,
    /// [0.35, 0.55)
    Mid,
    /// [0.55, 0.75)
    Bright,
    /// >= 0.75
    VeryBright,
}

impl LightnessBand {
    pub fn from_lightness(l: f64) -> Self {
        if l >= 0.75 {
            Self::VeryBright
        } else if l >= 0.55 {
            Self::Bright
        } else if l >= 0.35 {
            Self::Mid
        } else if l >= 0.2 {
            Self::Dark
        } else {
            Self::VeryDark
        }
    }
}

/// Banded view of one palette sample, alongside the HSL it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureBands {
    pub hsl: Hsl,
    /// `None` for achromatic samples, whose hue carries no information
    pub hue: Option<HueSector>,
    pub saturation: SaturationBand,
    pub lightness: LightnessBand,
}

impl FeatureBands {
    pub fn classify(hsl: Hsl) -> Self {
        let hue = if hsl.is_achromatic() {
            None
        } else {
            Some(HueSector::from_hue(hsl.h))
        };

        Self {
            hsl,
            hue,
            saturation: SaturationBand::from_saturation(hsl.s),
            lightness: LightnessBand::from_lightness(hsl.l),
        }
    }

    pub fn is_chromatic(&self) -> bool {
        self.hue.is_some()
    }

    pub fn in_sector(&self, sector: HueSector) -> bool {
        self.hue == Some(sector)
    }

    /// Red, orange, or the magenta end of purple (hue >= 300)
    pub fn is_warm(&self) -> bool {
        match self.hue {
            Some(HueSector::Red | HueSector::Orange) => true,
            Some(HueSector::Purple) => self.hsl.h >= 300.0,
            _ => false,
        }
    }

    /// Blue or cyan
    pub fn is_cool(&self) -> bool {
        matches!(self.hue, Some(HueSector::Blue | HueSector::Cyan))
    }

    /// Bright or very bright
    pub fn is_lit(&self) -> bool {
        self.lightness >= LightnessBand::Bright
    }

    /// Dark or very dark
    pub fn is_shadowed(&self) -> bool {
        self.lightness <= LightnessBand::Dark
    }

    /// High or very high saturation
    pub fn is_vivid(&self) -> bool {
        self.saturation >= SaturationBand::High
    }

    /// Low or mid saturation
    pub fn is_muted(&self) -> bool {
        self.saturation <= SaturationBand::Mid
    }
}
