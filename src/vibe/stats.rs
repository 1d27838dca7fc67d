//! Palette-wide statistics over banded samples.

use serde::{Deserialize, Serialize};

use super::bands::FeatureBands;
use super::VibeError;

/// Lightness at or above which a sample counts as bright
pub const BRIGHT_CUTOFF: f64 = 0.5;
/// Lightness below which a sample counts as dark
pub const DARK_CUTOFF: f64 = 0.4;
/// Lightness below which a sample counts as near-black
pub const VERY_DARK_CUTOFF: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaletteStats {
    pub sample_count: usize,
    pub mean_saturation: f64,
    pub mean_lightness: f64,
    pub warm_count: usize,
    pub cool_count: usize,
    pub bright_count: usize,
    pub dark_count: usize,
    pub very_dark_count: usize,
}

impl PaletteStats {
    /// Aggregate a banded palette in a single pass.
    ///
    /// Fails with [`VibeError::EmptyInput`] when there is nothing to average.
    pub fn from_bands(bands: &[FeatureBands]) -> Result<Self, VibeError> {
        if bands.is_empty() {
            return Err(VibeError::EmptyInput);
        }

        let mut total_saturation = 0.0;
        let mut total_lightness = 0.0;
        let mut warm_count = 0;
        let mut cool_count = 0;
        let mut bright_count = 0;
        let mut dark_count = 0;
        let mut very_dark_count = 0;

        for sample in bands {
            let hsl = sample.hsl;
            total_saturation += hsl.s;
            total_lightness += hsl.l;

            if sample.is_warm() {
                warm_count += 1;
            }
            if sample.is_cool() {
                cool_count += 1;
            }
            if hsl.l >= BRIGHT_CUTOFF {
                bright_count += 1;
            }
            if hsl.l < DARK_CUTOFF {
                dark_count += 1;
            }
            if hsl.l < VERY_DARK_CUTOFF {
                very_dark_count += 1;
            }
        }

        let n = bands.len() as f64;

        Ok(Self {
            sample_count: bands.len(),
            mean_saturation: total_saturation / n,
            mean_lightness: total_lightness / n,
            warm_count,
            cool_count,
            bright_count,
            dark_count,
            very_dark_count,
        })
    }

    /// Strictly more than half of the palette
    pub fn is_majority(&self, count: usize) -> bool {
        count * 2 > self.sample_count
    }

    pub fn mostly_bright(&self) -> bool {
        self.is_majority(self.bright_count)
    }

    pub fn mostly_dark(&self) -> bool {
        self.is_majority(self.dark_count)
    }

    pub fn leans_warm(&self) -> bool {
        self.warm_count > self.cool_count
    }

    pub fn leans_cool(&self) -> bool {
        self.cool_count > self.warm_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vibe::color::{rgb_to_hsl, Hsl};

    fn bands(colors: &[(u8, u8, u8)]) -> Vec<FeatureBands> {
        colors
            .iter()
            .map(|&(r, g, b)| FeatureBands::classify(rgb_to_hsl(r, g, b)))
            .collect()
    }

    #[test]
    fn test_empty_palette_is_rejected() {
        assert!(matches!(
            PaletteStats::from_bands(&[]),
            Err(VibeError::EmptyInput)
        ));
    }

    #[test]
    fn test_counts_and_means() {
        let palette = bands(&[(230, 130, 20), (10, 10, 10), (15, 15, 20), (120, 20, 140)]);
        let stats = PaletteStats::from_bands(&palette).unwrap();

        assert_eq!(stats.sample_count, 4);
        assert_eq!(stats.warm_count, 1);
        assert_eq!(stats.cool_count, 1);
        assert_eq!(stats.bright_count, 0);
        assert_eq!(stats.dark_count, 3);
        assert_eq!(stats.very_dark_count, 2);
        assert!((stats.mean_lightness - (0.49 + 0.04 + 0.07 + 0.31) / 4.0).abs() < 1e-9);
        assert!((stats.mean_saturation - (0.84 + 0.0 + 0.14 + 0.75) / 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_cutoffs_are_lower_inclusive() {
        let palette: Vec<FeatureBands> = [0.5, 0.4, 0.2]
            .into_iter()
            .map(|l| FeatureBands::classify(Hsl::new(200.0, 0.5, l)))
            .collect();
        let stats = PaletteStats::from_bands(&palette).unwrap();

        assert_eq!(stats.bright_count, 1);
        assert_eq!(stats.dark_count, 0);
        assert_eq!(stats.very_dark_count, 0);
    }

    #[test]
    fn test_majority_is_strict() {
        let palette = bands(&[(250, 250, 250), (250, 250, 250), (5, 5, 5), (5, 5, 5)]);
        let stats = PaletteStats::from_bands(&palette).unwrap();

        assert!(!stats.mostly_bright());
        assert!(!stats.mostly_dark());
        assert!(!stats.leans_warm() && !stats.leans_cool());
    }
}
