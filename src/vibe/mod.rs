//! Palette vibe classification.
//!
//! Turns a handful of representative RGB colors into one mood category:
//!
//! 1. each sample is converted to HSL and bucketed into hue/saturation/lightness bands
//! 2. the bands are aggregated into palette-wide statistics
//! 3. seasonal detectors add co-occurrence bonuses
//! 4. the declarative rule table adds per-sample and palette-wide evidence
//! 5. the top score wins, unless it fails to clear the confidence floor
//!
//! Classification is a pure function of its input. Every call builds its own
//! statistics and score table, so it is safe to call from any number of
//! tasks at once.

pub mod bands;
pub mod category;
pub mod color;
pub mod detectors;
pub mod queries;
pub mod rules;
pub mod select;
pub mod stats;

pub use bands::{FeatureBands, HueSector, LightnessBand, SaturationBand};
pub use category::{ScoreTable, Vibe};
pub use color::{rgb_to_hsl, ColorSample, Hsl};
pub use queries::SearchTermTable;
pub use select::CONFIDENCE_FLOOR;
pub use stats::PaletteStats;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Errors raised by the classifier and its configuration
#[derive(Debug, thiserror::Error)]
pub enum VibeError {
    #[error("Cannot classify an empty palette: at least one color is required")]
    EmptyInput,

    #[error("No search terms configured for vibe {0}")]
    ConfigurationGap(Vibe),

    #[error("Unknown vibe: {0}")]
    UnknownVibe(String),
}

/// Score for one vibe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VibeScore {
    pub vibe: Vibe,
    pub score: i32,
}

/// Full classification outcome, including the evidence behind it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VibeAnalysis {
    /// Winning vibe, or `Neutral` when nothing cleared the floor
    pub vibe: Vibe,
    /// Highest score in the table
    pub score: i32,
    /// Final score for every scored vibe, in tie-break order
    pub scores: Vec<VibeScore>,
    pub stats: PaletteStats,
}

/// Classify a palette and keep the scoring evidence.
pub fn analyze_palette(samples: &[ColorSample]) -> Result<VibeAnalysis, VibeError> {
    if samples.is_empty() {
        return Err(VibeError::EmptyInput);
    }

    let bands: Vec<FeatureBands> = samples
        .iter()
        .map(|sample| FeatureBands::classify(sample.to_hsl()))
        .collect();

    let stats = PaletteStats::from_bands(&bands)?;
    debug!(?stats, "Palette stats");

    let mut scores = ScoreTable::new();
    detectors::apply_seasonal_detectors(&bands, &stats, &mut scores);
    rules::score_samples(&bands, &mut scores);
    rules::apply_palette_rules(&stats, &mut scores);
    debug!(?scores, "Vibe scores");

    let (vibe, score) = select::select_winner(&scores);

    Ok(VibeAnalysis {
        vibe,
        score,
        scores: scores
            .iter()
            .map(|(vibe, score)| VibeScore { vibe, score })
            .collect(),
        stats,
    })
}

/// Classify a palette into a single vibe.
pub fn classify_vibe(samples: &[ColorSample]) -> Result<Vibe, VibeError> {
    analyze_palette(samples).map(|analysis| analysis.vibe)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(colors: &[(u8, u8, u8)]) -> Vec<ColorSample> {
        colors.iter().copied().map(ColorSample::from).collect()
    }

    #[test]
    fn test_empty_palette_is_refused() {
        assert!(matches!(classify_vibe(&[]), Err(VibeError::EmptyInput)));
    }

    #[test]
    fn test_mid_gray_falls_back_to_neutral() {
        let palette = samples(&[(128, 128, 128); 5]);
        assert_eq!(classify_vibe(&palette).unwrap(), Vibe::Neutral);
    }

    #[test]
    fn test_red_green_white_is_christmas() {
        let palette = samples(&[
            (200, 30, 30),
            (20, 140, 40),
            (210, 40, 40),
            (30, 150, 60),
            (250, 250, 240),
        ]);
        let analysis = analyze_palette(&palette).unwrap();
        assert_eq!(analysis.vibe, Vibe::Christmas);
        assert_eq!(analysis.score, 37);
    }

    #[test]
    fn test_orange_black_purple_is_halloween() {
        let palette = samples(&[(230, 130, 20), (10, 10, 10), (15, 15, 20), (120, 20, 140)]);
        let analysis = analyze_palette(&palette).unwrap();
        assert_eq!(analysis.vibe, Vibe::Halloween);
        assert_eq!(analysis.score, 46);
    }

    #[test]
    fn test_vivid_warm_pastels_are_energetic() {
        let palette = samples(&[
            (255, 190, 180),
            (255, 200, 170),
            (255, 180, 190),
            (255, 210, 190),
            (255, 195, 200),
        ]);
        let analysis = analyze_palette(&palette).unwrap();
        assert!(matches!(analysis.vibe, Vibe::Energetic | Vibe::Uplifting));
        assert_eq!(analysis.vibe, Vibe::Energetic);
        assert!(analysis.score > CONFIDENCE_FLOOR);
    }

    #[test]
    fn test_night_blues_are_moody() {
        let palette = samples(&[(30, 40, 90), (20, 30, 60), (60, 60, 70), (10, 20, 40)]);
        assert_eq!(classify_vibe(&palette).unwrap(), Vibe::Moody);
    }

    #[test]
    fn test_soft_lavender_is_dreamy() {
        let palette = samples(&[(200, 220, 240), (180, 190, 220), (220, 200, 230)]);
        assert_eq!(classify_vibe(&palette).unwrap(), Vibe::Dreamy);
    }

    #[test]
    fn test_tied_palette_resolves_to_earlier_vibe() {
        // Vivid light blue feeds Energetic and Uplifting equally
        let palette = samples(&[(120, 200, 255); 3]);

        for _ in 0..5 {
            let analysis = analyze_palette(&palette).unwrap();
            let score_of = |vibe: Vibe| {
                analysis
                    .scores
                    .iter()
                    .find(|s| s.vibe == vibe)
                    .map(|s| s.score)
                    .unwrap()
            };

            assert_eq!(score_of(Vibe::Energetic), 38);
            assert_eq!(score_of(Vibe::Uplifting), 38);
            assert_eq!(analysis.vibe, Vibe::Energetic);
            assert_eq!(analysis.score, 38);
        }
    }

    #[test]
    fn test_classification_is_deterministic() {
        let palette = samples(&[(230, 130, 20), (40, 90, 200), (250, 240, 200), (12, 12, 12)]);
        let first = analyze_palette(&palette).unwrap();
        for _ in 0..5 {
            assert_eq!(analyze_palette(&palette).unwrap(), first);
        }
    }

    #[test]
    fn test_sample_order_does_not_change_the_outcome() {
        let palette = samples(&[(200, 30, 30), (20, 140, 40), (250, 250, 240)]);
        let mut reversed = palette.clone();
        reversed.reverse();
        assert_eq!(
            analyze_palette(&palette).unwrap(),
            analyze_palette(&reversed).unwrap()
        );
    }

    #[test]
    fn test_scores_cover_every_scored_vibe() {
        let analysis = analyze_palette(&samples(&[(10, 200, 90)])).unwrap();
        let vibes: Vec<Vibe> = analysis.scores.iter().map(|s| s.vibe).collect();
        assert_eq!(vibes, Vibe::SCORED.to_vec());
        let max = analysis.scores.iter().map(|s| s.score).max().unwrap();
        assert_eq!(analysis.score, max);
    }

    #[test]
    fn test_concurrent_classification_agrees() {
        let palette = samples(&[(230, 130, 20), (10, 10, 10), (15, 15, 20), (120, 20, 140)]);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let palette = palette.clone();
                std::thread::spawn(move || classify_vibe(&palette).unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), Vibe::Halloween);
        }
    }
}
