//! Seasonal pattern detectors.
//!
//! These recognise co-occurring color signatures that single-sample rules
//! cannot express. Each one contributes a bonus to exactly one vibe.

use super::bands::{FeatureBands, HueSector};
use super::category::{ScoreTable, Vibe};
use super::stats::PaletteStats;

/// A co-occurrence detector feeding a single vibe
#[derive(Clone, Copy)]
pub struct SeasonalDetector {
    pub name: &'static str,
    pub vibe: Vibe,
    pub bonus: fn(&[FeatureBands], &PaletteStats) -> i32,
}

pub const SEASONAL_DETECTORS: &[SeasonalDetector] = &[
    SeasonalDetector {
        name: "red_and_green",
        vibe: Vibe::Christmas,
        bonus: christmas_bonus,
    },
    SeasonalDetector {
        name: "orange_and_black",
        vibe: Vibe::Halloween,
        bonus: halloween_bonus,
    },
];

const CHRISTMAS_BASE: i32 = 20;
const CHRISTMAS_PER_EXTRA_SAMPLE: i32 = 5;
const CHRISTMAS_SATURATION_WEIGHT: f64 = 10.0;

const HALLOWEEN_BASE: i32 = 30;
const HALLOWEEN_PURPLE_ACCENT: i32 = 10;
const HALLOWEEN_VIVID_ORANGE: i32 = 6;
const HALLOWEEN_MIN_NEAR_BLACK: usize = 2;

/// Near-pure red: hue in [340, 360) or [0, 20), saturated, mid lightness
fn is_festive_red(b: &FeatureBands) -> bool {
    let hsl = b.hsl;
    b.is_chromatic()
        && (hsl.h >= 340.0 || hsl.h < 20.0)
        && hsl.s >= 0.5
        && hsl.l >= 0.25
        && hsl.l < 0.7
}

/// Evergreen: hue in [90, 150], reasonably saturated, not washed out
fn is_festive_green(b: &FeatureBands) -> bool {
    let hsl = b.hsl;
    (90.0..=150.0).contains(&hsl.h) && hsl.s >= 0.35 && hsl.l >= 0.15 && hsl.l < 0.65
}

/// Pumpkin orange: hue in [20, 45], strongly saturated, not in shadow
fn is_pumpkin_orange(b: &FeatureBands) -> bool {
    let hsl = b.hsl;
    (20.0..=45.0).contains(&hsl.h) && hsl.s >= 0.6 && hsl.l >= 0.3
}

/// Red and green together.
///
/// Zero unless both a festive red and a festive green are present. The bonus
/// grows with the number of qualifying samples and their mean saturation.
pub fn christmas_bonus(bands: &[FeatureBands], _stats: &PaletteStats) -> i32 {
    let reds: Vec<&FeatureBands> = bands.iter().filter(|b| is_festive_red(b)).collect();
    let greens: Vec<&FeatureBands> = bands.iter().filter(|b| is_festive_green(b)).collect();

    if reds.is_empty() || greens.is_empty() {
        return 0;
    }

    let qualifying = reds.len() + greens.len();
    let mean_saturation =
        reds.iter().chain(greens.iter()).map(|b| b.hsl.s).sum::<f64>() / qualifying as f64;

    CHRISTMAS_BASE
        + CHRISTMAS_PER_EXTRA_SAMPLE * (qualifying as i32 - 2)
        + (mean_saturation * CHRISTMAS_SATURATION_WEIGHT).round() as i32
}

/// Orange with at least two near-black samples.
///
/// A purple accent or a very vivid orange pushes the bonus higher.
pub fn halloween_bonus(bands: &[FeatureBands], stats: &PaletteStats) -> i32 {
    let oranges: Vec<&FeatureBands> = bands.iter().filter(|b| is_pumpkin_orange(b)).collect();

    if oranges.is_empty() || stats.very_dark_count < HALLOWEEN_MIN_NEAR_BLACK {
        return 0;
    }

    let mut bonus = HALLOWEEN_BASE;

    if bands
        .iter()
        .any(|b| b.in_sector(HueSector::Purple) && b.hsl.s >= 0.25)
    {
        bonus += HALLOWEEN_PURPLE_ACCENT;
    }

    if oranges.iter().any(|b| b.hsl.s >= 0.8) {
        bonus += HALLOWEEN_VIVID_ORANGE;
    }

    bonus
}

/// Run every detector and add its bonus to the score table
pub fn apply_seasonal_detectors(
    bands: &[FeatureBands],
    stats: &PaletteStats,
    scores: &mut ScoreTable,
) {
    for detector in SEASONAL_DETECTORS {
        let bonus = (detector.bonus)(bands, stats);
        if bonus > 0 {
            tracing::debug!(detector = detector.name, bonus, "Seasonal pattern detected");
            scores.add(detector.vibe, bonus);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vibe::color::{rgb_to_hsl, Hsl};

    fn palette(colors: &[(u8, u8, u8)]) -> (Vec<FeatureBands>, PaletteStats) {
        let bands: Vec<FeatureBands> = colors
            .iter()
            .map(|&(r, g, b)| FeatureBands::classify(rgb_to_hsl(r, g, b)))
            .collect();
        let stats = PaletteStats::from_bands(&bands).unwrap();
        (bands, stats)
    }

    fn hsl_palette(samples: &[(f64, f64, f64)]) -> (Vec<FeatureBands>, PaletteStats) {
        let bands: Vec<FeatureBands> = samples
            .iter()
            .map(|&(h, s, l)| FeatureBands::classify(Hsl::new(h, s, l)))
            .collect();
        let stats = PaletteStats::from_bands(&bands).unwrap();
        (bands, stats)
    }

    #[test]
    fn test_green_only_scores_zero() {
        let (bands, stats) = palette(&[(20, 140, 40), (30, 150, 60), (40, 160, 70)]);
        assert_eq!(christmas_bonus(&bands, &stats), 0);
    }

    #[test]
    fn test_red_only_scores_zero() {
        let (bands, stats) = palette(&[(200, 30, 30), (210, 40, 40)]);
        assert_eq!(christmas_bonus(&bands, &stats), 0);
    }

    #[test]
    fn test_adding_red_to_green_fires() {
        let (bands, stats) = palette(&[(20, 140, 40), (30, 150, 60), (40, 160, 70), (200, 30, 30)]);
        assert!(christmas_bonus(&bands, &stats) > 0);
    }

    #[test]
    fn test_christmas_bonus_value() {
        let (bands, stats) = palette(&[
            (200, 30, 30),
            (20, 140, 40),
            (210, 40, 40),
            (30, 150, 60),
            (250, 250, 240),
        ]);
        // Four qualifying samples with saturations 0.74, 0.75, 0.68, 0.67
        assert_eq!(christmas_bonus(&bands, &stats), 20 + 5 * 2 + 7);
    }

    #[test]
    fn test_red_window_wraps_the_hue_circle() {
        let (bands, stats) = hsl_palette(&[(345.0, 0.8, 0.5), (120.0, 0.8, 0.4)]);
        assert!(christmas_bonus(&bands, &stats) > 0);

        let (bands, stats) = hsl_palette(&[(330.0, 0.8, 0.5), (120.0, 0.8, 0.4)]);
        assert_eq!(christmas_bonus(&bands, &stats), 0);
    }

    #[test]
    fn test_christmas_bonus_is_monotonic_in_saturation() {
        let mut previous = 0;
        for step in 0..=10 {
            let s = 0.5 + f64::from(step) * 0.05;
            let (bands, stats) = hsl_palette(&[(0.0, s, 0.45), (130.0, s, 0.35), (60.0, 0.5, 0.96)]);
            let bonus = christmas_bonus(&bands, &stats);
            assert!(bonus >= previous, "bonus dropped from {previous} to {bonus} at s={s}");
            previous = bonus;
        }
    }

    #[test]
    fn test_more_qualifying_samples_raise_the_bonus() {
        let (two, two_stats) = hsl_palette(&[(0.0, 0.8, 0.45), (130.0, 0.8, 0.35)]);
        let (three, three_stats) =
            hsl_palette(&[(0.0, 0.8, 0.45), (130.0, 0.8, 0.35), (125.0, 0.8, 0.4)]);
        assert!(christmas_bonus(&three, &three_stats) > christmas_bonus(&two, &two_stats));
    }

    #[test]
    fn test_halloween_requires_two_near_blacks() {
        let (bands, stats) = palette(&[(230, 130, 20), (10, 10, 10), (200, 200, 200)]);
        assert_eq!(halloween_bonus(&bands, &stats), 0);

        let (bands, stats) = palette(&[(230, 130, 20), (10, 10, 10), (15, 15, 20)]);
        assert!(halloween_bonus(&bands, &stats) > 0);
    }

    #[test]
    fn test_halloween_requires_orange() {
        let (bands, stats) = palette(&[(120, 20, 140), (10, 10, 10), (15, 15, 20)]);
        assert_eq!(halloween_bonus(&bands, &stats), 0);
    }

    #[test]
    fn test_halloween_accents() {
        // Orange at s=0.84 earns the vivid bonus; purple earns the accent
        let (plain, plain_stats) = palette(&[(230, 130, 20), (10, 10, 10), (15, 15, 20)]);
        let (spooky, spooky_stats) =
            palette(&[(230, 130, 20), (10, 10, 10), (15, 15, 20), (120, 20, 140)]);

        assert_eq!(halloween_bonus(&plain, &plain_stats), 30 + 6);
        assert_eq!(halloween_bonus(&spooky, &spooky_stats), 30 + 10 + 6);
    }

    #[test]
    fn test_apply_seasonal_detectors_only_touches_seasonal_vibes() {
        let (bands, stats) = palette(&[(230, 130, 20), (10, 10, 10), (15, 15, 20), (120, 20, 140)]);
        let mut scores = ScoreTable::new();
        apply_seasonal_detectors(&bands, &stats, &mut scores);

        assert_eq!(scores.get(Vibe::Halloween), 46);
        assert_eq!(scores.get(Vibe::Christmas), 0);
        let others: i32 = scores
            .iter()
            .filter(|(v, _)| !matches!(v, Vibe::Halloween | Vibe::Christmas))
            .map(|(_, s)| s)
            .sum();
        assert_eq!(others, 0);
    }
}
