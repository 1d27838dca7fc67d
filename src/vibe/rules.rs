//! Declarative scoring rules.
//!
//! Sample rules fire once per palette sample; palette rules fire once per
//! classification against the aggregate statistics. Both are plain data so
//! each rule can be tested on its own.

use super::bands::{FeatureBands, HueSector, LightnessBand, SaturationBand};
use super::category::{ScoreTable, Vibe};
use super::stats::PaletteStats;

use HueSector::{Blue, Green, Orange, Purple, Red, Yellow};
use LightnessBand::{Dark, VeryBright};
use SaturationBand::{High, Low, Mid, VeryHigh};

/// A single (condition -> vibe, delta) entry evaluated per sample
#[derive(Clone, Copy)]
pub struct SampleRule {
    pub name: &'static str,
    pub vibe: Vibe,
    pub delta: i32,
    pub applies: fn(&FeatureBands) -> bool,
}

/// A palette-wide modifier with one or more effects
#[derive(Clone, Copy)]
pub struct PaletteRule {
    pub name: &'static str,
    pub applies: fn(&PaletteStats) -> bool,
    pub effects: &'static [(Vibe, i32)],
}

pub const SAMPLE_RULES: &[SampleRule] = &[
    // Energetic
    SampleRule {
        name: "vivid_and_light",
        vibe: Vibe::Energetic,
        delta: 10,
        applies: |b| b.saturation == VeryHigh && b.is_lit(),
    },
    SampleRule {
        name: "vivid_light_and_warm",
        vibe: Vibe::Energetic,
        delta: 4,
        applies: |b| b.saturation == VeryHigh && b.is_lit() && b.is_warm(),
    },
    // Cozy
    SampleRule {
        name: "soft_warm_midtone",
        vibe: Vibe::Cozy,
        delta: 9,
        applies: |b| {
            b.is_warm()
                && matches!(b.saturation, Mid | High)
                && matches!(b.lightness, LightnessBand::Mid | LightnessBand::Bright)
        },
    },
    SampleRule {
        name: "muted_orange",
        vibe: Vibe::Cozy,
        delta: 6,
        applies: |b| b.in_sector(Orange) && b.saturation == Mid,
    },
    // Moody
    SampleRule {
        name: "cool_in_shadow",
        vibe: Vibe::Moody,
        delta: 10,
        applies: |b| b.is_cool() && b.is_shadowed(),
    },
    SampleRule {
        name: "drab_in_shadow",
        vibe: Vibe::Moody,
        delta: 7,
        applies: |b| b.saturation == Low && b.is_shadowed(),
    },
    SampleRule {
        name: "dark_purple",
        vibe: Vibe::Moody,
        delta: 5,
        applies: |b| b.in_sector(Purple) && b.lightness == Dark,
    },
    // Dreamy
    SampleRule {
        name: "light_pastel",
        vibe: Vibe::Dreamy,
        delta: 9,
        applies: |b| b.is_lit() && b.saturation == Mid,
    },
    SampleRule {
        name: "light_purple",
        vibe: Vibe::Dreamy,
        delta: 7,
        applies: |b| b.in_sector(Purple) && b.is_lit(),
    },
    SampleRule {
        name: "pale_magenta",
        vibe: Vibe::Dreamy,
        delta: 6,
        applies: |b| {
            b.in_sector(Purple) && b.is_warm() && b.lightness == VeryBright && b.saturation == Mid
        },
    },
    // Intense
    SampleRule {
        name: "vivid_in_shadow",
        vibe: Vibe::Intense,
        delta: 10,
        applies: |b| b.saturation == VeryHigh && b.is_shadowed(),
    },
    SampleRule {
        name: "deep_red_or_blue",
        vibe: Vibe::Intense,
        delta: 6,
        applies: |b| {
            (b.in_sector(Red) || b.in_sector(Blue))
                && b.saturation == VeryHigh
                && b.lightness == Dark
        },
    },
    // Chill
    SampleRule {
        name: "soft_light_neutral",
        vibe: Vibe::Chill,
        delta: 7,
        applies: |b| b.saturation == Low && b.lightness == LightnessBand::Bright,
    },
    SampleRule {
        name: "light_sage",
        vibe: Vibe::Chill,
        delta: 8,
        applies: |b| b.in_sector(Green) && b.is_muted() && b.is_lit(),
    },
    SampleRule {
        name: "darkness_kills_chill",
        vibe: Vibe::Chill,
        delta: -12,
        applies: |b| b.is_shadowed(),
    },
    // Uplifting
    SampleRule {
        name: "saturated_and_light",
        vibe: Vibe::Uplifting,
        delta: 10,
        applies: |b| b.is_lit() && b.is_vivid(),
    },
    SampleRule {
        name: "sunny_yellow_green",
        vibe: Vibe::Uplifting,
        delta: 7,
        applies: |b| {
            (b.in_sector(Yellow) || b.in_sector(Green))
                && b.lightness == VeryBright
                && b.saturation == High
        },
    },
    // Melancholic
    SampleRule {
        name: "washed_out_midtone",
        vibe: Vibe::Melancholic,
        delta: 8,
        applies: |b| b.is_chromatic() && b.saturation == Low && b.lightness == LightnessBand::Mid,
    },
    SampleRule {
        name: "muted_cool_midtone",
        vibe: Vibe::Melancholic,
        delta: 6,
        applies: |b| b.is_cool() && b.is_muted() && b.lightness == LightnessBand::Mid,
    },
];

pub const PALETTE_RULES: &[PaletteRule] = &[
    PaletteRule {
        name: "bright_and_saturated",
        applies: |s| s.mostly_bright() && s.mean_saturation > 0.5,
        effects: &[(Vibe::Energetic, 8), (Vibe::Uplifting, 8)],
    },
    PaletteRule {
        name: "dark_and_desaturated",
        applies: |s| s.mostly_dark() && s.mean_saturation < 0.4,
        effects: &[(Vibe::Moody, 15), (Vibe::Melancholic, 7), (Vibe::Chill, -15)],
    },
    PaletteRule {
        name: "dark_and_saturated",
        applies: |s| s.mostly_dark() && s.mean_saturation >= 0.4,
        effects: &[(Vibe::Intense, 12), (Vibe::Moody, 7)],
    },
    PaletteRule {
        name: "warm_and_glowing",
        applies: |s| s.leans_warm() && s.mean_lightness > 0.5 && s.mean_lightness < 0.75,
        effects: &[(Vibe::Cozy, 10)],
    },
    PaletteRule {
        name: "cool_and_dark",
        applies: |s| s.leans_cool() && s.mostly_dark(),
        effects: &[(Vibe::Moody, 10)],
    },
];

/// Per-sample pass: every rule is checked against every sample once
pub fn score_samples(bands: &[FeatureBands], scores: &mut ScoreTable) {
    for sample in bands {
        for rule in SAMPLE_RULES.iter().filter(|rule| (rule.applies)(sample)) {
            scores.add(rule.vibe, rule.delta);
        }
    }
}

/// Palette-wide pass
pub fn apply_palette_rules(stats: &PaletteStats, scores: &mut ScoreTable) {
    for rule in PALETTE_RULES.iter().filter(|rule| (rule.applies)(stats)) {
        for &(vibe, delta) in rule.effects {
            scores.add(vibe, delta);
        }
    }
}
