//! API types for palette classification.

use serde::{Deserialize, Serialize};

use crate::vibe::{ColorSample, PaletteStats, Vibe, VibeAnalysis, VibeScore};

/// Request to classify a palette
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// Representative colors as `[r, g, b]` triples
    pub colors: Vec<[u8; 3]>,
}

/// Convert wire color triples into samples
pub fn to_samples(colors: &[[u8; 3]]) -> Vec<ColorSample> {
    colors.iter().copied().map(ColorSample::from).collect()
}

/// Classification result with the search terms for the winning vibe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub vibe: Vibe,
    pub score: i32,
    /// Every scored vibe in tie-break order
    pub scores: Vec<VibeScore>,
    pub stats: PaletteStats,
    pub search_terms: Vec<String>,
}

impl ClassifyResponse {
    pub fn new(analysis: VibeAnalysis, search_terms: Vec<String>) -> Self {
        Self {
            vibe: analysis.vibe,
            score: analysis.score,
            scores: analysis.scores,
            stats: analysis.stats,
            search_terms,
        }
    }
}

/// One vibe and the catalog queries used for it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VibeInfo {
    pub vibe: Vibe,
    /// True for the fallback used when nothing scores high enough
    pub fallback: bool,
    pub search_terms: Vec<String>,
}

/// Response listing every vibe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListVibesResponse {
    pub vibes: Vec<VibeInfo>,
    /// Score a vibe must exceed to win
    pub confidence_floor: i32,
}

/// Search terms for a single vibe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VibeQueriesResponse {
    pub vibe: Vibe,
    pub search_terms: Vec<String>,
}
