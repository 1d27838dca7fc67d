//! Palette classification route handlers.

use axum::extract::{Path, State};
use tracing::info;

use crate::error::AppError;
use crate::types::{
    to_samples, ClassifyRequest, ClassifyResponse, ListVibesResponse, VibeInfo,
    VibeQueriesResponse,
};
use crate::vibe::{analyze_palette, Vibe, CONFIDENCE_FLOOR};

use super::extractors::MsgPackExtractor;
use super::routes::MsgPack;
use super::AppState;

/// POST /api/v1/vibe/classify
///
/// Classify a palette and return the evidence plus the search terms for the
/// winning vibe.
pub async fn classify(
    State(state): State<AppState>,
    MsgPackExtractor(req): MsgPackExtractor<ClassifyRequest>,
) -> Result<MsgPack<ClassifyResponse>, AppError> {
    let analysis = analyze_palette(&to_samples(&req.colors))?;

    info!(
        vibe = %analysis.vibe,
        score = analysis.score,
        colors = req.colors.len(),
        "Classified palette"
    );

    let search_terms = state.search_terms.terms_for(analysis.vibe).to_vec();
    Ok(MsgPack(ClassifyResponse::new(analysis, search_terms)))
}

/// GET /api/v1/vibe/list
pub async fn list_vibes(State(state): State<AppState>) -> MsgPack<ListVibesResponse> {
    let vibes = state
        .search_terms
        .iter()
        .map(|(vibe, terms)| VibeInfo {
            vibe,
            fallback: vibe.is_fallback(),
            search_terms: terms.to_vec(),
        })
        .collect();

    MsgPack(ListVibesResponse {
        vibes,
        confidence_floor: CONFIDENCE_FLOOR,
    })
}

/// GET /api/v1/vibe/:vibe/queries
///
/// The vibe name is matched case-insensitively.
pub async fn vibe_queries(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<MsgPack<VibeQueriesResponse>, AppError> {
    let vibe: Vibe = name.parse()?;

    Ok(MsgPack(VibeQueriesResponse {
        vibe,
        search_terms: state.search_terms.terms_for(vibe).to_vec(),
    }))
}
