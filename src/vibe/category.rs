//! The closed vibe vocabulary and the per-run score table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::VibeError;

/// Mood category assigned to a palette.
///
/// Declaration order is the tie-break order used by the winner selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vibe {
    Energetic,
    Cozy,
    Moody,
    Dreamy,
    Intense,
    Chill,
    Uplifting,
    Melancholic,
    Christmas,
    Halloween,
    /// Reserved fallback when no category is confident enough. Never scored.
    Neutral,
}

impl Vibe {
    /// Every vibe, fallback included
    pub const ALL: [Vibe; 11] = [
        Vibe::Energetic,
        Vibe::Cozy,
        Vibe::Moody,
        Vibe::Dreamy,
        Vibe::Intense,
        Vibe::Chill,
        Vibe::Uplifting,
        Vibe::Melancholic,
        Vibe::Christmas,
        Vibe::Halloween,
        Vibe::Neutral,
    ];

    /// Vibes that accumulate a score, in tie-break order
    pub const SCORED: [Vibe; 10] = [
        Vibe::Energetic,
        Vibe::Cozy,
        Vibe::Moody,
        Vibe::Dreamy,
        Vibe::Intense,
        Vibe::Chill,
        Vibe::Uplifting,
        Vibe::Melancholic,
        Vibe::Christmas,
        Vibe::Halloween,
    ];

    /// Capitalized display name
    pub fn name(self) -> &'static str {
        match self {
            Vibe::Energetic => "Energetic",
            Vibe::Cozy => "Cozy",
            Vibe::Moody => "Moody",
            Vibe::Dreamy => "Dreamy",
            Vibe::Intense => "Intense",
            Vibe::Chill => "Chill",
            Vibe::Uplifting => "Uplifting",
            Vibe::Melancholic => "Melancholic",
            Vibe::Christmas => "Christmas",
            Vibe::Halloween => "Halloween",
            Vibe::Neutral => "Neutral",
        }
    }

    /// Position in `ALL`
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn is_fallback(self) -> bool {
        self == Vibe::Neutral
    }
}

impl fmt::Display for Vibe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Vibe {
    type Err = VibeError;

    /// Case-insensitive lookup by name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Vibe::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| VibeError::UnknownVibe(s.to_string()))
    }
}

/// Running score per scored vibe, created fresh for every classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTable {
    totals: [i32; Vibe::SCORED.len()],
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` (possibly negative) to a vibe's total.
    ///
    /// The fallback vibe has no slot; adding to it is a no-op.
    pub fn add(&mut self, vibe: Vibe, delta: i32) {
        debug_assert!(!vibe.is_fallback(), "the fallback vibe is never scored");
        if let Some(total) = self.totals.get_mut(vibe.index()) {
            *total += delta;
        }
    }

    pub fn get(&self, vibe: Vibe) -> i32 {
        self.totals.get(vibe.index()).copied().unwrap_or(0)
    }

    /// Totals in tie-break order
    pub fn iter(&self) -> impl Iterator<Item = (Vibe, i32)> + '_ {
        Vibe::SCORED.into_iter().zip(self.totals.iter().copied())
    }
}
