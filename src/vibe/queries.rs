//! Catalog search terms for each vibe.
//!
//! Recent-year filters keep results trending; seasonal vibes lean on classics
//! where recency matters less.

use std::collections::HashMap;

use super::category::Vibe;
use super::VibeError;

pub const ENERGETIC_QUERIES: &[&str] = &[
    "year:2024-2025 genre:pop",
    "year:2024-2025 genre:dance",
    "workout hits 2025",
    "club trends 2025",
];

pub const COZY_QUERIES: &[&str] = &[
    "year:2020-2025 genre:acoustic",
    "year:2023-2025 genre:folk",
    "coffee shop hits",
    "chill hits 2025",
];

pub const MOODY_QUERIES: &[&str] = &[
    "year:2023-2025 genre:indie",
    "sad songs 2025",
    "late night vibes",
    "moody pop hits",
];

pub const DREAMY_QUERIES: &[&str] = &[
    "year:2023-2025 genre:dream-pop",
    "ethereal hits",
    "psychedelic pop 2025",
    "bedroom pop 2025",
];

pub const INTENSE_QUERIES: &[&str] = &[
    "year:2023-2025 genre:rock",
    "year:2023-2025 genre:alternative",
    "gym phonk 2025",
    "high energy rock",
];

pub const CHILL_QUERIES: &[&str] = &[
    "year:2024-2025 genre:r-n-b",
    "lofi hits 2025",
    "chill pop 2025",
    "relaxing hits",
];

pub const UPLIFTING_QUERIES: &[&str] = &[
    "year:2024-2025 genre:pop happy",
    "feel good hits 2025",
    "summer hits 2025",
    "morning motivation",
];

pub const MELANCHOLIC_QUERIES: &[&str] = &[
    "year:2020-2025 genre:piano",
    "heartbreak hits 2025",
    "ballads 2025",
    "stripped back",
];

pub const CHRISTMAS_QUERIES: &[&str] = &[
    "Christmas Hits",
    "Holiday Pop",
    "Christmas Classics",
    "Jazz Christmas",
];

pub const HALLOWEEN_QUERIES: &[&str] = &["Halloween Party", "Spooky Hits", "Horror Soundtracks"];

pub const NEUTRAL_QUERIES: &[&str] = &["Top 50 Global", "Viral Hits 2025", "year:2025 genre:pop"];

/// Built-in search terms for a vibe
pub fn default_queries(vibe: Vibe) -> &'static [&'static str] {
    match vibe {
        Vibe::Energetic => ENERGETIC_QUERIES,
        Vibe::Cozy => COZY_QUERIES,
        Vibe::Moody => MOODY_QUERIES,
        Vibe::Dreamy => DREAMY_QUERIES,
        Vibe::Intense => INTENSE_QUERIES,
        Vibe::Chill => CHILL_QUERIES,
        Vibe::Uplifting => UPLIFTING_QUERIES,
        Vibe::Melancholic => MELANCHOLIC_QUERIES,
        Vibe::Christmas => CHRISTMAS_QUERIES,
        Vibe::Halloween => HALLOWEEN_QUERIES,
        Vibe::Neutral => NEUTRAL_QUERIES,
    }
}

/// Ordered search terms for every vibe, fallback included.
///
/// Construction validates completeness, so lookups on a built table never
/// come back empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTermTable {
    terms: [Vec<String>; Vibe::ALL.len()],
}

impl SearchTermTable {
    /// The built-in table
    pub fn builtin() -> Self {
        Self {
            terms: Vibe::ALL.map(|vibe| {
                default_queries(vibe)
                    .iter()
                    .map(|q| (*q).to_string())
                    .collect()
            }),
        }
    }

    /// Built-in table with per-vibe replacements keyed by vibe name.
    ///
    /// Blank queries are dropped. Fails on an unknown vibe name or when any
    /// vibe ends up with no queries.
    pub fn with_overrides(overrides: &HashMap<String, Vec<String>>) -> Result<Self, VibeError> {
        let mut table = Self::builtin();

        for (name, queries) in overrides {
            let vibe: Vibe = name.parse()?;
            table.terms[vibe.index()] = queries
                .iter()
                .map(|q| q.trim())
                .filter(|q| !q.is_empty())
                .map(str::to_string)
                .collect();
        }

        table.verify()?;
        Ok(table)
    }

    /// Check that every vibe has at least one query
    pub fn verify(&self) -> Result<(), VibeError> {
        match Vibe::ALL
            .into_iter()
            .find(|vibe| self.terms[vibe.index()].is_empty())
        {
            Some(vibe) => Err(VibeError::ConfigurationGap(vibe)),
            None => Ok(()),
        }
    }

    pub fn terms_for(&self, vibe: Vibe) -> &[String] {
        &self.terms[vibe.index()]
    }

    /// Every vibe paired with its queries, in enumeration order
    pub fn iter(&self) -> impl Iterator<Item = (Vibe, &[String])> + '_ {
        Vibe::ALL
            .into_iter()
            .map(move |vibe| (vibe, self.terms_for(vibe)))
    }
}

impl Default for SearchTermTable {
    fn default() -> Self {
        Self::builtin()
    }
}
