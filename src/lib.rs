//! Vibe Playlist
//!
//! Classifies a color palette into a mood ("vibe") and turns that vibe into
//! catalog searches and playlists. The classifier in [`vibe`] is pure and
//! self-contained; [`catalog`] and [`server`] wire it to a music catalog
//! behind a MessagePack HTTP API.

pub mod catalog;
pub mod config;
pub mod error;
pub mod server;
pub mod types;
pub mod vibe;

pub use catalog::{CatalogError, MusicCatalog, SpotifyCatalog};
pub use config::AppConfig;
pub use error::AppError;
pub use vibe::{analyze_palette, classify_vibe, ColorSample, SearchTermTable, Vibe, VibeAnalysis};
