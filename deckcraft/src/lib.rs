//! deckcraft - skateboard deck prompt synthesis and procedural artwork
//!
//! Turns a theme and a subject into a detailed image-generation prompt, using
//! a knowledge base of places for geographic subjects. When no remote image
//! generator is available, a procedural renderer produces placeholder art
//! with the deck's 33:128 proportions.

pub mod config;
pub mod export;
pub mod knowledge;
pub mod prompt;
pub mod random;
pub mod remote;
pub mod render;
pub mod studio;
pub mod theme;

pub use config::DeckcraftConfig;
pub use knowledge::KnowledgeBase;
pub use prompt::{build_prompt, PromptBuilder, SubjectBrief};
pub use random::{EntropySource, RandomSource, SeededSource};
pub use remote::ImageClient;
pub use render::{render_fallback_art, DeckImage, Renderer};
pub use studio::{generate_deck, DeckOutcome, DeckRequest, DeckSource, DeckStudio};
pub use theme::ThemeCategory;
