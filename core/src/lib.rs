use serde::{Deserialize, Serialize};

pub use api::{ApiClue, ApiError, CategoryDetail, CategorySummary, TriviaApi};
pub use board::*;
pub use error::*;
pub use fetch::*;
pub use game::*;
pub use render::*;
pub use sample::*;
pub use sanitize::*;
pub use types::*;

pub mod api;
mod board;
mod error;
mod fetch;
mod game;
mod render;
mod sample;
mod sanitize;
mod types;

#[cfg(test)]
mod testing;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub api_base: String,
    pub num_categories: usize,
    pub num_clues: usize,
    pub sanitizer: SanitizerKind,
}

impl GameConfig {
    pub const DEFAULT_API_BASE: &'static str = "https://rithm-jeopardy.herokuapp.com/api";
    pub const DEFAULT_NUM_CATEGORIES: usize = 6;
    pub const DEFAULT_NUM_CLUES: usize = 5;
    pub const MAX_NUM_CATEGORIES: usize = 20;
    pub const MAX_NUM_CLUES: usize = 20;

    /// Board dimensions are clamped to between one and [`Self::MAX_NUM_CATEGORIES`] categories and one and
    /// [`Self::MAX_NUM_CLUES`] clues.
    pub fn new(
        api_base: impl Into<String>,
        num_categories: usize,
        num_clues: usize,
        sanitizer: SanitizerKind,
    ) -> Self {
        Self {
            api_base: api_base.into(),
            num_categories: num_categories.clamp(1, Self::MAX_NUM_CATEGORIES),
            num_clues: num_clues.clamp(1, Self::MAX_NUM_CLUES),
            sanitizer,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_API_BASE,
            Self::DEFAULT_NUM_CATEGORIES,
            Self::DEFAULT_NUM_CLUES,
            SanitizerKind::default(),
        )
    }
}
