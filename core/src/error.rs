use thiserror::Error;

use crate::{ApiError, CategoryId, Coord};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriviaError {
    #[error("Could not fetch categories: {0}")]
    Fetch(#[from] ApiError),
    #[error("Category {id} unavailable: {reason}")]
    CategoryUnavailable { id: CategoryId, reason: Unavailable },
    #[error("No clue at {0}")]
    InvalidClick(Coord),
}

/// Why a category was left off the board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Unavailable {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("has {available} clues, {needed} needed")]
    TooFewClues { available: usize, needed: usize },
}

pub type Result<T> = core::result::Result<T, TriviaError>;
