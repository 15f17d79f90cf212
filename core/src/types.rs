use core::fmt;
use serde::{Deserialize, Serialize};

/// Identifier the remote API assigns to a category.
pub type CategoryId = u64;

/// Position of a clue on the board: `category` is the column, `clue` the row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub category: usize,
    pub clue: usize,
}

impl Coord {
    pub const fn new(category: usize, clue: usize) -> Self {
        Self { category, clue }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.category, self.clue)
    }
}
