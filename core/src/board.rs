use ndarray::Array2;

use crate::*;

/// How much of a clue the player has uncovered. Only ever moves forward.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    pub const fn next(self) -> Self {
        use RevealState::*;
        match self {
            Hidden => Question,
            Question | Answer => Answer,
        }
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Self::Answer)
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// What a click changed, carrying the raw (unsanitized) text that should now be displayed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome<'a> {
    NoChange,
    Question(&'a str),
    Answer(&'a str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clue {
    question: String,
    answer: String,
    reveal_state: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            reveal_state: RevealState::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn reveal_state(&self) -> RevealState {
        self.reveal_state
    }

    fn advance(&mut self) -> RevealOutcome<'_> {
        use RevealState::*;
        let prev = self.reveal_state;
        self.reveal_state = prev.next();
        match (prev, self.reveal_state) {
            (Hidden, Question) => RevealOutcome::Question(&self.question),
            (Question, Answer) => RevealOutcome::Answer(&self.answer),
            _ => RevealOutcome::NoChange,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}

/// The categories of one game. Replaced as a whole when a new game is set up; clicks only touch reveal states.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn clue_at(&self, coord: Coord) -> Option<&Clue> {
        self.categories
            .get(coord.category)
            .and_then(|category| category.clues.get(coord.clue))
    }

    /// Advances the clue at `coord` one step.
    pub fn reveal(&mut self, coord: Coord) -> Result<RevealOutcome<'_>> {
        let clue = self
            .categories
            .get_mut(coord.category)
            .and_then(|category| category.clues.get_mut(coord.clue))
            .ok_or(TriviaError::InvalidClick(coord))?;
        Ok(clue.advance())
    }
}

/// Text shown in a body cell before its clue is revealed.
pub const PLACEHOLDER: &str = "?";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BodyCell {
    pub coord: Coord,
    pub text: &'static str,
}

/// Render instructions for a fresh board: sanitized titles and a `clues × categories` grid of placeholders.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardLayout {
    pub header: Vec<String>,
    pub body: Array2<BodyCell>,
}

impl BoardLayout {
    pub fn rows(&self) -> usize {
        self.body.nrows()
    }

    pub fn cols(&self) -> usize {
        self.body.ncols()
    }
}

pub fn build_board(
    categories: &[Category],
    clues_per_category: usize,
    sanitizer: &dyn Sanitizer,
) -> BoardLayout {
    let header = categories
        .iter()
        .map(|category| sanitizer.sanitize(category.title()))
        .collect();
    let body = Array2::from_shape_fn((clues_per_category, categories.len()), |(clue, category)| {
        BodyCell {
            coord: Coord::new(category, clue),
            text: PLACEHOLDER,
        }
    });
    BoardLayout { header, body }
}
