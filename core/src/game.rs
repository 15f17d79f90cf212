use core::cell::{Cell, Ref, RefCell};
use futures_util::future::join_all;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new board was installed with this many categories.
    Ready { categories: usize },
    /// Another setup is still running, nothing was done.
    Busy,
}

/// Disables the start control and shows the loading indicator for as long as it lives.
struct SetupGuard<'a, S: RenderSurface> {
    busy: &'a Cell<bool>,
    surface: &'a S,
}

impl<'a, S: RenderSurface> SetupGuard<'a, S> {
    fn acquire(busy: &'a Cell<bool>, surface: &'a S) -> Option<Self> {
        if busy.replace(true) {
            return None;
        }
        surface.set_start_enabled(false);
        surface.set_loading(true);
        Some(Self { busy, surface })
    }
}

impl<S: RenderSurface> Drop for SetupGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.set_loading(false);
        self.surface.set_start_enabled(true);
        self.busy.set(false);
    }
}

/// Owns the board and drives setup and clicks. Everything runs on one thread; the board is never borrowed across an
/// await point.
pub struct TriviaGame<A, S> {
    config: GameConfig,
    api: A,
    surface: S,
    sanitizer: Box<dyn Sanitizer>,
    board: RefCell<Option<Board>>,
    busy: Cell<bool>,
    rng: RefCell<SmallRng>,
}

impl<A: TriviaApi, S: RenderSurface> TriviaGame<A, S> {
    pub fn new(config: GameConfig, seed: u64, api: A, surface: S) -> Self {
        let sanitizer = config.sanitizer.build();
        Self {
            config,
            api,
            surface,
            sanitizer,
            board: RefCell::new(None),
            busy: Cell::new(false),
            rng: RefCell::new(SmallRng::seed_from_u64(seed)),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn board(&self) -> Ref<'_, Option<Board>> {
        self.board.borrow()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    fn fork_rng(&self) -> SmallRng {
        SmallRng::from_rng(&mut *self.rng.borrow_mut())
    }

    /// Sets up a new game: fetches and samples categories, fetches their clues in parallel, then swaps in the new
    /// board and renders it. A failed category is dropped; a failed category list aborts and leaves the previous
    /// board in place.
    pub async fn start(&self) -> Result<StartOutcome> {
        let Some(_guard) = SetupGuard::acquire(&self.busy, &self.surface) else {
            log::debug!("setup already running, start ignored");
            return Ok(StartOutcome::Busy);
        };

        let num_categories = self.config.num_categories;
        let num_clues = self.config.num_clues;
        let ids = fetch_category_ids(&self.api, num_categories, self.fork_rng()).await?;
        log::debug!("sampled category ids: {:?}", ids);

        let fetches = ids
            .iter()
            .map(|&id| fetch_category(&self.api, id, num_clues, self.fork_rng()));
        let categories: Vec<Category> = join_all(fetches).await.into_iter().flatten().collect();

        if categories.len() < ids.len() {
            log::warn!(
                "{} of {} categories unavailable",
                ids.len() - categories.len(),
                ids.len()
            );
        }
        let count = categories.len();
        self.install_board(categories);
        log::info!("New game with {} categories", count);
        Ok(StartOutcome::Ready { categories: count })
    }

    /// Replaces the board in a single assignment and renders it from scratch.
    fn install_board(&self, categories: Vec<Category>) {
        let layout = build_board(&categories, self.config.num_clues, self.sanitizer.as_ref());
        *self.board.borrow_mut() = Some(Board::new(categories));
        self.surface.render_header(&layout.header);
        self.surface.render_body(&layout);
    }

    /// Advances the clue at `coord` and shows its new text. Returns the clue's state afterwards, or `None` when the
    /// click did not land on a clue.
    pub fn click(&self, coord: Coord) -> Option<RevealState> {
        let (state, html) = {
            let mut board = self.board.borrow_mut();
            let Some(board) = board.as_mut() else {
                log::debug!("click at {} ignored, no board yet", coord);
                return None;
            };
            let html = match board.reveal(coord) {
                Ok(RevealOutcome::Question(text) | RevealOutcome::Answer(text)) => {
                    Some(self.sanitizer.sanitize(text))
                }
                Ok(RevealOutcome::NoChange) => None,
                Err(err) => {
                    log::warn!("Ignoring click: {}", err);
                    return None;
                }
            };
            (board.clue_at(coord)?.reveal_state(), html)
        };

        match html {
            Some(html) => {
                log::trace!("{} now {:?}", coord, state);
                self.surface.update_cell(coord, &html);
            }
            None => log::trace!("{} already answered", coord),
        }
        Some(state)
    }
}
