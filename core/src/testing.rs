//! In-memory collaborators shared by the unit tests.

use core::cell::{Cell, RefCell};
use core::future::poll_fn;
use core::task::Poll;
use std::collections::BTreeMap;

use crate::*;

/// Suspends the current task once, letting sibling futures run.
pub(crate) async fn yield_now() {
    let mut yielded = false;
    poll_fn(|cx| {
        if yielded {
            Poll::Ready(())
        } else {
            yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    })
    .await
}

pub(crate) struct FakeApi {
    pub pool: core::result::Result<Vec<CategoryId>, ApiError>,
    pub categories: BTreeMap<CategoryId, core::result::Result<CategoryDetail, ApiError>>,
    /// Suspend once inside every request, like a real network round trip would.
    pub suspend: bool,
    pool_requests: RefCell<Vec<usize>>,
    category_requests: Cell<usize>,
}

impl FakeApi {
    /// Categories `1..=count`, titled `Category {id}`, each with clues `Q{id}-{k}` / `A{id}-{k}`.
    pub fn with_categories(count: CategoryId, clues: usize) -> Self {
        let categories = (1..=count)
            .map(|id| {
                let detail = CategoryDetail {
                    title: Some(format!("Category {id}")),
                    clues: (0..clues)
                        .map(|k| ApiClue {
                            question: Some(format!("Q{id}-{k}")),
                            answer: Some(format!("A{id}-{k}")),
                        })
                        .collect(),
                };
                (id, Ok(detail))
            })
            .collect();
        Self {
            pool: Ok((1..=count).collect()),
            categories,
            suspend: false,
            pool_requests: RefCell::new(Vec::new()),
            category_requests: Cell::new(0),
        }
    }

    pub fn pool_requests(&self) -> Vec<usize> {
        self.pool_requests.borrow().clone()
    }

    pub fn category_requests(&self) -> usize {
        self.category_requests.get()
    }
}

impl TriviaApi for FakeApi {
    async fn categories(
        &self,
        count: usize,
    ) -> core::result::Result<Vec<CategorySummary>, ApiError> {
        self.pool_requests.borrow_mut().push(count);
        if self.suspend {
            yield_now().await;
        }
        let pool = self.pool.clone()?;
        Ok(pool.into_iter().map(|id| CategorySummary { id }).collect())
    }

    async fn category(&self, id: CategoryId) -> core::result::Result<CategoryDetail, ApiError> {
        self.category_requests.set(self.category_requests.get() + 1);
        if self.suspend {
            yield_now().await;
        }
        self.categories
            .get(&id)
            .cloned()
            .unwrap_or_else(|| {
                Err(ApiError::Status {
                    status: 404,
                    url: api::category_url("fake", id),
                })
            })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum SurfaceEvent {
    Header(Vec<String>),
    Body { rows: usize, cols: usize },
    Cell(Coord, String),
    Loading(bool),
    StartEnabled(bool),
}

#[derive(Default)]
pub(crate) struct RecordingSurface {
    events: RefCell<Vec<SurfaceEvent>>,
}

impl RecordingSurface {
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Last html written to `coord`, if any.
    pub fn cell(&self, coord: Coord) -> Option<String> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            SurfaceEvent::Cell(at, html) if *at == coord => Some(html.clone()),
            _ => None,
        })
    }

    fn push(&self, event: SurfaceEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl RenderSurface for RecordingSurface {
    fn render_header(&self, titles: &[String]) {
        self.push(SurfaceEvent::Header(titles.to_vec()));
    }

    fn render_body(&self, layout: &BoardLayout) {
        self.push(SurfaceEvent::Body {
            rows: layout.rows(),
            cols: layout.cols(),
        });
    }

    fn update_cell(&self, coord: Coord, html: &str) {
        self.push(SurfaceEvent::Cell(coord, html.to_string()));
    }

    fn set_loading(&self, loading: bool) {
        self.push(SurfaceEvent::Loading(loading));
    }

    fn set_start_enabled(&self, enabled: bool) {
        self.push(SurfaceEvent::StartEnabled(enabled));
    }
}
