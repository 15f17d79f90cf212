use rand::Rng;

use crate::*;

/// Smallest candidate pool requested, however few categories the board needs.
pub const MIN_CANDIDATES: usize = 14;

/// How many categories to request so that sampling `count` of them has room to vary.
pub const fn candidate_pool_size(count: usize) -> usize {
    let pool = count.saturating_mul(3);
    if pool < MIN_CANDIDATES {
        MIN_CANDIDATES
    } else {
        pool
    }
}

/// Fetches a candidate pool and samples `count` distinct category ids from it.
pub async fn fetch_category_ids<A: TriviaApi, R: Rng>(
    api: &A,
    count: usize,
    mut rng: R,
) -> Result<Vec<CategoryId>> {
    let pool = api.categories(candidate_pool_size(count)).await?;
    let mut ids: Vec<CategoryId> = pool.into_iter().map(|summary| summary.id).collect();

    let received = ids.len();
    ids.sort_unstable();
    ids.dedup();
    if ids.len() != received {
        log::debug!(
            "candidate pool had {} duplicate ids",
            received - ids.len()
        );
    }

    let ids = sample(ids, count, &mut rng);
    if ids.len() < count {
        log::warn!(
            "Only {} categories available, requested {}",
            ids.len(),
            count
        );
    }
    Ok(ids)
}

/// Fetches one category and samples `clues_per_category` of its clues. Failures are logged and yield `None` so the
/// caller can drop the category and carry on with the rest of the board.
pub async fn fetch_category<A: TriviaApi, R: Rng>(
    api: &A,
    id: CategoryId,
    clues_per_category: usize,
    mut rng: R,
) -> Option<Category> {
    match try_fetch_category(api, id, clues_per_category, &mut rng).await {
        Ok(category) => Some(category),
        Err(err) => {
            log::warn!("Dropping category: {}", err);
            None
        }
    }
}

async fn try_fetch_category<A: TriviaApi, R: Rng>(
    api: &A,
    id: CategoryId,
    clues_per_category: usize,
    rng: &mut R,
) -> Result<Category> {
    let detail = api
        .category(id)
        .await
        .map_err(|err| TriviaError::CategoryUnavailable {
            id,
            reason: err.into(),
        })?;

    let available = detail.clues.len();
    if available < clues_per_category {
        return Err(TriviaError::CategoryUnavailable {
            id,
            reason: Unavailable::TooFewClues {
                available,
                needed: clues_per_category,
            },
        });
    }

    let clues = sample(detail.clues, clues_per_category, rng)
        .into_iter()
        .map(|clue| {
            Clue::new(
                clue.question.unwrap_or_default(),
                clue.answer.unwrap_or_default(),
            )
        })
        .collect();
    Ok(Category::new(detail.title.unwrap_or_default(), clues))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use futures::executor::block_on;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::BTreeSet;

    fn rng(seed: u64) -> SmallRng {
        SmallRng::seed_from_u64(seed)
    }

    #[test]
    fn pool_size_is_generous() {
        assert_eq!(candidate_pool_size(1), 14);
        assert_eq!(candidate_pool_size(4), 14);
        assert_eq!(candidate_pool_size(6), 18);
        assert_eq!(candidate_pool_size(10), 30);
    }

    #[test]
    fn category_ids_are_distinct_and_sized() {
        let api = FakeApi::with_categories(20, 5);
        for seed in 0..20 {
            let ids = block_on(fetch_category_ids(&api, 6, rng(seed))).unwrap();
            assert_eq!(ids.len(), 6);
            assert_eq!(ids.iter().collect::<BTreeSet<_>>().len(), 6);
        }
        assert_eq!(api.pool_requests(), vec![18; 20]);
    }

    #[test]
    fn duplicate_pool_entries_are_collapsed() {
        let mut api = FakeApi::with_categories(3, 5);
        api.pool = Ok(vec![1, 1, 2, 2, 3, 3]);

        let mut ids = block_on(fetch_category_ids(&api, 6, rng(0))).unwrap();
        ids.sort_unstable();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn pool_failure_is_a_fetch_error() {
        let mut api = FakeApi::with_categories(3, 5);
        api.pool = Err(ApiError::Network("offline".into()));

        assert_eq!(
            block_on(fetch_category_ids(&api, 6, rng(0))),
            Err(TriviaError::Fetch(ApiError::Network("offline".into())))
        );
    }

    #[test]
    fn category_clues_are_sampled_and_normalized() {
        let api = FakeApi::with_categories(1, 12);
        let category = block_on(fetch_category(&api, 1, 5, rng(4))).unwrap();

        assert_eq!(category.title(), "Category 1");
        assert_eq!(category.clues().len(), 5);
        let questions: BTreeSet<_> = category.clues().iter().map(Clue::question).collect();
        assert_eq!(questions.len(), 5);
        for clue in category.clues() {
            assert_eq!(clue.reveal_state(), RevealState::Hidden);
            assert_eq!(clue.answer().replace('A', "Q"), clue.question());
        }
    }

    #[test]
    fn clue_sampling_is_not_first_n() {
        let api = FakeApi::with_categories(1, 12);
        let differs = (0..20).any(|seed| {
            let category = block_on(fetch_category(&api, 1, 5, rng(seed))).unwrap();
            let questions: Vec<_> = category.clues().iter().map(Clue::question).collect();
            questions != ["Q1-0", "Q1-1", "Q1-2", "Q1-3", "Q1-4"]
        });
        assert!(differs);
    }

    #[test]
    fn missing_question_or_answer_becomes_empty_text() {
        let mut api = FakeApi::with_categories(0, 0);
        api.categories.insert(
            9,
            Ok(CategoryDetail {
                title: None,
                clues: vec![ApiClue {
                    question: None,
                    answer: Some("A".into()),
                }],
            }),
        );

        let category = block_on(fetch_category(&api, 9, 1, rng(0))).unwrap();
        assert_eq!(category.title(), "");
        assert_eq!(category.clues()[0].question(), "");
        assert_eq!(category.clues()[0].answer(), "A");
    }

    #[test]
    fn unusable_categories_yield_none() {
        let mut api = FakeApi::with_categories(2, 3);
        api.categories
            .insert(2, Err(ApiError::Status { status: 500, url: "x".into() }));

        assert_eq!(block_on(fetch_category(&api, 1, 5, rng(0))), None);
        assert_eq!(block_on(fetch_category(&api, 2, 1, rng(0))), None);
        assert_eq!(block_on(fetch_category(&api, 77, 1, rng(0))), None);
        assert!(block_on(fetch_category(&api, 1, 3, rng(0))).is_some());
    }

    #[test]
    fn unavailable_categories_name_the_reason() {
        let mut api = FakeApi::with_categories(2, 3);
        api.categories
            .insert(2, Err(ApiError::Status { status: 500, url: "x".into() }));

        let too_few = block_on(try_fetch_category(&api, 1, 5, &mut rng(0))).unwrap_err();
        assert_eq!(
            too_few,
            TriviaError::CategoryUnavailable {
                id: 1,
                reason: Unavailable::TooFewClues { available: 3, needed: 5 },
            }
        );
        assert_eq!(
            too_few.to_string(),
            "Category 1 unavailable: has 3 clues, 5 needed"
        );

        let failed = block_on(try_fetch_category(&api, 2, 1, &mut rng(0))).unwrap_err();
        assert_eq!(
            failed,
            TriviaError::CategoryUnavailable {
                id: 2,
                reason: Unavailable::Api(ApiError::Status { status: 500, url: "x".into() }),
            }
        );
    }
}
