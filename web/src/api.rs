use gloo::net::http::Request;
use rand::Rng;
use rand::RngExt;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Deserialize;
use thiserror::Error;
use trivito_core::{
    sample_indices, Board, Category, Clue, GameError, CATEGORY_COUNT, CLUES_PER_CATEGORY,
};

pub(crate) const DEFAULT_BASE_URL: &str = "https://jservice.io/api";

/// Pool of category summaries requested per load.
const CATEGORY_POOL_SIZE: u32 = 100;

/// Offset into the remote category listing, randomized to vary boards.
const OFFSET_RANGE: core::ops::Range<u32> = 1..500;

pub(crate) type CategoryId = u64;

#[derive(Debug, Error)]
pub(crate) enum LoadError {
    #[error("network request failed: {0}")]
    Network(#[from] gloo::net::Error),
    #[error("{endpoint} returned status {status}")]
    Status { endpoint: &'static str, status: u16 },
    #[error("could not decode {endpoint} response: {source}")]
    Malformed {
        endpoint: &'static str,
        source: serde_json::Error,
    },
    #[error("unexpected response shape: {0}")]
    Shape(#[from] GameError),
}

/// Summary entry of `GET /categories`.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct CategorySummary {
    pub id: CategoryId,
    #[allow(dead_code)]
    pub title: String,
    #[serde(rename = "clueCount", alias = "clues_count")]
    pub clue_count: u32,
}

/// Raw clue entry of `GET /clues`.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct RawClue {
    pub question: String,
    pub answer: String,
    pub category: RawCategoryRef,
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct RawCategoryRef {
    pub title: String,
}

/// Draws the board's category ids out of a summary pool. Summaries that
/// cannot possibly fill a column are not part of the draw.
pub(crate) fn pick_category_ids<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[CategorySummary],
) -> Result<Vec<CategoryId>, LoadError> {
    let eligible: Vec<&CategorySummary> = pool
        .iter()
        .filter(|summary| summary.clue_count as usize >= CLUES_PER_CATEGORY)
        .collect();
    let indices = sample_indices(rng, eligible.len(), CATEGORY_COUNT)?;
    Ok(indices.into_iter().map(|i| eligible[i].id).collect())
}

/// Assembles one category from the raw clue list of one `GET /clues` call.
/// The title comes from the first returned clue's parent category.
pub(crate) fn assemble_category<R: Rng + ?Sized>(
    rng: &mut R,
    raws: &[RawClue],
) -> Result<Category, LoadError> {
    let indices = sample_indices(rng, raws.len(), CLUES_PER_CATEGORY)?;
    let title = raws[0].category.title.clone();
    let clues = indices
        .into_iter()
        .map(|i| Clue::new(raws[i].question.clone(), raws[i].answer.clone()))
        .collect();
    Ok(Category::new(title, clues)?)
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn get_json<T>(
        &self,
        endpoint: &'static str,
        query: &[(&str, String)],
    ) -> Result<T, LoadError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = Request::get(&url)
            .query(query.iter().map(|(key, value)| (*key, value.as_str())))
            .send()
            .await?;
        if !response.ok() {
            return Err(LoadError::Status {
                endpoint,
                status: response.status(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| LoadError::Malformed { endpoint, source })
    }

    pub(crate) async fn fetch_category_ids<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<CategoryId>, LoadError> {
        let offset = rng.random_range(OFFSET_RANGE);
        log::debug!("fetching category pool at offset {}", offset);
        let pool: Vec<CategorySummary> = self
            .get_json(
                "categories",
                &[
                    ("count", CATEGORY_POOL_SIZE.to_string()),
                    ("offset", offset.to_string()),
                ],
            )
            .await?;
        pick_category_ids(rng, &pool)
    }

    pub(crate) async fn fetch_category<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        id: CategoryId,
    ) -> Result<Category, LoadError> {
        log::debug!("fetching clues for category {}", id);
        let raws: Vec<RawClue> = self
            .get_json("clues", &[("category", id.to_string())])
            .await?;
        assemble_category(rng, &raws)
    }

    /// Loads a complete board or fails without one. A single seeded RNG
    /// drives the offset and every draw, so a forced seed reproduces the
    /// board given identical responses.
    pub(crate) async fn load_board(&self, seed: u64) -> Result<Board, LoadError> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let ids = self.fetch_category_ids(&mut rng).await?;
        let mut categories = Vec::with_capacity(CATEGORY_COUNT);
        for id in ids {
            categories.push(self.fetch_category(&mut rng, id).await?);
        }
        Ok(Board::new(categories)?)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivito_core::RevealState;

    fn summary(id: CategoryId, clue_count: u32) -> CategorySummary {
        CategorySummary {
            id,
            title: format!("category {}", id),
            clue_count,
        }
    }

    fn raw_clue(title: &str, n: usize) -> RawClue {
        RawClue {
            question: format!("question {}", n),
            answer: format!("answer {}", n),
            category: RawCategoryRef {
                title: title.to_string(),
            },
        }
    }

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    #[test]
    fn picks_six_distinct_ids_from_the_pool() {
        let pool: Vec<CategorySummary> = (0..100).map(|id| summary(id, 10)).collect();

        let mut ids = pick_category_ids(&mut rng(), &pool).unwrap();

        assert_eq!(ids.len(), CATEGORY_COUNT);
        assert!(ids.iter().all(|&id| id < 100));
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CATEGORY_COUNT);
    }

    #[test]
    fn never_picks_categories_that_cannot_fill_a_column() {
        let mut pool: Vec<CategorySummary> = (0..6).map(|id| summary(id, 5)).collect();
        pool.extend((6..100).map(|id| summary(id, 2)));

        let ids = pick_category_ids(&mut rng(), &pool).unwrap();

        assert!(ids.iter().all(|&id| id < 6));
    }

    #[test]
    fn fails_when_the_pool_is_too_small() {
        let pool: Vec<CategorySummary> = (0..5).map(|id| summary(id, 10)).collect();

        let err = pick_category_ids(&mut rng(), &pool).unwrap_err();

        assert!(matches!(
            err,
            LoadError::Shape(GameError::NotEnoughItems { wanted: 6, got: 5 })
        ));
    }

    #[test]
    fn assembles_exactly_five_hidden_clues() {
        let raws: Vec<RawClue> = (0..10).map(|n| raw_clue("potent potables", n)).collect();

        let category = assemble_category(&mut rng(), &raws).unwrap();

        assert_eq!(category.title(), "potent potables");
        assert_eq!(category.clues().len(), CLUES_PER_CATEGORY);
        assert!(category
            .clues()
            .iter()
            .all(|clue| clue.state() == RevealState::Hidden));
    }

    #[test]
    fn assembly_sanitizes_wrapped_answers() {
        let mut raws: Vec<RawClue> = (0..CLUES_PER_CATEGORY)
            .map(|n| raw_clue("authors", n))
            .collect();
        for raw in &mut raws {
            raw.answer = "<i>Plath</i>".to_string();
        }

        let category = assemble_category(&mut rng(), &raws).unwrap();

        assert!(category.clues().iter().all(|clue| clue.answer() == "Plath"));
    }

    #[test]
    fn never_assembles_a_short_category() {
        for len in 1..CLUES_PER_CATEGORY {
            let raws: Vec<RawClue> = (0..len).map(|n| raw_clue("authors", n)).collect();

            let err = assemble_category(&mut rng(), &raws).unwrap_err();

            assert!(matches!(
                err,
                LoadError::Shape(GameError::NotEnoughItems { wanted: 5, .. })
            ));
        }
    }

    #[test]
    fn stub_responses_assemble_into_a_full_hidden_board() {
        let mut rng = rng();
        let pool: Vec<CategorySummary> = (0..100).map(|id| summary(id, 10)).collect();

        let ids = pick_category_ids(&mut rng, &pool).unwrap();
        let categories: Vec<Category> = ids
            .iter()
            .map(|id| {
                let raws: Vec<RawClue> =
                    (0..8).map(|n| raw_clue(&format!("category {}", id), n)).collect();
                assemble_category(&mut rng, &raws).unwrap()
            })
            .collect();
        let board = Board::new(categories).unwrap();

        let (cols, rows) = board.size();
        for col in 0..cols {
            for row in 0..rows {
                let clue = board.clue_at((col, row)).unwrap();
                assert_eq!(clue.state(), RevealState::Hidden);
            }
        }
    }

    #[test]
    fn summary_decodes_both_count_spellings() {
        let spec: CategorySummary =
            serde_json::from_str(r#"{"id": 3, "title": "history", "clueCount": 7}"#).unwrap();
        let upstream: CategorySummary =
            serde_json::from_str(r#"{"id": 3, "title": "history", "clues_count": 7}"#).unwrap();

        assert_eq!(spec.clue_count, 7);
        assert_eq!(upstream.clue_count, 7);
    }

    #[test]
    fn raw_clue_decodes_the_nested_category_title() {
        let raw: RawClue = serde_json::from_str(
            r#"{"question": "Hamlet Author", "answer": "Shakespeare", "category": {"title": "literature"}}"#,
        )
        .unwrap();

        assert_eq!(raw.category.title, "literature");
    }
}
