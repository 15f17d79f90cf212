//! Wire format of the remote quiz API and the trait the HTTP client implements.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::CategoryId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{url} answered with status {status}")]
    Status { status: u16, url: String },
    #[error("malformed payload: {0}")]
    Decode(String),
}

/// One entry of `GET {base}/categories`. Everything but the id is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
}

/// Payload of `GET {base}/category`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CategoryDetail {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub clues: Vec<ApiClue>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiClue {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

pub fn categories_url(base: &str, count: usize) -> String {
    format!("{}/categories?count={}", base.trim_end_matches('/'), count)
}

pub fn category_url(base: &str, id: CategoryId) -> String {
    format!("{}/category?id={}", base.trim_end_matches('/'), id)
}

/// Decodes a response body, mapping serde failures to [`ApiError::Decode`].
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Source of categories and clues. Implementations are single-threaded, so the returned futures need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait TriviaApi {
    async fn categories(&self, count: usize) -> Result<Vec<CategorySummary>, ApiError>;

    async fn category(&self, id: CategoryId) -> Result<CategoryDetail, ApiError>;
}
