use gloo::net::http::Request;
use trivia_core::api::{self, ApiError, CategoryDetail, CategorySummary, TriviaApi};
use trivia_core::CategoryId;

/// [`TriviaApi`] over the browser's `fetch`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpApi {
    base: String,
}

impl HttpApi {
    pub(crate) fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    async fn get(&self, url: String) -> Result<String, ApiError> {
        log::debug!("GET {}", url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                url,
            });
        }
        response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))
    }
}

impl TriviaApi for HttpApi {
    async fn categories(&self, count: usize) -> Result<Vec<CategorySummary>, ApiError> {
        let body = self.get(api::categories_url(&self.base, count)).await?;
        api::decode(&body)
    }

    async fn category(&self, id: CategoryId) -> Result<CategoryDetail, ApiError> {
        let body = self.get(api::category_url(&self.base, id)).await?;
        api::decode(&body)
    }
}
