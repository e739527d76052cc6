use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use url::Url;

use sd_core::{ArticleDetail, ArticleSummary, Error, Result};
use sd_scraper::extract;
use tracing::debug;

use crate::AppState;

/// `GET /` — the current cached index. A read-only snapshot; never triggers
/// a scrape.
pub async fn list_articles(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let snapshot = state.store.snapshot();
    Json::<Vec<ArticleSummary>>(snapshot.as_ref().clone())
}

/// `GET /view_article/:id` — resolve the id and scrape the linked page.
///
/// Unknown ids get a 404, a failed fetch gets a 502 with the cause; neither
/// is cached and neither touches the shared state beyond the registry read.
pub async fn view_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    match fetch_detail(&state, &id).await {
        Ok(detail) => Json(detail).into_response(),
        Err(Error::ArticleNotFound(id)) => {
            debug!("article id not in registry: {}", id);
            (StatusCode::NOT_FOUND, "Article not found.").into_response()
        }
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            format!("Error fetching the article: {}", e),
        )
            .into_response(),
    }
}

/// Registry resolution happens before any network traffic, so an unknown id
/// returns without the fetcher ever being called.
pub(crate) async fn fetch_detail(state: &AppState, id: &str) -> Result<ArticleDetail> {
    let article_url = state
        .registry
        .resolve(id)
        .ok_or_else(|| Error::ArticleNotFound(id.to_string()))?;

    let markup = state.fetcher.fetch(&article_url).await?;
    let base = Url::parse(&article_url)
        .map_err(|e| Error::Scraping(format!("invalid article URL {}: {}", article_url, e)))?;

    Ok(extract::detail(&markup, &base))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sd_core::{ArticleRegistry, ArticleStore};
    use sd_scraper::Fetch;

    const DETAIL_MARKUP: &str = r#"
        <div class="article-content-area">
            <p>Full match report.</p>
            <img src="/img/report.jpg">
        </div>
    "#;

    struct StaticFetcher(&'static str);

    #[async_trait]
    impl Fetch for StaticFetcher {
        async fn fetch(&self, _url: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    /// Fails the test if any network call is attempted.
    struct PanickingFetcher;

    #[async_trait]
    impl Fetch for PanickingFetcher {
        async fn fetch(&self, url: &str) -> Result<String> {
            panic!("unexpected fetch of {}", url);
        }
    }

    struct FailingFetcher;

    #[async_trait]
    impl Fetch for FailingFetcher {
        async fn fetch(&self, _url: &str) -> Result<String> {
            Err(Error::Scraping("connection reset".to_string()))
        }
    }

    fn state(fetcher: Arc<dyn Fetch>) -> AppState {
        AppState {
            store: Arc::new(ArticleStore::new()),
            registry: Arc::new(ArticleRegistry::new()),
            fetcher,
        }
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found_without_network() {
        let state = state(Arc::new(PanickingFetcher));

        let result = fetch_detail(&state, "no-such-id").await;

        assert!(matches!(result, Err(Error::ArticleNotFound(_))));
    }

    #[tokio::test]
    async fn test_known_id_fetches_and_extracts() {
        let state = state(Arc::new(StaticFetcher(DETAIL_MARKUP)));
        state.registry.register(
            "id-1".to_string(),
            "https://site.test/news/a1".to_string(),
        );

        let detail = fetch_detail(&state, "id-1").await.unwrap();

        assert_eq!(detail.content, "Full match report.");
        assert_eq!(detail.image, "https://site.test/img/report.jpg");
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        let state = state(Arc::new(FailingFetcher));
        state.registry.register(
            "id-1".to_string(),
            "https://site.test/news/a1".to_string(),
        );

        let result = fetch_detail(&state, "id-1").await;

        assert!(matches!(result, Err(Error::Scraping(_))));
    }
}
