use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use sd_core::Result;

/// Seam between the scraping pipeline and the HTTP transport. The refresh
/// task and detail lookups both go through this, so tests can feed canned
/// markup instead of hitting the network.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Retrieve the body of `url`. A single GET, no retry.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// reqwest-backed fetcher shared by the scheduler and the serving layer.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/127.0.0.0 Safari/537.36"
);

impl Fetcher {
    /// `timeout` bounds every request end-to-end so a slow site cannot hang
    /// a caller; elapsing counts as a fetch failure.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for Fetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let fetcher = Fetcher::new(Duration::from_secs(1)).unwrap();
        // Nothing listens on the discard port; the GET must come back as an
        // error, not hang.
        let result = fetcher.fetch("http://127.0.0.1:9/").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fetch_rejects_relative_url() {
        let fetcher = Fetcher::new(Duration::from_secs(1)).unwrap();
        let result = fetcher.fetch("#").await;
        assert!(result.is_err());
    }
}
