use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves a resource locator to the raw text of the document it names
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, locator: &str) -> Result<String, FetchError>;
}

/// Reads snippet documents from a packaged asset directory
#[derive(Debug, Clone)]
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn resolve(&self, locator: &str) -> PathBuf {
        self.root.join(locator.trim_start_matches('/'))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ContentFetcher for FileFetcher {
    async fn fetch(&self, locator: &str) -> Result<String, FetchError> {
        let path = self.resolve(locator);
        debug!(path = %path.display(), "reading snippet document");
        Ok(tokio::fs::read_to_string(path).await?)
    }
}

/// Downloads snippet documents relative to a base URL
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: Url,
}

impl HttpFetcher {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url).map_err(|e| FetchError::InvalidUrl(format!("{base_url}: {e}")))?;
        Ok(Self { client, base_url })
    }

    pub fn resolve(&self, locator: &str) -> Result<Url, FetchError> {
        self.base_url
            .join(locator)
            .map_err(|e| FetchError::InvalidUrl(format!("{locator}: {e}")))
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    async fn fetch(&self, locator: &str) -> Result<String, FetchError> {
        let url = self.resolve(locator)?;
        debug!(%url, "downloading snippet document");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        Ok(response.text().await?)
    }
}
