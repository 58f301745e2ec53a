use crate::catalog::Catalog;
use crate::error::{Result, SnippetError};
use crate::extract::CodeExtractor;
use crate::fetch::ContentFetcher;
use crate::models::storage::enabled_libraries;
use crate::models::{Library, SettingsStore, SnippetRecord};
use crate::random;
use std::sync::Arc;
use tracing::{debug, info};

/// Picks snippets out of the catalog and turns fetched documents into records
pub struct SnippetService {
    catalog: Arc<Catalog>,
    settings: Arc<dyn SettingsStore>,
    fetcher: Arc<dyn ContentFetcher>,
    extractor: CodeExtractor,
}

impl SnippetService {
    pub fn new(
        catalog: Arc<Catalog>,
        settings: Arc<dyn SettingsStore>,
        fetcher: Arc<dyn ContentFetcher>,
    ) -> Self {
        Self {
            catalog,
            settings,
            fetcher,
            extractor: CodeExtractor::default(),
        }
    }

    pub fn with_extractor(mut self, extractor: CodeExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn extractor(&self) -> &CodeExtractor {
        &self.extractor
    }

    /// Enabled library, then packaged document, then fetch
    pub async fn fetch_random(&self) -> Result<SnippetRecord> {
        let enabled = enabled_libraries(self.settings.as_ref()).await?;
        if enabled.is_empty() {
            return Err(SnippetError::NoEnabledLibrary);
        }

        let library = *random::pick(&enabled)?;
        debug!(%library, enabled = enabled.len(), "picked library");

        let locator = random::pick(self.catalog.resources_of(library))?;
        debug!(%library, %locator, "picked snippet");

        self.fetch(Some(locator.as_str()), Some(library)).await
    }

    /// Fetches one specific document and shapes it into a record
    pub async fn fetch(&self, locator: Option<&str>, library: Option<Library>) -> Result<SnippetRecord> {
        let locator = locator
            .filter(|l| !l.trim().is_empty())
            .ok_or(SnippetError::MissingLocator)?;
        let library = library.ok_or(SnippetError::MissingLibrary)?;

        let snippet = self
            .fetcher
            .fetch(locator)
            .await
            .map_err(|source| SnippetError::Retrieval {
                locator: locator.to_string(),
                source,
            })?;

        let record = SnippetRecord::new(snippet, library, self.catalog.label_of(library), locator)?;
        info!(%library, title = %record.snippet_title, "retrieved snippet");
        Ok(record)
    }

    pub fn extract_code(&self, record: &SnippetRecord) -> String {
        self.extractor.extract(&record.snippet, record.language)
    }
}
