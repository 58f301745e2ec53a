use crate::error::StoreError;
use crate::models::{Library, SavedSnippet, Settings, SnippetRecord};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::fs;

const SETTINGS_FILE: &str = "settings.json";
const SAVED_FILE: &str = "saved.json";

/// Source of user preferences
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Current settings, or the seeded defaults when nothing was stored yet
    async fn get(&self) -> Result<Settings, StoreError>;

    async fn set(&self, settings: &Settings) -> Result<(), StoreError>;
}

/// Ordered list of snippets the user kept
#[async_trait]
pub trait SavedSnippetsStore: Send + Sync {
    /// Saved snippets, or an empty list when nothing was stored yet
    async fn get(&self) -> Result<Vec<SavedSnippet>, StoreError>;

    async fn set(&self, snippets: &[SavedSnippet]) -> Result<(), StoreError>;
}

/// Libraries whose flag is set in the stored settings
pub async fn enabled_libraries(store: &dyn SettingsStore) -> Result<Vec<Library>, StoreError> {
    Ok(store.get().await?.enabled_libraries())
}

/// Appends a record to the saved list and returns its index
pub async fn save_snippet(
    store: &dyn SavedSnippetsStore,
    record: SnippetRecord,
) -> Result<usize, StoreError> {
    // Newest snippets go to the end of the list
    let mut saved = store.get().await?;
    saved.push(SavedSnippet::new(record));
    store.set(&saved).await?;
    Ok(saved.len() - 1)
}

pub async fn saved_snippet_at(
    store: &dyn SavedSnippetsStore,
    index: usize,
) -> Result<SavedSnippet, StoreError> {
    let mut saved = store.get().await?;
    if index >= saved.len() {
        return Err(StoreError::NoSuchSaved(index));
    }
    // The list is discarded after the lookup
    Ok(saved.swap_remove(index))
}

pub async fn remove_saved_snippet(
    store: &dyn SavedSnippetsStore,
    index: usize,
) -> Result<SavedSnippet, StoreError> {
    let mut saved = store.get().await?;
    if index >= saved.len() {
        return Err(StoreError::NoSuchSaved(index));
    }
    // Keep the remaining indices stable for the user
    let removed = saved.remove(index);
    store.set(&saved).await?;
    Ok(removed)
}

/// Storage Manager for disk operations
#[derive(Debug, Clone)]
pub struct StorageManager {
    data_dir: PathBuf,
    settings_file: PathBuf,
    saved_file: PathBuf,
}

impl StorageManager {
    /// Opens the store in the platform data directory
    pub fn new() -> Result<Self> {
        let data_dir = dirs::data_dir()
            .context("Failed to get data directory")?
            .join("snipdeck");

        Self::with_data_dir(data_dir)
    }

    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();

        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

        Ok(Self {
            settings_file: data_dir.join(SETTINGS_FILE),
            saved_file: data_dir.join(SAVED_FILE),
            data_dir,
        })
    }

    pub fn data_directory(&self) -> &Path {
        &self.data_dir
    }

    async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
        // Nothing stored yet
        if !fs::try_exists(path).await? {
            return Ok(None);
        }

        let content = fs::read_to_string(path).await?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(value)?;
        fs::write(path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl SettingsStore for StorageManager {
    async fn get(&self) -> Result<Settings, StoreError> {
        Ok(Self::read_json(&self.settings_file).await?.unwrap_or_default())
    }

    async fn set(&self, settings: &Settings) -> Result<(), StoreError> {
        Self::write_json(&self.settings_file, settings).await
    }
}

#[async_trait]
impl SavedSnippetsStore for StorageManager {
    async fn get(&self) -> Result<Vec<SavedSnippet>, StoreError> {
        Ok(Self::read_json(&self.saved_file).await?.unwrap_or_default())
    }

    async fn set(&self, snippets: &[SavedSnippet]) -> Result<(), StoreError> {
        Self::write_json(&self.saved_file, snippets).await
    }
}
