use crate::catalog::Catalog;
use crate::fetch::{ContentFetcher, FileFetcher, HttpFetcher};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const CONFIG_FILE: &str = "config.toml";
const DEFAULT_SOURCE: &str = "assets";

/// Where snippet documents and user data live
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Asset directory or `http(s)://` base URL
    pub source: String,
    /// Catalog manifest; the asset directory is scanned when unset
    pub manifest: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            manifest: None,
            data_dir: None,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("snipdeck").join(CONFIG_FILE))
    }

    /// Reads the user config file, falling back to defaults when there is none
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn is_remote(&self) -> bool {
        self.source.starts_with("http://") || self.source.starts_with("https://")
    }

    pub fn build_catalog(&self) -> Result<Catalog> {
        match (&self.manifest, self.is_remote()) {
            (Some(manifest), _) => Catalog::load_manifest(manifest),
            (None, false) => Catalog::scan_dir(Path::new(&self.source)).with_context(|| {
                format!(
                    "No snippet catalog at `{}`; pass --source <DIR|URL> or set `source` in {}",
                    self.source,
                    Self::config_path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| CONFIG_FILE.to_string())
                )
            }),
            (None, true) => bail!("A catalog manifest is required when snippets are served from {}", self.source),
        }
    }

    pub fn build_fetcher(&self) -> Result<Arc<dyn ContentFetcher>> {
        if self.is_remote() {
            let fetcher = HttpFetcher::new(&self.source).context("Invalid snippet source URL")?;
            Ok(Arc::new(fetcher))
        } else {
            Ok(Arc::new(FileFetcher::new(&self.source)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn partial_files_keep_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "manifest = \"assets/manifest.toml\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.source, DEFAULT_SOURCE);
        assert_eq!(config.manifest, Some(PathBuf::from("assets/manifest.toml")));
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn remote_source_needs_manifest() {
        let config = AppConfig {
            source: "https://snippets.example.com/".to_string(),
            ..AppConfig::default()
        };
        assert!(config.is_remote());
        assert!(config.build_catalog().is_err());
        assert!(config.build_fetcher().is_ok());
    }

    #[test]
    fn missing_source_directory_points_at_the_flag() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            source: dir.path().join("missing").to_string_lossy().into_owned(),
            ..AppConfig::default()
        };

        let err = config.build_catalog().unwrap_err();
        assert!(err.to_string().contains("--source"), "{err:#}");
    }

    #[test]
    fn local_source_is_scanned_without_manifest() {
        let dir = TempDir::new().unwrap();
        let css = dir.path().join("snippets").join("css");
        fs::create_dir_all(&css).unwrap();
        fs::write(css.join("grid.md"), "grid").unwrap();

        let config = AppConfig {
            source: dir.path().to_string_lossy().into_owned(),
            ..AppConfig::default()
        };
        let catalog = config.build_catalog().unwrap();
        assert_eq!(
            catalog.resources_of(crate::models::Library::Css),
            ["/snippets/css/grid.md"]
        );
    }
}
