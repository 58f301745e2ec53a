//! Registry of packaged snippet documents per library.
//!
//! The catalog is built once at start-up, either from a TOML manifest or by
//! scanning an asset directory, and is handed to the retrieval service.

use crate::models::Library;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct Manifest {
    libraries: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    resources: HashMap<Library, Vec<String>>,
}

impl Catalog {
    pub fn new(resources: HashMap<Library, Vec<String>>) -> Self {
        Self { resources }
    }

    /// Parses a manifest of the form
    ///
    /// ```toml
    /// [libraries]
    /// python = ["/snippets/python/example.md"]
    /// ```
    pub fn from_manifest_str(content: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(content).context("Failed to parse catalog manifest")?;

        let mut resources = HashMap::new();
        for (id, locators) in manifest.libraries {
            let library: Library = id
                .parse()
                .with_context(|| format!("Catalog manifest lists unknown library `{id}`"))?;
            resources.insert(library, locators);
        }

        Ok(Self { resources })
    }

    pub fn load_manifest(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog manifest {}", path.display()))?;

        Self::from_manifest_str(&content)
    }

    /// Enumerates `<root>/snippets/<library>/*.md`, sorted by file name
    pub fn scan_dir(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            bail!("Snippet asset directory {} does not exist", root.display());
        }

        let mut resources = HashMap::new();
        for library in Library::ALL {
            let library_dir = root.join("snippets").join(library.id());
            if !library_dir.is_dir() {
                warn!(%library, dir = %library_dir.display(), "no snippet directory for library");
                resources.insert(library, Vec::new());
                continue;
            }

            let mut names = Vec::new();
            for entry in fs::read_dir(&library_dir)
                .with_context(|| format!("Failed to read {}", library_dir.display()))?
            {
                let path = entry?.path();
                if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("md") {
                    continue;
                }
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
            names.sort();

            debug!(%library, count = names.len(), "scanned snippet directory");
            let locators = names
                .into_iter()
                .map(|name| format!("/snippets/{}/{}", library.id(), name))
                .collect();
            resources.insert(library, locators);
        }

        Ok(Self { resources })
    }

    pub fn label_of(&self, library: Library) -> &'static str {
        library.label()
    }

    /// Label for a raw identifier; unknown identifiers get the default library's label
    pub fn label_for_id(&self, id: &str) -> &'static str {
        id.parse::<Library>().unwrap_or(Library::DEFAULT).label()
    }

    /// Every packaged locator for `library`, in catalog order
    pub fn resources_of(&self, library: Library) -> &[String] {
        self.resources
            .get(&library)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Locators for a raw identifier; unknown identifiers get the default library's catalog
    pub fn resources_for_id(&self, id: &str) -> &[String] {
        self.resources_of(id.parse::<Library>().unwrap_or(Library::DEFAULT))
    }

    pub fn count_of(&self, library: Library) -> usize {
        self.resources_of(library).len()
    }
}
