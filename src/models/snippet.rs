use crate::error::{Result, SnippetError};
use crate::models::Library;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const MARKDOWN_EXTENSION: &str = ".md";

/// Display-ready snippet produced by a single retrieval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetRecord {
    pub snippet: String,
    pub language: Library,
    pub language_label: String,
    pub snippet_src: String,
    pub snippet_title: String,
}

impl SnippetRecord {
    pub fn new(snippet: String, language: Library, language_label: &str, snippet_src: &str) -> Result<Self> {
        Ok(Self {
            snippet,
            language,
            language_label: language_label.to_string(),
            snippet_title: title_from_locator(snippet_src)?,
            snippet_src: snippet_src.to_string(),
        })
    }

    pub fn get_line_count(&self) -> usize {
        self.snippet.lines().count()
    }
}

/// A snippet the user kept, along with when it was kept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSnippet {
    #[serde(flatten)]
    pub record: SnippetRecord,
    pub saved_at: DateTime<Utc>,
}

impl SavedSnippet {
    pub fn new(record: SnippetRecord) -> Self {
        Self {
            record,
            saved_at: Utc::now(),
        }
    }
}

/// Derives a title from the file name of a markdown locator.
///
/// `/snippets/python/example.md` becomes `example`. Locators without a
/// `.md` file name are rejected instead of producing a partial title.
pub fn title_from_locator(locator: &str) -> Result<String> {
    let file_name = locator.rsplit('/').next().unwrap_or(locator);

    match file_name.strip_suffix(MARKDOWN_EXTENSION) {
        Some(title) if !title.is_empty() => Ok(title.to_string()),
        _ => Err(SnippetError::MalformedLocator(locator.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_file_name_without_extension() {
        assert_eq!(
            title_from_locator("/snippets/python/example.md").unwrap(),
            "example"
        );
        assert_eq!(title_from_locator("closures.md").unwrap(), "closures");
        assert_eq!(
            title_from_locator("/snippets/css/flex-center.md").unwrap(),
            "flex-center"
        );
    }

    #[test]
    fn title_rejects_locators_without_markdown_file() {
        for locator in [
            "/snippets/python/example.txt",
            "/snippets/python/example.mdx",
            "/snippets/python/a.md.bak",
            "/snippets/python/",
            "/snippets/.md",
            "",
        ] {
            assert!(
                matches!(title_from_locator(locator), Err(SnippetError::MalformedLocator(_))),
                "{locator} should be rejected"
            );
        }
    }

    #[test]
    fn saved_snippet_flattens_record_fields() {
        let record = SnippetRecord::new(
            "body".to_string(),
            Library::Css,
            "CSS",
            "/snippets/css/grid.md",
        )
        .unwrap();
        let saved = SavedSnippet::new(record);

        let value = serde_json::to_value(&saved).unwrap();
        assert_eq!(value["snippet_title"], "grid");
        assert_eq!(value["language"], "css");
        assert!(value.get("saved_at").is_some());
    }
}
