//! Best-effort extraction of an embedded code block from a snippet document.
//!
//! Patterns are keyed by library and are pure data: registering one never
//! changes how extraction runs. No library has a pattern by default, so
//! `extract` returns an empty string until one is registered.

use crate::models::Library;
use regex::Regex;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct CodeExtractor {
    patterns: HashMap<Library, Regex>,
}

impl CodeExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pattern(mut self, library: Library, pattern: Regex) -> Self {
        self.patterns.insert(library, pattern);
        self
    }

    pub fn has_pattern(&self, library: Library) -> bool {
        self.patterns.contains_key(&library)
    }

    /// First match of the library's pattern in `source`.
    ///
    /// Capture group 1 is returned when the pattern defines one, the whole
    /// match otherwise.
    pub fn extract(&self, source: &str, library: Library) -> String {
        let Some(pattern) = self.patterns.get(&library) else {
            return String::new();
        };

        pattern
            .captures(source)
            .and_then(|caps| caps.get(1).or_else(|| caps.get(0)))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }
}

/// Multiline, non-greedy pattern for a markdown fence tagged `tag`
pub fn fenced_block(tag: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?s)```{}[^\n]*\n(.*?)```", regex::escape(tag)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "# Flex center\n\nSome prose.\n\n```css\n.box {\n  display: flex;\n}\n```\n\n```css\n.second {}\n```\n";

    #[test]
    fn unregistered_library_yields_empty_string() {
        let extractor = CodeExtractor::default();
        for lib in Library::ALL {
            assert!(!extractor.has_pattern(lib));
            assert_eq!(extractor.extract(DOC, lib), "");
            assert_eq!(extractor.extract("", lib), "");
        }
    }

    #[test]
    fn fenced_pattern_returns_first_block_body() {
        let extractor = CodeExtractor::new().with_pattern(Library::Css, fenced_block("css").unwrap());
        assert_eq!(
            extractor.extract(DOC, Library::Css),
            ".box {\n  display: flex;\n}\n"
        );
        assert_eq!(extractor.extract(DOC, Library::Python), "");
    }

    #[test]
    fn no_match_yields_empty_string() {
        let extractor = CodeExtractor::new().with_pattern(Library::Python, fenced_block("python").unwrap());
        assert_eq!(extractor.extract(DOC, Library::Python), "");
    }

    #[test]
    fn pattern_without_groups_returns_whole_match() {
        let extractor = CodeExtractor::new().with_pattern(Library::Php, Regex::new(r"<\?php").unwrap());
        assert_eq!(extractor.extract("echo <?php 1;", Library::Php), "<?php");
    }
}
