use crate::error::SnippetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Topical snippet libraries shipped with the application
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Library {
    JavaScript,
    React,
    Python,
    Interview,
    Php,
    Css,
}

impl Library {
    /// Every library, in the order enabled libraries are enumerated
    pub const ALL: [Library; 6] = [
        Library::JavaScript,
        Library::React,
        Library::Python,
        Library::Interview,
        Library::Php,
        Library::Css,
    ];

    /// Library used when an unrecognized identifier is looked up
    pub const DEFAULT: Library = Library::JavaScript;

    /// Identifier used in settings, manifests and asset paths
    pub fn id(&self) -> &'static str {
        match self {
            Library::JavaScript => "javascript",
            Library::React => "react",
            Library::Python => "python",
            Library::Interview => "interview",
            Library::Php => "php",
            Library::Css => "css",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Library::JavaScript => "JavaScript",
            Library::React => "React",
            Library::Python => "Python",
            Library::Interview => "Interview Questions",
            Library::Php => "PHP",
            Library::Css => "CSS",
        }
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Library {
    type Err = SnippetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Library::ALL
            .into_iter()
            .find(|lib| lib.id() == wanted)
            .ok_or_else(|| SnippetError::UnknownLibrary(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_total_and_non_empty() {
        for lib in Library::ALL {
            assert!(!lib.label().is_empty());
            assert_eq!(lib.label(), lib.label());
        }
        assert_eq!(Library::Interview.label(), "Interview Questions");
    }

    #[test]
    fn parses_identifiers_case_insensitively() {
        assert_eq!("python".parse::<Library>().unwrap(), Library::Python);
        assert_eq!(" PHP ".parse::<Library>().unwrap(), Library::Php);
        assert!(matches!(
            "cobol".parse::<Library>(),
            Err(SnippetError::UnknownLibrary(id)) if id == "cobol"
        ));
    }

    #[test]
    fn serializes_as_lowercase_identifier() {
        let json = serde_json::to_string(&Library::JavaScript).unwrap();
        assert_eq!(json, "\"javascript\"");
        for lib in Library::ALL {
            let json = serde_json::to_string(&lib).unwrap();
            assert_eq!(json, format!("\"{}\"", lib.id()));
        }
    }
}
