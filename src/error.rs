use std::io;
use thiserror::Error;

/// Failures raised while retrieving or selecting a snippet
#[derive(Debug, Error)]
pub enum SnippetError {
    #[error("cannot pick from an empty selection")]
    EmptySelection,

    #[error("no snippet library is enabled")]
    NoEnabledLibrary,

    #[error("snippet source must be defined")]
    MissingLocator,

    #[error("snippet language must be defined")]
    MissingLibrary,

    #[error("failed to retrieve snippet `{locator}`")]
    Retrieval {
        locator: String,
        #[source]
        source: FetchError,
    },

    #[error("snippet locator `{0}` does not name a markdown document")]
    MalformedLocator(String),

    #[error("unknown snippet library `{0}`")]
    UnknownLibrary(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Failures of the content-fetch collaborator
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server answered with status {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid snippet url: {0}")]
    InvalidUrl(String),
}

/// Failures of the settings and saved-snippets stores
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no saved snippet at index {0}")]
    NoSuchSaved(usize),
}

pub type Result<T> = std::result::Result<T, SnippetError>;
