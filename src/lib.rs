//! Snippet selection and retrieval for snipdeck.
//!
//! A [`catalog::Catalog`] lists the packaged documents of each library, the
//! [`service::SnippetService`] picks one among the libraries enabled in the
//! stored [`models::Settings`] and fetches it through a
//! [`fetch::ContentFetcher`], producing a [`models::SnippetRecord`].

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod random;
pub mod service;

pub use catalog::Catalog;
pub use error::{FetchError, Result, SnippetError, StoreError};
pub use extract::CodeExtractor;
pub use fetch::{ContentFetcher, FileFetcher, HttpFetcher};
pub use models::{Library, SavedSnippet, Settings, SnippetRecord, StorageManager};
pub use service::SnippetService;
