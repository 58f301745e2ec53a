pub mod library;
pub mod settings;
pub mod snippet;
pub mod storage;

pub use library::Library;
pub use settings::Settings;
pub use snippet::{SavedSnippet, SnippetRecord};
pub use storage::{SavedSnippetsStore, SettingsStore, StorageManager};
