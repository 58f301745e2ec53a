use crate::models::Library;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// User preferences persisted by the settings store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(deserialize_with = "known_libraries")]
    pub libs: BTreeMap<Library, bool>,
    pub theme: String,
    pub beggar_counter: u32,
}

impl Default for Settings {
    /// Every library enabled, dark theme
    fn default() -> Self {
        Self {
            libs: Library::ALL.into_iter().map(|lib| (lib, true)).collect(),
            theme: String::from("dark"),
            beggar_counter: 0,
        }
    }
}

/// Keeps the flags of known libraries; ids from other versions are dropped
fn known_libraries<'de, D>(deserializer: D) -> Result<BTreeMap<Library, bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, bool>::deserialize(deserializer)?;

    Ok(raw
        .into_iter()
        .filter_map(|(id, enabled)| match id.parse::<Library>() {
            Ok(library) => Some((library, enabled)),
            Err(_) => {
                warn!(library = %id, "ignoring unknown library in settings");
                None
            }
        })
        .collect())
}

impl Settings {
    /// A library missing from `libs` counts as disabled
    pub fn is_enabled(&self, library: Library) -> bool {
        self.libs.get(&library).copied().unwrap_or(false)
    }

    pub fn enabled_libraries(&self) -> Vec<Library> {
        Library::ALL
            .into_iter()
            .filter(|lib| self.is_enabled(*lib))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_every_library() {
        let settings = Settings::default();
        assert_eq!(settings.enabled_libraries(), Library::ALL.to_vec());
        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.beggar_counter, 0);
    }

    #[test]
    fn missing_library_keys_are_disabled() {
        let settings: Settings = serde_json::from_str(r#"{"libs":{"python":true,"css":false}}"#).unwrap();
        assert_eq!(settings.enabled_libraries(), vec![Library::Python]);
        assert_eq!(settings.theme, "dark");
    }

    #[test]
    fn unknown_library_keys_are_dropped() {
        let settings: Settings =
            serde_json::from_str(r#"{"libs":{"python":true,"typescript":true,"css":false}}"#).unwrap();
        assert_eq!(settings.libs.len(), 2);
        assert_eq!(settings.enabled_libraries(), vec![Library::Python]);
    }

    #[test]
    fn enabled_libraries_follow_declaration_order() {
        let settings: Settings =
            serde_json::from_str(r#"{"libs":{"css":true,"javascript":true,"react":false}}"#).unwrap();
        assert_eq!(
            settings.enabled_libraries(),
            vec![Library::JavaScript, Library::Css]
        );
    }
}
