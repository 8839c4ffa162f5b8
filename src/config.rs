//! Document metadata configuration.
//!
//! A flat JSON object: the reserved `title` key plus any number of
//! name/content pairs rendered as `<meta>` tags. Key order is preserved.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{BuildError, Result, Stage};

/// Default location of the metadata config, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentConfig {
    /// Any JSON value; non-strings render as their JSON text.
    #[serde(default)]
    pub title: Option<Value>,

    /// Every non-title key, in document order.
    #[serde(flatten)]
    pub meta: Map<String, Value>,
}

impl DocumentConfig {
    /// Build a config in memory, e.g. from test fixtures.
    pub fn new<K, V>(title: Option<&str>, meta: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            title: title.map(Value::from),
            meta: meta
                .into_iter()
                .map(|(k, v)| (k.into(), Value::String(v.into())))
                .collect(),
        }
    }

    pub fn from_json(path: &Path, text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|source| BuildError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config at `path`, or `None` when no such file exists.
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            debug!("No config at {}, skipping metadata", path.display());
            return Ok(None);
        }

        let text = std::fs::read_to_string(path)
            .map_err(|e| BuildError::io(Stage::ReadInputs, path, e))?;
        let config = Self::from_json(path, &text)?;
        debug!(
            "Loaded config {} with {} metadata entries",
            path.display(),
            config.meta.len()
        );
        Ok(Some(config))
    }

    /// Title text; empty when the key is absent or `null`.
    pub fn title(&self) -> String {
        self.title.as_ref().map(value_text).unwrap_or_default()
    }

    /// Metadata pairs with values rendered as text.
    pub fn meta_entries(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.meta.iter().map(|(k, v)| (k.as_str(), value_text(v)))
    }
}

/// Strings are used verbatim; any other JSON value uses its JSON text.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_key_order() {
        let cfg = DocumentConfig::from_json(
            Path::new("config.json"),
            r#"{"zeta": "1", "title": "Report", "alpha": "2", "mid": "3"}"#,
        )
        .unwrap();

        assert_eq!(cfg.title(), "Report");
        let keys: Vec<_> = cfg.meta_entries().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn missing_title_is_empty() {
        let cfg =
            DocumentConfig::from_json(Path::new("config.json"), r#"{"author": "Ada"}"#).unwrap();
        assert_eq!(cfg.title(), "");
        assert_eq!(cfg.meta.len(), 1);
    }

    #[test]
    fn non_string_values_use_json_text() {
        let cfg = DocumentConfig::from_json(
            Path::new("config.json"),
            r#"{"title": "T", "pages": 12, "draft": true}"#,
        )
        .unwrap();
        let entries: Vec<_> = cfg.meta_entries().collect();
        assert_eq!(entries, [("pages", "12".to_string()), ("draft", "true".to_string())]);
    }

    #[test]
    fn non_string_title_uses_json_text() {
        let cfg = DocumentConfig::from_json(
            Path::new("config.json"),
            r#"{"title": 2021, "pages": 12}"#,
        )
        .unwrap();
        assert_eq!(cfg.title(), "2021");
        assert_eq!(cfg.meta.len(), 1);

        let cfg = DocumentConfig::from_json(Path::new("config.json"), r#"{"title": null}"#)
            .unwrap();
        assert_eq!(cfg.title(), "");
    }

    #[test]
    fn non_object_is_config_error() {
        let err = DocumentConfig::from_json(Path::new("config.json"), "[1, 2]").unwrap_err();
        assert!(matches!(err, BuildError::Config { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn load_optional_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = DocumentConfig::load_optional(&dir.path().join("config.json")).unwrap();
        assert!(cfg.is_none());
    }

    #[test]
    fn load_optional_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"title": "Guide", "author": "Ada"}"#).unwrap();

        let cfg = DocumentConfig::load_optional(&path).unwrap().unwrap();
        assert_eq!(cfg.title(), "Guide");
        assert_eq!(cfg.meta.get("author"), Some(&Value::from("Ada")));
    }
}
