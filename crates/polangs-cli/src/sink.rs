//! JSON rendering of the resolved locales.
//!
//! Both renderings use two-space indentation, keep non-ASCII text literal and
//! end with a newline.

use indexmap::IndexMap;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Manifest key holding the locale mapping.
pub const LOCALES_KEY: &str = "locales";

#[derive(Debug, Error)]
pub enum MergeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("the manifest root is not a JSON object")]
    NotAnObject,
}

/// Standalone document: the mapping alone, keys sorted.
pub fn render_standalone(locales: &IndexMap<String, String>) -> Result<String, serde_json::Error> {
    let sorted: BTreeMap<&str, &str> = locales
        .iter()
        .map(|(code, name)| (code.as_str(), name.as_str()))
        .collect();

    let mut output = serde_json::to_string_pretty(&sorted)?;
    output.push('\n');
    Ok(output)
}

/// Replaces the `locales` key of `manifest`, keeping every other key and the
/// position of an existing `locales` key. The mapping keeps resolution order.
/// Numbers are written back exactly as they were read.
pub fn merge_locales(
    manifest: &str,
    locales: &IndexMap<String, String>,
) -> Result<String, MergeError> {
    let mut document: Value = serde_json::from_str(manifest)?;
    let root = document.as_object_mut().ok_or(MergeError::NotAnObject)?;
    root.insert(LOCALES_KEY.to_string(), serde_json::to_value(locales)?);

    let mut output = serde_json::to_string_pretty(&document)?;
    output.push('\n');
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn locales() -> IndexMap<String, String> {
        IndexMap::from([
            ("en-us".to_string(), "English".to_string()),
            ("tr-tr".to_string(), "Turkish".to_string()),
            ("de-de".to_string(), "German".to_string()),
            ("nb-no".to_string(), "Norwegian Bokmål".to_string()),
        ])
    }

    #[test]
    fn standalone_is_sorted() {
        assert_snapshot!(render_standalone(&locales()).unwrap(), @r#"
        {
          "de-de": "German",
          "en-us": "English",
          "nb-no": "Norwegian Bokmål",
          "tr-tr": "Turkish"
        }
        "#);
    }

    #[test]
    fn standalone_is_deterministic() {
        assert_eq!(
            render_standalone(&locales()).unwrap(),
            render_standalone(&locales()).unwrap()
        );
    }

    #[test]
    fn merge_replaces_locales_in_place() {
        let manifest = r#"{
  "name": "Installer",
  "locales": {"xx-xx": "Old"},
  "icons": [{"src": "logo.svg", "sizes": "any"}],
  "description": "Überblick"
}"#;

        assert_snapshot!(merge_locales(manifest, &locales()).unwrap(), @r#"
        {
          "name": "Installer",
          "locales": {
            "en-us": "English",
            "tr-tr": "Turkish",
            "de-de": "German",
            "nb-no": "Norwegian Bokmål"
          },
          "icons": [
            {
              "src": "logo.svg",
              "sizes": "any"
            }
          ],
          "description": "Überblick"
        }
        "#);
    }

    #[test]
    fn merge_adds_missing_locales() {
        let manifest = r#"{"name": "Installer", "version": 2}"#;
        let merged = merge_locales(manifest, &locales()).unwrap();
        let document: Value = serde_json::from_str(&merged).unwrap();

        let keys: Vec<_> = document.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["name", "version", "locales"]);
        assert_eq!(document["version"], 2);
        assert_eq!(document["locales"]["nb-no"], "Norwegian Bokmål");
    }

    #[test]
    fn merge_keeps_numbers_verbatim() {
        let manifest = r#"{"build": 18446744073709551616, "ratio": 0.1000000000000000055511151231257827}"#;

        assert_snapshot!(merge_locales(manifest, &IndexMap::new()).unwrap(), @r#"
        {
          "build": 18446744073709551616,
          "ratio": 0.1000000000000000055511151231257827,
          "locales": {}
        }
        "#);
    }

    #[test]
    fn merge_rejects_non_objects() {
        assert!(matches!(
            merge_locales("[1, 2]", &locales()),
            Err(MergeError::NotAnObject)
        ));
        assert!(matches!(
            merge_locales("{\"name\": ", &locales()),
            Err(MergeError::Json(_))
        ));
    }
}
