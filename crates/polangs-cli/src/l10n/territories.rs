use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// An entry of the territory map that cannot complete a locale code.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidTerritoryMap {
    #[error("language '{language}' is listed more than once")]
    DuplicateLanguage { language: String },

    #[error("invalid language '{language}'")]
    InvalidLanguage { language: String },

    #[error("invalid territory '{territory}' for language '{language}'")]
    InvalidTerritory { language: String, territory: String },
}

/// Default territory of each language, e.g. `{"ja": "jp", "pt": "br"}`.
///
/// Languages are matched case-insensitively, so `pt` and `PT` may not both
/// appear. Territories must be non-empty and alphanumeric.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(try_from = "IndexMap<String, String>")]
pub struct TerritoryMap(HashMap<String, String>);

impl TerritoryMap {
    /// Parses the JSON object form of the map.
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn get(&self, language: &str) -> Option<&str> {
        self.0.get(&language.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn is_tag_part(part: &str) -> bool {
    !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric())
}

impl TryFrom<IndexMap<String, String>> for TerritoryMap {
    type Error = InvalidTerritoryMap;

    fn try_from(entries: IndexMap<String, String>) -> Result<Self, Self::Error> {
        let mut map = HashMap::with_capacity(entries.len());
        for (language, territory) in entries {
            if !is_tag_part(&language) {
                return Err(InvalidTerritoryMap::InvalidLanguage { language });
            }
            if !is_tag_part(&territory) {
                return Err(InvalidTerritoryMap::InvalidTerritory {
                    language,
                    territory,
                });
            }
            if map.insert(language.to_lowercase(), territory).is_some() {
                return Err(InvalidTerritoryMap::DuplicateLanguage { language });
            }
        }
        Ok(Self(map))
    }
}

/// Builds a map without validation; the first entry of a language wins.
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TerritoryMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::new();
        for (language, territory) in iter {
            map.entry(language.into().to_lowercase())
                .or_insert_with(|| territory.into());
        }
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_object() {
        let map = TerritoryMap::from_json_str(r#"{"ja": "jp", "PT": "br"}"#).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("ja"), Some("jp"));
        assert_eq!(map.get("pt"), Some("br"));
        assert_eq!(map.get("PT"), Some("br"));
        assert_eq!(map.get("de"), None);
    }

    #[test]
    fn rejects_non_object() {
        assert!(TerritoryMap::from_json_str(r#"["ja", "jp"]"#).is_err());
        assert!(TerritoryMap::from_json_str(r#"{"ja": 3}"#).is_err());
    }

    #[test]
    fn rejects_languages_differing_only_in_case() {
        for _ in 0..20 {
            let err = TerritoryMap::from_json_str(r#"{"pt": "br", "PT": "pt"}"#).unwrap_err();
            assert!(
                err.to_string()
                    .contains("language 'PT' is listed more than once"),
                "{err}"
            );
        }
    }

    #[test]
    fn rejects_unusable_territories() {
        let err = TerritoryMap::from_json_str(r#"{"ja": ""}"#).unwrap_err();
        assert!(
            err.to_string()
                .contains("invalid territory '' for language 'ja'"),
            "{err}"
        );

        let err = TerritoryMap::from_json_str(r#"{"ja": "j p"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid territory 'j p'"), "{err}");

        let err = TerritoryMap::from_json_str(r#"{"": "jp"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid language ''"), "{err}");
    }

    #[test]
    fn try_from_reports_the_first_problem() {
        let entries = IndexMap::from([
            ("de".to_string(), "de".to_string()),
            ("De".to_string(), "at".to_string()),
        ]);
        assert_eq!(
            TerritoryMap::try_from(entries),
            Err(InvalidTerritoryMap::DuplicateLanguage {
                language: "De".to_string()
            })
        );
    }

    #[test]
    fn from_iter_keeps_the_first_entry() {
        let map = TerritoryMap::from_iter([("pt", "br"), ("PT", "pt")]);
        assert_eq!(map.get("pt"), Some("br"));
        assert_eq!(map.len(), 1);
    }
}
