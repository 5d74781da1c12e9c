use super::TerritoryMap;
use polangs_names::{NameLookupError, NameResolver};
use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// The locale every manifest starts with.
pub const BASELINE_LOCALE: Locale = Locale {
    language: Cow::Borrowed("en"),
    territory: Cow::Borrowed("us"),
};

/// A file stem that is not `language[_territory]`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid language tag '{0}'")]
pub struct InvalidLanguageTag(pub String);

/// A language whose territory may still be unknown, as found in a file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTag {
    language: String,
    territory: Option<String>,
}

impl LanguageTag {
    pub fn new(language: &str, territory: Option<&str>) -> Self {
        Self {
            language: language.to_lowercase(),
            territory: territory.map(str::to_lowercase),
        }
    }

    /// Parses `de`, `pt_BR` and the like.
    pub fn from_file_stem(stem: &str) -> Result<Self, InvalidLanguageTag> {
        let valid_part =
            |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric());

        let mut parts = stem.split('_');
        let language = parts.next().filter(|part| valid_part(part));
        let territory = parts.next();

        match (language, territory, parts.next()) {
            (Some(language), None, None) => Ok(Self::new(language, None)),
            (Some(language), Some(territory), None) if valid_part(territory) => {
                Ok(Self::new(language, Some(territory)))
            },
            _ => Err(InvalidLanguageTag(stem.to_string())),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn territory(&self) -> Option<&str> {
        self.territory.as_deref()
    }

    /// Completes the tag with its territory: the inline one when present,
    /// otherwise the default territory of the language.
    ///
    /// Returns `None` when neither is known.
    pub fn resolve(self, territories: &TerritoryMap) -> Option<Locale> {
        let territory = match self.territory {
            Some(territory) => territory,
            None => territories.get(&self.language)?.to_lowercase(),
        };

        Some(Locale {
            language: Cow::Owned(self.language),
            territory: Cow::Owned(territory),
        })
    }
}

/// A language together with its territory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: Cow<'static, str>,
    territory: Cow<'static, str>,
}

impl Locale {
    pub fn new(language: &str, territory: &str) -> Self {
        Self {
            language: Cow::Owned(language.to_lowercase()),
            territory: Cow::Owned(territory.to_lowercase()),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn territory(&self) -> &str {
        &self.territory
    }

    /// The manifest key, e.g. `pt-br`.
    pub fn code(&self) -> String {
        format!("{}-{}", self.language, self.territory)
    }

    /// Resolves the display name, qualified by the territory when
    /// `include_territory` is set.
    pub fn name(
        &self,
        names: &dyn NameResolver,
        include_territory: bool,
    ) -> Result<String, NameLookupError> {
        let territory = include_territory.then(|| self.territory.to_uppercase());
        names.display_name(&self.language, territory.as_deref())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.language, self.territory)
    }
}
