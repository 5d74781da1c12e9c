#![doc = include_str!("../README.md")]

pub use unic_langid::{LanguageIdentifier, langid};

use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use std::sync::{Arc, OnceLock};
use thiserror::Error;

const POLANGS_NAMES_FTL: &str = include_str!("../names.ftl");

/// A language or territory the name table does not know about.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameLookupError {
    #[error("unknown language '{language}'")]
    UnknownLanguage { language: String },

    #[error("unknown territory '{territory}' for language '{language}'")]
    UnknownTerritory { language: String, territory: String },
}

/// Maps a language, optionally qualified by a territory, to a display name.
pub trait NameResolver {
    /// Returns the display name for `language`, or for `language` in
    /// `territory` when one is given (e.g. "Portuguese (Brazil)").
    fn display_name(
        &self,
        language: &str,
        territory: Option<&str>,
    ) -> Result<String, NameLookupError>;
}

fn embedded_resource() -> Arc<FluentResource> {
    static RESOURCE: OnceLock<Arc<FluentResource>> = OnceLock::new();
    RESOURCE
        .get_or_init(|| {
            Arc::new(
                FluentResource::try_new(POLANGS_NAMES_FTL.to_owned())
                    .expect("Invalid Fluent resource embedded in polangs-names/names.ftl"),
            )
        })
        .clone()
}

/// [`NameResolver`] backed by the English name table embedded in this crate.
pub struct FluentNames {
    bundle: FluentBundle<Arc<FluentResource>>,
}

impl Default for FluentNames {
    fn default() -> Self {
        Self::new()
    }
}

impl FluentNames {
    pub fn new() -> Self {
        let mut bundle = FluentBundle::new(vec![langid!("en-US")]);
        bundle.set_use_isolating(false);
        bundle.add_resource_overriding(embedded_resource());
        Self { bundle }
    }

    fn format(&self, id: &str, args: Option<&FluentArgs>) -> Option<String> {
        let message = self.bundle.get_message(id)?;
        let pattern = message.value()?;
        let mut errors = Vec::new();

        let formatted = self.bundle.format_pattern(pattern, args, &mut errors);

        if errors.is_empty() {
            Some(formatted.into_owned())
        } else {
            tracing::error!(
                "Formatting errors while resolving '{}' from polangs-names: {:?}",
                id,
                errors
            );
            None
        }
    }

    fn language_name(&self, language: &str) -> Option<String> {
        self.format(&format!("language-{}", language.to_lowercase()), None)
    }

    fn territory_name(&self, territory: &str) -> Option<String> {
        self.format(&format!("territory-{}", territory.to_uppercase()), None)
    }
}

impl NameResolver for FluentNames {
    fn display_name(
        &self,
        language: &str,
        territory: Option<&str>,
    ) -> Result<String, NameLookupError> {
        let language_name =
            self.language_name(language)
                .ok_or_else(|| NameLookupError::UnknownLanguage {
                    language: language.to_string(),
                })?;

        let Some(territory) = territory else {
            return Ok(language_name);
        };

        let territory_name =
            self.territory_name(territory)
                .ok_or_else(|| NameLookupError::UnknownTerritory {
                    language: language.to_string(),
                    territory: territory.to_string(),
                })?;

        let mut args = FluentArgs::new();
        args.set("language", language_name);
        args.set("territory", territory_name);

        self.format("language-with-territory", Some(&args))
            .ok_or_else(|| NameLookupError::UnknownTerritory {
                language: language.to_string(),
                territory: territory.to_string(),
            })
    }
}
