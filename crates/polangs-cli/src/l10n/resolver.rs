//! Selection of the locales listed in the manifest.

use super::{
    BASELINE_LOCALE, CoverageError, CoverageProbe, Locale, StatsError, StatsProvider, TerritoryMap,
};
use indexmap::IndexMap;
use polangs_names::{NameLookupError, NameResolver};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Failures that abort the resolution.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error("cannot name locale '{code}': {source}")]
    Name {
        code: String,
        #[source]
        source: NameLookupError,
    },
}

/// A translation file left out of the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skipped {
    /// The file name is not `language[_territory].po`.
    InvalidFileName { file_name: String },
    /// Neither the file name nor the territory map gives a territory.
    TerritoryUnresolved { language: String },
    /// Coverage under the threshold.
    InsufficientCoverage { code: String, coverage: u8 },
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skipped::InvalidFileName { file_name } => {
                write!(f, "invalid translation file name '{}'", file_name)
            },
            Skipped::TerritoryUnresolved { language } => {
                write!(f, "could not find a territory for '{}'", language)
            },
            Skipped::InsufficientCoverage { code, coverage } => {
                write!(f, "not enough coverage for '{}' ({}%)", code, coverage)
            },
        }
    }
}

/// Outcome of [`LocaleResolver::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Code to display name, in acceptance order, baseline first.
    pub locales: IndexMap<String, String>,
    /// Rejected files, in processing order.
    pub skipped: Vec<Skipped>,
}

pub struct LocaleResolver<'a> {
    territories: &'a TerritoryMap,
    threshold: u8,
    stats: &'a dyn StatsProvider,
    names: &'a dyn NameResolver,
}

impl<'a> LocaleResolver<'a> {
    pub fn new(
        territories: &'a TerritoryMap,
        threshold: u8,
        stats: &'a dyn StatsProvider,
        names: &'a dyn NameResolver,
    ) -> Self {
        Self {
            territories,
            threshold,
            stats,
            names,
        }
    }

    /// Picks the locales whose translation file reaches the threshold and
    /// names them.
    ///
    /// Paths are processed in the given order. A file whose statistics cannot
    /// be read or that has no messages counts as 0% translated.
    pub fn resolve<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Resolution, ResolveError> {
        let mut accepted = vec![BASELINE_LOCALE];
        let mut skipped = Vec::new();

        for path in paths {
            match self.probe(path.as_ref())? {
                Ok(locale) if accepted.contains(&locale) => {
                    tracing::debug!("'{}' is already listed", locale);
                },
                Ok(locale) => accepted.push(locale),
                Err(reason) => skipped.push(reason),
            }
        }

        let mut occurrences: HashMap<&str, usize> = HashMap::new();
        for locale in &accepted {
            *occurrences.entry(locale.language()).or_default() += 1;
        }

        let mut locales = IndexMap::with_capacity(accepted.len());
        for locale in &accepted {
            let shared = occurrences[locale.language()] > 1;
            let name = locale
                .name(self.names, shared)
                .map_err(|source| ResolveError::Name {
                    code: locale.code(),
                    source,
                })?;
            locales.insert(locale.code(), name);
        }

        Ok(Resolution { locales, skipped })
    }

    /// Decides on one file: `Ok(Err(_))` is a skip, `Err(_)` aborts.
    fn probe(&self, path: &Path) -> Result<Result<Locale, Skipped>, ResolveError> {
        let mut probe = CoverageProbe::new(path, self.stats);

        let tag = match probe.language_tag() {
            Ok(tag) => tag,
            Err(_) => {
                return Ok(Err(Skipped::InvalidFileName {
                    file_name: probe.file_name(),
                }));
            },
        };

        let language = tag.language().to_string();
        let Some(locale) = tag.resolve(self.territories) else {
            return Ok(Err(Skipped::TerritoryUnresolved { language }));
        };

        let coverage = match probe.coverage() {
            Ok(coverage) => coverage,
            Err(CoverageError::Stats(err)) if err.is_fatal() => return Err(err.into()),
            Err(err) => {
                tracing::warn!(
                    "could not read statistics for '{}': {}",
                    probe.file_name(),
                    err
                );
                0
            },
        };

        if coverage < self.threshold {
            return Ok(Err(Skipped::InsufficientCoverage {
                code: locale.code(),
                coverage,
            }));
        }

        tracing::debug!("accepting '{}' ({}%)", locale, coverage);
        Ok(Ok(locale))
    }
}
