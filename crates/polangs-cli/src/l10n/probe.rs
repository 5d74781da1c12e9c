use super::{InvalidLanguageTag, LanguageTag, StatsError, StatsProvider};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoverageError {
    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error("catalog has no messages")]
    EmptyCatalog,
}

impl CoverageError {
    /// Whether the whole run must stop, as opposed to skipping one catalog.
    pub fn is_fatal(&self) -> bool {
        match self {
            CoverageError::Stats(err) => err.is_fatal(),
            CoverageError::EmptyCatalog => false,
        }
    }
}

/// Cached coverage of a probe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoverageState {
    #[default]
    Unknown,
    Computed(u8),
}

/// Coverage of a single translation file, computed on first use.
pub struct CoverageProbe<'a> {
    path: PathBuf,
    stats: &'a dyn StatsProvider,
    state: CoverageState,
}

impl<'a> CoverageProbe<'a> {
    pub fn new(path: impl Into<PathBuf>, stats: &'a dyn StatsProvider) -> Self {
        Self {
            path: path.into(),
            stats,
            state: CoverageState::Unknown,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file name, for diagnostics.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn state(&self) -> CoverageState {
        self.state
    }

    /// Language and optional territory taken from the file stem.
    pub fn language_tag(&self) -> Result<LanguageTag, InvalidLanguageTag> {
        let stem = self
            .path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| InvalidLanguageTag(self.file_name()))?;
        LanguageTag::from_file_stem(stem)
    }

    /// Percentage of translated messages.
    ///
    /// The statistics provider runs at most once per probe; failures are not
    /// cached.
    pub fn coverage(&mut self) -> Result<u8, CoverageError> {
        if let CoverageState::Computed(coverage) = self.state {
            return Ok(coverage);
        }

        let stats = self.stats.statistics(&self.path)?;
        let coverage = stats.coverage().ok_or(CoverageError::EmptyCatalog)?;
        tracing::debug!(
            "{}: {} translated, {} fuzzy, {} untranslated ({}%)",
            self.path.display(),
            stats.translated,
            stats.fuzzy,
            stats.untranslated,
            coverage
        );

        self.state = CoverageState::Computed(coverage);
        Ok(coverage)
    }
}
