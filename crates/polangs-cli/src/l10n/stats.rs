//! Catalog statistics and the providers that compute them.

use regex::Regex;
use std::io;
use std::path::Path;
use std::process::Command;
use std::sync::LazyLock;
use thiserror::Error;

/// `57 translated messages, 3 fuzzy translations, 0 untranslated messages.`
static POSITIONAL_COUNTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)[^,\d]*,\s*(\d+)[^,\d]*,\s*(\d+)").expect("valid statistics regex")
});

/// `12 translated messages, 1 untranslated message.`: msgfmt leaves out zero counts.
static KEYWORD_COUNTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s+(translated|fuzzy|untranslated)\b").expect("valid statistics regex")
});

#[cfg(windows)]
const NULL_DEVICE: &str = "NUL";
#[cfg(not(windows))]
const NULL_DEVICE: &str = "/dev/null";

#[derive(Debug, Error)]
pub enum StatsError {
    /// The statistics program could not be started.
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The program output holds no recognizable counts.
    #[error("unrecognized statistics output {output:?}")]
    Parse { output: String },
}

impl StatsError {
    /// Whether the whole run must stop, as opposed to skipping one catalog.
    pub fn is_fatal(&self) -> bool {
        matches!(self, StatsError::Spawn { .. })
    }
}

/// Message counts of one translation catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub translated: u32,
    pub fuzzy: u32,
    pub untranslated: u32,
}

impl CatalogStats {
    pub fn new(translated: u32, fuzzy: u32, untranslated: u32) -> Self {
        Self {
            translated,
            fuzzy,
            untranslated,
        }
    }

    pub fn total(&self) -> u64 {
        u64::from(self.translated) + u64::from(self.fuzzy) + u64::from(self.untranslated)
    }

    /// Percentage of translated messages, rounded half up.
    ///
    /// Returns `None` for a catalog without messages.
    pub fn coverage(&self) -> Option<u8> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let translated = u64::from(self.translated);
        let percent = (200 * translated + total) / (2 * total);
        u8::try_from(percent).ok()
    }

    /// Extracts the counts from statistics text.
    ///
    /// Three comma separated numbers are read as translated, fuzzy and
    /// untranslated, in that order. Otherwise each count is looked up by its
    /// keyword, missing ones being zero.
    pub fn parse(output: &str) -> Result<Self, StatsError> {
        if let Some(captures) = POSITIONAL_COUNTS.captures(output) {
            let count = |index: usize| parse_count(&captures[index], output);
            return Ok(Self::new(count(1)?, count(2)?, count(3)?));
        }

        let mut stats = Self::default();
        let mut found = false;
        for captures in KEYWORD_COUNTS.captures_iter(output) {
            let count = parse_count(&captures[1], output)?;
            match &captures[2] {
                "translated" => stats.translated = count,
                "fuzzy" => stats.fuzzy = count,
                _ => stats.untranslated = count,
            }
            found = true;
        }

        if found {
            Ok(stats)
        } else {
            Err(StatsError::Parse {
                output: output.trim().to_string(),
            })
        }
    }
}

fn parse_count(digits: &str, output: &str) -> Result<u32, StatsError> {
    digits.parse().map_err(|_| StatsError::Parse {
        output: output.trim().to_string(),
    })
}

/// Computes the message counts of a translation file.
pub trait StatsProvider {
    fn statistics(&self, path: &Path) -> Result<CatalogStats, StatsError>;
}

/// Runs `msgfmt --statistics` and reads the counts from its stderr.
#[derive(Debug, Clone)]
pub struct MsgfmtStats {
    program: String,
}

impl Default for MsgfmtStats {
    fn default() -> Self {
        Self::new(polangs_toml::DEFAULT_MSGFMT)
    }
}

impl MsgfmtStats {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl StatsProvider for MsgfmtStats {
    fn statistics(&self, path: &Path) -> Result<CatalogStats, StatsError> {
        tracing::debug!("running {} --statistics on {}", self.program, path.display());

        let output = Command::new(&self.program)
            .env("LC_ALL", "C")
            .arg("--statistics")
            .arg("-o")
            .arg(NULL_DEVICE)
            .arg(path)
            .output()
            .map_err(|source| StatsError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            tracing::warn!(
                "{} exited with {} for {}",
                self.program,
                output.status,
                path.display()
            );
        }

        CatalogStats::parse(&String::from_utf8_lossy(&output.stderr))
    }
}
