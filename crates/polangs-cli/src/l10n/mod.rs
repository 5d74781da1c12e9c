//! Locale selection shared by both commands.
//!
//! Translation files are probed for their coverage, completed with a
//! territory and named, yielding the `locales` mapping of the manifest.

mod locale;
mod probe;
mod resolver;
mod stats;
mod territories;

pub use locale::{BASELINE_LOCALE, InvalidLanguageTag, LanguageTag, Locale};
pub use probe::{CoverageError, CoverageProbe, CoverageState};
pub use resolver::{LocaleResolver, Resolution, ResolveError, Skipped};
pub use stats::{CatalogStats, MsgfmtStats, StatsError, StatsProvider};
pub use territories::{InvalidTerritoryMap, TerritoryMap};
