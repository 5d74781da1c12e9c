use std::path::PathBuf;

/// Effective settings of a run, after merging flags, config file and defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding the `.po` files.
    pub po_directory: PathBuf,
    /// Language to default territory JSON map.
    pub territories: PathBuf,
    /// Minimum coverage, in percent.
    pub threshold: u8,
    /// Statistics program.
    pub msgfmt: String,
}
