use crate::core::{CliError, Settings, TerritoryMapNotFoundError, TerritoryMapParseError};
use crate::l10n::{LocaleResolver, MsgfmtStats, Resolution, TerritoryMap};
use crate::utils::{discover_translation_files, ui};
use clap::Args;
use polangs_names::FluentNames;
use polangs_toml::LangsConfig;
use std::path::{Path, PathBuf};

/// Common arguments for the locale resolution.
///
/// Used by both generate-languages and update-manifest.
#[derive(Debug, Clone, Default, Args)]
pub struct LocaleArgs {
    /// Directory containing the `<language>[_<territory>].po` files [default: po].
    #[arg(long)]
    pub po_directory: Option<PathBuf>,

    /// JSON file mapping languages to their default territory [default: territories.json].
    #[arg(long)]
    pub territories: Option<PathBuf>,

    /// Minimum percentage of translated messages [default: 70].
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub threshold: Option<u8>,

    /// Program computing the catalog statistics [default: msgfmt].
    #[arg(long)]
    pub msgfmt: Option<String>,

    /// Configuration file (defaults to ./polangs.toml when present).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl LocaleArgs {
    /// Merge flags over the configuration file over the built-in defaults.
    pub fn settings(self) -> Result<Settings, CliError> {
        let config = match &self.config {
            Some(path) => LangsConfig::read_from_path(path)?,
            None => LangsConfig::discover(Path::new("."))?.unwrap_or_default(),
        };

        Ok(Settings {
            po_directory: self
                .po_directory
                .unwrap_or_else(|| config.po_directory_or_default()),
            territories: self
                .territories
                .unwrap_or_else(|| config.territories_or_default()),
            threshold: self
                .threshold
                .unwrap_or_else(|| config.threshold_or_default()),
            msgfmt: self.msgfmt.unwrap_or_else(|| config.msgfmt_or_default()),
        })
    }
}

/// Read the language to territory map.
pub fn load_territory_map(path: &Path) -> Result<TerritoryMap, CliError> {
    if !path.is_file() {
        return Err(TerritoryMapNotFoundError {
            path: path.to_path_buf(),
        }
        .into());
    }

    let content = fs_err::read_to_string(path)?;
    match TerritoryMap::from_json_str(&content) {
        Ok(map) => Ok(map),
        Err(err) => Err(TerritoryMapParseError::new(path, content, &err).into()),
    }
}

/// Run the resolution for the given settings, reporting skipped files.
pub fn resolve_locales(settings: &Settings) -> Result<Resolution, CliError> {
    let territories = load_territory_map(&settings.territories)?;
    let files = discover_translation_files(&settings.po_directory)?;
    tracing::info!(
        "found {} translation file(s) in {}",
        files.len(),
        settings.po_directory.display()
    );

    let stats = MsgfmtStats::new(settings.msgfmt.clone());
    let names = FluentNames::new();
    let resolution =
        LocaleResolver::new(&territories, settings.threshold, &stats, &names).resolve(&files)?;

    for skipped in &resolution.skipped {
        ui::print_skipped(skipped);
    }

    Ok(resolution)
}
