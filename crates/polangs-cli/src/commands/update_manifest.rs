//! update-manifest command implementation.

use crate::commands::{LocaleArgs, resolve_locales};
use crate::core::{CliError, ManifestNotFoundError, ManifestParseError};
use crate::sink::merge_locales;
use crate::utils::ui;
use clap::Parser;
use std::path::PathBuf;

/// Arguments for the update-manifest command.
#[derive(Debug, Parser)]
pub struct UpdateManifestArgs {
    /// Manifest JSON file whose `locales` key is replaced.
    pub manifest: PathBuf,

    #[command(flatten)]
    pub locale: LocaleArgs,

    /// Dry run - show the changes without writing the manifest.
    #[arg(long)]
    pub dry_run: bool,
}

/// Run the update-manifest command.
pub fn run_update_manifest(args: UpdateManifestArgs) -> Result<(), CliError> {
    if !args.manifest.is_file() {
        return Err(ManifestNotFoundError {
            path: args.manifest,
        }
        .into());
    }

    // Fail on an unreadable manifest before running the statistics program.
    let original = fs_err::read_to_string(&args.manifest)?;
    if let Err(err) = merge_locales(&original, &Default::default()) {
        return Err(ManifestParseError::new(&args.manifest, original, &err).into());
    }

    let settings = args.locale.settings()?;
    let resolution = resolve_locales(&settings)?;

    let updated = match merge_locales(&original, &resolution.locales) {
        Ok(updated) => updated,
        Err(err) => return Err(ManifestParseError::new(&args.manifest, original, &err).into()),
    };

    if args.dry_run {
        if updated != original {
            ui::print_would_update(&args.manifest);
            ui::print_diff(&original, &updated);
        } else {
            ui::print_manifest_unchanged(&args.manifest);
        }
        return Ok(());
    }

    fs_err::write(&args.manifest, &updated)?;
    ui::print_manifest_updated(&args.manifest, resolution.locales.len());

    Ok(())
}
