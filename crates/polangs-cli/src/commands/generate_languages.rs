//! generate-languages command implementation.

use crate::commands::{LocaleArgs, resolve_locales};
use crate::core::CliError;
use crate::sink::render_standalone;
use clap::Parser;
use std::io::Write as _;

/// Arguments for the generate-languages command.
#[derive(Debug, Parser)]
pub struct GenerateLanguagesArgs {
    #[command(flatten)]
    pub locale: LocaleArgs,
}

/// Run the generate-languages command.
pub fn run_generate_languages(args: GenerateLanguagesArgs) -> Result<(), CliError> {
    let settings = args.locale.settings()?;
    let resolution = resolve_locales(&settings)?;

    let output = render_standalone(&resolution.locales)
        .map_err(|err| CliError::Other(err.to_string()))?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
