//! Workspace automation: `cargo run -p xtask -- <command>`.

use anyhow::{Context as _, Result, bail};
use clap::{Parser, Subcommand};
use icu_experimental::displaynames::multi::{LanguageDisplayNames, RegionDisplayNames};
use icu_locale::locale;
use icu_locale::subtags::{Language, Region};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Display-name table embedded by polangs-names, relative to the workspace root.
const NAMES_FTL: &str = "crates/polangs-names/names.ftl";

/// Three letter languages that ship gettext catalogs; two letter codes are
/// enumerated.
const EXTRA_LANGUAGES: &[&str] = &[
    "ast", "ckb", "csb", "dsb", "fil", "haw", "hsb", "kab", "kok", "mai", "nds", "sat", "sco",
    "szl", "yue",
];

/// Region codes naming groupings rather than territories.
const GROUPINGS: &[&str] = &["EU", "EZ", "UN"];

const HEADER: &str = "\
## English display names for languages and territories, from CLDR.
## Message ids are `language-<lowercase code>` and `territory-<uppercase code>`.
## Generated by `cargo run -p xtask -- names`; edit the generator rather than this file.

language-with-territory = { $language } ({ $territory })
";

#[derive(Parser)]
#[command(name = "xtask")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the display-name table of polangs-names from CLDR data
    Names {
        /// Fail instead of writing when the table is out of date.
        #[arg(long)]
        check: bool,
    },
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Commands::Names { check } => names(check),
    }
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

fn names(check: bool) -> Result<()> {
    let generated = render_names()?;
    let path = workspace_root().join(NAMES_FTL);

    if check {
        let current = fs_err::read_to_string(&path)?;
        if current != generated {
            bail!(
                "{} is out of date, run `cargo run -p xtask -- names`",
                path.display()
            );
        }
        println!("{} is up to date", path.display());
        return Ok(());
    }

    fs_err::write(&path, generated)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn render_names() -> Result<String> {
    let language_names = LanguageDisplayNames::try_new(locale!("en").into(), Default::default())
        .context("failed to load CLDR language names")?;
    let region_names = RegionDisplayNames::try_new(locale!("en").into(), Default::default())
        .context("failed to load CLDR region names")?;

    let mut languages: Vec<String> = two_letter_codes('a'..='z')
        .chain(EXTRA_LANGUAGES.iter().map(|code| code.to_string()))
        .collect();
    languages.sort();

    let mut output = String::from(HEADER);
    output.push_str("\n## Languages\n\n");
    for code in &languages {
        let Ok(language) = code.parse::<Language>() else {
            continue;
        };
        if let Some(name) = language_names.of(language) {
            writeln!(output, "language-{} = {}", code, name)?;
        }
    }

    output.push_str("\n## Territories\n\n");
    for code in two_letter_codes('A'..='Z').filter(|code| is_territory(code)) {
        let Ok(region) = code.parse::<Region>() else {
            continue;
        };
        if let Some(name) = region_names.of(region) {
            writeln!(output, "territory-{} = {}", code, name)?;
        }
    }

    Ok(output)
}

fn two_letter_codes(letters: std::ops::RangeInclusive<char>) -> impl Iterator<Item = String> {
    letters
        .clone()
        .flat_map(move |first| letters.clone().map(move |second| format!("{first}{second}")))
}

/// Excludes groupings and the private-use ranges of ISO 3166-1.
fn is_territory(code: &str) -> bool {
    let private_use = code == "AA"
        || code == "ZZ"
        || ("QM"..="QZ").contains(&code)
        || (code.starts_with('X') && code != "XK");
    !private_use && !GROUPINGS.contains(&code)
}
