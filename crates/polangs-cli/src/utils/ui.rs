// CLI output formatting with consistent styling using colored.
// Generated JSON goes to stdout untouched; everything else goes to stderr
// unless the command writes its result to a file.

use crate::l10n::Skipped;
use colored::Colorize as _;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Disable colors, e.g. for `--no-color` or deterministic test output.
pub fn disable_colors() {
    colored::control::set_override(false);
}

/// Install the tracing subscriber.
///
/// `RUST_LOG` wins over the verbosity flag.
pub fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

pub fn print_skipped(skipped: &Skipped) {
    eprintln!("{}", skipped.to_string().yellow());
}

pub fn print_manifest_updated(path: &Path, locale_count: usize) {
    println!(
        "{} {} ({} locale(s))",
        "Updated".green(),
        path.display(),
        locale_count.to_string().cyan()
    );
}

pub fn print_manifest_unchanged(path: &Path) {
    println!("{} {}", "Unchanged".dimmed(), path.display());
}

pub fn print_would_update(path: &Path) {
    println!("{} {}", "Would update:".yellow(), path.display());
}

pub fn print_diff(old: &str, new: &str) {
    use similar::{ChangeTag, TextDiff};

    let diff = TextDiff::from_lines(old, new);

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            println!("{}", "  ...".dimmed());
        }
        for op in group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => "-",
                    ChangeTag::Insert => "+",
                    ChangeTag::Equal => " ",
                };
                let line = format!("{} {}", sign, change);
                match change.tag() {
                    ChangeTag::Delete => print!("{}", line.red()),
                    ChangeTag::Insert => print!("{}", line.green()),
                    ChangeTag::Equal => print!("{}", line.dimmed()),
                }
            }
        }
    }
}
