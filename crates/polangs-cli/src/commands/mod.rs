//! CLI command implementations.

mod common;
mod generate_languages;
mod update_manifest;

pub use common::{LocaleArgs, load_territory_map, resolve_locales};
pub use generate_languages::{GenerateLanguagesArgs, run_generate_languages};
pub use update_manifest::{UpdateManifestArgs, run_update_manifest};
