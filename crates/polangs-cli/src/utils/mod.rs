//! Utility functions shared across CLI commands.

mod discovery;
pub mod ui;

pub use discovery::{PO_EXTENSION, discover_translation_files};
