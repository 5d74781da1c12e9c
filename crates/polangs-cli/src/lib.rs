#![doc = include_str!("../README.md")]

pub mod commands;
pub mod core;
pub mod l10n;
pub mod sink;
pub mod utils;
