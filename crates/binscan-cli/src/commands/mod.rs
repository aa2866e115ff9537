//! Subcommand implementations.

pub mod completion;
pub mod inspect;
pub mod manifest;
