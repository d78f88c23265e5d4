//! CLI commands for the vocabulary builder.

pub mod build;

pub use build::BuildCommand;
