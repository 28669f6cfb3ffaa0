//! rust-bridge scaffolds Python/Rust interoperability glue.
//! It reads a project manifest and renders one of a fixed set of templates
//! (PyO3 bindings, cbindgen configuration) into an output directory.

/// Command-line interface module for the rust-bridge application
pub mod cli;

/// Default names and generated file names
pub mod constants;

/// Error types and handling for the rust-bridge application
pub mod error;

/// Invocation lifecycle for `generate-bindings` and `analyze-rust`
pub mod generator;

/// Logger initialisation
pub mod logger;

/// Manifest (pyproject.toml) loading and project identity
pub mod manifest;

/// Placeholder substitution for the built-in templates
pub mod renderer;

/// Template kinds and their generation routines
pub mod templates;

/// Output directory creation and file writing
pub mod writer;
