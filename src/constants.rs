//! Common constants used throughout rust-bridge.

/// Directory created next to the manifest when `--output` is not given
pub const DEFAULT_OUTPUT_DIR: &str = "rust_bindings";

/// Project name used when the manifest has no `project.name`
pub const DEFAULT_PROJECT_NAME: &str = "unknown";

/// Project version used when the manifest has no `project.version`
pub const DEFAULT_PROJECT_VERSION: &str = "0.1.0";

/// Source directory of the generated binding crate
pub const SRC_DIR: &str = "src";

/// Generated artifact file names
pub const LIB_RS_FILE: &str = "lib.rs";
pub const CARGO_TOML_FILE: &str = "Cargo.toml";
pub const SETUP_PY_FILE: &str = "setup.py";
pub const CBINDGEN_TOML_FILE: &str = "cbindgen.toml";
