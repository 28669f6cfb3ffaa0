//! Project manifest loading.
//! Reads the `[project]` table of a `pyproject.toml`-style document and
//! derives the project identity used by every template.

use std::path::Path;
use std::str::FromStr;

use log::debug;
use serde::Deserialize;

use crate::constants::{DEFAULT_PROJECT_NAME, DEFAULT_PROJECT_VERSION};
use crate::error::{Error, Result};

/// Parsed manifest document.
///
/// Only the fields rust-bridge consumes are modelled; every other table and
/// key in the document is accepted and ignored.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub project: Option<ProjectSection>,
}

/// The `[project]` table.
///
/// Fields are kept as raw TOML values so that `version = 1.0` or
/// `name = 42` still yield an identity instead of a parse failure.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct ProjectSection {
    #[serde(default)]
    pub name: Option<toml::Value>,
    #[serde(default)]
    pub version: Option<toml::Value>,
}

/// Name and version of the project the bindings are generated for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIdentity {
    /// Human-readable name, may contain `-`
    pub name: String,
    /// Version string, copied verbatim
    pub version: String,
}

impl ProjectIdentity {
    /// Name usable as a Rust crate, library and Python module identifier.
    pub fn module_name(&self) -> String {
        self.name.replace('-', "_")
    }
}

impl Default for ProjectIdentity {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROJECT_NAME.to_string(),
            version: DEFAULT_PROJECT_VERSION.to_string(),
        }
    }
}

impl FromStr for Manifest {
    type Err = toml::de::Error;

    fn from_str(content: &str) -> std::result::Result<Self, Self::Err> {
        toml::from_str(content)
    }
}

impl Manifest {
    /// Returns the project identity, falling back to the defaults for
    /// missing fields.
    pub fn identity(&self) -> ProjectIdentity {
        let defaults = ProjectIdentity::default();
        let Some(project) = &self.project else {
            return defaults;
        };

        ProjectIdentity {
            name: project.name.as_ref().and_then(scalar_text).unwrap_or(defaults.name),
            version: project
                .version
                .as_ref()
                .and_then(scalar_text)
                .unwrap_or(defaults.version),
        }
    }
}

/// Text of a scalar value; arrays and tables count as absent.
fn scalar_text(value: &toml::Value) -> Option<String> {
    match value {
        toml::Value::String(s) => Some(s.clone()),
        toml::Value::Integer(_)
        | toml::Value::Float(_)
        | toml::Value::Boolean(_)
        | toml::Value::Datetime(_) => Some(value.to_string()),
        toml::Value::Array(_) | toml::Value::Table(_) => None,
    }
}

/// Reads and parses the manifest at `path`.
///
/// # Errors
/// * `Error::NotFound` if `path` does not exist
/// * `Error::Parse` if the file is not UTF-8 or not well-formed TOML
/// * `Error::Io` if the file exists but cannot be read
pub fn load<P: AsRef<Path>>(path: P) -> Result<Manifest> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::NotFound { path: path.to_path_buf() });
    }

    debug!("Loading manifest from {}", path.display());
    let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    let content = String::from_utf8(bytes).map_err(|e| Error::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    content.parse().map_err(|e: toml::de::Error| Error::Parse {
        path: path.to_path_buf(),
        reason: e.to_string().trim_end().to_string(),
    })
}
