//! Template registry.
//! Each [`TemplateKind`] maps to exactly one generation routine that turns a
//! project identity into an [`OutputPlan`].

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use log::{debug, info};

use crate::constants::{CARGO_TOML_FILE, CBINDGEN_TOML_FILE, LIB_RS_FILE, SETUP_PY_FILE, SRC_DIR};
use crate::error::Result;
use crate::manifest::{Manifest, ProjectIdentity};
use crate::renderer::{Bindings, TemplateRenderer};
use crate::writer::OutputPlan;

const PYO3_LIB_RS: &str = r#"use pyo3::prelude::*;

#[pyfunction]
fn add(a: i32, b: i32) -> PyResult<i32> {
    Ok(a + b)
}

#[pymodule]
fn {{ project_name|replace("-", "_") }}(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(add, m)?)?;
    Ok(())
}
"#;

const PYO3_CARGO_TOML: &str = r#"[package]
name = "{{ project_name|replace("-", "_") }}"
version = "{{ version }}"
edition = "2021"

[lib]
name = "{{ project_name|replace("-", "_") }}"
crate-type = ["cdylib"]

[dependencies]
pyo3 = { version = "0.22", features = ["extension-module"] }
"#;

const PYO3_SETUP_PY: &str = r#"from setuptools import setup
from setuptools_rust import RustExtension

setup(
    name="{{ project_name }}",
    version="{{ version }}",
    rust_extensions=[RustExtension("{{ project_name|replace("-", "_") }}")],
    setup_requires=["setuptools-rust"],
    zip_safe=False,
)
"#;

/// Fixed cbindgen configuration; users edit `include` by hand.
pub const CBINDGEN_TOML: &str = r#"[parse]
parse_deps = true
include = ["your_crate"]

[fn]
rename_args = "SnakeCase"

[struct]
rename_fields = "SnakeCase"

[enum]
rename_variants = "ScreamingSnakeCase"
"#;

/// The closed set of things rust-bridge can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemplateKind {
    /// PyO3 extension module: src/lib.rs, Cargo.toml and setup.py
    #[value(name = "pyo3", alias = "binding-shim")]
    BindingShim,
    /// Native Python extension (not implemented yet)
    #[value(name = "native", alias = "native-stub")]
    NativeStub,
    /// cbindgen.toml for C header generation
    #[value(name = "cbindgen", alias = "header-generator-config")]
    HeaderGeneratorConfig,
}

impl TemplateKind {
    /// Name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            TemplateKind::BindingShim => "pyo3",
            TemplateKind::NativeStub => "native",
            TemplateKind::HeaderGeneratorConfig => "cbindgen",
        }
    }

    /// Renders this template for `identity` into a plan rooted at `output_dir`.
    ///
    /// # Returns
    /// * `Ok(None)` for templates that generate nothing yet
    pub fn plan(
        &self,
        identity: &ProjectIdentity,
        output_dir: &Path,
        renderer: &dyn TemplateRenderer,
    ) -> Result<Option<OutputPlan>> {
        match self {
            TemplateKind::BindingShim => {
                plan_binding_shim(identity, output_dir, renderer).map(Some)
            }
            TemplateKind::NativeStub => Ok(None),
            TemplateKind::HeaderGeneratorConfig => Ok(Some(plan_cbindgen_config(output_dir))),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a dispatch did on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Files written, in generation order
    Written(Vec<PathBuf>),
    /// The template is a placeholder; nothing was touched
    NotImplemented,
}

/// Builds the binding values every template can reference.
pub fn identity_bindings(identity: &ProjectIdentity) -> Bindings {
    let mut bindings = Bindings::new();
    bindings.insert("project_name".to_string(), identity.name.clone());
    bindings.insert("version".to_string(), identity.version.clone());
    bindings
}

/// Runs the generation routine for `kind` and persists its output.
pub fn dispatch(
    kind: TemplateKind,
    manifest: &Manifest,
    output_dir: &Path,
    renderer: &dyn TemplateRenderer,
) -> Result<Dispatch> {
    debug!("Dispatching template '{kind}' into {}", output_dir.display());
    match kind.plan(&manifest.identity(), output_dir, renderer)? {
        Some(plan) => plan.write().map(Dispatch::Written),
        None => {
            info!("Template '{kind}' has no generator, skipping writes");
            Ok(Dispatch::NotImplemented)
        }
    }
}

fn plan_binding_shim(
    identity: &ProjectIdentity,
    output_dir: &Path,
    renderer: &dyn TemplateRenderer,
) -> Result<OutputPlan> {
    let bindings = identity_bindings(identity);

    Ok(OutputPlan::new(output_dir)
        .with_dir(SRC_DIR)
        .with_file(
            Path::new(SRC_DIR).join(LIB_RS_FILE),
            renderer.render(PYO3_LIB_RS, &bindings)?,
        )
        .with_file(CARGO_TOML_FILE, renderer.render(PYO3_CARGO_TOML, &bindings)?)
        .with_file(SETUP_PY_FILE, renderer.render(PYO3_SETUP_PY, &bindings)?))
}

fn plan_cbindgen_config(output_dir: &Path) -> OutputPlan {
    OutputPlan::new(output_dir).with_file(CBINDGEN_TOML_FILE, CBINDGEN_TOML.to_string())
}
