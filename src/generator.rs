//! Command orchestration.
//! Drives one invocation through Loading, Generating and Done, aborting on
//! the first error.

use std::fmt;
use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::DEFAULT_OUTPUT_DIR;
use crate::error::Result;
use crate::manifest::{self, Manifest, ProjectIdentity};
use crate::renderer::TemplateRenderer;
use crate::templates::{dispatch, Dispatch, TemplateKind};

/// Lifecycle of a single invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Loading,
    Generating,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Loading => write!(f, "loading"),
            Stage::Generating => write!(f, "generating"),
            Stage::Done => write!(f, "done"),
        }
    }
}

fn enter(stage: Stage) {
    debug!("Stage: {stage}");
}

/// Inputs of `generate-bindings`.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub manifest_path: PathBuf,
    /// Defaults to `rust_bindings` next to the manifest
    pub output: Option<PathBuf>,
    pub template: TemplateKind,
}

impl GenerateOptions {
    /// Directory the generated files are written to.
    pub fn output_dir(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_dir(&self.manifest_path))
    }
}

/// Returns `<manifest dir>/rust_bindings`.
pub fn default_output_dir<P: AsRef<Path>>(manifest_path: P) -> PathBuf {
    manifest_path
        .as_ref()
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(DEFAULT_OUTPUT_DIR)
}

/// Outcome of a successful `generate-bindings` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub identity: ProjectIdentity,
    pub template: TemplateKind,
    pub dispatch: Dispatch,
}

impl GenerationReport {
    pub fn written_files(&self) -> &[PathBuf] {
        match &self.dispatch {
            Dispatch::Written(files) => files,
            Dispatch::NotImplemented => &[],
        }
    }
}

/// A loaded manifest waiting for the Generating stage.
#[derive(Debug, Clone)]
pub struct LoadedManifest {
    options: GenerateOptions,
    manifest: Manifest,
    identity: ProjectIdentity,
}

impl LoadedManifest {
    pub fn identity(&self) -> &ProjectIdentity {
        &self.identity
    }

    /// Generates the selected template into the output directory.
    ///
    /// # Errors
    /// * `Error::Render` if a template cannot be rendered
    /// * `Error::Io` if the output cannot be written
    pub fn generate(self, renderer: &dyn TemplateRenderer) -> Result<GenerationReport> {
        enter(Stage::Generating);
        let output_dir = self.options.output_dir();
        let dispatch = dispatch(self.options.template, &self.manifest, &output_dir, renderer)?;

        enter(Stage::Done);
        Ok(GenerationReport {
            output_dir,
            identity: self.identity,
            template: self.options.template,
            dispatch,
        })
    }
}

/// Loading stage of `generate-bindings`.
///
/// # Errors
/// * `Error::NotFound` if the manifest path does not exist
/// * `Error::Parse` if the manifest is malformed
pub fn load_manifest(options: &GenerateOptions) -> Result<LoadedManifest> {
    enter(Stage::Loading);
    let manifest = manifest::load(&options.manifest_path)?;
    let identity = manifest.identity();
    debug!("Project identity: {} {}", identity.name, identity.version);

    Ok(LoadedManifest {
        options: options.clone(),
        manifest,
        identity,
    })
}

/// Loads the manifest and generates the selected template.
pub fn generate_bindings(
    options: &GenerateOptions,
    renderer: &dyn TemplateRenderer,
) -> Result<GenerationReport> {
    load_manifest(options)?.generate(renderer)
}

/// Inputs of `analyze-rust`.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    pub project_path: PathBuf,
    pub python_module: Option<String>,
}

/// Outcome of `analyze-rust`. Analysis itself is not implemented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub project_path: PathBuf,
    pub python_module: Option<String>,
}

/// Placeholder analysis. Always succeeds; the project path is echoed back
/// without touching the filesystem.
pub fn analyze(options: &AnalyzeOptions) -> AnalysisReport {
    enter(Stage::Loading);
    debug!("Analysis of {} is not implemented", options.project_path.display());

    enter(Stage::Done);
    AnalysisReport {
        project_path: options.project_path.clone(),
        python_module: options.python_module.clone(),
    }
}
