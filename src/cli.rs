//! Command-line interface implementation for rust-bridge.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::templates::TemplateKind;

/// Command-line arguments structure for rust-bridge.
#[derive(Parser, Debug)]
#[command(author, version, about = "Python-Rust interoperability tools and FFI helpers", long_about = None)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate Rust-Python bindings from pyproject.toml
    GenerateBindings {
        /// Path to the project manifest (pyproject.toml)
        #[arg(value_name = "PYPROJECT_PATH")]
        manifest_path: PathBuf,

        /// Output directory for generated bindings [default: <manifest dir>/rust_bindings]
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Kind of bindings to generate
        #[arg(short, long, value_enum, default_value_t = TemplateKind::BindingShim)]
        template: TemplateKind,
    },

    /// Analyze Rust project for Python interop opportunities
    #[command(alias = "analyze")]
    AnalyzeRust {
        /// Path to the Rust project
        #[arg(value_name = "RUST_PROJECT")]
        project_path: PathBuf,

        /// Python module name
        #[arg(short = 'm', long, alias = "module", value_name = "NAME")]
        python_module: Option<String>,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 2 and the help text if no subcommand is given
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                || e.kind() == ErrorKind::MissingSubcommand
            {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(2);
            } else {
                e.exit();
            }
        }
    }
}
