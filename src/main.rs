//! rust-bridge entry point.
//! Parses arguments, runs the selected command and reports progress.

use rust_bridge::{
    cli::{get_args, Command},
    error::{default_error_handler, Result},
    generator::{analyze, load_manifest, AnalyzeOptions, GenerateOptions},
    logger::init_logger,
    renderer::PlaceholderRenderer,
    templates::Dispatch,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args.command) {
        default_error_handler(err);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::GenerateBindings {
            manifest_path,
            output,
            template,
        } => run_generate(GenerateOptions {
            manifest_path,
            output,
            template,
        }),
        Command::AnalyzeRust {
            project_path,
            python_module,
        } => {
            run_analyze(AnalyzeOptions {
                project_path,
                python_module,
            });
            Ok(())
        }
    }
}

fn run_generate(options: GenerateOptions) -> Result<()> {
    println!(
        "🔗 Generating {} bindings from {}",
        options.template,
        options.manifest_path.display()
    );
    println!("📁 Output directory: {}", options.output_dir().display());

    let loaded = load_manifest(&options)?;
    println!("📦 Project: {}", loaded.identity().name);

    let report = loaded.generate(&PlaceholderRenderer::new())?;

    match &report.dispatch {
        Dispatch::Written(files) => {
            for file in files {
                println!("Wrote: '{}'", file.display());
            }
        }
        Dispatch::NotImplemented => {
            println!("Native bindings generation not yet implemented");
        }
    }

    println!("✅ Bindings generated successfully");
    Ok(())
}

fn run_analyze(options: AnalyzeOptions) {
    println!("🔍 Analyzing Rust project: {}", options.project_path.display());
    let report = analyze(&options);
    println!(
        "🐍 Python module: {}",
        report.python_module.as_deref().unwrap_or("None")
    );
    println!("✅ Analysis completed (placeholder)");
}
