//! Command-line entry point.
//!
//! ```text
//! devtools-protogen --output-dir src/bindings browser_protocol.json js_protocol.json
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::error;
use tracing_subscriber::EnvFilter;

use devtools_protogen::compiler::DEFAULT_RUNTIME_PATH;
use devtools_protogen::{Compiler, FormatterOptions, Result};

// ============================================================================
// Cli
// ============================================================================

#[derive(Debug, Parser)]
#[command(name = "devtools-protogen")]
#[command(about = "Compile a remote-debugging protocol schema into Rust bindings.", long_about = None)]
struct Cli {
    /// Protocol schema files; files sharing a version are merged.
    #[arg(required = true, value_name = "SCHEMA")]
    schemas: Vec<PathBuf>,

    /// Directory version directories are written into.
    #[arg(short, long, value_name = "DIR")]
    output_dir: PathBuf,

    /// Emit experimental domains and declarations.
    ///
    /// With `false`, stable declarations that reference an experimental type
    /// keep the bare name, which is left undefined and fails to compile.
    #[arg(long, default_value_t = true, action = ArgAction::Set, value_name = "BOOL")]
    experimental: bool,

    /// Module path generated files import the runtime from.
    #[arg(long, default_value = DEFAULT_RUNTIME_PATH, value_name = "PATH")]
    runtime_path: String,

    /// Formatter program; the file path is appended to its arguments.
    #[arg(long, default_value = "rustfmt", value_name = "PROGRAM")]
    formatter: String,

    /// Argument passed to the formatter before the file path (repeatable).
    #[arg(long = "formatter-arg", value_name = "ARG", allow_hyphen_values = true)]
    formatter_args: Vec<String>,

    /// Skip formatting.
    #[arg(long)]
    no_format: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn formatter_options(&self) -> FormatterOptions {
        if self.formatter_args.is_empty() && self.formatter == "rustfmt" {
            FormatterOptions::default()
        } else {
            FormatterOptions::new(&self.formatter).with_args(self.formatter_args.iter().cloned())
        }
    }
}

// ============================================================================
// Main
// ============================================================================

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Compilation failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut builder = Compiler::builder()
        .output_dir(&cli.output_dir)
        .include_experimental(cli.experimental)
        .runtime_path(&cli.runtime_path);

    builder = if cli.no_format {
        builder.no_formatter()
    } else {
        builder.formatter(cli.formatter_options())
    };

    let report = builder.build()?.compile_files(&cli.schemas)?;

    for version in &report.versions {
        println!(
            "{}: {} files, {} types, {} commands, {} events ({} skipped) -> {}",
            version.version.tag(),
            version.files.len(),
            version.types,
            version.commands,
            version.events,
            version.skipped_declarations + version.skipped_domains.len(),
            version.dir.display()
        );
    }

    Ok(())
}

/// Initializes tracing; `RUST_LOG` overrides the verbosity flag.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "devtools_protogen=info",
        1 => "devtools_protogen=debug",
        _ => "devtools_protogen=trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

// ============================================================================
// Tests
// ============================================================================
