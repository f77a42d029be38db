//! Command-line front end for the apigen pipeline.
//!
//! Reads an API document from a file or stdin and prints either its
//! validation result or the generated TypeScript artifacts. Nothing is
//! written to disk.

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

pub mod commands;
pub mod input;

#[derive(Parser, Debug)]
#[command(
    name = "apigen",
    version,
    about = "Validate API documentation and generate a typed TypeScript client"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a document and print its diagnostics
    Validate(commands::validate::ValidateArgs),
    /// Generate TypeScript artifacts from a valid document
    Generate(commands::generate::GenerateArgs),
}

/// Parse `args` (program name first) and run the selected command.
///
/// Returns the process exit code: 0 on success, 1 on failure, 2 for a usage
/// error and 3 when the document fails validation.
pub fn run_cli<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => match cli.command {
            Some(Commands::Validate(args)) => commands::validate::run(&args),
            Some(Commands::Generate(args)) => commands::generate::run(&args),
            None => {
                let mut cmd = Cli::command();
                let _ = cmd.print_help();
                println!();
                0
            }
        },
        Err(e) => {
            let code = e.exit_code();
            let _ = e.print();
            code
        }
    }
}

/// Install the stderr log subscriber.
///
/// `APIGEN_LOG` takes a plain level (`trace`, `debug`, `info`, `warn`,
/// `error`) applied to the apigen crates, or a full filter directive such
/// as `apigen_core=trace,apigen_cli=warn`. Defaults to `info`.
pub fn init_tracing() {
    let crate_root = module_path!().to_string();

    let filter = match std::env::var("APIGEN_LOG") {
        Ok(level) if is_plain_level(&level) => {
            format!("{crate_root}={level},apigen_core={level}")
        }
        Ok(directive) => directive,
        Err(_) => format!("{crate_root}=info,apigen_core=info"),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn is_plain_level(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
