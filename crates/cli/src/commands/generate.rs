//! `apigen generate`

use clap::{Args, ValueEnum};
use std::path::PathBuf;
use tracing::{info, warn};

use apigen_core::{GenerateError, ServiceGenerationResult};

use super::{CommandOutput, EXIT_INVALID, finish};
use crate::input::{load_config, load_document};

/// Which artifact to print.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Artifact {
    /// JSON bundle of every artifact and the per-endpoint services
    #[default]
    All,
    /// Type declarations
    Types,
    /// Service functions
    Services,
    /// React Query hooks
    Hooks,
    /// Re-export index
    Index,
}

/// Arguments of `apigen generate`.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// API document to generate from, or `-` for JSON on stdin
    #[arg(value_name = "FILE")]
    pub input: PathBuf,
    /// Artifact to print
    #[arg(long, value_enum, default_value_t = Artifact::All)]
    pub artifact: Artifact,
    /// TOML file with module specifiers for the emitted imports
    #[arg(long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,
}

/// Run the command and return its exit code.
pub fn run(args: &GenerateArgs) -> i32 {
    finish(execute(args))
}

/// Validate, then generate and render the selected artifact.
///
/// A document with validation errors yields its diagnostics as JSON and
/// exit code 3 instead of any artifact.
pub fn execute(args: &GenerateArgs) -> Result<CommandOutput, String> {
    let config = load_config(args.config.as_deref())?;
    let doc = load_document(&args.input)?;

    match apigen_core::generate(&doc, &config) {
        Ok(result) => {
            info!(
                functions = result.total_functions,
                artifact = ?args.artifact,
                "Generated {}",
                args.input.display()
            );
            render(&result, args.artifact).map(CommandOutput::ok)
        }
        Err(GenerateError::Blocked { result }) => {
            warn!(errors = result.errors.len(), "Generation blocked");
            let stdout = serde_json::to_string_pretty(&result)
                .map_err(|e| format!("Failed to serialize validation result: {e}"))?;
            Ok(CommandOutput {
                stdout,
                exit_code: EXIT_INVALID,
            })
        }
        Err(err) => Err(err.to_string()),
    }
}

fn render(result: &ServiceGenerationResult, artifact: Artifact) -> Result<String, String> {
    let text = match artifact {
        Artifact::All => serde_json::to_string_pretty(result)
            .map_err(|e| format!("Failed to serialize artifacts: {e}"))?,
        Artifact::Types => result.types.clone(),
        Artifact::Services => result.services_source().to_string(),
        Artifact::Hooks => result.hooks.clone(),
        Artifact::Index => result.index.clone(),
    };
    Ok(text)
}
