//! `apigen validate`

use clap::Args;
use std::path::PathBuf;
use tracing::info;

use super::{CommandOutput, EXIT_INVALID, finish};
use crate::input::load_document;

/// Arguments of `apigen validate`.
#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// API document to validate, or `-` for JSON on stdin
    #[arg(value_name = "FILE")]
    pub input: PathBuf,
}

/// Run the command and return its exit code.
pub fn run(args: &ValidateArgs) -> i32 {
    finish(execute(args))
}

/// Validate the document and render the result as JSON.
pub fn execute(args: &ValidateArgs) -> Result<CommandOutput, String> {
    let doc = load_document(&args.input)?;
    let result = apigen_core::validate(&doc);
    info!(
        valid = result.is_valid,
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "Validated {}",
        args.input.display()
    );

    let stdout = serde_json::to_string_pretty(&result)
        .map_err(|e| format!("Failed to serialize validation result: {e}"))?;
    Ok(CommandOutput {
        stdout,
        exit_code: if result.is_valid { 0 } else { EXIT_INVALID },
    })
}
