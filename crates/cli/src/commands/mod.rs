//! Subcommands. Each exposes `run(&args) -> i32`, which prints and returns
//! the exit code, over an `execute` that returns the output for testing.

pub mod generate;
pub mod validate;

/// Exit code of a document that fails validation. Usage errors exit with 2.
pub const EXIT_INVALID: i32 = 3;

/// What a command prints to stdout, with the exit code it ends with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Text for stdout.
    pub stdout: String,
    /// Process exit code.
    pub exit_code: i32,
}

impl CommandOutput {
    fn ok(stdout: String) -> Self {
        Self {
            stdout,
            exit_code: 0,
        }
    }
}

/// Print an `execute` outcome and turn it into an exit code.
pub(crate) fn finish(outcome: Result<CommandOutput, String>) -> i32 {
    match outcome {
        Ok(output) => {
            println!("{}", output.stdout.trim_end());
            output.exit_code
        }
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}
