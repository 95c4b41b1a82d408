//! Run a resolved program and turn failures into [`TriggerError`]s

use std::path::Path;

use crate::core::TriggerError;
use crate::core::ports::CommandRunner;
use crate::output::Reporter;

/// Render a program and its arguments the way they are traced
pub fn display_command(program: &Path, args: &[String]) -> String {
    std::iter::once(program.display().to_string())
        .chain(args.iter().cloned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run `program` and return its combined output if it exited successfully
///
/// `context` names the step in the error message, e.g. "Error running cmd".
pub fn run_checked<R: CommandRunner + ?Sized>(
    runner: &R,
    reporter: Reporter,
    program: &Path,
    args: &[String],
    context: &'static str,
) -> Result<String, TriggerError> {
    let command = display_command(program, args);
    reporter.trace(format_args!("Executing command: {command}"));

    let result = runner
        .run(program, args)
        .map_err(|source| TriggerError::Spawn {
            command: command.clone(),
            source,
        })?;

    if !result.success {
        return Err(TriggerError::Subprocess {
            context,
            command,
            status: result.status_text(),
            output: result.output,
        });
    }

    Ok(result.output)
}
