//! Operation: run the user's edr command through the platform shell.

use edr_stager_core::inputs::StagerInputs;
use edr_stager_util::errors::StagerError;
use edr_stager_util::process::CommandBuilder;
use edr_stager_util::progress;

/// Run the configured command with inherited stdio. A non-zero exit becomes
/// [`StagerError::EdrCommand`], which carries the child's exit code out to
/// the process exit.
pub fn run_edr_command(inputs: &StagerInputs) -> miette::Result<()> {
    progress::status("Running", &inputs.edr_command);

    let mut cmd = shell_command(&inputs.edr_command);
    if let Some(dir) = &inputs.project_dir {
        cmd = cmd.cwd(dir);
    }

    tracing::debug!("running {}", cmd.render());
    let status = cmd.status()?;
    if !status.success() {
        return Err(StagerError::EdrCommand {
            code: status.code().unwrap_or(1),
        }
        .into());
    }
    Ok(())
}

/// Build a shell invocation for `command` on the current platform.
fn shell_command(command: &str) -> CommandBuilder {
    if cfg!(windows) {
        CommandBuilder::new("cmd").arg("/C").arg(command)
    } else {
        CommandBuilder::new("sh").arg("-c").arg(command)
    }
}
