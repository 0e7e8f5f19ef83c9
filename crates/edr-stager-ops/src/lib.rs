pub mod ops_edr_command;
pub mod ops_install_dbt;
pub mod ops_install_edr;
pub mod ops_stage;

use edr_stager_util::errors::StagerError;
use edr_stager_util::process::CommandBuilder;

/// Interpreter used to drive pip. CI images for dbt ship `python3` on PATH.
pub const PYTHON_BIN: &str = "python3";

/// Run `python3 -m pip install <requirement>` with inherited stdio, so pip's
/// own progress output lands in the job log.
pub fn pip_install(requirement: &str) -> miette::Result<()> {
    let cmd = CommandBuilder::new(PYTHON_BIN)
        .args(["-m", "pip", "install"])
        .arg(requirement);

    tracing::debug!("running {}", cmd.render());
    let status = cmd.status()?;
    if !status.success() {
        return Err(StagerError::Subprocess {
            message: format!(
                "pip install {requirement} exited with code {}",
                status.code().unwrap_or(1)
            ),
        }
        .into());
    }
    Ok(())
}
