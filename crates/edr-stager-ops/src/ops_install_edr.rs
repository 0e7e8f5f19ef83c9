//! Operation: detect the Elementary dbt package version and install a
//! compatible edr release.
//!
//! Detection shells out to dbt with JSON logging and scans the output for
//! the stager project's version message. A dbt failure aborts the run; a
//! clean run that reports nothing falls back to the override version when
//! one was given, and to the latest release otherwise.

use edr_stager_core::inputs::StagerInputs;
use edr_stager_core::resolve::resolve_edr_requirement;
use edr_stager_core::{dbt_log, pip};
use edr_stager_util::errors::StagerError;
use edr_stager_util::process::CommandBuilder;
use edr_stager_util::progress;

/// The dbt executable, on PATH once the adapter install has run.
pub const DBT_BIN: &str = "dbt";

/// dbt project baked into the action image whose `run-operation` logs the
/// Elementary package version.
pub const STAGER_PROJECT_DIR: &str = "/edr_stager_dbt_project";

/// Detect the warehouse's Elementary dbt package version, resolve the
/// matching edr requirement, and install it.
pub fn install_edr(inputs: &StagerInputs) -> miette::Result<()> {
    let reported = detect_pkg_version(inputs)?;

    match &reported {
        Some(version) => {
            progress::status("Detected", &format!("Elementary dbt package {version}"));
        }
        None => match &inputs.fail_edr_version {
            Some(fallback) => {
                progress::status_warn(
                    "Overriding",
                    &format!("no version reported, assuming {fallback}"),
                );
            }
            None => {
                progress::status_warn(
                    "Detected",
                    "no Elementary dbt package version, installing latest edr",
                );
            }
        },
    }

    let requirement =
        resolve_edr_requirement(reported.as_deref(), inputs.fail_edr_version.as_deref())?;
    let package = pip::edr_requirement(&inputs.warehouse_type, &requirement);

    progress::status("Installing", &package);
    crate::pip_install(&package)
}

/// Run the staging project's version operation with captured output and scan
/// its JSON logs. Reporting nothing is fine; a non-zero dbt exit is not.
fn detect_pkg_version(inputs: &StagerInputs) -> miette::Result<Option<String>> {
    let mut cmd = CommandBuilder::new(DBT_BIN)
        .args([
            "--log-format",
            "json",
            "run-operation",
            "get_elementary_dbt_pkg_version",
        ])
        .arg("--project-dir")
        .arg(STAGER_PROJECT_DIR);
    if let Some(target) = &inputs.profile_target {
        cmd = cmd.arg("--target").arg(target.as_str());
    }
    if let Some(dir) = &inputs.project_dir {
        cmd = cmd.cwd(dir);
    }

    tracing::debug!("running {}", cmd.render());
    let pb = progress::spinner("Querying Elementary dbt package version");
    let output = cmd.output();
    pb.finish_and_clear();
    let output = output?;

    if !output.status.success() {
        return Err(detection_error(&output).into());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(dbt_log::extract_stager_version(&stdout))
}

fn detection_error(output: &std::process::Output) -> StagerError {
    let mut message = format!(
        "dbt run-operation get_elementary_dbt_pkg_version exited with code {}",
        output.status.code().unwrap_or(1)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stdout.trim().is_empty() {
        message.push_str("\nstdout:\n");
        message.push_str(stdout.trim_end());
    }
    if !stderr.trim().is_empty() {
        message.push_str("\nstderr:\n");
        message.push_str(stderr.trim_end());
    }
    StagerError::Subprocess { message }
}
