//! Operation: stage dbt configuration and warehouse credentials.
//!
//! Credential contents arrive as action inputs and land at the fixed paths
//! the adapters expect. Log lines carry a byte count and a content
//! fingerprint, never the content itself.

use std::path::{Path, PathBuf};

use edr_stager_core::inputs::StagerInputs;
use edr_stager_util::errors::StagerError;
use edr_stager_util::{fs, hash, progress};

/// Where the BigQuery service-account keyfile is staged.
pub const BIGQUERY_KEYFILE_PATH: &str = "/tmp/bigquery_keyfile.json";

/// Where the GCS service-account keyfile is staged.
pub const GCS_KEYFILE_PATH: &str = "/tmp/gcs_keyfile.json";

/// The dbt configuration directory, `<home>/.dbt`.
pub fn dbt_config_dir() -> PathBuf {
    fs::home_dir().join(".dbt")
}

/// Create the dbt config directory and write whichever credential payloads
/// were provided. Absent payloads leave the corresponding file untouched.
pub fn stage(inputs: &StagerInputs) -> miette::Result<()> {
    let dbt_dir = dbt_config_dir();
    fs::ensure_dir(&dbt_dir).map_err(StagerError::Io)?;

    if let Some(profiles) = &inputs.profiles_yml {
        write_staged(&dbt_dir.join("profiles.yml"), profiles)?;
    }
    if let Some(keyfile) = &inputs.bigquery_keyfile {
        write_staged(Path::new(BIGQUERY_KEYFILE_PATH), keyfile)?;
    }
    if let Some(keyfile) = &inputs.gcs_keyfile {
        write_staged(Path::new(GCS_KEYFILE_PATH), keyfile)?;
    }

    Ok(())
}

fn write_staged(path: &Path, contents: &str) -> Result<(), StagerError> {
    progress::status(
        "Writing",
        &format!(
            "{} ({} bytes, sha256 {})",
            path.display(),
            contents.len(),
            hash::fingerprint(contents.as_bytes()),
        ),
    );
    fs::write_private(path, contents)?;
    Ok(())
}
