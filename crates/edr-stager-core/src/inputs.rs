//! Provisioning inputs: normalization and required-field validation.
//!
//! CI actions deliver unset inputs as empty environment variables, so empty
//! strings are folded to absent before anything else looks at them.

use std::path::PathBuf;

use edr_stager_util::errors::StagerError;

/// Inputs exactly as collected from flags and environment, before
/// normalization.
#[derive(Debug, Default, Clone)]
pub struct RawInputs {
    pub warehouse_type: Option<String>,
    pub adapter_version: Option<String>,
    pub project_dir: Option<String>,
    pub profiles_yml: Option<String>,
    pub profile_target: Option<String>,
    pub edr_command: Option<String>,
    pub bigquery_keyfile: Option<String>,
    pub gcs_keyfile: Option<String>,
    pub fail_edr_version: Option<String>,
}

/// The validated provisioning request driving the whole run.
///
/// Built once at startup and passed by reference to every step.
#[derive(Debug, Clone)]
pub struct StagerInputs {
    /// Warehouse adapter identifier, e.g. `snowflake`.
    pub warehouse_type: String,
    /// Exact adapter package version to pin, passed to pip verbatim.
    pub adapter_version: Option<String>,
    /// Working directory for the detection call and the final command.
    pub project_dir: Option<PathBuf>,
    /// Content for `<home>/.dbt/profiles.yml`.
    pub profiles_yml: Option<String>,
    /// Named profile target for the detection call.
    pub profile_target: Option<String>,
    /// Shell command executed once provisioning is done.
    pub edr_command: String,
    /// Content for `/tmp/bigquery_keyfile.json`.
    pub bigquery_keyfile: Option<String>,
    /// Content for `/tmp/gcs_keyfile.json`.
    pub gcs_keyfile: Option<String>,
    /// Version to assume when the warehouse reports none.
    pub fail_edr_version: Option<String>,
}

impl RawInputs {
    /// Normalize empties to absent and check required fields.
    pub fn validate(self) -> Result<StagerInputs, StagerError> {
        let warehouse_type =
            normalize(self.warehouse_type).ok_or(StagerError::MissingInput {
                key: "WAREHOUSE-TYPE",
                flag: "warehouse-type",
            })?;
        let edr_command = normalize(self.edr_command).ok_or(StagerError::MissingInput {
            key: "EDR-COMMAND",
            flag: "edr-command",
        })?;

        Ok(StagerInputs {
            warehouse_type,
            adapter_version: normalize(self.adapter_version),
            project_dir: normalize(self.project_dir).map(PathBuf::from),
            profiles_yml: normalize(self.profiles_yml),
            profile_target: normalize(self.profile_target),
            edr_command,
            bigquery_keyfile: normalize(self.bigquery_keyfile),
            gcs_keyfile: normalize(self.gcs_keyfile),
            fail_edr_version: normalize(self.fail_edr_version),
        })
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
