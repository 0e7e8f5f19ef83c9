//! CLI argument definitions for edr-stager.
//!
//! Uses `clap` derive macros. Every action input doubles as a long flag and
//! an `INPUT_*` environment variable, the convention CI runners use to hand
//! inputs to an action; the flag wins when both are set. Each command
//! corresponds to a handler in the [`super::commands`] module.

use clap::{Args, Parser, Subcommand};

use edr_stager_core::inputs::RawInputs;

#[derive(Parser, Debug)]
#[command(
    name = "edr-stager",
    version,
    about = "CI entrypoint that provisions a dbt warehouse adapter and Elementary's edr, then runs a user command"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub inputs: InputArgs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Action inputs, collected before normalization.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Warehouse adapter identifier (e.g. snowflake, bigquery)
    #[arg(long, env = "INPUT_WAREHOUSE-TYPE")]
    pub warehouse_type: Option<String>,

    /// Exact adapter package version to install
    #[arg(long, env = "INPUT_ADAPTER-VERSION")]
    pub adapter_version: Option<String>,

    /// Directory the detection call and the edr command run in
    #[arg(long, env = "INPUT_PROJECT-DIR")]
    pub project_dir: Option<String>,

    /// Content written to ~/.dbt/profiles.yml
    #[arg(long, env = "INPUT_PROFILES-YML", hide_env_values = true)]
    pub profiles_yml: Option<String>,

    /// Profile target passed to the version detection call
    #[arg(long, env = "INPUT_PROFILE-TARGET")]
    pub profile_target: Option<String>,

    /// Shell command to run once provisioning is done
    #[arg(long, env = "INPUT_EDR-COMMAND")]
    pub edr_command: Option<String>,

    /// Content written to /tmp/bigquery_keyfile.json
    #[arg(long, env = "INPUT_BIGQUERY-KEYFILE", hide_env_values = true)]
    pub bigquery_keyfile: Option<String>,

    /// Content written to /tmp/gcs_keyfile.json
    #[arg(long, env = "INPUT_GCS-KEYFILE", hide_env_values = true)]
    pub gcs_keyfile: Option<String>,

    /// Version to assume when the warehouse reports none
    #[arg(long, env = "INPUT_FAIL-EDR-VERSION")]
    pub fail_edr_version: Option<String>,
}

impl InputArgs {
    pub fn into_raw(self) -> RawInputs {
        RawInputs {
            warehouse_type: self.warehouse_type,
            adapter_version: self.adapter_version,
            project_dir: self.project_dir,
            profiles_yml: self.profiles_yml,
            profile_target: self.profile_target,
            edr_command: self.edr_command,
            bigquery_keyfile: self.bigquery_keyfile,
            gcs_keyfile: self.gcs_keyfile,
            fail_edr_version: self.fail_edr_version,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Provision the adapter and edr, then run the command (the default)
    Run,

    /// Show the resolved action inputs
    Inputs {
        /// Print secret values instead of masking them
        #[arg(long)]
        reveal: bool,
    },

    /// Resolve the edr version requirement for a reported package version
    Resolve {
        /// Version reported by the warehouse; omit to simulate no report
        version: Option<String>,

        /// Override version used when nothing was reported
        #[arg(long)]
        fallback: Option<String>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
