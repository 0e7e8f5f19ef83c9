//! Run command implementation: the full provisioning sequence.

use miette::Result;

use crate::cli::InputArgs;

pub fn exec(args: InputArgs) -> Result<()> {
    let inputs = args.into_raw().validate()?;

    edr_stager_ops::ops_install_dbt::install_dbt(&inputs)?;
    edr_stager_ops::ops_stage::stage(&inputs)?;
    edr_stager_ops::ops_install_edr::install_edr(&inputs)?;
    edr_stager_ops::ops_edr_command::run_edr_command(&inputs)
}
