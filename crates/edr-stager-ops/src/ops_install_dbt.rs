//! Operation: install the warehouse adapter package.

use edr_stager_core::inputs::StagerInputs;
use edr_stager_core::pip;
use edr_stager_util::progress;

/// Install `dbt-<adapter>` via pip, pinned with `==` when an adapter version
/// was given.
pub fn install_dbt(inputs: &StagerInputs) -> miette::Result<()> {
    let requirement =
        pip::adapter_requirement(&inputs.warehouse_type, inputs.adapter_version.as_deref());

    progress::status("Installing", &requirement);
    crate::pip_install(&requirement)
}
