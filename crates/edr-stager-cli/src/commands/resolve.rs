use miette::Result;

use edr_stager_core::resolve::{resolve_edr_requirement, EdrRequirement};

pub fn exec(version: Option<&str>, fallback: Option<&str>) -> Result<()> {
    let requirement = resolve_edr_requirement(version, fallback)?;
    match &requirement {
        EdrRequirement::Latest => println!("latest (no version reported)"),
        EdrRequirement::Compatible(release) => println!("{release}"),
    }
    Ok(())
}
