use miette::Result;

use crate::cli::InputArgs;

pub fn exec(args: InputArgs, reveal: bool) -> Result<()> {
    let inputs = args.into_raw().validate()?;
    let project_dir = inputs
        .project_dir
        .as_deref()
        .map(|p| p.display().to_string());

    println!("  warehouse-type = {}", inputs.warehouse_type);
    println!(
        "  adapter-version = {}",
        show(inputs.adapter_version.as_deref())
    );
    println!("  project-dir = {}", show(project_dir.as_deref()));
    println!(
        "  profiles-yml = {}",
        show_secret(inputs.profiles_yml.as_deref(), reveal)
    );
    println!(
        "  profile-target = {}",
        show(inputs.profile_target.as_deref())
    );
    println!("  edr-command = {}", inputs.edr_command);
    println!(
        "  bigquery-keyfile = {}",
        show_secret(inputs.bigquery_keyfile.as_deref(), reveal)
    );
    println!(
        "  gcs-keyfile = {}",
        show_secret(inputs.gcs_keyfile.as_deref(), reveal)
    );
    println!(
        "  fail-edr-version = {}",
        show(inputs.fail_edr_version.as_deref())
    );

    Ok(())
}

fn show(value: Option<&str>) -> &str {
    value.unwrap_or("(unset)")
}

fn show_secret(value: Option<&str>, reveal: bool) -> &str {
    match value {
        Some(v) if reveal => v,
        Some(_) => "********",
        None => "(unset)",
    }
}
