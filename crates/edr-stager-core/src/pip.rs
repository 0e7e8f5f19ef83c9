//! Rendering of pip requirement strings.

use crate::resolve::EdrRequirement;

/// Package name for a warehouse adapter, e.g. `dbt-snowflake`.
pub fn adapter_package(adapter: &str) -> String {
    format!("dbt-{adapter}")
}

/// Full adapter requirement, pinned with `==` when a version was given.
///
/// The pin is passed through verbatim; pip accepts version forms that are
/// not semantic versions, so no parsing happens here.
pub fn adapter_requirement(adapter: &str, pin: Option<&str>) -> String {
    match pin {
        Some(version) => format!("dbt-{adapter}=={version}"),
        None => adapter_package(adapter),
    }
}

/// Requirement for the diagnostics package with the adapter extra, e.g.
/// `elementary-data[snowflake]~=0.16.0`.
pub fn edr_requirement(adapter: &str, requirement: &EdrRequirement) -> String {
    format!("elementary-data[{adapter}]{}", requirement.specifier())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve_edr_requirement;

    #[test]
    fn adapter_without_pin() {
        assert_eq!(adapter_requirement("snowflake", None), "dbt-snowflake");
    }

    #[test]
    fn adapter_with_pin() {
        assert_eq!(
            adapter_requirement("bigquery", Some("1.7.2")),
            "dbt-bigquery==1.7.2"
        );
    }

    #[test]
    fn edr_with_compatible_release() {
        let req = resolve_edr_requirement(Some("0.16.1"), None).unwrap();
        assert_eq!(
            edr_requirement("snowflake", &req),
            "elementary-data[snowflake]~=0.16.0"
        );
    }

    #[test]
    fn edr_latest_has_no_specifier() {
        let req = resolve_edr_requirement(None, None).unwrap();
        assert_eq!(
            edr_requirement("redshift", &req),
            "elementary-data[redshift]"
        );
    }
}
