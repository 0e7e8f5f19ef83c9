//! Resolution of the edr package requirement from detected versions.

use std::fmt;

use edr_stager_util::errors::StagerError;

use crate::version::{CompatibleRelease, PackageVersion};

/// The version requirement to install the diagnostics package under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdrRequirement {
    /// No version information available, install whatever pip resolves.
    Latest,
    /// Pin to the compatible-release line of a known package version.
    Compatible(CompatibleRelease),
}

impl EdrRequirement {
    /// Render the pip version specifier, empty for [`EdrRequirement::Latest`].
    pub fn specifier(&self) -> String {
        match self {
            Self::Latest => String::new(),
            Self::Compatible(release) => release.to_string(),
        }
    }
}

impl fmt::Display for EdrRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => write!(f, "latest"),
            Self::Compatible(release) => write!(f, "{release}"),
        }
    }
}

/// Pick the version the requirement should anchor on.
///
/// The version reported by the warehouse takes priority; the override is
/// consulted only when detection came up empty. A version string that does
/// not parse is an error in either position, never a silent fall-through to
/// the latest release.
pub fn resolve_edr_requirement(
    reported: Option<&str>,
    fallback: Option<&str>,
) -> Result<EdrRequirement, StagerError> {
    match reported.or(fallback) {
        Some(value) => {
            let version = PackageVersion::parse(value)?;
            Ok(EdrRequirement::Compatible(CompatibleRelease::anchored(
                &version,
            )))
        }
        None => Ok(EdrRequirement::Latest),
    }
}
