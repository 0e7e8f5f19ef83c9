//! Package version parsing and compatible-release constraints.

use std::fmt;
use std::str::FromStr;

use semver::Version;

use edr_stager_util::errors::StagerError;

/// A parsed package version backed by semver.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackageVersion(Version);

impl PackageVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(Version::new(major, minor, patch))
    }

    /// Parse a dotted version string, mapping failures to
    /// [`StagerError::InvalidVersion`].
    pub fn parse(value: &str) -> Result<Self, StagerError> {
        Version::parse(value)
            .map(Self)
            .map_err(|e| StagerError::InvalidVersion {
                value: value.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> u64 {
        self.0.minor
    }

    pub fn patch(&self) -> u64 {
        self.0.patch
    }
}

impl fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PackageVersion {
    type Err = StagerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Version> for PackageVersion {
    fn from(v: Version) -> Self {
        Self(v)
    }
}

/// Compatible-release constraint anchored at `{major}.{minor}.0`.
///
/// Accepts any version sharing the anchor's major and minor number and at
/// least equal to the anchor, so patch releases within the same line are
/// picked up while minor boundaries are never crossed. Renders as the pip
/// compatible-release specifier `~=X.Y.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibleRelease {
    anchor: Version,
}

impl CompatibleRelease {
    /// Derive the constraint from a detected version: `5.3.1` anchors at
    /// `5.3.0`.
    pub fn anchored(version: &PackageVersion) -> Self {
        Self {
            anchor: Version::new(version.major(), version.minor(), 0),
        }
    }

    /// The anchor version, `X.Y.0`.
    pub fn anchor(&self) -> PackageVersion {
        PackageVersion::from(self.anchor.clone())
    }

    /// Whether `candidate` satisfies this constraint.
    pub fn matches(&self, candidate: &PackageVersion) -> bool {
        candidate.major() == self.anchor.major
            && candidate.minor() == self.anchor.minor
            && candidate.0 >= self.anchor
    }
}

impl fmt::Display for CompatibleRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "~={}", self.anchor)
    }
}
