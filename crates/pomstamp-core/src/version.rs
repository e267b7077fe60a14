//! Version string composition

/// Suffix marking an in-development, non-released build
pub const SNAPSHOT: &str = "SNAPSHOT";

/// Compose the provenance-stamped version string
///
/// Pure template fill: `ci_{org}_{branch}-SNAPSHOT`. No character validation
/// happens here; the introspector is responsible for supplying clean names.
#[inline]
#[must_use]
pub fn compose(org: &str, branch: &str) -> String {
    format!("ci_{org}_{branch}-{SNAPSHOT}")
}

/// Whether a version text declares a snapshot build
#[inline]
#[must_use]
pub fn is_snapshot(version: &str) -> bool {
    version.contains(SNAPSHOT)
}
