//! Expected build-artifact path derivation and existence gate
//!
//! The artifact path is a derived string, recomputed once per invocation:
//! `{repo_root}/target/{artifactId}-{version}.jar`. Its existence on disk is
//! the precondition gate confirming the declared snapshot version was
//! actually built; the descriptor is never rewritten unless this passes.

use crate::error::StampError;
use std::path::{Path, PathBuf};

/// Build output directory under the repository root
pub const TARGET_DIR: &str = "target";

/// Expected artifact path for the current (pre-mutation) version
///
/// An absent `artifactId` is substituted as the empty string rather than
/// failing, matching the descriptor's optional-field policy.
#[must_use]
pub fn expected_artifact_path(repo_root: &Path, artifact_id: &str, version: &str) -> PathBuf {
    repo_root
        .join(TARGET_DIR)
        .join(format!("{artifact_id}-{version}.jar"))
}

/// Assert the expected artifact exists on disk
///
/// The file is only probed, never opened. Failure reports the exact path
/// checked and halts the pipeline before any mutation.
pub fn ensure_artifact_exists(path: &Path) -> Result<(), StampError> {
    if path.exists() {
        Ok(())
    } else {
        Err(StampError::ArtifactMissing {
            path: path.to_path_buf(),
        })
    }
}
