//! The stamping pipeline
//!
//! Strictly linear, fail-fast control flow:
//!
//! ```text
//! load -> validate -> extract version -> snapshot gate -> artifact gate
//!      -> introspect source control -> compose -> mutate -> write
//! ```
//!
//! The descriptor is never rewritten unless every gate ahead of the mutation
//! has passed; the first failure halts the run.

use crate::artifact;
use crate::descriptor::Descriptor;
use crate::error::StampError;
use crate::repo;
use crate::sink::{EventSink, Level};
use crate::version;
use std::path::{Path, PathBuf};

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Descriptor path that was rewritten
    pub descriptor_path: PathBuf,
    /// Version text before mutation
    pub previous_version: String,
    /// Version text after mutation
    pub new_version: String,
}

/// Run the whole pipeline against the checkout at `repo_root`
///
/// Records the pre- and post-mutation versions on success and a diagnostic
/// for every failure path on the given sink.
pub fn run(repo_root: &Path, sink: &dyn EventSink) -> Result<Outcome, StampError> {
    match stamp(repo_root, sink) {
        Ok(outcome) => Ok(outcome),
        Err(err) => {
            sink.record(Level::Error, &err.to_string());
            Err(err)
        }
    }
}

fn stamp(repo_root: &Path, sink: &dyn EventSink) -> Result<Outcome, StampError> {
    let mut descriptor = Descriptor::load(repo_root)?;
    let current = descriptor.version()?;

    if !version::is_snapshot(&current) {
        return Err(StampError::NotASnapshot { version: current });
    }

    let artifact_id = descriptor.artifact_id().unwrap_or_default();
    let jar = artifact::expected_artifact_path(repo_root, &artifact_id, &current);
    artifact::ensure_artifact_exists(&jar)?;

    let ctx = repo::introspect(repo_root)?;
    let next = version::compose(&ctx.organization, &ctx.branch);

    sink.record(Level::Info, &format!("Current version: {current}"));
    descriptor.set_version(&next)?;
    sink.record(Level::Info, &format!("New version: {next}"));
    descriptor.write()?;

    tracing::debug!(previous = %current, new = %next, "descriptor stamped");
    Ok(Outcome {
        descriptor_path: descriptor.path().to_path_buf(),
        previous_version: current,
        new_version: next,
    })
}
