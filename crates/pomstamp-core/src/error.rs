//! Error types for the stamping pipeline
//!
//! One variant per failure class, each mapped to a distinct exit status:
//! - Invocation errors (missing argument)
//! - Descriptor errors (read, syntax, missing field)
//! - Precondition errors (not a snapshot, artifact missing)
//! - Source-control errors (repository, remote, HEAD)
//! - Write failures

use std::path::PathBuf;

/// Main pipeline error type
///
/// Every stage fails fast and fatally; there is no local recovery or retry
/// anywhere in the design. Each class carries enough context to diagnose
/// from the run log alone.
#[derive(Debug, thiserror::Error)]
pub enum StampError {
    /// No repository path supplied on the command line
    #[error("must provide a git-repo path as an argument")]
    MissingArgument,

    /// Descriptor file does not exist
    #[error("descriptor not found: {path}")]
    NotFound { path: PathBuf },

    /// IO failure reading or writing the descriptor
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Descriptor text is not well-formed XML
    #[error("syntax error in {path}: {message}")]
    Syntax { path: PathBuf, message: String },

    /// Descriptor root has no `version` child
    #[error("descriptor has no version field")]
    MissingVersionField,

    /// Current version text does not contain `SNAPSHOT`
    #[error("current version is not a snapshot: {version}")]
    NotASnapshot { version: String },

    /// Expected build artifact is absent
    #[error("snapshot artifact does not exist, checked path: {path}")]
    ArtifactMissing { path: PathBuf },

    /// No git repository at the given path
    #[error("no git repository at {path}: {message}")]
    RepositoryNotFound { path: PathBuf, message: String },

    /// Named remote is not configured
    #[error("remote '{remote}' is not configured")]
    RemoteNotConfigured { remote: String },

    /// HEAD is not a named branch
    #[error("HEAD is detached, no branch name available")]
    DetachedHead,

    /// Remote URL does not match any known shape
    #[error("unrecognized remote url format: {url}")]
    UnrecognizedRemoteFormat { url: String },

    /// Other libgit2 failure
    #[error("git error: {0}")]
    Git(#[from] git2::Error),
}

impl StampError {
    /// Create an IO error for a path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a syntax error for a path
    pub fn syntax(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Syntax {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Process exit status for this failure class
    ///
    /// Zero is reserved for success; each class gets its own small integer
    /// so an automated caller can distinguish them from the status alone.
    #[inline]
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingArgument => 2,
            Self::NotFound { .. } | Self::Io { .. } => 3,
            Self::Syntax { .. } => 4,
            Self::MissingVersionField => 5,
            Self::NotASnapshot { .. } => 6,
            Self::ArtifactMissing { .. } => 7,
            Self::RepositoryNotFound { .. } => 8,
            Self::RemoteNotConfigured { .. } => 9,
            Self::DetachedHead => 10,
            Self::UnrecognizedRemoteFormat { .. } => 11,
            Self::Git(_) => 12,
        }
    }
}
