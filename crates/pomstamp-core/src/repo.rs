//! Source-control introspection
//!
//! Opens the local checkout and derives the two provenance strings the
//! version composer needs: the organization segment of the `origin` remote
//! URL and the short name of the currently checked-out branch. Both exist
//! only for the duration of version composition; nothing is persisted.

use crate::error::StampError;
use crate::remote::RemoteUrl;
use git2::{ErrorCode, Repository};
use std::path::Path;

/// Remote name the organization is read from
pub const ORIGIN: &str = "origin";

/// Provenance strings derived from the checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceContext {
    /// Organization name from the `origin` remote URL
    pub organization: String,
    /// Short name of the currently checked-out branch
    pub branch: String,
}

/// Read organization and branch from the repository at `repo_root`
///
/// Fails with [`StampError::RepositoryNotFound`] when there is no valid
/// repository at the path, [`StampError::RemoteNotConfigured`] when no
/// `origin` remote exists, [`StampError::UnrecognizedRemoteFormat`] when its
/// URL matches no known shape, and [`StampError::DetachedHead`] when HEAD is
/// not a named branch (a detached or unborn HEAD has no short branch name).
pub fn introspect(repo_root: &Path) -> Result<SourceContext, StampError> {
    let repo = Repository::open(repo_root).map_err(|e| StampError::RepositoryNotFound {
        path: repo_root.to_path_buf(),
        message: e.message().to_string(),
    })?;

    let organization = origin_organization(&repo)?;
    let branch = current_branch(&repo)?;

    tracing::debug!(%organization, %branch, "source-control context");
    Ok(SourceContext {
        organization,
        branch,
    })
}

fn origin_organization(repo: &Repository) -> Result<String, StampError> {
    let remote = repo.find_remote(ORIGIN).map_err(|e| {
        if e.code() == ErrorCode::NotFound || e.code() == ErrorCode::InvalidSpec {
            StampError::RemoteNotConfigured {
                remote: ORIGIN.to_string(),
            }
        } else {
            StampError::Git(e)
        }
    })?;
    let url = remote.url().ok_or_else(|| StampError::UnrecognizedRemoteFormat {
        url: "<non-utf8 remote url>".to_string(),
    })?;
    Ok(RemoteUrl::parse(url)?.organization)
}

fn current_branch(repo: &Repository) -> Result<String, StampError> {
    if repo.head_detached().map_err(StampError::Git)? {
        return Err(StampError::DetachedHead);
    }
    let head = repo.head().map_err(|e| {
        if e.code() == ErrorCode::UnbornBranch {
            StampError::DetachedHead
        } else {
            StampError::Git(e)
        }
    })?;
    head.shorthand()
        .map(str::to_string)
        .ok_or_else(|| StampError::Git(git2::Error::from_str("branch name is not valid utf-8")))
}
