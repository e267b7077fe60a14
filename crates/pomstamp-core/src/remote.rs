//! Remote URL shape parsing
//!
//! Splitting a remote URL on `/` and taking the second-to-last segment
//! misparses scp-style SSH remotes without `.git` and URLs carrying extra
//! path segments. Instead the known shapes are parsed explicitly into
//! (host, organization, repository) with named captures; anything else is an
//! [`StampError::UnrecognizedRemoteFormat`] rather than a wrong guess.

use crate::error::StampError;
use once_cell::sync::Lazy;
use regex::Regex;

/// scp-like SSH remote: `git@github.com:Team_Foo/demo.git`
static SCP_LIKE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[^@/]+@)?(?P<host>[^:/@]+):(?P<org>[^/]+)/(?P<repo>[^/]+?)(?:\.git)?/?$")
        .expect("scp-like remote pattern")
});

/// Scheme remote: `https://github.com/Team_Foo/demo`, `ssh://git@host/org/repo.git`
static SCHEME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:https?|ssh|git)://(?:[^@/]+@)?(?P<host>[^:/]+)(?::\d+)?/(?P<org>[^/]+)/(?P<repo>[^/]+?)(?:\.git)?/?$",
    )
    .expect("scheme remote pattern")
});

/// A remote URL decomposed into its provenance-relevant parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUrl {
    /// Host the remote points at (e.g. `github.com`)
    pub host: String,
    /// Organization segment of the path
    pub organization: String,
    /// Repository name, `.git` suffix stripped
    pub repository: String,
}

impl RemoteUrl {
    /// Parse a remote URL of a known shape
    ///
    /// Accepted shapes are scp-like SSH and `http(s)`/`ssh`/`git` scheme
    /// URLs whose path is exactly `{org}/{repo}`. Paths with additional
    /// segments (e.g. subgroups) are rejected: picking a segment by position
    /// would silently name the wrong organization.
    pub fn parse(url: &str) -> Result<Self, StampError> {
        let captures = SCHEME
            .captures(url)
            .or_else(|| SCP_LIKE.captures(url))
            .ok_or_else(|| StampError::UnrecognizedRemoteFormat {
                url: url.to_string(),
            })?;
        Ok(Self {
            host: captures["host"].to_string(),
            organization: captures["org"].to_string(),
            repository: captures["repo"].to_string(),
        })
    }
}
