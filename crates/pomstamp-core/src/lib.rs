//! Pomstamp core
//!
//! Rewrites the `version` field of a Maven `pom.xml` to encode build
//! provenance: `ci_{org}_{branch}-SNAPSHOT`, where `org` comes from the
//! `origin` remote URL and `branch` is the currently checked-out branch.
//!
//! # Pipeline
//!
//! ```text
//! File System → Descriptor → snapshot gate → artifact gate
//!                   ↓                             ↓
//!             SourceContext ← git checkout   (no mutation on failure)
//!                   ↓
//!             compose → mutate → File System
//! ```
//!
//! Single-shot and fully synchronous: one invocation loads the descriptor,
//! mutates exactly one text node, writes it back, and exits. The caller
//! guarantees at most one invocation runs per checkout at a time.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod artifact;
pub mod descriptor;
pub mod error;
pub mod pipeline;
pub mod remote;
pub mod repo;
pub mod sink;
pub mod version;

pub use descriptor::Descriptor;
pub use error::StampError;
pub use pipeline::{run, Outcome};
pub use remote::RemoteUrl;
pub use repo::SourceContext;
pub use sink::{EventSink, Level, MemorySink};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
