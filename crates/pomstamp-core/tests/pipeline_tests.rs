//! End-to-end pipeline tests over real tempdir checkouts

use git2::{Repository, Signature};
use pomstamp_core::sink::Level;
use pomstamp_core::{pipeline, Descriptor, MemorySink, StampError};
use std::fs;
use std::path::Path;

const POM: &str = r#"<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>com.example</groupId>
  <artifactId>demo</artifactId>
  <version>1.0-SNAPSHOT</version>
</project>"#;

fn init_repo(dir: &Path, url: &str, branch: &str) {
    let repo = Repository::init(dir).unwrap();
    let mut index = repo.index().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = Signature::now("ci", "ci@example.com").unwrap();
    let oid = repo
        .commit(Some("HEAD"), &sig, &sig, "init", &tree, &[])
        .unwrap();
    let commit = repo.find_commit(oid).unwrap();
    repo.branch(branch, &commit, true).unwrap();
    repo.set_head(&format!("refs/heads/{branch}")).unwrap();
    repo.remote("origin", url).unwrap();
}

fn write_artifact(dir: &Path, name: &str) {
    let target = dir.join("target");
    fs::create_dir_all(&target).unwrap();
    fs::write(target.join(name), b"jar bytes").unwrap();
}

/// Scenario A: snapshot pom, built artifact, origin + branch present.
#[test]
fn stamps_version_from_org_and_branch() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("pom.xml"), POM).unwrap();
    init_repo(dir.path(), "git@github.com:Team_Foo/demo.git", "Bar");
    write_artifact(dir.path(), "demo-1.0-SNAPSHOT.jar");

    let sink = MemorySink::new();
    let outcome = pipeline::run(dir.path(), &sink).unwrap();

    assert_eq!(outcome.previous_version, "1.0-SNAPSHOT");
    assert_eq!(outcome.new_version, "ci_Team_Foo_Bar-SNAPSHOT");

    let reloaded = Descriptor::load(dir.path()).unwrap();
    assert_eq!(reloaded.version().unwrap(), "ci_Team_Foo_Bar-SNAPSHOT");

    // Structural round-trip: everything but the version text survives.
    assert_eq!(reloaded.artifact_id().as_deref(), Some("demo"));
    let text = fs::read_to_string(dir.path().join("pom.xml")).unwrap();
    assert!(text.contains("com.example"));
    assert!(text.contains("4.0.0"));

    assert!(sink.contains("Current version: 1.0-SNAPSHOT"));
    assert!(sink.contains("New version: ci_Team_Foo_Bar-SNAPSHOT"));
}

/// Scenario B: artifact absent, no mutation, log names the checked path.
#[test]
fn missing_artifact_blocks_mutation() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("pom.xml"), POM).unwrap();
    init_repo(dir.path(), "git@github.com:Team_Foo/demo.git", "Bar");

    let sink = MemorySink::new();
    let err = pipeline::run(dir.path(), &sink).unwrap_err();

    assert!(matches!(err, StampError::ArtifactMissing { .. }));
    let expected = dir.path().join("target").join("demo-1.0-SNAPSHOT.jar");
    assert!(sink.contains(&expected.display().to_string()));

    let untouched = fs::read_to_string(dir.path().join("pom.xml")).unwrap();
    assert_eq!(untouched, POM);
}

/// Scenario C: malformed descriptor fails before any artifact or git access.
#[test]
fn malformed_descriptor_is_fatal_before_everything_else() {
    let dir = tempfile::tempdir().unwrap();
    let broken = "<project><version>1.0</version>";
    fs::write(dir.path().join("pom.xml"), broken).unwrap();
    // No git repo and no artifact: if either were consulted first, the error
    // class would differ.

    let sink = MemorySink::new();
    let err = pipeline::run(dir.path(), &sink).unwrap_err();

    assert!(matches!(err, StampError::Syntax { .. }));
    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].0, Level::Error);

    let untouched = fs::read_to_string(dir.path().join("pom.xml")).unwrap();
    assert_eq!(untouched, broken);
}

/// Running twice without rebuilding fails the second run's artifact gate:
/// the jar name still encodes the old version.
#[test]
fn second_run_without_rebuild_fails_artifact_gate() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("pom.xml"), POM).unwrap();
    init_repo(dir.path(), "git@github.com:Team_Foo/demo.git", "Bar");
    write_artifact(dir.path(), "demo-1.0-SNAPSHOT.jar");

    let sink = MemorySink::new();
    pipeline::run(dir.path(), &sink).unwrap();

    let err = pipeline::run(dir.path(), &sink).unwrap_err();
    assert!(matches!(err, StampError::ArtifactMissing { .. }));
    assert!(sink.contains("demo-ci_Team_Foo_Bar-SNAPSHOT.jar"));
}

/// A non-snapshot version is rejected even when a matching jar exists.
#[test]
fn non_snapshot_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let released = POM.replace("1.0-SNAPSHOT", "1.0");
    fs::write(dir.path().join("pom.xml"), &released).unwrap();
    init_repo(dir.path(), "git@github.com:Team_Foo/demo.git", "Bar");
    write_artifact(dir.path(), "demo-1.0.jar");

    let sink = MemorySink::new();
    let err = pipeline::run(dir.path(), &sink).unwrap_err();

    assert!(matches!(err, StampError::NotASnapshot { .. }));
    let untouched = fs::read_to_string(dir.path().join("pom.xml")).unwrap();
    assert_eq!(untouched, released);
}

/// Missing artifactId substitutes an empty string into the jar name.
#[test]
fn missing_artifact_id_uses_empty_string() {
    let dir = tempfile::tempdir().unwrap();
    let pom = "<project><version>1.0-SNAPSHOT</version></project>";
    fs::write(dir.path().join("pom.xml"), pom).unwrap();
    init_repo(dir.path(), "https://github.com/Team_Foo/demo", "main");
    write_artifact(dir.path(), "-1.0-SNAPSHOT.jar");

    let sink = MemorySink::new();
    let outcome = pipeline::run(dir.path(), &sink).unwrap();
    assert_eq!(outcome.new_version, "ci_Team_Foo_main-SNAPSHOT");
}

#[test]
fn missing_version_field_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("pom.xml"),
        "<project><artifactId>demo</artifactId></project>",
    )
    .unwrap();

    let sink = MemorySink::new();
    let err = pipeline::run(dir.path(), &sink).unwrap_err();
    assert!(matches!(err, StampError::MissingVersionField));
}
