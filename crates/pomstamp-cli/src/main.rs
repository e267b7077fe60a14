//! pomstamp - stamp CI provenance into a Maven descriptor version
//!
//! One positional argument: the root of a git working copy containing a
//! `pom.xml`. On success the descriptor's version is rewritten to
//! `ci_{org}_{branch}-SNAPSHOT` and the process exits 0; every failure class
//! maps to its own non-zero status, with diagnostics in the `log` file.

use anyhow::Context as _;
use clap::{Arg, Command};
use pomstamp_core::sink::{EventSink, Level};
use pomstamp_core::{pipeline, StampError};
use std::path::Path;
use tracing_subscriber::EnvFilter;

mod logfile;

use logfile::{FileSink, LOG_FILE};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("pomstamp")
        .version(pomstamp_core::VERSION)
        .about("Rewrite a pom.xml snapshot version to ci_{org}_{branch}-SNAPSHOT")
        .arg(
            Arg::new("repo")
                .value_name("REPO_PATH")
                .help("Path to the root of a git working copy"),
        )
        .get_matches();

    let sink = match open_run_log() {
        Ok(sink) => sink,
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    };

    // The argument is checked by hand so its absence lands in the run log
    // with its own exit status instead of clap's generic usage error.
    let Some(repo_root) = matches.get_one::<String>("repo") else {
        let err = StampError::MissingArgument;
        sink.record(Level::Error, &err.to_string());
        std::process::exit(err.exit_code());
    };

    match pipeline::run(Path::new(repo_root), &sink) {
        Ok(outcome) => {
            println!(
                "{}: {} -> {}",
                outcome.descriptor_path.display(),
                outcome.previous_version,
                outcome.new_version
            );
        }
        Err(err) => {
            tracing::error!(%err, "stamping failed");
            std::process::exit(err.exit_code());
        }
    }
}

fn open_run_log() -> anyhow::Result<FileSink> {
    FileSink::create(LOG_FILE)
        .with_context(|| format!("cannot open run log '{LOG_FILE}' in the working directory"))
}
