//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod detect;
pub mod init;

use std::path::Path;

use dockgen_adapters::LocalSignals;
use dockgen_core::{application::ProjectClassifier, domain::ProjectClassification};
use tracing::info;

use crate::{error::CliResult, output::OutputManager};

/// Classify `path`, showing a spinner while scanning.
pub(crate) fn classify(path: &Path, output: &OutputManager) -> CliResult<ProjectClassification> {
    let spinner = output.spinner(&format!("Scanning {}", path.display()));

    let result = LocalSignals::open(path).and_then(|signals| ProjectClassifier::new().classify(&signals));

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let classification = result?;
    info!(
        kind = %classification.kind(),
        root = %classification.root_dir().display(),
        "Detection finished"
    );
    Ok(classification)
}
