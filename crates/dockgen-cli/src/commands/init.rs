//! `dockgen init`: classify a project and write its container artifacts.

use std::io::IsTerminal as _;
use std::path::PathBuf;

use tracing::{debug, instrument};

use dockgen_adapters::{ComposeRenderer, DockerfileRenderer, LocalFilesystem};
use dockgen_core::application::{
    GenerateOptions, GenerateService,
    services::generate_service::{DESCRIPTOR_FILE, RECIPE_FILE},
};

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `dockgen init` command.
///
/// 1. Classify the directory (port override applied afterwards)
/// 2. Render the artifacts
/// 3. Print them on `--dry-run`, otherwise confirm overwrites and write
#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let mut classification = super::classify(&args.path, &output)?;
    if let Some(port) = args.port {
        debug!(port, "Port overridden");
        classification = classification.with_port(port);
    }

    let options = GenerateOptions {
        multi_stage: args.multi_stage_or(config.generation.multi_stage),
        compose: args.compose || config.generation.compose,
    };

    let service = GenerateService::new(
        Box::new(DockerfileRenderer::new()),
        Box::new(ComposeRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );
    let artifacts = service.generate(&classification, &options)?;

    if args.dry_run {
        output.header(&format!("# {RECIPE_FILE}"))?;
        output.raw(&artifacts.recipe)?;
        if let Some(descriptor) = &artifacts.descriptor {
            output.header(&format!("# {DESCRIPTOR_FILE}"))?;
            output.raw(descriptor)?;
        }
        return Ok(());
    }

    let root = classification.root_dir();
    let mut targets = vec![root.join(RECIPE_FILE)];
    if artifacts.descriptor.is_some() {
        targets.push(root.join(DESCRIPTOR_FILE));
    }
    let existing: Vec<PathBuf> = targets.into_iter().filter(|p| p.exists()).collect();

    let force = args.force || (!existing.is_empty() && confirm_overwrite(&existing, &args, &global)?);

    let written = service.write(&artifacts, root, force)?;

    for path in &written {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        output.success(&format!(
            "Generated {name} for {} project",
            classification.kind()
        ))?;
    }
    output.print("\u{1f680} Dockerization complete!")?;

    Ok(())
}

/// Ask before overwriting. Without a prompt, answer "no" so the write
/// step reports which artifact already exists.
fn confirm_overwrite(existing: &[PathBuf], args: &InitArgs, global: &GlobalArgs) -> CliResult<bool> {
    if args.yes || global.quiet || !std::io::stdin().is_terminal() {
        return Ok(false);
    }
    prompt(existing)
}

#[cfg(feature = "interactive")]
fn prompt(existing: &[PathBuf]) -> CliResult<bool> {
    let names: Vec<_> = existing.iter().map(|p| p.display().to_string()).collect();
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(format!("Overwrite {}?", names.join(", ")))
        .default(false)
        .interact()
        .map_err(|e| crate::error::CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: std::io::Error::other(e),
        })?;

    if confirmed {
        Ok(true)
    } else {
        Err(crate::error::CliError::Cancelled)
    }
}

#[cfg(not(feature = "interactive"))]
fn prompt(_existing: &[PathBuf]) -> CliResult<bool> {
    Ok(false)
}
