//! `dockgen detect`: print what a project was classified as.

use crate::{
    cli::{DetectArgs, OutputFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: DetectArgs, output: OutputManager) -> CliResult<()> {
    let classification = super::classify(&args.path, &output)?;

    if output.format() == OutputFormat::Json {
        return output.json(&classification);
    }

    let port = classification.port().to_string();
    output.header(&format!(
        "Detected {} project",
        classification.kind().display_name()
    ))?;
    output.field("Directory", &classification.root_dir().display().to_string())?;
    output.field("Name", &classification.project_name())?;
    output.field("Kind", classification.kind().as_str())?;
    output.field("Family", classification.kind().family())?;
    output.field("Entrypoint", classification.entrypoint())?;
    output.field("Port", &port)?;
    output.field("Version", classification.runtime_version())?;
    Ok(())
}
