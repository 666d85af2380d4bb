//! Generate Service - turns a classification into container artifacts.
//!
//! This service coordinates the generation workflow:
//! 1. Derive recipe parameters and render the Dockerfile
//! 2. Optionally build and render the compose document
//! 3. Write both to disk, refusing to clobber unless forced

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{DescriptorRenderer, Filesystem, RecipeRenderer},
    },
    domain::{OrchestrationDocument, ProjectClassification, RecipeParameters},
    error::DockgenResult,
};

/// File name of the rendered build recipe.
pub const RECIPE_FILE: &str = "Dockerfile";

/// File name of the rendered orchestration descriptor.
pub const DESCRIPTOR_FILE: &str = "docker-compose.yml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Builder stage plus minimal runtime stage.
    pub multi_stage: bool,
    /// Also render `docker-compose.yml`.
    pub compose: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            multi_stage: true,
            compose: false,
        }
    }
}

/// Rendered artifact text, not yet written anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifacts {
    pub recipe: String,
    pub descriptor: Option<String>,
}

/// Main generation service.
pub struct GenerateService {
    recipes: Box<dyn RecipeRenderer>,
    descriptors: Box<dyn DescriptorRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    pub fn new(
        recipes: Box<dyn RecipeRenderer>,
        descriptors: Box<dyn DescriptorRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            recipes,
            descriptors,
            filesystem,
        }
    }

    /// Render the artifacts for a classification.
    #[instrument(skip_all, fields(kind = %classification.kind()))]
    pub fn generate(
        &self,
        classification: &ProjectClassification,
        options: &GenerateOptions,
    ) -> DockgenResult<GeneratedArtifacts> {
        let params = RecipeParameters::from_classification(classification, options.multi_stage);
        debug!(binary = %params.binary_name, version = %params.version, "Recipe parameters");

        let recipe = self.recipes.render(&params)?;

        let descriptor = if options.compose {
            let document = OrchestrationDocument::for_project(
                &classification.project_name(),
                &classification.port().to_string(),
            )?;
            Some(self.descriptors.render(&document))
        } else {
            None
        };

        info!(compose = descriptor.is_some(), "Artifacts rendered");
        Ok(GeneratedArtifacts { recipe, descriptor })
    }

    /// Write artifacts into `output_dir`, returning the written paths.
    ///
    /// Every target is checked before anything is written, so a refusal
    /// leaves the directory untouched.
    #[instrument(skip(self, artifacts), fields(output = %output_dir.display()))]
    pub fn write(
        &self,
        artifacts: &GeneratedArtifacts,
        output_dir: &Path,
        force: bool,
    ) -> DockgenResult<Vec<PathBuf>> {
        let mut targets = vec![(output_dir.join(RECIPE_FILE), artifacts.recipe.as_str())];
        if let Some(descriptor) = &artifacts.descriptor {
            targets.push((output_dir.join(DESCRIPTOR_FILE), descriptor.as_str()));
        }

        if !force {
            if let Some((path, _)) = targets.iter().find(|(p, _)| self.filesystem.exists(p)) {
                return Err(ApplicationError::ArtifactExists { path: path.clone() }.into());
            }
        }

        self.filesystem.create_dir_all(output_dir)?;

        let mut written = Vec::with_capacity(targets.len());
        for (path, content) in targets {
            self.filesystem.write_file(&path, content)?;
            debug!(path = %path.display(), "Artifact written");
            written.push(path);
        }

        info!(count = written.len(), "Artifacts written");
        Ok(written)
    }
}
