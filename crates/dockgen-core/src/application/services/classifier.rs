//! Project Classifier - turns a directory into a [`ProjectClassification`].
//!
//! Runs the kind profile cascade over a [`SignalMatcher`]:
//! 1. Detect the service port from environment files (independent of kind)
//! 2. Select the first profile whose signals match
//! 3. Resolve the entrypoint and runtime version for that profile
//!
//! Only step 2 can fail. Entrypoint, version and port degrade to defaults.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::SignalMatcher,
    domain::{
        DomainError, KIND_REGISTRY, KindProfile, ProjectClassification, VersionRule,
        profiles::{
            DEFAULT_PORT, ENV_FILES, extract_main_field, parse_go_directive,
            parse_port_assignment,
        },
    },
    error::DockgenResult,
};

/// Classification cascade over a fixed, ordered profile list.
#[derive(Debug, Clone, Copy)]
pub struct ProjectClassifier {
    profiles: &'static [KindProfile],
}

impl ProjectClassifier {
    /// Classifier over the built-in [`KIND_REGISTRY`].
    pub fn new() -> Self {
        Self {
            profiles: KIND_REGISTRY,
        }
    }

    /// Classify the directory behind `signals`.
    ///
    /// Fails with [`DomainError::NotDetected`] when no profile matches.
    #[instrument(skip_all, fields(root = %signals.root().display()))]
    pub fn classify(&self, signals: &dyn SignalMatcher) -> DockgenResult<ProjectClassification> {
        let port = detect_port(signals);

        let profile = self
            .profiles
            .iter()
            .find(|profile| matches_profile(profile, signals))
            .ok_or_else(|| DomainError::NotDetected {
                path: signals.root().to_path_buf(),
            })?;

        let entrypoint = resolve_entrypoint(profile, signals);
        let version = resolve_version(profile, signals);

        info!(
            kind = %profile.kind,
            entrypoint = %entrypoint,
            port,
            version = %version,
            "Project classified"
        );

        Ok(ProjectClassification::new(
            profile.kind,
            entrypoint,
            port,
            signals.root(),
            version,
        ))
    }
}

impl Default for ProjectClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_profile(profile: &KindProfile, signals: &dyn SignalMatcher) -> bool {
    let matched = profile.signal_files.iter().any(|f| signals.is_file(f))
        || profile.signal_dirs.iter().any(|d| signals.is_dir(d))
        || signals.glob_matches(&profile.source_glob());

    debug!(kind = %profile.kind, matched, "Signals checked");
    matched
}

fn resolve_entrypoint(profile: &KindProfile, signals: &dyn SignalMatcher) -> String {
    if let Some(manifest) = profile.main_field_manifest {
        if let Some(main) = signals.read_file(manifest).as_deref().and_then(extract_main_field) {
            debug!(manifest, main = %main, "Entrypoint from manifest");
            return main;
        }
    }

    let root_name = signals
        .root()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if let Some(candidate) = profile
        .candidates_for(&root_name)
        .into_iter()
        .find(|c| signals.is_file(c))
    {
        return candidate;
    }

    if profile.main_markers.is_empty() {
        return String::new();
    }

    signals
        .find_in_tree(profile.source_extension(), profile.main_markers)
        .unwrap_or_default()
}

fn resolve_version(profile: &KindProfile, signals: &dyn SignalMatcher) -> String {
    match profile.version {
        VersionRule::ManifestDirective { manifest, default } => signals
            .read_file(manifest)
            .as_deref()
            .and_then(parse_go_directive)
            .unwrap_or_else(|| default.to_string()),
        VersionRule::Unimplemented => String::new(),
    }
}

/// Port from the first environment file carrying a usable `PORT=` line.
pub fn detect_port(signals: &dyn SignalMatcher) -> u16 {
    ENV_FILES
        .iter()
        .filter(|f| signals.is_file(f))
        .filter_map(|f| signals.read_file(f))
        .find_map(|content| parse_port_assignment(&content))
        .unwrap_or(DEFAULT_PORT)
}
