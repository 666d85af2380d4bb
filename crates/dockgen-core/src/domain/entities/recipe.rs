use crate::domain::{
    entities::classification::ProjectClassification, profiles::DEFAULT_GO_VERSION,
    value_objects::ProjectKind,
};

/// Binary name used when no entrypoint was detected.
pub const DEFAULT_BINARY_NAME: &str = "app";

/// Directory the binary is built into and run from inside the image.
pub const APP_DIR: &str = "/app";

/// Parameters of a build recipe, derived once from a classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeParameters {
    pub kind: ProjectKind,
    pub multi_stage: bool,
    pub binary_name: String,
    pub build_command: String,
    pub run_command: String,
    /// Path of the compiled binary inside the image.
    pub entrypoint: String,
    /// Exposed port; `0` means no `EXPOSE` line.
    pub port: u16,
    /// Base image tag version, e.g. `1.22`.
    pub version: String,
}

impl RecipeParameters {
    pub fn from_classification(classification: &ProjectClassification, multi_stage: bool) -> Self {
        let kind = classification.kind();
        let source = classification.entrypoint();
        let binary_name = binary_name_for(source, kind.source_extension());
        let binary_path = format!("{APP_DIR}/{binary_name}");
        let build_command = format!(
            "CGO_ENABLED=0 go build -ldflags=\"-s -w\" -o {binary_path} {}",
            package_dir(source)
        );

        let version = match classification.runtime_version() {
            "" if kind == ProjectKind::Go => DEFAULT_GO_VERSION.to_string(),
            v => v.to_string(),
        };

        Self {
            kind,
            multi_stage,
            binary_name,
            build_command,
            run_command: binary_path.clone(),
            entrypoint: binary_path,
            port: classification.port(),
            version,
        }
    }
}

/// Final path segment of `entrypoint` without its source extension.
fn binary_name_for(entrypoint: &str, extension: &str) -> String {
    let file = entrypoint.rsplit('/').next().unwrap_or_default();
    let stem = file
        .strip_suffix(extension)
        .and_then(|s| s.strip_suffix('.'))
        .unwrap_or(file);

    if stem.is_empty() {
        DEFAULT_BINARY_NAME.to_string()
    } else {
        stem.to_string()
    }
}

/// `./<dir>/` for the directory containing `entrypoint`, `./` at the root.
fn package_dir(entrypoint: &str) -> String {
    match entrypoint.rsplit_once('/') {
        Some((dir, _)) if !dir.is_empty() && dir != "." => {
            format!("./{}/", dir.trim_start_matches("./"))
        }
        _ => "./".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classification(entrypoint: &str, version: &str) -> ProjectClassification {
        ProjectClassification::new(ProjectKind::Go, entrypoint, 8080, "/src/api", version)
    }

    #[test]
    fn binary_name_strips_extension_from_last_segment() {
        assert_eq!(binary_name_for("cmd/server/main.go", "go"), "main");
        assert_eq!(binary_name_for("worker.go", "go"), "worker");
    }

    #[test]
    fn binary_name_defaults_to_app() {
        assert_eq!(binary_name_for("", "go"), "app");
        assert_eq!(binary_name_for(".go", "go"), "app");
    }

    #[test]
    fn build_command_targets_entrypoint_directory() {
        let params = RecipeParameters::from_classification(&classification("cmd/api/main.go", "1.21"), true);
        assert_eq!(
            params.build_command,
            "CGO_ENABLED=0 go build -ldflags=\"-s -w\" -o /app/main ./cmd/api/"
        );
        assert_eq!(params.entrypoint, "/app/main");
        assert_eq!(params.run_command, "/app/main");
    }

    #[test]
    fn root_entrypoint_builds_current_directory() {
        let params = RecipeParameters::from_classification(&classification("main.go", "1.21"), false);
        assert!(params.build_command.ends_with("-o /app/main ./"));
        assert!(!params.multi_stage);
    }

    #[test]
    fn missing_entrypoint_uses_placeholder_binary() {
        let params = RecipeParameters::from_classification(&classification("", "1.21"), true);
        assert_eq!(params.binary_name, "app");
        assert!(params.build_command.ends_with("-o /app/app ./"));
    }

    #[test]
    fn empty_go_version_falls_back_to_default() {
        let params = RecipeParameters::from_classification(&classification("main.go", ""), true);
        assert_eq!(params.version, DEFAULT_GO_VERSION);
    }

    #[test]
    fn carries_port_and_version() {
        let params = RecipeParameters::from_classification(&classification("main.go", "1.20"), true);
        assert_eq!(params.port, 8080);
        assert_eq!(params.version, "1.20");
    }
}
