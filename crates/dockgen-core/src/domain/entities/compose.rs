//! Orchestration descriptor (docker-compose) document model.
//!
//! A plain nested-value tree. Optional sub-structures are `Option<_>` so a
//! renderer can tell "absent" from "present". Every collection that is
//! empty is omitted from rendered output, and so is any optional node
//! whose contents are all empty.

use std::collections::BTreeMap;

use crate::domain::error::DomainError;

/// Compose file format version written by default.
pub const COMPOSE_VERSION: &str = "3.8";

/// Name of the single service in a generated descriptor.
pub const APP_SERVICE: &str = "app";

/// String mapping with deterministic (lexical) iteration order.
pub type Mapping = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrchestrationDocument {
    pub version: String,
    pub name: String,
    pub services: Vec<Service>,
    pub networks: Vec<Network>,
    pub volumes: Vec<Volume>,
    pub configs: Vec<FileObject>,
    pub secrets: Vec<FileObject>,
}

impl OrchestrationDocument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: COMPOSE_VERSION.to_string(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Default descriptor for a single built-from-source application.
    ///
    /// Rejects an empty project name or port before anything is built.
    pub fn for_project(project_name: &str, port: &str) -> Result<Self, DomainError> {
        if project_name.trim().is_empty() || port.trim().is_empty() {
            return Err(DomainError::InvalidParameters(
                "project name and port are required".into(),
            ));
        }

        let app = Service::new(APP_SERVICE)
            .container_name(format!("{project_name}-app"))
            .build(Build::new(".").dockerfile("Dockerfile"))
            .restart("unless-stopped")
            .port(format!("{port}:{port}"))
            .env("ENV", "development");

        Ok(Self::new(project_name).service(app))
    }

    pub fn service(mut self, service: Service) -> Self {
        self.services.push(service);
        self
    }

    pub fn network(mut self, network: Network) -> Self {
        self.networks.push(network);
        self
    }

    pub fn volume(mut self, volume: Volume) -> Self {
        self.volumes.push(volume);
        self
    }

    pub fn config(mut self, config: FileObject) -> Self {
        self.configs.push(config);
        self
    }

    pub fn secret(mut self, secret: FileObject) -> Self {
        self.secrets.push(secret);
        self
    }
}

// ── Service ──────────────────────────────────────────────────────────────────

/// One entry under `services:`. Field order matches render order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Service {
    pub name: String,
    pub container_name: Option<String>,
    pub image: Option<String>,
    pub build: Option<Build>,
    pub restart: Option<String>,
    pub ports: Vec<String>,
    pub environment: Mapping,
    pub env_file: Vec<String>,
    pub volumes: Vec<String>,
    pub networks: Vec<String>,
    pub depends_on: Vec<String>,
    pub healthcheck: Option<HealthCheck>,
    pub deploy: Option<Deploy>,
    pub labels: Mapping,
    pub command: Option<String>,
    pub entrypoint: Option<String>,
    pub user: Option<String>,
    pub working_dir: Option<String>,
    pub read_only: bool,
}

impl Service {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn container_name(mut self, name: impl Into<String>) -> Self {
        self.container_name = Some(name.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn build(mut self, build: Build) -> Self {
        self.build = Some(build);
        self
    }

    pub fn restart(mut self, policy: impl Into<String>) -> Self {
        self.restart = Some(policy.into());
        self
    }

    pub fn port(mut self, mapping: impl Into<String>) -> Self {
        self.ports.push(mapping.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.environment.insert(key.into(), value.into());
        self
    }

    pub fn label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    pub fn depends_on(mut self, service: impl Into<String>) -> Self {
        self.depends_on.push(service.into());
        self
    }

    pub fn healthcheck(mut self, healthcheck: HealthCheck) -> Self {
        self.healthcheck = Some(healthcheck);
        self
    }

    pub fn deploy(mut self, deploy: Deploy) -> Self {
        self.deploy = Some(deploy);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Build {
    pub context: String,
    pub dockerfile: Option<String>,
    pub args: Mapping,
    pub target: Option<String>,
    pub cache_from: Vec<String>,
}

impl Build {
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            ..Self::default()
        }
    }

    pub fn dockerfile(mut self, dockerfile: impl Into<String>) -> Self {
        self.dockerfile = Some(dockerfile.into());
        self
    }

    pub fn arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.context.is_empty()
            && is_blank(&self.dockerfile)
            && self.args.is_empty()
            && is_blank(&self.target)
            && self.cache_from.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthCheck {
    pub test: Vec<String>,
    pub interval: Option<String>,
    pub timeout: Option<String>,
    pub retries: u32,
    pub start_period: Option<String>,
}

impl HealthCheck {
    pub fn new<I, S>(test: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            test: test.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.test.is_empty()
            && is_blank(&self.interval)
            && is_blank(&self.timeout)
            && self.retries == 0
            && is_blank(&self.start_period)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deploy {
    pub mode: Option<String>,
    pub replicas: u32,
    pub resources: Option<Resources>,
    pub update_config: Option<UpdateConfig>,
    pub placement: Option<Placement>,
}

impl Deploy {
    pub fn is_empty(&self) -> bool {
        is_blank(&self.mode)
            && self.replicas == 0
            && self.resources.as_ref().is_none_or(Resources::is_empty)
            && self.update_config.as_ref().is_none_or(UpdateConfig::is_empty)
            && self.placement.as_ref().is_none_or(Placement::is_empty)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resources {
    pub limits: Option<ResourceSpec>,
    pub reservations: Option<ResourceSpec>,
}

impl Resources {
    pub fn is_empty(&self) -> bool {
        self.limits.as_ref().is_none_or(ResourceSpec::is_empty)
            && self.reservations.as_ref().is_none_or(ResourceSpec::is_empty)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceSpec {
    pub cpus: Option<String>,
    pub memory: Option<String>,
}

impl ResourceSpec {
    pub fn is_empty(&self) -> bool {
        is_blank(&self.cpus) && is_blank(&self.memory)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateConfig {
    pub parallelism: u32,
    pub delay: Option<String>,
    pub failure_action: Option<String>,
    pub order: Option<String>,
}

impl UpdateConfig {
    pub fn is_empty(&self) -> bool {
        self.parallelism == 0
            && is_blank(&self.delay)
            && is_blank(&self.failure_action)
            && is_blank(&self.order)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    pub constraints: Vec<String>,
}

impl Placement {
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

// ── Top-level resources ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Network {
    pub name: String,
    pub driver: Option<String>,
    pub external: bool,
    pub attachable: bool,
    pub labels: Mapping,
}

impl Network {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Volume {
    pub name: String,
    pub driver: Option<String>,
    pub external: bool,
    pub labels: Mapping,
    pub driver_opts: Mapping,
}

impl Volume {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A `configs:` or `secrets:` entry: either external or backed by a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileObject {
    pub name: String,
    pub file: Option<String>,
    pub external: bool,
}

impl FileObject {
    pub fn from_file(name: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: Some(file.into()),
            external: false,
        }
    }

    pub fn external(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: None,
            external: true,
        }
    }
}

/// `true` for `None` and for `Some("")`.
pub fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_project_builds_single_app_service() {
        let doc = OrchestrationDocument::for_project("shop-api", "8080").unwrap();
        assert_eq!(doc.version, "3.8");
        assert_eq!(doc.name, "shop-api");
        assert_eq!(doc.services.len(), 1);

        let app = &doc.services[0];
        assert_eq!(app.name, "app");
        assert_eq!(app.container_name.as_deref(), Some("shop-api-app"));
        assert_eq!(app.restart.as_deref(), Some("unless-stopped"));
        assert_eq!(app.ports, vec!["8080:8080"]);
        assert_eq!(app.environment.get("ENV").map(String::as_str), Some("development"));

        let build = app.build.as_ref().unwrap();
        assert_eq!(build.context, ".");
        assert_eq!(build.dockerfile.as_deref(), Some("Dockerfile"));
    }

    #[test]
    fn for_project_rejects_missing_name_or_port() {
        assert!(matches!(
            OrchestrationDocument::for_project("", "3000"),
            Err(DomainError::InvalidParameters(_))
        ));
        assert!(matches!(
            OrchestrationDocument::for_project("api", ""),
            Err(DomainError::InvalidParameters(_))
        ));
    }

    #[test]
    fn present_but_default_nodes_count_as_empty() {
        assert!(Deploy::default().is_empty());
        assert!(
            Deploy {
                resources: Some(Resources {
                    limits: Some(ResourceSpec::default()),
                    reservations: None,
                }),
                ..Deploy::default()
            }
            .is_empty()
        );
        assert!(
            !Deploy {
                replicas: 2,
                ..Deploy::default()
            }
            .is_empty()
        );
        assert!(HealthCheck::new(Vec::<String>::new()).is_empty());
        assert!(!HealthCheck::new(["CMD", "true"]).is_empty());
    }

    #[test]
    fn is_blank_treats_empty_string_as_absent() {
        assert!(is_blank(&None));
        assert!(is_blank(&Some(String::new())));
        assert!(!is_blank(&Some("x".into())));
    }
}
