//! docker-compose renderer.
//!
//! Hand-written emitter with a fixed key order per node. Two spaces per
//! level; every top-level section and every entry of a named collection
//! is followed by a blank line. Empty collections and empty optional
//! nodes are never emitted.

use dockgen_core::{
    application::ports::DescriptorRenderer,
    domain::{
        Build, Deploy, FileObject, HealthCheck, Mapping, Network, OrchestrationDocument,
        Placement, Resources, ResourceSpec, Service, UpdateConfig, Volume,
        entities::compose::is_blank,
    },
};
use tracing::instrument;

/// Characters that force single quoting of a scalar.
const QUOTE_TRIGGERS: &[char] = &[':', ' ', '\t', '"', '\''];

/// Quote a scalar for a compose file.
///
/// Values containing a space, tab, colon or quote are single-quoted with
/// embedded single quotes doubled. The empty string becomes `''`.
pub fn quote(value: &str) -> String {
    if value.is_empty() {
        return "''".to_string();
    }
    if value.contains(QUOTE_TRIGGERS) {
        format!("'{}'", value.replace('\'', "''"))
    } else {
        value.to_string()
    }
}

fn always_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ComposeRenderer;

impl ComposeRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl DescriptorRenderer for ComposeRenderer {
    #[instrument(skip_all, fields(name = %document.name, services = document.services.len()))]
    fn render(&self, document: &OrchestrationDocument) -> String {
        let mut w = Emitter::default();

        w.line(0, format!("version: {}", always_quote(&document.version)));
        w.blank();
        w.line(0, format!("name: {}", always_quote(&document.name)));
        w.blank();

        w.section("services", &document.services, write_service);
        w.section("networks", &document.networks, write_network);
        w.section("volumes", &document.volumes, write_volume);
        w.section("configs", &document.configs, write_file_object);
        w.section("secrets", &document.secrets, write_file_object);

        w.out
    }
}

#[derive(Default)]
struct Emitter {
    out: String,
}

impl Emitter {
    fn line(&mut self, depth: usize, text: impl AsRef<str>) {
        for _ in 0..depth {
            self.out.push_str("  ");
        }
        self.out.push_str(text.as_ref());
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn section<T>(&mut self, key: &str, entries: &[T], write: fn(&mut Self, &T)) {
        if entries.is_empty() {
            return;
        }
        self.line(0, format!("{key}:"));
        for entry in entries {
            write(self, entry);
            self.blank();
        }
    }

    /// Key line of a named collection entry.
    fn named(&mut self, depth: usize, name: &str) {
        self.line(depth, format!("{}:", quote(name)));
    }

    fn scalar(&mut self, depth: usize, key: &str, value: &Option<String>) {
        if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
            self.line(depth, format!("{key}: {}", quote(v)));
        }
    }

    fn number(&mut self, depth: usize, key: &str, value: u32) {
        if value != 0 {
            self.line(depth, format!("{key}: {value}"));
        }
    }

    fn flag(&mut self, depth: usize, key: &str, value: bool) {
        if value {
            self.line(depth, format!("{key}: true"));
        }
    }

    fn list(&mut self, depth: usize, key: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        self.line(depth, format!("{key}:"));
        for item in items {
            self.line(depth + 1, format!("- {}", quote(item)));
        }
    }

    fn mapping(&mut self, depth: usize, key: &str, map: &Mapping) {
        if map.is_empty() {
            return;
        }
        self.line(depth, format!("{key}:"));
        for (k, v) in map {
            self.line(depth + 1, format!("{}: {}", quote(k), quote(v)));
        }
    }

    /// Header plus body for an optional node, skipped when empty.
    fn node<T>(
        &mut self,
        depth: usize,
        key: &str,
        node: Option<&T>,
        is_empty: fn(&T) -> bool,
        write: fn(&mut Self, usize, &T),
    ) {
        if let Some(node) = node.filter(|n| !is_empty(n)) {
            self.line(depth, format!("{key}:"));
            write(self, depth + 1, node);
        }
    }
}

fn write_service(w: &mut Emitter, s: &Service) {
    w.named(1, &s.name);
    w.scalar(2, "container_name", &s.container_name);
    w.scalar(2, "image", &s.image);
    w.node(2, "build", s.build.as_ref(), Build::is_empty, write_build);
    w.scalar(2, "restart", &s.restart);
    w.list(2, "ports", &s.ports);
    w.mapping(2, "environment", &s.environment);
    w.list(2, "env_file", &s.env_file);
    w.list(2, "volumes", &s.volumes);
    w.list(2, "networks", &s.networks);
    w.list(2, "depends_on", &s.depends_on);
    w.node(2, "healthcheck", s.healthcheck.as_ref(), HealthCheck::is_empty, write_healthcheck);
    w.node(2, "deploy", s.deploy.as_ref(), Deploy::is_empty, write_deploy);
    w.mapping(2, "labels", &s.labels);
    w.scalar(2, "command", &s.command);
    w.scalar(2, "entrypoint", &s.entrypoint);
    w.scalar(2, "user", &s.user);
    w.scalar(2, "working_dir", &s.working_dir);
    w.flag(2, "read_only", s.read_only);
}

fn write_build(w: &mut Emitter, d: usize, b: &Build) {
    if !b.context.is_empty() {
        w.line(d, format!("context: {}", quote(&b.context)));
    }
    w.scalar(d, "dockerfile", &b.dockerfile);
    w.mapping(d, "args", &b.args);
    w.scalar(d, "target", &b.target);
    w.list(d, "cache_from", &b.cache_from);
}

fn write_healthcheck(w: &mut Emitter, d: usize, h: &HealthCheck) {
    w.list(d, "test", &h.test);
    w.scalar(d, "interval", &h.interval);
    w.scalar(d, "timeout", &h.timeout);
    w.number(d, "retries", h.retries);
    w.scalar(d, "start_period", &h.start_period);
}

fn write_deploy(w: &mut Emitter, d: usize, deploy: &Deploy) {
    w.scalar(d, "mode", &deploy.mode);
    w.number(d, "replicas", deploy.replicas);
    w.node(d, "resources", deploy.resources.as_ref(), Resources::is_empty, write_resources);
    w.node(
        d,
        "update_config",
        deploy.update_config.as_ref(),
        UpdateConfig::is_empty,
        write_update_config,
    );
    w.node(d, "placement", deploy.placement.as_ref(), Placement::is_empty, |w, d, p| {
        w.list(d, "constraints", &p.constraints)
    });
}

fn write_resources(w: &mut Emitter, d: usize, r: &Resources) {
    w.node(d, "limits", r.limits.as_ref(), ResourceSpec::is_empty, write_resource_spec);
    w.node(
        d,
        "reservations",
        r.reservations.as_ref(),
        ResourceSpec::is_empty,
        write_resource_spec,
    );
}

fn write_resource_spec(w: &mut Emitter, d: usize, spec: &ResourceSpec) {
    w.scalar(d, "cpus", &spec.cpus);
    w.scalar(d, "memory", &spec.memory);
}

fn write_update_config(w: &mut Emitter, d: usize, u: &UpdateConfig) {
    w.number(d, "parallelism", u.parallelism);
    w.scalar(d, "delay", &u.delay);
    w.scalar(d, "failure_action", &u.failure_action);
    w.scalar(d, "order", &u.order);
}

fn write_network(w: &mut Emitter, n: &Network) {
    w.named(1, &n.name);
    w.scalar(2, "driver", &n.driver);
    w.flag(2, "external", n.external);
    w.flag(2, "attachable", n.attachable);
    w.mapping(2, "labels", &n.labels);
}

fn write_volume(w: &mut Emitter, v: &Volume) {
    w.named(1, &v.name);
    w.scalar(2, "driver", &v.driver);
    w.flag(2, "external", v.external);
    w.mapping(2, "labels", &v.labels);
    w.mapping(2, "driver_opts", &v.driver_opts);
}

fn write_file_object(w: &mut Emitter, f: &FileObject) {
    w.named(1, &f.name);
    if f.external {
        w.flag(2, "external", true);
    } else if !is_blank(&f.file) {
        w.scalar(2, "file", &f.file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(doc: &OrchestrationDocument) -> String {
        ComposeRenderer::new().render(doc)
    }

    #[test]
    fn default_project_document() {
        let doc = OrchestrationDocument::for_project("shop", "8080").unwrap();
        let expected = "\
version: '3.8'

name: 'shop'

services:
  app:
    container_name: shop-app
    build:
      context: .
      dockerfile: Dockerfile
    restart: unless-stopped
    ports:
      - '8080:8080'
    environment:
      ENV: development

";
        assert_eq!(render(&doc), expected);
    }

    #[test]
    fn quote_rules() {
        assert_eq!(quote("plain"), "plain");
        assert_eq!(quote("a b"), "'a b'");
        assert_eq!(quote("k:v"), "'k:v'");
        assert_eq!(quote("tab\there"), "'tab\there'");
        assert_eq!(quote("it's"), "'it''s'");
        assert_eq!(quote(r#"say "hi""#), r#"'say "hi"'"#);
        assert_eq!(quote(""), "''");
    }

    #[test]
    fn name_is_always_quoted_and_escaped() {
        let out = render(&OrchestrationDocument::new("o'neil"));
        assert!(out.starts_with("version: '3.8'\n\nname: 'o''neil'\n\n"));
        assert!(!out.contains("services:"));
    }

    #[test]
    fn empty_collections_are_omitted() {
        let doc = OrchestrationDocument::new("p").service(Service::new("web").image("nginx"));
        let out = render(&doc);

        assert!(out.contains("  web:\n    image: nginx\n\n"));
        for key in ["ports:", "environment:", "labels:", "build:", "deploy:", "networks:"] {
            assert!(!out.contains(key), "unexpected {key} in\n{out}");
        }
    }

    #[test]
    fn present_but_empty_nodes_are_omitted() {
        let mut svc = Service::new("web");
        svc.build = Some(Build::default());
        svc.healthcheck = Some(HealthCheck::default());
        svc.deploy = Some(Deploy {
            resources: Some(Resources::default()),
            ..Deploy::default()
        });

        let out = render(&OrchestrationDocument::new("p").service(svc));
        assert!(out.ends_with("services:\n  web:\n\n"));
    }

    #[test]
    fn service_keys_follow_fixed_order() {
        let mut svc = Service::new("api")
            .container_name("p-api")
            .image("api:1")
            .restart("always")
            .port("80:80")
            .env("A", "1")
            .depends_on("db")
            .label("team", "core");
        svc.env_file.push(".env".into());
        svc.volumes.push("data:/data".into());
        svc.networks.push("back".into());
        svc.command = Some("serve --port 80".into());
        svc.entrypoint = Some("/bin/api".into());
        svc.user = Some("1000".into());
        svc.working_dir = Some("/srv".into());
        svc.read_only = true;

        let out = render(&OrchestrationDocument::new("p").service(svc));
        let order = [
            "container_name:",
            "image:",
            "restart:",
            "ports:",
            "environment:",
            "env_file:",
            "volumes:",
            "networks:",
            "depends_on:",
            "labels:",
            "command: 'serve --port 80'",
            "entrypoint:",
            "user:",
            "working_dir:",
            "read_only: true",
        ];
        let positions: Vec<_> = order
            .iter()
            .map(|k| out.find(&format!("    {k}")).unwrap_or_else(|| panic!("{k} missing")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{out}");
    }

    #[test]
    fn healthcheck_and_deploy_nesting() {
        let mut hc = HealthCheck::new(["CMD", "curl -f http://localhost"]);
        hc.interval = Some("30s".into());
        hc.retries = 3;

        let deploy = Deploy {
            mode: Some("replicated".into()),
            replicas: 2,
            resources: Some(Resources {
                limits: Some(ResourceSpec {
                    cpus: Some("0.5".into()),
                    memory: Some("512M".into()),
                }),
                reservations: None,
            }),
            update_config: Some(UpdateConfig {
                parallelism: 1,
                order: Some("start-first".into()),
                ..UpdateConfig::default()
            }),
            placement: Some(Placement {
                constraints: vec!["node.role == manager".into()],
            }),
        };

        let out = render(
            &OrchestrationDocument::new("p").service(Service::new("w").healthcheck(hc).deploy(deploy)),
        );

        let expected = "\
    healthcheck:
      test:
        - CMD
        - 'curl -f http://localhost'
      interval: 30s
      retries: 3
    deploy:
      mode: replicated
      replicas: 2
      resources:
        limits:
          cpus: 0.5
          memory: 512M
      update_config:
        parallelism: 1
        order: start-first
      placement:
        constraints:
          - 'node.role == manager'
";
        assert!(out.contains(expected), "{out}");
    }

    #[test]
    fn top_level_resources() {
        let mut net = Network::new("back");
        net.driver = Some("bridge".into());
        net.attachable = true;

        let mut vol = Volume::new("data");
        vol.driver_opts.insert("type".into(), "tmpfs".into());
        vol.driver_opts.insert("o".into(), String::new());

        let doc = OrchestrationDocument::new("p")
            .network(net)
            .volume(vol)
            .config(FileObject::from_file("nginx", "./nginx.conf"))
            .secret(FileObject::external("token"));

        let expected = "\
networks:
  back:
    driver: bridge
    attachable: true

volumes:
  data:
    driver_opts:
      o: ''
      type: tmpfs

configs:
  nginx:
    file: ./nginx.conf

secrets:
  token:
    external: true

";
        assert!(render(&doc).ends_with(expected));
    }
}
