//! Dockerfile renderer assembled from conditional text sections.

use std::fmt::{self, Write};

use dockgen_core::{
    application::{ApplicationError, ports::RecipeRenderer},
    domain::{DomainError, ProjectKind, RecipeParameters},
    error::DockgenResult,
};
use tracing::{debug, instrument};

const SYNTAX_HEADER: &str = "# syntax=docker/dockerfile:1";

/// Renders build recipes. Only Go projects have a recipe.
#[derive(Debug, Clone, Copy, Default)]
pub struct DockerfileRenderer;

impl DockerfileRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl RecipeRenderer for DockerfileRenderer {
    #[instrument(skip_all, fields(kind = %params.kind, multi_stage = params.multi_stage))]
    fn render(&self, params: &RecipeParameters) -> DockgenResult<String> {
        if params.kind != ProjectKind::Go {
            return Err(DomainError::UnsupportedKind {
                kind: params.kind.to_string(),
            }
            .into());
        }

        let mut out = String::new();
        let result = if params.multi_stage {
            write_multi_stage(&mut out, params)
        } else {
            write_single_stage(&mut out, params)
        };

        result.map_err(|e| ApplicationError::TemplateError {
            reason: format!("failed to assemble Dockerfile: {e}"),
        })?;

        debug!(bytes = out.len(), "Dockerfile rendered");
        Ok(out)
    }
}

fn write_multi_stage(out: &mut String, p: &RecipeParameters) -> fmt::Result {
    writeln!(out, "{SYNTAX_HEADER}")?;
    writeln!(out)?;
    writeln!(out, "# === Multi-stage build ===")?;
    writeln!(out)?;
    writeln!(out, "# Build stage")?;
    writeln!(out, "FROM golang:{}-alpine AS build", p.version)?;
    writeln!(out, "WORKDIR /app")?;
    writeln!(out)?;
    writeln!(out, "# Download dependencies before copying sources")?;
    writeln!(out, "COPY go.mod go.sum* ./")?;
    writeln!(out, "RUN go mod download")?;
    writeln!(out)?;
    writeln!(out, "COPY . .")?;
    writeln!(out)?;
    writeln!(out, "# Static, stripped binary")?;
    writeln!(out, "RUN {}", p.build_command)?;
    writeln!(out)?;
    writeln!(out, "# Runtime stage")?;
    writeln!(out, "FROM alpine:latest")?;
    writeln!(out)?;
    writeln!(out, "RUN apk --no-cache add \\")?;
    writeln!(out, "    ca-certificates \\")?;
    writeln!(out, "    tzdata")?;
    writeln!(out)?;
    writeln!(out, "# Non-root user")?;
    writeln!(out, "RUN addgroup -S appgroup && adduser -S appuser -G appgroup")?;
    writeln!(out, "RUN mkdir -p /app && chown -R appuser:appgroup /app")?;
    writeln!(out)?;
    writeln!(out, "WORKDIR /app")?;
    writeln!(out)?;
    writeln!(out, "COPY --from=build {} /app/", p.entrypoint)?;
    writeln!(out)?;
    writeln!(out, "USER appuser")?;
    writeln!(out)?;
    write_expose(out, p.port)?;
    writeln!(out, "ENTRYPOINT [\"/app/{}\"]", p.binary_name)
}

fn write_single_stage(out: &mut String, p: &RecipeParameters) -> fmt::Result {
    writeln!(out, "{SYNTAX_HEADER}")?;
    writeln!(out)?;
    writeln!(out, "# === Single-stage build ===")?;
    writeln!(out)?;
    writeln!(out, "FROM golang:{}-alpine", p.version)?;
    writeln!(out, "WORKDIR /app")?;
    writeln!(out)?;
    writeln!(out, "COPY go.mod go.sum* ./")?;
    writeln!(out, "RUN go mod download")?;
    writeln!(out)?;
    writeln!(out, "COPY . .")?;
    writeln!(out)?;
    writeln!(out, "RUN {}", p.build_command)?;
    writeln!(out)?;
    write_expose(out, p.port)?;
    writeln!(out, "ENTRYPOINT [\"{}\"]", p.run_command)
}

/// `EXPOSE` block followed by a blank line, or nothing for port `0`.
fn write_expose(out: &mut String, port: u16) -> fmt::Result {
    if port == 0 {
        return Ok(());
    }
    writeln!(out, "EXPOSE {port}")?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dockgen_core::domain::ProjectClassification;
    use dockgen_core::error::DockgenError;

    fn params(entrypoint: &str, port: u16, multi_stage: bool) -> RecipeParameters {
        let c = ProjectClassification::new(ProjectKind::Go, entrypoint, port, "/w/svc", "1.21");
        RecipeParameters::from_classification(&c, multi_stage)
    }

    #[test]
    fn multi_stage_layout() {
        let out = DockerfileRenderer::new()
            .render(&params("cmd/server/main.go", 8080, true))
            .unwrap();

        assert!(out.starts_with("# syntax=docker/dockerfile:1\n"));
        assert!(out.contains("FROM golang:1.21-alpine AS build\n"));
        assert!(out.contains(
            "RUN CGO_ENABLED=0 go build -ldflags=\"-s -w\" -o /app/main ./cmd/server/\n"
        ));
        assert!(out.contains("FROM alpine:latest\n"));
        assert!(out.contains("COPY --from=build /app/main /app/\n"));
        assert!(out.contains("USER appuser\n"));
        assert!(out.contains("EXPOSE 8080\n"));
        assert!(out.ends_with("ENTRYPOINT [\"/app/main\"]\n"));
        assert!(!out.contains("\n\n\n"));
    }

    #[test]
    fn single_stage_layout() {
        let out = DockerfileRenderer::new()
            .render(&params("main.go", 3000, false))
            .unwrap();

        assert!(out.contains("FROM golang:1.21-alpine\n"));
        assert!(!out.contains("AS build"));
        assert!(!out.contains("alpine:latest"));
        assert!(out.contains("-o /app/main ./\n"));
        assert!(out.contains("EXPOSE 3000\n"));
        assert!(out.ends_with("ENTRYPOINT [\"/app/main\"]\n"));
    }

    #[test]
    fn zero_port_omits_expose() {
        for multi_stage in [true, false] {
            let out = DockerfileRenderer::new()
                .render(&params("main.go", 0, multi_stage))
                .unwrap();
            assert!(!out.contains("EXPOSE"));
            assert!(!out.contains("\n\n\n"));
        }
    }

    #[test]
    fn missing_entrypoint_uses_placeholder_binary() {
        let out = DockerfileRenderer::new()
            .render(&params("", 3000, true))
            .unwrap();
        assert!(out.contains("-o /app/app ./\n"));
        assert!(out.ends_with("ENTRYPOINT [\"/app/app\"]\n"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let p = params("cmd/api/main.go", 9000, true);
        let renderer = DockerfileRenderer::new();
        assert_eq!(renderer.render(&p).unwrap(), renderer.render(&p).unwrap());
    }

    #[test]
    fn non_go_kinds_are_unsupported() {
        for kind in [ProjectKind::NodeJs, ProjectKind::Python] {
            let c = ProjectClassification::new(kind, "index.js", 3000, "/w/web", "");
            let err = DockerfileRenderer::new()
                .render(&RecipeParameters::from_classification(&c, true))
                .unwrap_err();
            assert_eq!(
                err,
                DockgenError::Domain(DomainError::UnsupportedKind {
                    kind: kind.to_string()
                })
            );
        }
    }
}
