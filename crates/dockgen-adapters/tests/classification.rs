//! Classification of real directory trees.

use std::fs;
use std::path::Path;

use dockgen_adapters::LocalSignals;
use dockgen_core::{
    application::{ApplicationError, ProjectClassifier},
    domain::{DomainError, ProjectKind},
    error::DockgenError,
    prelude::ProjectClassification,
};
use tempfile::TempDir;

fn project(name: &str, files: &[(&str, &str)]) -> (TempDir, std::path::PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join(name);
    fs::create_dir_all(&root).unwrap();
    for (path, content) in files {
        let path = root.join(path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    (tmp, root)
}

fn classify(root: &Path) -> Result<ProjectClassification, DockgenError> {
    let signals = LocalSignals::open(root)?;
    ProjectClassifier::new().classify(&signals)
}

#[test]
fn go_version_keeps_major_minor() {
    let (_tmp, root) = project("svc", &[("go.mod", "module m\n\ngo 1.21.0\n"), ("main.go", "")]);
    let c = classify(&root).unwrap();
    assert_eq!(c.kind(), ProjectKind::Go);
    assert_eq!(c.runtime_version(), "1.21");
}

#[test]
fn go_without_manifest_uses_default_version() {
    let (_tmp, root) = project("svc", &[("main.go", "package main\nfunc main() {}\n")]);
    let c = classify(&root).unwrap();
    assert_eq!(c.runtime_version(), "1.22");
    assert_eq!(c.entrypoint(), "main.go");
}

#[test]
fn port_from_dotenv_or_default() {
    let (_tmp, root) = project("svc", &[("main.go", ""), (".env", "PORT=5678\n")]);
    assert_eq!(classify(&root).unwrap().port(), 5678);

    let (_tmp, root) = project("svc", &[("main.go", ""), ("config.env", "PORT=9999\n")]);
    assert_eq!(classify(&root).unwrap().port(), 3000);
}

#[test]
fn go_entrypoint_under_cmd() {
    let (_tmp, root) = project(
        "myapp",
        &[("go.mod", "module m\n"), ("cmd/myapp/main.go", "package main\n")],
    );
    let c = classify(&root).unwrap();
    assert_eq!(c.kind(), ProjectKind::Go);
    assert_eq!(c.entrypoint(), "cmd/myapp/main.go");
}

#[test]
fn node_main_field_then_conventions() {
    let (_tmp, root) = project(
        "web",
        &[("package.json", r#"{"main": "server.js"}"#), ("server.js", "")],
    );
    assert_eq!(classify(&root).unwrap().entrypoint(), "server.js");

    let (_tmp, root) = project("web", &[("package.json", r#"{"name": "web"}"#), ("index.js", "")]);
    let c = classify(&root).unwrap();
    assert_eq!(c.kind(), ProjectKind::NodeJs);
    assert_eq!(c.entrypoint(), "index.js");
}

#[test]
fn python_requirements_and_app() {
    let (_tmp, root) = project("api", &[("requirements.txt", "flask\n"), ("app.py", "")]);
    let c = classify(&root).unwrap();
    assert_eq!(c.kind(), ProjectKind::Python);
    assert_eq!(c.entrypoint(), "app.py");
}

#[test]
fn empty_directory_is_not_detected() {
    let (_tmp, root) = project("empty", &[]);
    let err = classify(&root).unwrap_err();
    assert!(matches!(
        err,
        DockgenError::Domain(DomainError::NotDetected { .. })
    ));
}

#[test]
fn missing_directory_is_access_error() {
    let tmp = tempfile::tempdir().unwrap();
    let err = classify(&tmp.path().join("missing")).unwrap_err();
    assert!(matches!(
        err,
        DockgenError::Application(ApplicationError::AccessError { .. })
    ));
}

#[test]
fn vendored_mains_are_ignored() {
    let (_tmp, root) = project(
        "tool",
        &[
            ("go.mod", "module m\n"),
            ("vendor/x/main.go", "package main\nfunc main() {}\n"),
            ("xtool/gen.go", "package main\nfunc main() {}\n"),
        ],
    );
    assert_eq!(classify(&root).unwrap().entrypoint(), "xtool/gen.go");
}

#[test]
fn project_name_from_directory() {
    let (_tmp, root) = project("My_Cool App", &[("main.go", "")]);
    assert_eq!(classify(&root).unwrap().project_name(), "my-cool-app");
}

#[test]
fn go_entrypoint_found_in_file_with_latin1_comment() {
    let (_tmp, root) = project("tool", &[("go.mod", "module m\n\ngo 1.21 // minimum\n")]);
    fs::create_dir_all(root.join("internal")).unwrap();
    fs::write(
        root.join("internal/entry.go"),
        b"package main\n// caf\xe9\nfunc main() {}\n",
    )
    .unwrap();

    let c = classify(&root).unwrap();
    assert_eq!(c.entrypoint(), "internal/entry.go");
    assert_eq!(c.runtime_version(), "1.21");
}
