//! Project detection against real directory trees

mod support;

use devrun::{detect, Detector, ProjectType};
use support::{ProjectDir, GO_MOD, REACT_PACKAGE_JSON};
use yare::parameterized;

#[test]
fn test_empty_directory_is_unknown() {
    let project = ProjectDir::new();

    let info = detect(project.path());
    assert_eq!(info.project_type, ProjectType::Unknown);
    assert!(info.servers.is_empty());
    assert!(!info.is_launchable());
}

#[test]
fn test_missing_directory_is_unknown() {
    let project = ProjectDir::new();

    let info = detect(project.path().join("does-not-exist"));
    assert_eq!(info.project_type, ProjectType::Unknown);
    assert!(info.servers.is_empty());
}

#[parameterized(
    django = { "manage.py", "", ProjectType::Django, "python", &["manage.py", "runserver"] },
    spring = { "pom.xml", "<project/>", ProjectType::SpringBoot, "mvn", &["spring-boot:run"] },
    nest = { "nest-cli.json", "{}", ProjectType::NestJs, "npm", &["run", "start:dev"] },
    angular = { "angular.json", "{}", ProjectType::Angular, "npm", &["start"] },
    go = { "go.mod", GO_MOD, ProjectType::Go, "go", &["run", "."] },
)]
fn test_single_marker(file: &str, contents: &str, expected: ProjectType, command: &str, args: &[&str]) {
    let project = ProjectDir::new().file(file, contents);

    let info = detect(project.path());
    assert_eq!(info.project_type, expected);
    assert_eq!(info.servers.len(), 1);

    let server = &info.servers[0];
    assert_eq!(server.command, command);
    assert_eq!(server.args, args);
    assert_eq!(server.work_dir, project.path());
}

#[test]
fn test_fallback_suppressed_by_specific_framework() {
    let project = ProjectDir::new()
        .file("manage.py", "")
        .file("package.json", REACT_PACKAGE_JSON);

    let info = detect(project.path());
    assert_eq!(info.project_type, ProjectType::Django);
    assert_eq!(info.servers.len(), 1);
}

#[test]
fn test_two_frameworks_in_one_directory_are_fullstack() {
    let project = ProjectDir::new()
        .file("manage.py", "")
        .file("angular.json", "{}");

    let info = detect(project.path());
    assert_eq!(info.project_type, ProjectType::Fullstack);
    assert_eq!(info.servers.len(), 2);
    assert_eq!(info.servers[0].project_type, ProjectType::Django);
    assert_eq!(info.servers[1].project_type, ProjectType::Angular);
}

#[test]
fn test_backend_frontend_siblings() {
    let project = ProjectDir::new()
        .file("backend/go.mod", GO_MOD)
        .file("frontend/package.json", REACT_PACKAGE_JSON);

    let info = detect(project.path());
    assert_eq!(info.project_type, ProjectType::Fullstack);
    assert_eq!(info.servers.len(), 2);

    let backend = &info.servers[0];
    assert_eq!(backend.name, "Backend");
    assert_eq!(backend.project_type, ProjectType::Go);
    assert_eq!(backend.command, "go");
    assert_eq!(backend.args, ["run", "."]);
    assert_eq!(backend.work_dir, project.path().join("backend"));

    let frontend = &info.servers[1];
    assert_eq!(frontend.name, "Frontend");
    assert_eq!(frontend.project_type, ProjectType::React);
    assert_eq!(frontend.command, "npm");
    assert_eq!(frontend.args, ["start"]);
    assert_eq!(frontend.work_dir, project.path().join("frontend"));
}

#[test]
fn test_sibling_pair_with_empty_side_is_not_fullstack() {
    let project = ProjectDir::new()
        .file("server/go.mod", GO_MOD)
        .dir("client");

    let info = detect(project.path());
    assert_eq!(info.project_type, ProjectType::Unknown);
    assert!(info.servers.is_empty());
}

#[test]
fn test_sibling_pair_replaces_root_servers() {
    let project = ProjectDir::new()
        .file("go.mod", GO_MOD)
        .file("backend/manage.py", "")
        .file("frontend/angular.json", "{}");

    let info = detect(project.path());
    assert_eq!(info.project_type, ProjectType::Fullstack);

    let names: Vec<_> = info.servers.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Backend", "Frontend"]);
    assert_eq!(info.servers[0].project_type, ProjectType::Django);
    assert_eq!(info.servers[1].project_type, ProjectType::Angular);
}

#[test]
fn test_detection_is_deterministic() {
    let project = ProjectDir::new()
        .file("api/main.py", "from fastapi import FastAPI\napp = FastAPI()\n")
        .file("web/package.json", REACT_PACKAGE_JSON);

    let detector = Detector::default();
    let first = detector.detect(project.path());
    for _ in 0..5 {
        assert_eq!(detector.detect(project.path()), first);
    }
    assert_eq!(first.project_type, ProjectType::Fullstack);
}
