use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use cini::cli::resolve_config;
use cini::config::ResolvedConfig;
use cini::error::Error;
use cini::processor::{scaffold, Processor};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Processor whose version control step always fails to spawn.
fn offline() -> Processor {
    Processor::with_git_program("cini-test-missing-git")
}

fn tree(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| {
            let entry = entry.unwrap();
            entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

fn set(paths: &[&str]) -> BTreeSet<String> {
    paths.iter().map(|p| p.to_string()).collect()
}

#[test]
fn test_default_cpp_cmake_project() {
    let temp_dir = TempDir::new().unwrap();
    let config = resolve_config(&["myapp"]).unwrap();

    let layout = scaffold(&config, temp_dir.path(), &offline()).unwrap();
    assert_eq!(layout.name, "myapp");
    assert_eq!(layout.root, temp_dir.path().join("myapp"));

    assert_eq!(
        tree(&layout.root),
        set(&[
            "src",
            "src/main.cpp",
            "inc",
            "vendor",
            "build",
            "CMakeLists.txt",
            ".gitignore",
            "README.md",
            "Doxyfile",
        ])
    );

    let main = fs::read_to_string(layout.join("src/main.cpp")).unwrap();
    assert!(main.contains("std::cout << \"Hello, World!\" << std::endl;"));

    let gitignore = fs::read_to_string(layout.join(".gitignore")).unwrap();
    assert!(gitignore.contains("*.o\n"));
    assert!(gitignore.contains("CMakeCache.txt\n"));
}

#[test]
fn test_c_make_project_strict_dynamic() {
    let temp_dir = TempDir::new().unwrap();
    let config =
        resolve_config(&["hello", "dynamic", "c", "gcc", "2", "make", "no", "yes", "yes"])
            .unwrap();

    let layout = scaffold(&config, temp_dir.path(), &offline()).unwrap();

    assert_eq!(
        tree(&layout.root),
        set(&["src", "src/main.c", "inc", "vendor", "build", "Makefile", "README.md"])
    );

    let main = fs::read_to_string(layout.join("src/main.c")).unwrap();
    assert!(main.contains("printf(\"Hello, World!\\n\");"));

    let makefile = fs::read_to_string(layout.join("Makefile")).unwrap();
    assert!(makefile.contains(
        "build:\n\tgcc -Wall -Wextra -pedantic -fsanitize=address -shared -g -std=c11 -o build/hello src/main.c\n"
    ));
}

#[test]
fn test_make_static_omits_shared_flag() {
    let temp_dir = TempDir::new().unwrap();
    let config = resolve_config(&["--name=app", "--build=make", "--strict=2", "--no-git"]).unwrap();

    let layout = scaffold(&config, temp_dir.path(), &offline()).unwrap();
    let makefile = fs::read_to_string(layout.join("Makefile")).unwrap();
    assert!(makefile.contains("-fsanitize=address"));
    assert!(!makefile.contains("-shared"));
}

#[test]
fn test_cpp_tests_scaffold() {
    let temp_dir = TempDir::new().unwrap();
    let config = resolve_config(&["app", "--test", "--no-git"]).unwrap();

    let layout = scaffold(&config, temp_dir.path(), &offline()).unwrap();
    let cmake = fs::read_to_string(layout.join("CMakeLists.txt")).unwrap();
    assert!(cmake.contains("enable_testing()\n"));
    assert!(cmake.contains("add_subdirectory(test)\n"));

    let test = fs::read_to_string(layout.join("test/test.cpp")).unwrap();
    assert!(test.contains("assert(1 == 1);"));

    let readme = fs::read_to_string(layout.join("README.md")).unwrap();
    assert!(readme.contains("## Running Tests"));
}

#[test]
fn test_c_project_ignores_tests_and_docs() {
    let temp_dir = TempDir::new().unwrap();
    let config = resolve_config(&["app", "--lang=c", "--test", "--docs", "--no-git"]).unwrap();

    let layout = scaffold(&config, temp_dir.path(), &offline()).unwrap();
    assert!(!layout.join("test").exists());
    assert!(!layout.join("Doxyfile").exists());

    let cmake = fs::read_to_string(layout.join("CMakeLists.txt")).unwrap();
    assert!(!cmake.contains("enable_testing()"));
}

#[test]
fn test_current_dir_marker() {
    let temp_dir = TempDir::new().unwrap();
    let cwd = temp_dir.path().join("existing");
    fs::create_dir(&cwd).unwrap();
    let mut config = ResolvedConfig::new(".");
    config.init_git = false;

    let layout = scaffold(&config, &cwd, &offline()).unwrap();
    assert_eq!(layout.name, "existing");
    assert_eq!(layout.root, cwd);
    assert!(cwd.join("src/main.cpp").exists());
    assert!(!cwd.join("existing").exists());
}

#[test]
fn test_explicit_path_creates_parents() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = ResolvedConfig::new("nested/deeper/proj");
    config.init_git = false;

    let layout = scaffold(&config, temp_dir.path(), &offline()).unwrap();
    assert_eq!(layout.name, "proj");
    assert!(temp_dir.path().join("nested/deeper/proj/inc").is_dir());

    let doxyfile = fs::read_to_string(layout.join("Doxyfile")).unwrap();
    assert!(doxyfile.starts_with("PROJECT_NAME = \"proj\"\n"));
}

#[test]
fn test_rerun_over_existing_project() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = ResolvedConfig::new("again");
    config.init_git = false;

    scaffold(&config, temp_dir.path(), &offline()).unwrap();
    let layout = scaffold(&config, temp_dir.path(), &offline()).unwrap();
    assert!(layout.join("README.md").is_file());
}

#[test]
fn test_filesystem_error_reports_path() {
    let temp_dir = TempDir::new().unwrap();
    // A file where the project's src/ directory should go.
    let root = temp_dir.path().join("blocked");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("src"), "not a directory").unwrap();

    let mut config = ResolvedConfig::new("blocked");
    config.init_git = false;

    match scaffold(&config, temp_dir.path(), &offline()) {
        Err(Error::FileSystemError { path, .. }) => assert_eq!(path, root.join("src")),
        other => panic!("Expected FileSystemError, got {other:?}"),
    }
}
