//! Scaffold generation.
//!
//! A run is split in two: [`plan`] turns a configuration into the ordered
//! list of operations, and [`Processor`] applies them to the filesystem.
//! Operations are applied in order with no rollback, so a failure leaves
//! everything written before it in place.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{BuildSystem, ResolvedConfig};
use crate::constants::{
    CMAKE_FILE, DOXYFILE, GITIGNORE_FILE, GIT_BINARY, MAKEFILE, PROJECT_DIRS, README_FILE,
    SOURCE_DIR, TEST_DIR, TEST_FILE,
};
use crate::error::{Error, Result};
use crate::git;
use crate::layout::ProjectLayout;
use crate::templates;

/// A single filesystem side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOperation {
    /// Create a directory and any missing parents.
    CreateDir { target: PathBuf },
    /// Write `content` to `target`, replacing an existing file.
    Write { target: PathBuf, content: String },
    /// Run the version control init command in `target`.
    GitInit { target: PathBuf },
}

impl FileOperation {
    pub fn target(&self) -> &Path {
        match self {
            FileOperation::CreateDir { target }
            | FileOperation::Write { target, .. }
            | FileOperation::GitInit { target } => target,
        }
    }

    /// Short verb used in log output.
    pub fn action(&self) -> &'static str {
        match self {
            FileOperation::CreateDir { .. } => "Created directory",
            FileOperation::Write { .. } => "Wrote",
            FileOperation::GitInit { .. } => "Initialized repository",
        }
    }
}

fn write(target: PathBuf, content: impl Into<String>) -> FileOperation {
    FileOperation::Write { target, content: content.into() }
}

/// Builds the ordered operations for a project.
///
/// Order: fixed directories, starter source, build manifest, test scaffold,
/// `git init` with `.gitignore`, README, Doxyfile.
pub fn plan(config: &ResolvedConfig, layout: &ProjectLayout) -> Vec<FileOperation> {
    let name = layout.name.as_str();
    let mut operations: Vec<FileOperation> = PROJECT_DIRS
        .iter()
        .map(|dir| FileOperation::CreateDir { target: layout.join(dir) })
        .collect();

    operations.push(write(
        layout.join(SOURCE_DIR).join(config.language.main_file()),
        templates::main_source(config.language),
    ));

    let manifest = match config.build_system {
        BuildSystem::Make => MAKEFILE,
        BuildSystem::CMake => CMAKE_FILE,
    };
    operations.push(write(layout.join(manifest), templates::build_manifest(config, name)));

    if config.emits_tests() {
        let test_dir = layout.join(TEST_DIR);
        operations.push(FileOperation::CreateDir { target: test_dir.clone() });
        operations.push(write(test_dir.join(TEST_FILE), templates::test_source()));
    }

    if config.init_git {
        operations.push(FileOperation::GitInit { target: layout.root.clone() });
        operations.push(write(layout.join(GITIGNORE_FILE), templates::gitignore()));
    }

    operations.push(write(layout.join(README_FILE), templates::readme(config, name)));

    if config.emits_docs() {
        operations.push(write(layout.join(DOXYFILE), templates::doxyfile(name)));
    }

    operations
}

/// Applies planned operations to the filesystem.
pub struct Processor {
    git_program: String,
}

impl Processor {
    pub fn new() -> Self {
        Self { git_program: GIT_BINARY.to_string() }
    }

    /// Uses `program` instead of `git` for repository initialization.
    pub fn with_git_program<S: Into<String>>(program: S) -> Self {
        Self { git_program: program.into() }
    }

    /// Applies one operation.
    ///
    /// Returns whether the operation took effect. A failed `git init` yields
    /// `false` and is never reported as an error.
    ///
    /// # Errors
    /// * `Error::FileSystemError` if a directory or file cannot be created.
    pub fn process(&self, operation: &FileOperation) -> Result<bool> {
        let applied = match operation {
            FileOperation::CreateDir { target } => {
                fs::create_dir_all(target).map_err(|source| Error::FileSystemError {
                    action: "create directory",
                    path: target.clone(),
                    source,
                })?;
                true
            }
            FileOperation::Write { target, content } => {
                fs::write(target, content).map_err(|source| Error::FileSystemError {
                    action: "write file",
                    path: target.clone(),
                    source,
                })?;
                true
            }
            FileOperation::GitInit { target } => {
                git::init_repository(&self.git_program, target)
                    .is_some_and(|status| status.success())
            }
        };
        if applied {
            debug!("{}: '{}'", operation.action(), operation.target().display());
        }
        Ok(applied)
    }

    /// Applies all operations in order, stopping at the first failure.
    pub fn apply(&self, operations: &[FileOperation]) -> Result<()> {
        for operation in operations {
            self.process(operation)?;
        }
        Ok(())
    }
}

impl Default for Processor {
    fn default() -> Self {
        Processor::new()
    }
}

/// Generates a project for `config`, resolving the project argument against `cwd`.
///
/// Returns the layout that was generated.
pub fn scaffold<P: AsRef<Path>>(
    config: &ResolvedConfig,
    cwd: P,
    processor: &Processor,
) -> Result<ProjectLayout> {
    let layout = ProjectLayout::resolve(&config.project, cwd)?;
    layout.create()?;

    let operations = plan(config, &layout);
    debug!("Planned {} operations for '{}'", operations.len(), layout.name);
    processor.apply(&operations)?;

    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Language;

    fn layout() -> ProjectLayout {
        ProjectLayout::resolve("demo", "/work").unwrap()
    }

    fn targets(operations: &[FileOperation]) -> Vec<String> {
        operations
            .iter()
            .map(|op| {
                op.target()
                    .strip_prefix("/work/demo")
                    .unwrap()
                    .display()
                    .to_string()
            })
            .collect()
    }

    #[test]
    fn test_plan_defaults() {
        let operations = plan(&ResolvedConfig::new("demo"), &layout());
        assert_eq!(
            targets(&operations),
            vec![
                "src",
                "inc",
                "vendor",
                "build",
                "src/main.cpp",
                "CMakeLists.txt",
                "",
                ".gitignore",
                "README.md",
                "Doxyfile"
            ]
        );
        assert!(matches!(operations[6], FileOperation::GitInit { .. }));
    }

    #[test]
    fn test_plan_c_make_without_git() {
        let mut config = ResolvedConfig::new("demo");
        config.language = Language::C;
        config.build_system = BuildSystem::Make;
        config.init_git = false;
        config.with_tests = true;

        let operations = plan(&config, &layout());
        assert_eq!(
            targets(&operations),
            vec!["src", "inc", "vendor", "build", "src/main.c", "Makefile", "README.md"]
        );
    }

    #[test]
    fn test_plan_cpp_tests() {
        let mut config = ResolvedConfig::new("demo");
        config.with_tests = true;
        config.init_git = false;

        let targets = targets(&plan(&config, &layout()));
        assert!(targets.contains(&"test".to_string()));
        assert!(targets.contains(&"test/test.cpp".to_string()));
    }

    #[test]
    fn test_failed_git_init_is_not_applied() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let processor = Processor::with_git_program("cini-no-such-vcs-binary");
        let init = FileOperation::GitInit { target: temp_dir.path().to_path_buf() };
        assert!(!processor.process(&init).unwrap());

        let dir = FileOperation::CreateDir { target: temp_dir.path().join("src") };
        assert!(processor.process(&dir).unwrap());
    }
}
