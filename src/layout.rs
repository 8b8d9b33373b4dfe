//! Project directory and name resolution.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::CURRENT_DIR_MARKER;
use crate::error::{Error, Result};

/// Where the project lives and what it is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Absolute project directory.
    pub root: PathBuf,
    /// Final path segment of the project directory.
    pub name: String,
}

/// How the project argument was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectTarget {
    /// The current working directory.
    CurrentDir,
    /// An explicit path, containing a separator.
    Path,
    /// A bare name, created under the current working directory.
    Name,
}

impl ProjectTarget {
    pub fn classify(project: &str) -> Self {
        if project == CURRENT_DIR_MARKER {
            ProjectTarget::CurrentDir
        } else if project.contains(['/', '\\']) {
            ProjectTarget::Path
        } else {
            ProjectTarget::Name
        }
    }
}

fn final_segment(path: &Path, original: &str) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| Error::InvalidProjectPath { path: original.to_string() })
}

impl ProjectLayout {
    /// Resolves the project argument against `cwd` without touching the disk.
    ///
    /// # Errors
    /// * `Error::InvalidProjectPath` if the path has no final segment (e.g. `/` or `..`)
    pub fn resolve<P: AsRef<Path>>(project: &str, cwd: P) -> Result<Self> {
        let cwd = cwd.as_ref();
        let root = match ProjectTarget::classify(project) {
            ProjectTarget::CurrentDir => cwd.to_path_buf(),
            ProjectTarget::Path => {
                let path = Path::new(project);
                if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    cwd.join(path)
                }
            }
            ProjectTarget::Name => cwd.join(project),
        };
        let name = final_segment(&root, project)?;

        Ok(Self { root, name })
    }

    /// Creates the project directory, with any missing parents.
    pub fn create(&self) -> Result<()> {
        debug!("Creating project directory '{}'", self.root.display());
        fs::create_dir_all(&self.root).map_err(|source| Error::FileSystemError {
            action: "create directory",
            path: self.root.clone(),
            source,
        })
    }

    pub fn join<P: AsRef<Path>>(&self, relative: P) -> PathBuf {
        self.root.join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(ProjectTarget::classify("."), ProjectTarget::CurrentDir);
        assert_eq!(ProjectTarget::classify("apps/demo"), ProjectTarget::Path);
        assert_eq!(ProjectTarget::classify("apps\\demo"), ProjectTarget::Path);
        assert_eq!(ProjectTarget::classify("demo"), ProjectTarget::Name);
    }

    #[test]
    fn test_resolve_current_dir() {
        let layout = ProjectLayout::resolve(".", "/work/hello").unwrap();
        assert_eq!(layout.root, PathBuf::from("/work/hello"));
        assert_eq!(layout.name, "hello");
    }

    #[test]
    fn test_resolve_bare_name() {
        let layout = ProjectLayout::resolve("demo", "/work").unwrap();
        assert_eq!(layout.root, PathBuf::from("/work/demo"));
        assert_eq!(layout.name, "demo");
    }

    #[test]
    fn test_resolve_relative_and_absolute_paths() {
        let layout = ProjectLayout::resolve("apps/demo/", "/work").unwrap();
        assert_eq!(layout.root, PathBuf::from("/work/apps/demo/"));
        assert_eq!(layout.name, "demo");

        let layout = ProjectLayout::resolve("/opt/demo", "/work").unwrap();
        assert_eq!(layout.root, PathBuf::from("/opt/demo"));
        assert_eq!(layout.name, "demo");
    }

    #[test]
    fn test_resolve_without_final_segment() {
        assert!(matches!(
            ProjectLayout::resolve("/", "/work"),
            Err(Error::InvalidProjectPath { .. })
        ));
    }
}
