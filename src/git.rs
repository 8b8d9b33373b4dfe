//! Version control initialization for generated projects.

use log::debug;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

/// Runs `<program> init` inside `project_dir`.
///
/// Fire-and-forget: a missing binary or a failing command is logged at debug
/// level and otherwise ignored, and the returned status is informational only.
pub fn init_repository<P: AsRef<Path>>(program: &str, project_dir: P) -> Option<ExitStatus> {
    let project_dir = project_dir.as_ref();
    debug!("Running '{program} init' in '{}'", project_dir.display());

    let result = Command::new(program)
        .arg("init")
        .current_dir(project_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status();

    match result {
        Ok(status) if status.success() => {
            debug!("Repository initialized");
            Some(status)
        }
        Ok(status) => {
            debug!("'{program} init' exited with {status}");
            Some(status)
        }
        Err(e) => {
            debug!("Could not run '{program}': {e}");
            None
        }
    }
}
