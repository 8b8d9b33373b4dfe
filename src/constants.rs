//! Common constants used throughout the cini application.

/// Argument naming the current working directory as the project directory.
pub const CURRENT_DIR_MARKER: &str = ".";

/// Any argument starting with this prefix switches parsing to flag mode.
pub const FLAG_PREFIX: &str = "--";

/// Literal that enables a yes/no slot in positional mode.
pub const YES: &str = "yes";

/// Subdirectories created in every project, in creation order.
pub const PROJECT_DIRS: [&str; 4] = ["src", "inc", "vendor", "build"];

pub const SOURCE_DIR: &str = "src";
pub const BUILD_DIR: &str = "build";
pub const TEST_DIR: &str = "test";

pub const MAKEFILE: &str = "Makefile";
pub const CMAKE_FILE: &str = "CMakeLists.txt";
pub const TEST_FILE: &str = "test.cpp";
pub const GITIGNORE_FILE: &str = ".gitignore";
pub const README_FILE: &str = "README.md";
pub const DOXYFILE: &str = "Doxyfile";

/// Version control binary invoked as `<GIT_BINARY> init`.
pub const GIT_BINARY: &str = "git";
