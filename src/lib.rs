//! cini is a scaffolding tool for C and C++ projects.
//! It resolves a handful of command-line options into a configuration and
//! generates a directory skeleton with a starter source file, a build
//! manifest, a README and optional documentation, test and git files.

/// Command-line interface module for the cini application
pub mod cli;

/// Resolved project options
pub mod config;

/// Common constants used throughout the application
pub mod constants;

/// Error types and handling for the cini application
pub mod error;

/// External `git init` invocation
pub mod git;

/// Project directory and name resolution
pub mod layout;

/// Logging setup
pub mod logger;

/// Core scaffold orchestration
/// Plans the file operations for a project and applies them
pub mod processor;

/// Contents of the generated files
pub mod templates;
