//! Resolved project configuration.
//! Holds the options a scaffold is generated from and the permissive
//! mapping from raw command-line values to typed options.

use log::warn;
use serde::Serialize;

use crate::error::{Error, Result};

/// How the generated program is linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Linking {
    #[default]
    Static,
    Dynamic,
}

impl Linking {
    /// `dynamic` selects dynamic linking, anything else is static.
    pub fn from_arg(value: &str) -> Self {
        match value {
            "dynamic" => Linking::Dynamic,
            "static" => Linking::Static,
            other => {
                warn!("Unknown linking mode '{other}', using static linking");
                Linking::Static
            }
        }
    }

    /// Flag appended to the compiler invocation.
    pub fn flag(self) -> Option<&'static str> {
        match self {
            Linking::Static => None,
            Linking::Dynamic => Some("-shared"),
        }
    }
}

/// Source language of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Language {
    #[serde(rename = "c")]
    C,
    #[default]
    #[serde(rename = "c++")]
    Cpp,
}

impl Language {
    /// `c` selects C, anything else is C++.
    pub fn from_arg(value: &str) -> Self {
        match value {
            "c" => Language::C,
            "c++" | "cpp" => Language::Cpp,
            other => {
                warn!("Unknown language '{other}', using c++");
                Language::Cpp
            }
        }
    }

    pub fn main_file(self) -> &'static str {
        match self {
            Language::C => "main.c",
            Language::Cpp => "main.cpp",
        }
    }

    /// Compiler flag selecting the language standard.
    pub fn std_flag(self) -> &'static str {
        match self {
            Language::C => "-std=c11",
            Language::Cpp => "-std=c++23",
        }
    }

    pub fn is_cpp(self) -> bool {
        self == Language::Cpp
    }
}

/// Warning and sanitizer level passed to the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(into = "u8")]
pub enum Strictness {
    /// Level 0: no extra flags.
    Relaxed,
    /// Level 1: standard warnings.
    #[default]
    Warnings,
    /// Level 2: extra warnings, pedantic mode and the address sanitizer.
    Sanitized,
}

impl Strictness {
    /// Parses a strictness token.
    ///
    /// # Errors
    /// * `Error::InvalidStrictness` if the token is not an integer
    ///
    /// Integers outside 0..=2 add no flags, after a warning.
    pub fn from_arg(value: &str) -> Result<Self> {
        let level: i64 = value
            .trim()
            .parse()
            .map_err(|_| Error::InvalidStrictness { value: value.to_string() })?;

        Ok(match level {
            0 => Strictness::Relaxed,
            1 => Strictness::Warnings,
            2 => Strictness::Sanitized,
            other => {
                warn!("Strictness level {other} is out of range (0-2), no warning flags will be used");
                Strictness::Relaxed
            }
        })
    }

    pub fn level(self) -> u8 {
        self.into()
    }

    /// Compiler flags for this level.
    pub fn flags(self) -> &'static [&'static str] {
        match self {
            Strictness::Relaxed => &[],
            Strictness::Warnings => &["-Wall"],
            Strictness::Sanitized => &["-Wall", "-Wextra", "-pedantic", "-fsanitize=address"],
        }
    }
}

impl From<Strictness> for u8 {
    fn from(strictness: Strictness) -> u8 {
        match strictness {
            Strictness::Relaxed => 0,
            Strictness::Warnings => 1,
            Strictness::Sanitized => 2,
        }
    }
}

/// Build manifest emitted at the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildSystem {
    Make,
    #[default]
    CMake,
}

impl BuildSystem {
    /// `make` selects a Makefile, anything else CMake.
    pub fn from_arg(value: &str) -> Self {
        match value {
            "make" => BuildSystem::Make,
            "cmake" => BuildSystem::CMake,
            other => {
                warn!("Unknown build system '{other}', using cmake");
                BuildSystem::CMake
            }
        }
    }
}

/// Fully resolved options for a single scaffolding run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    pub project: String,
    pub linking: Linking,
    pub language: Language,
    pub compiler: String,
    pub strictness: Strictness,
    pub build_system: BuildSystem,
    pub init_git: bool,
    pub with_docs: bool,
    pub with_tests: bool,
}

pub const DEFAULT_COMPILER: &str = "clang++";

impl ResolvedConfig {
    /// Configuration for `project` with every other option at its default.
    pub fn new<S: Into<String>>(project: S) -> Self {
        Self {
            project: project.into(),
            linking: Linking::default(),
            language: Language::default(),
            compiler: DEFAULT_COMPILER.to_string(),
            strictness: Strictness::default(),
            build_system: BuildSystem::default(),
            init_git: true,
            with_docs: true,
            with_tests: false,
        }
    }

    /// Test scaffold is only generated for C++ projects.
    pub fn emits_tests(&self) -> bool {
        self.language.is_cpp() && self.with_tests
    }

    /// Doxygen configuration is only generated for C++ projects.
    pub fn emits_docs(&self) -> bool {
        self.language.is_cpp() && self.with_docs
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
